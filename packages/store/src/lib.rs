pub mod barcode;
pub mod config;
pub mod disambiguation;
pub mod models;
pub mod print_layout;
pub mod session;
pub mod slices;
pub mod validation;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

pub use config::AppConfig;
pub use models::{
    Medication, Notification, NotificationSettings, NotificationType, Patient, PatientStatus,
    User, UserRole,
};
pub use session::{KeyValueStore, SessionStorage};
pub use slices::{Action, AppState, ThunkEvent};
pub use validation::ValidationError;
