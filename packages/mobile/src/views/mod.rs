mod tab_layout;
pub use tab_layout::TabLayout;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod verify_otp;
pub use verify_otp::VerifyOtp;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod reset_password;
pub use reset_password::ResetPassword;

mod patients;
pub use patients::Patients;

mod add_patient;
pub use add_patient::AddPatient;

mod patient_detail;
pub use patient_detail::PatientDetail;

mod medication_form;
pub use medication_form::{AddMedication, EditMedication};

mod notifications;
pub use notifications::Notifications;

mod scan;
pub use scan::Scan;

mod profile;
pub use profile::Profile;

mod settings;
pub use settings::Settings;
