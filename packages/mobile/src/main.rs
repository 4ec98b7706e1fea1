use dioxus::prelude::*;
use store::UserRole;
use tracing_subscriber::EnvFilter;
use views::{
    AddMedication, AddPatient, EditMedication, ForgotPassword, Login, Notifications,
    PatientDetail, Patients, Profile, ResetPassword, Scan, Settings, Signup, TabLayout, VerifyOtp,
};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/verify")]
    VerifyOtp {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password")]
    ResetPassword {},
    #[layout(TabLayout)]
        #[route("/patients")]
        Patients {},
        #[route("/add-patient")]
        AddPatient {},
        #[route("/patients/:id")]
        PatientDetail { id: String },
        #[route("/patients/:patient_id/add-medication")]
        AddMedication { patient_id: String },
        #[route("/medications/:id/edit")]
        EditMedication { id: String },
        #[route("/notifications")]
        Notifications {},
        #[route("/scan")]
        Scan {},
        #[route("/profile")]
        Profile {},
        #[route("/settings")]
        Settings {},
}

/// Landing screen for a signed-in user.
fn home_route(role: UserRole) -> Route {
    match role {
        UserRole::Caregiver => Route::Patients {},
        UserRole::Patient => Route::Scan {},
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() {
    dotenvy::dotenv().ok();

    let path = ui::data_dir().join(store::AppConfig::filename());
    let loaded = config::load_file(&path);
    let config = config::apply_env(
        loaded.as_ref().cloned().unwrap_or_default(),
        |key| std::env::var(key).ok(),
    );

    init_tracing(&config.logging.level);
    if let Err(e) = &loaded {
        tracing::warn!("Ignoring {}: {}", path.display(), e);
    }

    let client = match ui::make_client(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(client)
        .with_context(config)
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::AppProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let state = ui::use_app_state();
    let nav = use_navigator();
    match state.read().auth.role {
        Some(role) if state.read().auth.is_authenticated => nav.replace(home_route(role)),
        _ => nav.replace(Route::Login {}),
    };
    rsx! {}
}
