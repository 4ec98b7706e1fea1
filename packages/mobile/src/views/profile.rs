use api::thunks;
use dioxus::prelude::*;
use ui::{Alert, SubmitButton, TextField};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let mut alert = ui::use_alert();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);

    // Refresh from the backend, then seed the form
    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let mut dispatch = ui::dispatcher(state);
                let cached = state.peek().auth.user.clone();
                let user = match thunks::fetch_profile(&client, &mut dispatch).await {
                    Ok(user) => Some(user),
                    Err(e) => {
                        tracing::warn!("Using cached profile: {}", e);
                        cached
                    }
                };
                if let Some(user) = user {
                    name.set(user.name);
                    phone.set(user.phone.unwrap_or_default());
                }
            }
        }
    });

    let (user, busy) = {
        let app = state.read();
        (app.auth.user.clone(), app.auth.loading)
    };

    let save = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                match thunks::update_profile(&client, &mut dispatch, &name(), &phone()).await {
                    Ok(_) => alert.set(Some(Alert::info("Profile saved", "Your details were updated."))),
                    Err(e) => ui::show_error(alert, &e),
                }
            });
        }
    };

    let logout = move |_| {
        let client = client.clone();
        spawn(async move {
            let mut dispatch = ui::dispatcher(state);
            thunks::logout_user(&client, &mut dispatch).await;
            nav.replace(Route::Login {});
        });
    };

    rsx! {
        h1 { class: "screen-title", "Profile" }

        if let Some(user) = user {
            div {
                class: "card",
                p { class: "list-title", "{user.email}" }
                p { class: "list-subtitle", "Signed in as {user.role.as_str()}" }
                if !user.is_verified {
                    p { class: "warning", "Email not verified" }
                }
            }
        }

        div {
            class: "card",
            TextField { id: "profile-name", label: "Full name", value: name }
            TextField { id: "profile-phone", label: "Phone (optional)", value: phone, input_type: "tel" }
            SubmitButton { label: "Save", busy: busy, busy_label: "Saving...", onclick: save }
        }

        button {
            class: "btn btn-danger btn-block",
            disabled: busy,
            onclick: logout,
            "Sign out"
        }
    }
}
