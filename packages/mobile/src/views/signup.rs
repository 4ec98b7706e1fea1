use api::thunks;
use dioxus::prelude::*;
use store::UserRole;
use ui::{SubmitButton, TextField};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let alert = ui::use_alert();
    let nav = use_navigator();

    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Caregiver);
    let busy = state.read().auth.loading;

    let submit = move |_| {
        let client = client.clone();
        spawn(async move {
            let mut dispatch = ui::dispatcher(state);
            let result = thunks::signup_user(
                &client,
                &mut dispatch,
                &name(),
                &email(),
                &password(),
                &confirm(),
                role(),
            )
            .await;
            match result {
                Ok(_) => {
                    nav.push(Route::VerifyOtp {});
                }
                Err(e) => ui::show_error(alert, &e),
            }
        });
    };

    rsx! {
        div {
            class: "screen-center",
            div {
                class: "card auth-card",
                h1 { class: "screen-title", "Create account" }

                TextField { id: "signup-name", label: "Full name", value: name }
                TextField { id: "signup-email", label: "Email", value: email, input_type: "email" }
                TextField { id: "signup-password", label: "Password", value: password, input_type: "password" }
                TextField { id: "signup-confirm", label: "Confirm password", value: confirm, input_type: "password" }

                div {
                    class: "field",
                    label { r#for: "signup-role", class: "field-label", "I am a" }
                    select {
                        id: "signup-role",
                        class: "field-input",
                        value: role().as_str(),
                        onchange: move |evt| {
                            if let Some(r) = UserRole::parse(&evt.value()) {
                                role.set(r);
                            }
                        },
                        option { value: "caregiver", "Caregiver" }
                        option { value: "patient", "Patient" }
                    }
                }

                SubmitButton { label: "Sign up", busy: busy, busy_label: "Creating account...", onclick: submit }

                p {
                    class: "muted",
                    style: "margin-top: 16px;",
                    "Already registered? "
                    Link { class: "link", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
