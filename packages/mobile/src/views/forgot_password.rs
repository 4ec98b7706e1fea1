use api::thunks;
use dioxus::prelude::*;
use ui::{SubmitButton, TextField};

use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let alert = ui::use_alert();
    let nav = use_navigator();

    let email = use_signal(String::new);
    let busy = state.read().auth.loading;

    let submit = move |_| {
        let client = client.clone();
        spawn(async move {
            let mut dispatch = ui::dispatcher(state);
            match thunks::forgot_password(&client, &mut dispatch, &email()).await {
                Ok(_) => {
                    nav.push(Route::ResetPassword {});
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
                h1 { class: "screen-title", "Reset password" }
                p { class: "muted", "We will email you a code to choose a new password." }

                TextField { id: "forgot-email", label: "Email", value: email, input_type: "email" }

                SubmitButton { label: "Send code", busy: busy, busy_label: "Sending...", onclick: submit }

                Link { class: "link", to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
