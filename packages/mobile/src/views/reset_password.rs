use api::thunks;
use dioxus::prelude::*;
use ui::{Alert, SubmitButton, TextField};

use crate::Route;

#[component]
pub fn ResetPassword() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let mut alert = ui::use_alert();
    let nav = use_navigator();

    let pending = state.read().auth.pending_email.clone().unwrap_or_default();
    let email = use_signal(move || pending);
    let otp = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm = use_signal(String::new);
    let busy = state.read().auth.loading;

    let submit = move |_| {
        let client = client.clone();
        spawn(async move {
            let mut dispatch = ui::dispatcher(state);
            let result = thunks::reset_password(
                &client,
                &mut dispatch,
                &email(),
                &otp(),
                &password(),
                &confirm(),
            )
            .await;
            match result {
                Ok(()) => {
                    alert.set(Some(Alert::info(
                        "Password updated",
                        "You can now sign in with your new password.",
                    )));
                    nav.replace(Route::Login {});
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
                h1 { class: "screen-title", "Choose a new password" }

                TextField { id: "reset-email", label: "Email", value: email, input_type: "email" }
                TextField { id: "reset-otp", label: "Code from email", value: otp }
                TextField { id: "reset-password", label: "New password", value: password, input_type: "password" }
                TextField { id: "reset-confirm", label: "Confirm new password", value: confirm, input_type: "password" }

                SubmitButton { label: "Update password", busy: busy, busy_label: "Updating...", onclick: submit }

                Link { class: "link", to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
