use api::thunks;
use dioxus::prelude::*;
use ui::{Alert, SubmitButton, TextField};

use crate::{home_route, Route};

#[component]
pub fn VerifyOtp() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let mut alert = ui::use_alert();
    let nav = use_navigator();

    let otp = use_signal(String::new);
    let busy = state.read().auth.loading;
    let Some(email) = state.read().auth.pending_email.clone() else {
        return rsx! {
            div {
                class: "screen-center",
                p { class: "muted", "There is no account waiting for verification." }
                Link { class: "link", to: Route::Login {}, "Back to sign in" }
            }
        };
    };

    let verify = {
        let client = client.clone();
        let email = email.clone();
        move |_| {
            let client = client.clone();
            let email = email.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                match thunks::verify_otp(&client, &mut dispatch, &email, &otp()).await {
                    Ok(payload) => {
                        nav.replace(home_route(payload.user.role));
                    }
                    Err(e) => ui::show_error(alert, &e),
                }
            });
        }
    };

    let resend = {
        let email = email.clone();
        move |_| {
            let client = client.clone();
            let email = email.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                match thunks::resend_otp(&client, &mut dispatch, &email).await {
                    Ok(sent_to) => alert.set(Some(Alert::info(
                        "Code sent",
                        format!("A new code was sent to {sent_to}."),
                    ))),
                    Err(e) => ui::show_error(alert, &e),
                }
            });
        }
    };

    rsx! {
        div {
            class: "screen-center",
            div {
                class: "card auth-card",
                h1 { class: "screen-title", "Verify your email" }
                p { class: "muted", "Enter the 6-digit code sent to {email}." }

                TextField { id: "otp", label: "Verification code", value: otp, input_type: "text", placeholder: "123456" }

                SubmitButton { label: "Verify", busy: busy, busy_label: "Verifying...", onclick: verify }

                button {
                    class: "link",
                    style: "margin-top: 16px;",
                    disabled: busy,
                    onclick: resend,
                    "Resend code"
                }
            }
        }
    }
}
