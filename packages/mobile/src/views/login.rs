use api::thunks;
use dioxus::prelude::*;
use ui::{SubmitButton, TextField};

use crate::{home_route, Route};

#[component]
pub fn Login() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let alert = ui::use_alert();
    let nav = use_navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let busy = state.read().auth.loading;

    let submit = move |_| {
        let client = client.clone();
        spawn(async move {
            let mut dispatch = ui::dispatcher(state);
            match thunks::login_user(&client, &mut dispatch, &email(), &password()).await {
                Ok(payload) => {
                    nav.replace(home_route(payload.user.role));
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
                h1 { class: "screen-title", "MedTrack" }
                p { class: "muted", "Sign in to manage medications" }

                TextField { id: "login-email", label: "Email", value: email, input_type: "email", placeholder: "you@example.com" }
                TextField { id: "login-password", label: "Password", value: password, input_type: "password" }

                SubmitButton { label: "Sign in", busy: busy, busy_label: "Signing in...", onclick: submit }

                div {
                    class: "btn-row",
                    style: "justify-content: space-between; margin-top: 16px;",
                    Link { class: "link", to: Route::ForgotPassword {}, "Forgot password?" }
                    Link { class: "link", to: Route::Signup {}, "Create account" }
                }
            }
        }
    }
}
