use dioxus::prelude::*;

use crate::ModalOverlay;

/// Content of the app-wide alert dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Show a failed request in the alert dialog.
pub fn show_error(mut alert: Signal<Option<Alert>>, err: &api::ApiError) {
    alert.set(Some(Alert::error(err.message.clone())));
}

#[component]
pub fn AlertModal(alert: Alert, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{alert.title}" }
                p { class: "modal-text", "{alert.message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_close.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
