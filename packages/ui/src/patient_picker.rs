use dioxus::prelude::*;
use store::Patient;

use crate::ModalOverlay;

fn subtitle(patient: &Patient) -> String {
    match patient.last_activity {
        Some(last) => format!("{} · last active {}", patient.email, last.format("%b %d")),
        None => patient.email.clone(),
    }
}

/// Lets the caregiver choose between patients sharing the name a notification mentions.
#[component]
pub fn PatientPickerDialog(
    patients: Vec<Patient>,
    on_select: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let rows: Vec<(String, String, String)> = patients
        .iter()
        .map(|p| (p.id.clone(), p.name.clone(), subtitle(p)))
        .collect();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "Which patient?" }
                p { class: "modal-text", "Several patients match this notification." }
                ul {
                    class: "list",
                    for (id, name, detail) in rows {
                        li {
                            key: "{id}",
                            class: "list-item list-item-button",
                            onclick: {
                                let id = id.clone();
                                move |_| on_select.call(id.clone())
                            },
                            div { class: "list-title", "{name}" }
                            div { class: "list-subtitle", "{detail}" }
                        }
                    }
                }
                div {
                    class: "modal-actions",
                    button { class: "btn", onclick: move |_| on_cancel.call(()), "Cancel" }
                }
            }
        }
    }
}
