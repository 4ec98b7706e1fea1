use api::thunks;
use dioxus::prelude::*;
use ui::{SubmitButton, TextField};

use crate::Route;

/// Find a registered patient account and take them under care.
#[component]
pub fn AddPatient() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let alert = ui::use_alert();
    let nav = use_navigator();

    let mut query = use_signal(String::new);
    let email = use_signal(String::new);

    let (results, busy) = {
        let app = state.read();
        (app.caregiver.search_results.clone(), app.caregiver.loading)
    };

    let add = {
        let client = client.clone();
        move |address: String| {
            let client = client.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                match thunks::add_patient(&client, &mut dispatch, &address).await {
                    Ok(patient) => {
                        tracing::info!("Added patient {}", patient.id);
                        nav.replace(Route::PatientDetail { id: patient.id });
                    }
                    Err(e) => ui::show_error(alert, &e),
                }
            });
        }
    };

    let mut search = move |text: String| {
        query.set(text.clone());
        let client = client.clone();
        spawn(async move {
            let mut dispatch = ui::dispatcher(state);
            if let Err(e) = thunks::search_patients(&client, &mut dispatch, &text).await {
                ui::show_error(alert, &e);
            }
        });
    };

    let add_by_email = add.clone();

    rsx! {
        h1 { class: "screen-title", "Add patient" }

        div {
            class: "card",
            h2 { class: "section-title", "Search" }
            input {
                class: "field-input",
                r#type: "search",
                placeholder: "Patient name or email",
                value: query(),
                oninput: move |evt: FormEvent| search(evt.value()),
            }
            ul {
                class: "list",
                for patient in results {
                    li {
                        key: "{patient.id}",
                        class: "list-item",
                        div {
                            class: "list-header",
                            div {
                                div { class: "list-title", "{patient.name}" }
                                div { class: "list-subtitle", "{patient.email}" }
                            }
                            button {
                                class: "btn btn-primary",
                                disabled: busy,
                                onclick: {
                                    let add = add.clone();
                                    let address = patient.email.clone();
                                    move |_| add(address.clone())
                                },
                                "Add"
                            }
                        }
                    }
                }
            }
        }

        div {
            class: "card",
            h2 { class: "section-title", "Add by email" }
            p { class: "muted", "The patient must already have a MedTrack account." }
            TextField { id: "add-patient-email", label: "Patient email", value: email, input_type: "email" }
            SubmitButton {
                label: "Add patient",
                busy: busy,
                busy_label: "Adding...",
                onclick: move |_| add_by_email(email()),
            }
        }
    }
}
