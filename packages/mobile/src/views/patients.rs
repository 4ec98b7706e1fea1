use api::thunks;
use dioxus::prelude::*;
use ui::StatusBadge;

use crate::Route;

#[component]
pub fn Patients() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let alert = ui::use_alert();
    let mut filter = use_signal(String::new);

    let load = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                if let Err(e) = thunks::fetch_patients(&client, &mut dispatch).await {
                    ui::show_error(alert, &e);
                }
                // Keeps the unread count on the tab bar current
                let _ = thunks::fetch_notifications(&client, &mut dispatch).await;
            });
        }
    };
    let initial = load.clone();
    use_hook(move || initial());

    let needle = filter().trim().to_lowercase();
    let (patients, loading, total, selected) = {
        let app = state.read();
        let caregiver = &app.caregiver;
        let patients: Vec<_> = caregiver
            .patients()
            .into_iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        (
            patients,
            caregiver.loading,
            caregiver.patient_order.len(),
            caregiver.selected_patient.clone(),
        )
    };

    rsx! {
        div {
            class: "list-header",
            h1 { class: "screen-title", "My patients" }
            Link { class: "btn btn-primary", to: Route::AddPatient {}, "Add" }
        }

        input {
            class: "field-input",
            r#type: "search",
            placeholder: "Search by name",
            value: filter(),
            oninput: move |evt: FormEvent| filter.set(evt.value()),
        }

        if loading && total == 0 {
            p { class: "muted", "Loading patients..." }
        } else if total == 0 {
            div {
                class: "card",
                p { "You are not caring for anyone yet." }
                Link { class: "link", to: Route::AddPatient {}, "Add your first patient" }
            }
        } else if patients.is_empty() {
            p { class: "muted", "No patient matches \"{needle}\"." }
        }

        ul {
            class: "list",
            for patient in patients {
                Link {
                    key: "{patient.id}",
                    to: Route::PatientDetail { id: patient.id.clone() },
                    li {
                        class: if selected.as_deref() == Some(patient.id.as_str()) {
                            "list-item list-item-button list-item-selected"
                        } else {
                            "list-item list-item-button"
                        },
                        div {
                            class: "list-header",
                            span { class: "list-title", "{patient.name}" }
                            StatusBadge { status: patient.status }
                        }
                        div {
                            class: "list-subtitle",
                            "{patient.email}"
                        }
                        if patient.alert_count > 0 {
                            div { class: "error-text", "{patient.alert_count} SOS alert(s)" }
                        }
                        if let Some(rate) = patient.adherence_rate {
                            div { class: "list-subtitle", "Adherence {rate:.0}%" }
                        }
                    }
                }
            }
        }

        button {
            class: "btn btn-block",
            style: "margin-top: 16px;",
            disabled: loading,
            onclick: move |_| load(),
            "Refresh"
        }
    }
}
