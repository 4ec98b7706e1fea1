use api::thunks;
use dioxus::prelude::*;
use store::print_layout::{LabelRecord, PrintSettings};
use ui::{BarcodeImage, ModalOverlay, PrintSettingsDialog, PrintableBarcode, StatusBadge};

use crate::Route;

#[component]
pub fn PatientDetail(id: String) -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let config = ui::use_config();
    let alert = ui::use_alert();
    let nav = use_navigator();

    let mut show_print_dialog = use_signal(|| false);
    let mut print_settings = use_signal(PrintSettings::default);
    let mut preview = use_signal(|| Option::<bool>::None);
    let mut confirm_remove = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    // Reload whenever the route parameter changes
    let loader_client = client.clone();
    let _loader = use_resource(use_reactive((&id,), move |(id,)| {
        let client = loader_client.clone();
        async move {
            let mut dispatch = ui::dispatcher(state);
            if let Err(e) = thunks::fetch_patient(&client, &mut dispatch, &id).await {
                ui::show_error(alert, &e);
                return;
            }
            if let Err(e) = thunks::fetch_patient_medications(&client, &mut dispatch, &id).await {
                ui::show_error(alert, &e);
            }
        }
    }));

    let (patient, medications, busy) = {
        let app = state.read();
        let caregiver = &app.caregiver;
        (
            caregiver.patient(&id).cloned(),
            caregiver
                .medications_for(&id)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>(),
            caregiver.loading,
        )
    };

    let Some(patient) = patient else {
        return rsx! {
            p { class: "muted", if busy { "Loading..." } else { "Patient not found." } }
            Link { class: "link", to: Route::Patients {}, "Back to patients" }
        };
    };

    let today = chrono::Local::now().date_naive();
    let labels: Vec<LabelRecord> = medications
        .iter()
        .filter(|m| !m.barcode.is_empty())
        .map(|m| LabelRecord::for_medication(&patient.name, m))
        .collect();
    let has_labels = !labels.is_empty();
    let last_active = patient
        .last_activity
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string());

    let delete_medication = {
        let client = client.clone();
        move |medication_id: String| {
            let client = client.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                if let Err(e) =
                    thunks::delete_medication(&client, &mut dispatch, &medication_id).await
                {
                    ui::show_error(alert, &e);
                }
            });
        }
    };

    let remove_patient = {
        let id = id.clone();
        move |_| {
            let client = client.clone();
            let id = id.clone();
            confirm_remove.set(false);
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                match thunks::remove_patient(&client, &mut dispatch, &id).await {
                    Ok(_) => {
                        nav.replace(Route::Patients {});
                    }
                    Err(e) => ui::show_error(alert, &e),
                }
            });
        }
    };

    if let Some(all_sheets) = preview() {
        return rsx! {
            div {
                class: "list-header no-print",
                button { class: "btn", onclick: move |_| preview.set(None), "Back" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        let _ = document::eval("window.print();");
                    },
                    "Print"
                }
            }
            PrintableBarcode {
                labels: labels,
                settings: print_settings(),
                config: config.barcode.clone(),
                all_sheets: all_sheets,
            }
        };
    }

    rsx! {
        div {
            class: "card",
            div {
                class: "list-header",
                h1 { class: "screen-title", "{patient.name}" }
                StatusBadge { status: patient.status }
            }
            p { class: "list-subtitle", "{patient.email}" }
            if let Some(age) = patient.age {
                p { class: "list-subtitle", "Age {age}" }
            }
            if let Some(last) = last_active {
                p { class: "list-subtitle", "Last active {last}" }
            }
            if patient.alert_count > 0 {
                p { class: "error-text", "{patient.alert_count} SOS alert(s)" }
            }
        }

        div {
            class: "btn-row",
            Link {
                class: "btn btn-primary",
                to: Route::AddMedication { patient_id: id.clone() },
                "Add medication"
            }
            button {
                class: "btn",
                disabled: !has_labels,
                onclick: move |_| show_print_dialog.set(true),
                "Print labels"
            }
        }

        h2 { class: "section-title", "Medications" }
        if medications.is_empty() {
            p { class: "muted", if busy { "Loading..." } else { "No medications yet." } }
        }
        ul {
            class: "list",
            for medication in medications {
                li {
                    key: "{medication.id}",
                    class: "list-item",
                    div {
                        class: "list-header",
                        span { class: "list-title", "{medication.name} {medication.dosage}{medication.unit}" }
                        if medication.is_expired(today) {
                            span { class: "badge badge-danger", "Expired" }
                        } else if medication.is_low_stock() {
                            span { class: "badge badge-warn", "Low stock" }
                        }
                    }
                    div {
                        class: "list-subtitle",
                        "{medication.frequency.label()} · {medication.timing.label()}"
                    }
                    div {
                        class: "list-subtitle",
                        "{medication.remaining_quantity} of {medication.quantity} left · expires {medication.expiry_date}"
                    }
                    if let Some(notes) = medication.instructions.clone() {
                        div { class: "list-subtitle", "{notes}" }
                    }
                    BarcodeImage { config: config.barcode.clone(), code: medication.barcode.clone() }
                    div {
                        class: "btn-row",
                        Link {
                            class: "btn",
                            to: Route::EditMedication { id: medication.id.clone() },
                            "Edit"
                        }
                        button {
                            class: "btn",
                            onclick: {
                                let medication_id = medication.id.clone();
                                move |_| pending_delete.set(Some(medication_id.clone()))
                            },
                            "Delete"
                        }
                    }
                }
            }
        }

        button {
            class: "btn btn-danger btn-block",
            style: "margin-top: 24px;",
            onclick: move |_| confirm_remove.set(true),
            "Remove patient"
        }

        if show_print_dialog() {
            PrintSettingsDialog {
                initial: print_settings(),
                on_confirm: move |(settings, all_sheets): (PrintSettings, bool)| {
                    print_settings.set(settings);
                    show_print_dialog.set(false);
                    preview.set(Some(all_sheets));
                },
                on_cancel: move |_| show_print_dialog.set(false),
            }
        }

        if let Some(medication_id) = pending_delete() {
            ModalOverlay {
                on_close: move |_| pending_delete.set(None),
                div {
                    class: "modal-body",
                    h2 { class: "modal-title", "Delete medication?" }
                    p { class: "modal-text", "Its printed labels will no longer confirm doses." }
                    div {
                        class: "modal-actions",
                        button { class: "btn", onclick: move |_| pending_delete.set(None), "Cancel" }
                        button {
                            class: "btn btn-danger",
                            onclick: {
                                let delete_medication = delete_medication.clone();
                                move |_| {
                                    pending_delete.set(None);
                                    delete_medication(medication_id.clone());
                                }
                            },
                            "Delete"
                        }
                    }
                }
            }
        }

        if confirm_remove() {
            ModalOverlay {
                on_close: move |_| confirm_remove.set(false),
                div {
                    class: "modal-body",
                    h2 { class: "modal-title", "Remove {patient.name}?" }
                    p { class: "modal-text", "You will stop receiving their alerts." }
                    div {
                        class: "modal-actions",
                        button { class: "btn", onclick: move |_| confirm_remove.set(false), "Cancel" }
                        button { class: "btn btn-danger", onclick: remove_patient, "Remove" }
                    }
                }
            }
        }
    }
}
