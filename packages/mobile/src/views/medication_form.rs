use api::thunks;
use chrono::{Duration, NaiveDate};
use dioxus::prelude::*;
use store::models::{Frequency, MealTiming, Medication, MedicationDraft};
use ui::{Alert, SubmitButton, TextField};

use crate::Route;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn blank_draft() -> MedicationDraft {
    MedicationDraft {
        name: String::new(),
        dosage: String::new(),
        unit: "mg".to_string(),
        frequency: Frequency::OnceDaily,
        timing: MealTiming::Any,
        quantity: 30,
        remaining_quantity: 30,
        expiry_date: today() + Duration::days(365),
        instructions: None,
    }
}

fn draft_of(medication: &Medication) -> MedicationDraft {
    MedicationDraft {
        name: medication.name.clone(),
        dosage: medication.dosage.clone(),
        unit: medication.unit.clone(),
        frequency: medication.frequency,
        timing: medication.timing,
        quantity: medication.quantity,
        remaining_quantity: medication.remaining_quantity,
        expiry_date: medication.expiry_date,
        instructions: medication.instructions.clone(),
    }
}

fn frequency_key(f: Frequency) -> &'static str {
    match f {
        Frequency::OnceDaily => "once_daily",
        Frequency::TwiceDaily => "twice_daily",
        Frequency::ThriceDaily => "thrice_daily",
        Frequency::AsNeeded => "as_needed",
        Frequency::Weekly => "weekly",
    }
}

fn timing_key(t: MealTiming) -> &'static str {
    match t {
        MealTiming::BeforeFood => "before_food",
        MealTiming::AfterFood => "after_food",
        MealTiming::WithFood => "with_food",
        MealTiming::Any => "any",
    }
}

#[component]
pub fn AddMedication(patient_id: String) -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let alert = ui::use_alert();
    let nav = use_navigator();
    let busy = state.read().caregiver.loading;

    let patient_name = state
        .read()
        .caregiver
        .patient(&patient_id)
        .map(|p| p.name.clone())
        .unwrap_or_default();

    let submit = {
        let patient_id = patient_id.clone();
        move |draft: MedicationDraft| {
            let client = client.clone();
            let patient_id = patient_id.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                match thunks::add_medication(&client, &mut dispatch, &patient_id, &draft, today())
                    .await
                {
                    Ok(_) => {
                        nav.replace(Route::PatientDetail { id: patient_id });
                    }
                    Err(e) => ui::show_error(alert, &e),
                }
            });
        }
    };

    rsx! {
        h1 { class: "screen-title", "Add medication" }
        if !patient_name.is_empty() {
            p { class: "muted", "For {patient_name}" }
        }
        MedicationForm {
            initial: blank_draft(),
            editing: false,
            busy: busy,
            submit_label: "Save medication",
            on_submit: submit,
        }
    }
}

#[component]
pub fn EditMedication(id: String) -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let alert = ui::use_alert();
    let nav = use_navigator();
    let busy = state.read().caregiver.loading;

    let Some(medication) = state.read().caregiver.medications.get(&id).cloned() else {
        return rsx! {
            p { class: "muted", "Medication not found." }
            Link { class: "link", to: Route::Patients {}, "Back to patients" }
        };
    };

    let patient_id = medication.patient_id.clone();
    let submit = move |draft: MedicationDraft| {
        let client = client.clone();
        let id = id.clone();
        let patient_id = patient_id.clone();
        spawn(async move {
            let mut dispatch = ui::dispatcher(state);
            match thunks::update_medication(&client, &mut dispatch, &id, &draft, today()).await {
                Ok(_) => {
                    nav.replace(Route::PatientDetail { id: patient_id });
                }
                Err(e) => ui::show_error(alert, &e),
            }
        });
    };

    rsx! {
        h1 { class: "screen-title", "Edit {medication.name}" }
        p { class: "muted", "Label code {medication.barcode}" }
        MedicationForm {
            initial: draft_of(&medication),
            editing: true,
            busy: busy,
            submit_label: "Save changes",
            on_submit: submit,
        }
    }
}

#[component]
fn MedicationForm(
    initial: MedicationDraft,
    editing: bool,
    busy: bool,
    submit_label: String,
    on_submit: EventHandler<MedicationDraft>,
) -> Element {
    let mut alert = ui::use_alert();

    let name = use_signal(|| initial.name.clone());
    let dosage = use_signal(|| initial.dosage.clone());
    let unit = use_signal(|| initial.unit.clone());
    let mut frequency = use_signal(|| initial.frequency);
    let mut timing = use_signal(|| initial.timing);
    let quantity = use_signal(|| initial.quantity.to_string());
    let remaining = use_signal(|| initial.remaining_quantity.to_string());
    let expiry = use_signal(|| initial.expiry_date.format(DATE_FORMAT).to_string());
    let instructions = use_signal(|| initial.instructions.clone().unwrap_or_default());

    let submit = move |_| {
        let Ok(expiry_date) = NaiveDate::parse_from_str(expiry().trim(), DATE_FORMAT) else {
            alert.set(Some(Alert::error("Enter the expiry date as YYYY-MM-DD")));
            return;
        };
        let quantity = quantity().trim().parse::<u32>().unwrap_or(0);
        let remaining_quantity = if editing {
            remaining().trim().parse::<u32>().unwrap_or(0)
        } else {
            quantity
        };
        let notes = instructions().trim().to_string();
        on_submit.call(MedicationDraft {
            name: name().trim().to_string(),
            dosage: dosage().trim().to_string(),
            unit: unit().trim().to_string(),
            frequency: frequency(),
            timing: timing(),
            quantity,
            remaining_quantity,
            expiry_date,
            instructions: (!notes.is_empty()).then_some(notes),
        });
    };

    rsx! {
        div {
            class: "card",
            TextField { id: "med-name", label: "Medication name", value: name, placeholder: "e.g. Metformin" }
            div {
                class: "field-row",
                TextField { id: "med-dosage", label: "Dosage", value: dosage, placeholder: "500" }
                TextField { id: "med-unit", label: "Unit", value: unit, placeholder: "mg" }
            }

            div {
                class: "field",
                label { r#for: "med-frequency", class: "field-label", "Frequency" }
                select {
                    id: "med-frequency",
                    class: "field-input",
                    value: frequency_key(frequency()),
                    onchange: move |evt| {
                        if let Some(f) = Frequency::ALL.into_iter().find(|f| frequency_key(*f) == evt.value()) {
                            frequency.set(f);
                        }
                    },
                    for f in Frequency::ALL {
                        option { key: "{frequency_key(f)}", value: frequency_key(f), "{f.label()}" }
                    }
                }
            }

            div {
                class: "field",
                label { r#for: "med-timing", class: "field-label", "When to take" }
                select {
                    id: "med-timing",
                    class: "field-input",
                    value: timing_key(timing()),
                    onchange: move |evt| {
                        if let Some(t) = MealTiming::ALL.into_iter().find(|t| timing_key(*t) == evt.value()) {
                            timing.set(t);
                        }
                    },
                    for t in MealTiming::ALL {
                        option { key: "{timing_key(t)}", value: timing_key(t), "{t.label()}" }
                    }
                }
            }

            div {
                class: "field-row",
                TextField { id: "med-quantity", label: "Quantity", value: quantity, input_type: "number" }
                if editing {
                    TextField { id: "med-remaining", label: "Remaining", value: remaining, input_type: "number" }
                }
            }

            TextField { id: "med-expiry", label: "Expiry date", value: expiry, input_type: "date" }
            TextField { id: "med-instructions", label: "Instructions (optional)", value: instructions }

            SubmitButton { label: submit_label, busy: busy, busy_label: "Saving...", onclick: submit }
        }
    }
}
