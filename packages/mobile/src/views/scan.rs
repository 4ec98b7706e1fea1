use api::thunks;
use dioxus::prelude::*;
use store::barcode::{is_valid_short_code, normalize_scanned, SHORT_CODE_LEN, SHORT_CODE_PREFIX};
use ui::{Alert, SubmitButton};

/// Patient home: own medications and dose confirmation by label code.
///
/// Codes are typed in by hand; the camera scanner is not part of this build.
#[component]
pub fn Scan() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let mut alert = ui::use_alert();
    let mut code = use_signal(String::new);

    let refresh = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                if let Err(e) = thunks::fetch_my_medications(&client, &mut dispatch).await {
                    ui::show_error(alert, &e);
                }
            });
        }
    };
    let initial = refresh.clone();
    use_hook(move || initial());

    let (medications, busy) = {
        let app = state.read();
        (app.patient.medications.clone(), app.patient.loading)
    };
    let today = chrono::Local::now().date_naive();
    let normalized = normalize_scanned(&code());
    let looks_valid = is_valid_short_code(&normalized);

    let confirm = move |_| {
        let client = client.clone();
        let refresh = refresh.clone();
        spawn(async move {
            let mut dispatch = ui::dispatcher(state);
            match thunks::confirm_dose(&client, &mut dispatch, &code()).await {
                Ok(confirmation) => {
                    code.set(String::new());
                    alert.set(Some(Alert::info(
                        "Dose recorded",
                        format!(
                            "{} taken at {}. {} left.",
                            confirmation.medication_name,
                            confirmation.taken_at.format("%H:%M"),
                            confirmation.remaining_quantity
                        ),
                    )));
                    refresh();
                }
                Err(e) => ui::show_error(alert, &e),
            }
        });
    };

    rsx! {
        h1 { class: "screen-title", "My medications" }

        div {
            class: "card",
            h2 { class: "section-title", "Confirm a dose" }
            p { class: "muted", "Enter the code printed under the barcode on your medication label." }
            div {
                class: "field",
                input {
                    class: "field-input",
                    r#type: "text",
                    placeholder: "{code_placeholder()}",
                    maxlength: "{SHORT_CODE_LEN}",
                    value: code(),
                    oninput: move |evt: FormEvent| code.set(evt.value()),
                }
                if !normalized.is_empty() && !looks_valid {
                    p { class: "error-text", "Codes look like MT followed by 8 letters or digits." }
                }
            }
            SubmitButton { label: "Confirm dose", busy: busy, busy_label: "Confirming...", onclick: confirm }
        }

        h2 { class: "section-title", "Prescribed" }
        if medications.is_empty() {
            p { class: "muted", if busy { "Loading..." } else { "No medications have been added for you yet." } }
        }
        ul {
            class: "list",
            for medication in medications {
                li {
                    key: "{medication.id}",
                    class: "list-item list-item-button",
                    onclick: {
                        let barcode = medication.barcode.clone();
                        move |_| code.set(barcode.clone())
                    },
                    div {
                        class: "list-header",
                        span { class: "list-title", "{medication.name} {medication.dosage}{medication.unit}" }
                        if medication.is_expired(today) {
                            span { class: "badge badge-danger", "Expired" }
                        } else if medication.is_low_stock() {
                            span { class: "badge badge-warn", "Running low" }
                        }
                    }
                    div {
                        class: "list-subtitle",
                        "{medication.frequency.label()} · {medication.timing.label()} · {medication.remaining_quantity} left"
                    }
                    if let Some(notes) = medication.instructions.clone() {
                        div { class: "list-subtitle", "{notes}" }
                    }
                }
            }
        }
    }
}

fn code_placeholder() -> String {
    format!(
        "{SHORT_CODE_PREFIX}{}",
        "X".repeat(SHORT_CODE_LEN - SHORT_CODE_PREFIX.len())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_placeholder_has_short_code_shape() {
        let placeholder = code_placeholder();
        assert_eq!(placeholder, "MTXXXXXXXX");
        assert_eq!(placeholder.len(), SHORT_CODE_LEN);
    }
}
