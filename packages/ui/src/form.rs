use dioxus::prelude::*;

/// Labelled text input bound to a signal.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: Signal<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
) -> Element {
    let mut value = value;
    rsx! {
        div {
            class: "field",
            label { r#for: "{id}", class: "field-label", "{label}" }
            input {
                id: "{id}",
                class: "field-input",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                disabled: disabled,
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
        }
    }
}

/// Primary action button; shows `busy_label` and is disabled while a request runs.
#[component]
pub fn SubmitButton(
    label: String,
    busy: bool,
    #[props(default = "Please wait...".to_string())] busy_label: String,
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "btn btn-primary btn-block",
            disabled: busy,
            onclick: move |_| {
                if !busy {
                    onclick.call(());
                }
            },
            if busy { "{busy_label}" } else { "{label}" }
        }
    }
}
