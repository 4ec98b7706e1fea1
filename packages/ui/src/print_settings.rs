use dioxus::prelude::*;
use store::print_layout::{LabelSize, Orientation, PaperSize, PrintSettings};

use crate::ModalOverlay;

fn parse_in_range(raw: &str, max: u32) -> Option<u32> {
    raw.trim().parse::<u32>().ok().map(|n| n.clamp(1, max.max(1)))
}

/// Dialog for paper, label size and the starting cell on a partly used sheet.
#[component]
pub fn PrintSettingsDialog(
    initial: PrintSettings,
    on_confirm: EventHandler<(PrintSettings, bool)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut settings = use_signal(move || initial);
    let mut all_sheets = use_signal(|| false);

    let current = settings();
    let max_per_row = current.max_labels_per_row();
    let max_rows = current.usable_rows();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "Print labels" }

                div {
                    class: "field",
                    label { r#for: "paper-size", class: "field-label", "Paper" }
                    select {
                        id: "paper-size",
                        class: "field-input",
                        value: if current.paper_size == PaperSize::A4 { "a4" } else { "letter" },
                        onchange: move |evt| {
                            let paper = if evt.value() == "letter" { PaperSize::Letter } else { PaperSize::A4 };
                            settings.write().paper_size = paper;
                        },
                        option { value: "a4", "A4" }
                        option { value: "letter", "Letter" }
                    }
                }

                div {
                    class: "field",
                    label { r#for: "orientation", class: "field-label", "Orientation" }
                    select {
                        id: "orientation",
                        class: "field-input",
                        value: if current.orientation == Orientation::Portrait { "portrait" } else { "landscape" },
                        onchange: move |evt| {
                            let orientation = if evt.value() == "landscape" {
                                Orientation::Landscape
                            } else {
                                Orientation::Portrait
                            };
                            settings.write().orientation = orientation;
                        },
                        option { value: "portrait", "Portrait" }
                        option { value: "landscape", "Landscape" }
                    }
                }

                div {
                    class: "field",
                    label { r#for: "label-size", class: "field-label", "Label size" }
                    select {
                        id: "label-size",
                        class: "field-input",
                        value: match current.label_size {
                            LabelSize::Small => "small",
                            LabelSize::Medium => "medium",
                            LabelSize::Large => "large",
                        },
                        onchange: move |evt| {
                            let size = match evt.value().as_str() {
                                "small" => LabelSize::Small,
                                "large" => LabelSize::Large,
                                _ => LabelSize::Medium,
                            };
                            settings.write().label_size = size;
                        },
                        option { value: "small", "Small (2 × 1 in)" }
                        option { value: "medium", "Medium (2.67 × 1.33 in)" }
                        option { value: "large", "Large (3.33 × 1.67 in)" }
                    }
                }

                div {
                    class: "field",
                    label { r#for: "labels-per-row", class: "field-label", "Labels per row (max {max_per_row})" }
                    input {
                        id: "labels-per-row",
                        class: "field-input",
                        r#type: "number",
                        min: "1",
                        max: "{max_per_row}",
                        value: "{current.labels_per_row}",
                        oninput: move |evt: FormEvent| {
                            if let Some(n) = parse_in_range(&evt.value(), max_per_row) {
                                settings.write().labels_per_row = n;
                            }
                        },
                    }
                }

                div {
                    class: "field-row",
                    div {
                        class: "field",
                        label { r#for: "start-row", class: "field-label", "Start row" }
                        input {
                            id: "start-row",
                            class: "field-input",
                            r#type: "number",
                            min: "1",
                            max: "{max_rows}",
                            value: "{current.start_row}",
                            oninput: move |evt: FormEvent| {
                                if let Some(n) = parse_in_range(&evt.value(), max_rows) {
                                    settings.write().start_row = n;
                                }
                            },
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "start-column", class: "field-label", "Start column" }
                        input {
                            id: "start-column",
                            class: "field-input",
                            r#type: "number",
                            min: "1",
                            max: "{current.labels_per_row}",
                            value: "{current.start_column}",
                            oninput: move |evt: FormEvent| {
                                let per_row = settings().labels_per_row;
                                if let Some(n) = parse_in_range(&evt.value(), per_row) {
                                    settings.write().start_column = n;
                                }
                            },
                        }
                    }
                }

                label {
                    class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: all_sheets(),
                        onchange: move |_| all_sheets.toggle(),
                    }
                    "Continue on additional sheets"
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_confirm.call((settings(), all_sheets())),
                        "Preview"
                    }
                }
            }
        }
    }
}
