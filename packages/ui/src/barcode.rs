//! Barcode images and the printable label sheet.

use dioxus::prelude::*;
use store::barcode::barcode_image_url;
use store::config::BarcodeConfig;
use store::print_layout::{self, GridCell, LabelRecord, PrintSettings, SheetLayout, PAGE_MARGIN};

/// Remote barcode image; falls back to the plain short-code when the image
/// cannot be loaded (offline, service down).
#[component]
pub fn BarcodeImage(config: BarcodeConfig, code: String) -> Element {
    let mut failed = use_signal(|| false);
    let src = barcode_image_url(&config, &code);

    rsx! {
        if failed() || code.is_empty() {
            span { class: "barcode-fallback", "{code}" }
        } else {
            img {
                class: "barcode-img",
                src: "{src}",
                alt: "{code}",
                onerror: move |_| {
                    tracing::warn!("Barcode image failed to load, showing text");
                    failed.set(true);
                },
            }
        }
    }
}

/// Print preview of medication labels laid out on label sheets.
///
/// With `all_sheets` off only the first sheet is shown and the number of labels
/// that did not fit is reported.
#[component]
pub fn PrintableBarcode(
    labels: Vec<LabelRecord>,
    settings: PrintSettings,
    config: BarcodeConfig,
    #[props(default)] all_sheets: bool,
) -> Element {
    let sheets: Vec<SheetLayout> = if all_sheets {
        print_layout::paginate(&labels, &settings)
    } else {
        vec![print_layout::layout_sheet(&labels, &settings)]
    };
    let dropped = if all_sheets { 0 } else { sheets.first().map_or(0, |s| s.dropped) };

    let (page_w, page_h) = settings.page_dimensions();
    let (label_w, label_h) = settings.label_size.dimensions();
    let page_style = format!(
        "width: {page_w}px; min-height: {page_h}px; padding: {PAGE_MARGIN}px; gap: {PAGE_MARGIN}px;"
    );
    let cell_style = format!("width: {label_w}px; height: {label_h}px;");

    rsx! {
        div {
            class: "print-preview",
            if dropped > 0 {
                p {
                    class: "warning",
                    "{dropped} label(s) do not fit on this sheet. Print all sheets or change the layout."
                }
            }
            for (index, sheet) in sheets.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "sheet",
                    style: "{page_style}",
                    for (r, row) in sheet.cells.into_iter().enumerate() {
                        div {
                            key: "{r}",
                            class: "sheet-row",
                            style: "gap: {PAGE_MARGIN}px;",
                            for (c, cell) in row.into_iter().enumerate() {
                                LabelCell {
                                    key: "{c}",
                                    cell: cell,
                                    style: cell_style.clone(),
                                    config: config.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LabelCell(cell: GridCell, style: String, config: BarcodeConfig) -> Element {
    match cell {
        GridCell::Label(label) => rsx! {
            div {
                class: "label-cell",
                style: "{style}",
                p { class: "label-patient", "{label.patient_name}" }
                p { class: "label-medication", "{label.medication_name}" }
                BarcodeImage { config: config, code: label.barcode }
            }
        },
        GridCell::Empty => rsx! {
            div { class: "label-cell label-empty", style: "{style}" }
        },
    }
}
