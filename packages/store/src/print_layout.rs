//! # Print-label grid layout
//!
//! Arranges barcode labels on a sheet of paper for printing. The sheet is a grid of
//! `rows × labels_per_row` cells where `rows` is however many labels fit vertically:
//!
//! ```text
//! rows = floor((page_height - PAGE_MARGIN) / (label_height + PAGE_MARGIN))
//! ```
//!
//! Labels are placed row-major starting at the 1-indexed `(start_row, start_column)`
//! so that a partly used label sheet can be fed back into the printer. When a row
//! fills up, placement wraps to column 0 of the next row. Cells before the offset and
//! after the last label are [`GridCell::Empty`] spacers that keep the grid aligned.
//!
//! [`layout_sheet`] fills exactly one sheet and drops whatever does not fit, reporting
//! the count in [`SheetLayout::dropped`]. [`paginate`] keeps going on fresh sheets,
//! each starting at the top-left corner.

use serde::{Deserialize, Serialize};

use crate::models::Medication;

/// Gap between labels and around the page edge, in px.
pub const PAGE_MARGIN: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

impl PaperSize {
    /// Portrait `(width, height)` in px at 72 dpi.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            PaperSize::A4 => (595, 842),
            PaperSize::Letter => (612, 792),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LabelSize {
    /// `(width, height)` in px.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            LabelSize::Small => (144, 72),
            LabelSize::Medium => (192, 96),
            LabelSize::Large => (240, 120),
        }
    }
}

/// Settings chosen in the print dialog. Only lives as long as the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintSettings {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub label_size: LabelSize,
    pub labels_per_row: u32,
    /// 1-indexed
    pub start_row: u32,
    /// 1-indexed
    pub start_column: u32,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            label_size: LabelSize::Medium,
            labels_per_row: 3,
            start_row: 1,
            start_column: 1,
        }
    }
}

impl PrintSettings {
    pub fn page_dimensions(&self) -> (u32, u32) {
        let (w, h) = self.paper_size.dimensions();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Number of label rows that fit on one sheet.
    pub fn usable_rows(&self) -> u32 {
        let (_, page_h) = self.page_dimensions();
        let (_, label_h) = self.label_size.dimensions();
        page_h.saturating_sub(PAGE_MARGIN) / (label_h + PAGE_MARGIN)
    }

    /// How many labels physically fit across the page. Used to cap the dialog input.
    pub fn max_labels_per_row(&self) -> u32 {
        let (page_w, _) = self.page_dimensions();
        let (label_w, _) = self.label_size.dimensions();
        (page_w.saturating_sub(PAGE_MARGIN) / (label_w + PAGE_MARGIN)).max(1)
    }

    pub fn columns(&self) -> u32 {
        self.labels_per_row.max(1)
    }
}

/// What gets printed on one label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub patient_name: String,
    pub medication_name: String,
    pub barcode: String,
}

impl LabelRecord {
    pub fn for_medication(patient_name: &str, medication: &Medication) -> Self {
        Self {
            patient_name: patient_name.to_string(),
            medication_name: format!(
                "{} {}{}",
                medication.name, medication.dosage, medication.unit
            ),
            barcode: medication.barcode.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridCell {
    Label(LabelRecord),
    Empty,
}

impl GridCell {
    pub fn is_label(&self) -> bool {
        matches!(self, GridCell::Label(_))
    }
}

/// One sheet worth of labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    pub rows: u32,
    pub columns: u32,
    /// `rows` rows of `columns` cells each.
    pub cells: Vec<Vec<GridCell>>,
    pub placed: usize,
    pub dropped: usize,
}

/// Lay out `labels` on a single sheet, starting at the settings' offset.
pub fn layout_sheet(labels: &[LabelRecord], settings: &PrintSettings) -> SheetLayout {
    let sheet = place_first(labels, settings);
    if sheet.dropped > 0 {
        tracing::warn!(
            "Label sheet full: placed {} of {} labels, {} not printed",
            sheet.placed,
            labels.len(),
            sheet.dropped
        );
    }
    sheet
}

/// Lay out every label, continuing onto fresh sheets at (1, 1) after the first.
///
/// `dropped` stays zero on every sheet unless the page has no room for a single
/// row, in which case nothing can be printed at all.
pub fn paginate(labels: &[LabelRecord], settings: &PrintSettings) -> Vec<SheetLayout> {
    let mut first = place_first(labels, settings);
    if first.placed == 0 {
        if first.dropped > 0 {
            tracing::warn!("No label rows fit on the page, {} not printed", first.dropped);
        }
        return vec![first];
    }

    let rows = settings.usable_rows();
    let columns = settings.columns();
    let mut next = first.placed;
    first.dropped = 0;
    let mut sheets = vec![first];
    while next < labels.len() {
        let mut sheet = place(&labels[next..], rows, columns, 0, 0);
        next += sheet.placed;
        sheet.dropped = 0;
        sheets.push(sheet);
    }
    sheets
}

fn place_first(labels: &[LabelRecord], settings: &PrintSettings) -> SheetLayout {
    let rows = settings.usable_rows();
    let columns = settings.columns();
    let start_row = settings.start_row.clamp(1, rows.max(1)) - 1;
    let start_column = settings.start_column.clamp(1, columns) - 1;
    place(labels, rows, columns, start_row, start_column)
}

fn place(
    labels: &[LabelRecord],
    rows: u32,
    columns: u32,
    start_row: u32,
    start_column: u32,
) -> SheetLayout {
    let mut cells = vec![vec![GridCell::Empty; columns as usize]; rows as usize];
    let mut remaining = labels.iter();
    let mut placed = 0;

    let (mut row, mut col) = (start_row as usize, start_column as usize);
    while row < rows as usize {
        let Some(label) = remaining.next() else {
            break;
        };
        cells[row][col] = GridCell::Label(label.clone());
        placed += 1;
        col += 1;
        if col == columns as usize {
            col = 0;
            row += 1;
        }
    }

    let dropped = labels.len() - placed;

    SheetLayout {
        rows,
        columns,
        cells,
        placed,
        dropped,
    }
}
