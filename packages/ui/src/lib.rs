//! This crate contains all shared UI for the MedTrack app.

use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod client;
pub use client::{data_dir, make_client, Client};

mod provider;
pub use provider::{dispatcher, use_alert, use_app_state, use_client, use_config, AppProvider};

mod alert;
pub use alert::{show_error, Alert, AlertModal};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod form;
pub use form::{SubmitButton, TextField};

mod badge;
pub use badge::{PriorityBadge, StatusBadge};

mod barcode;
pub use barcode::{BarcodeImage, PrintableBarcode};

mod print_settings;
pub use print_settings::PrintSettingsDialog;

mod patient_picker;
pub use patient_picker::PatientPickerDialog;
