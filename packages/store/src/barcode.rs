//! Medication barcode short-codes and remote barcode image URLs.
//!
//! A short-code is `MT` followed by eight uppercase alphanumerics. The backend
//! assigns it when a medication is created; the client only validates what is
//! scanned or typed and builds image URLs for the rendering service.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::BarcodeConfig;

pub const SHORT_CODE_PREFIX: &str = "MT";
pub const SHORT_CODE_LEN: usize = 10;

static SHORT_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^MT[A-Z0-9]{8}$").expect("short-code regex"));

/// True iff `code` matches `^MT[A-Z0-9]{8}$`.
pub fn is_valid_short_code(code: &str) -> bool {
    SHORT_CODE_RE.is_match(code)
}

/// Trim and uppercase a scanned or hand-typed code.
pub fn normalize_scanned(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// URL of the rendered barcode image for `text`.
pub fn barcode_image_url(config: &BarcodeConfig, text: &str) -> String {
    let base = config.service_url.trim_end_matches('/');
    format!(
        "{base}/?bcid={}&text={}&scale={}&height={}&includetext&textxalign=center",
        urlencoding::encode(&config.symbology),
        urlencoding::encode(text),
        config.scale,
        config.height,
    )
}
