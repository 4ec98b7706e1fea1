use serde_json::json;
use store::models::{DoseConfirmation, Medication};
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{Method, Transport};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// Medications of the signed-in patient.
    pub async fn my_medications(&self) -> Result<Vec<Medication>, ApiError> {
        self.get("/patient/medications".into()).await
    }

    /// Confirm a dose by the short-code printed on the medication label.
    pub async fn confirm_dose(&self, barcode: &str) -> Result<DoseConfirmation, ApiError> {
        self.send_json(
            Method::Post,
            "/patient/medications/confirm".into(),
            &json!({ "barcode": barcode }),
        )
        .await
    }
}
