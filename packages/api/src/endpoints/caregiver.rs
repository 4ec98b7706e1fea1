use serde_json::json;
use store::models::{Medication, MedicationDraft, Patient};
use store::KeyValueStore;

use crate::client::{segment, ApiClient};
use crate::error::ApiError;
use crate::transport::{Method, Transport};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.get("/caregiver/patients".into()).await
    }

    /// Search registered patients not yet under this caregiver's care.
    pub async fn search_patients(&self, query: &str) -> Result<Vec<Patient>, ApiError> {
        self.get_with_query(
            "/caregiver/patients/search".into(),
            vec![("q".to_string(), query.trim().to_string())],
        )
        .await
    }

    pub async fn add_patient(&self, email: &str) -> Result<Patient, ApiError> {
        self.send_json(
            Method::Post,
            "/caregiver/patients".into(),
            &json!({ "email": email.trim() }),
        )
        .await
    }

    pub async fn get_patient(&self, patient_id: &str) -> Result<Patient, ApiError> {
        self.get(format!("/caregiver/patients/{}", segment(patient_id)))
            .await
    }

    pub async fn remove_patient(&self, patient_id: &str) -> Result<(), ApiError> {
        self.send_unit(
            Method::Delete,
            format!("/caregiver/patients/{}", segment(patient_id)),
            None,
        )
        .await
        .map(|_| ())
    }

    pub async fn patient_medications(&self, patient_id: &str) -> Result<Vec<Medication>, ApiError> {
        self.get(format!(
            "/caregiver/patients/{}/medications",
            segment(patient_id)
        ))
        .await
    }

    pub async fn add_medication(
        &self,
        patient_id: &str,
        draft: &MedicationDraft,
    ) -> Result<Medication, ApiError> {
        self.send_json(
            Method::Post,
            format!("/caregiver/patients/{}/medications", segment(patient_id)),
            draft,
        )
        .await
    }

    pub async fn update_medication(
        &self,
        medication_id: &str,
        draft: &MedicationDraft,
    ) -> Result<Medication, ApiError> {
        self.send_json(
            Method::Put,
            format!("/caregiver/medications/{}", segment(medication_id)),
            draft,
        )
        .await
    }

    pub async fn delete_medication(&self, medication_id: &str) -> Result<(), ApiError> {
        self.send_unit(
            Method::Delete,
            format!("/caregiver/medications/{}", segment(medication_id)),
            None,
        )
        .await
        .map(|_| ())
    }
}
