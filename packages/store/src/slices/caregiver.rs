use std::collections::HashMap;

use crate::models::{Medication, Patient};
use crate::slices::ThunkEvent;

/// Patients and medications of the signed-in caregiver, normalized by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaregiverState {
    pub patients: HashMap<String, Patient>,
    /// Patient ids in the order the backend listed them.
    pub patient_order: Vec<String>,
    pub medications: HashMap<String, Medication>,
    pub medications_by_patient: HashMap<String, Vec<String>>,
    /// Results of the add-patient search; not yet under care.
    pub search_results: Vec<Patient>,
    pub selected_patient: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CaregiverAction {
    FetchPatients(ThunkEvent<Vec<Patient>>),
    FetchPatient(ThunkEvent<Patient>),
    SearchPatients(ThunkEvent<Vec<Patient>>),
    AddPatient(ThunkEvent<Patient>),
    /// Payload is the removed patient's id.
    RemovePatient(ThunkEvent<String>),
    /// Payload is `(patient_id, medications)`.
    FetchMedications(ThunkEvent<(String, Vec<Medication>)>),
    AddMedication(ThunkEvent<Medication>),
    UpdateMedication(ThunkEvent<Medication>),
    /// Payload is the deleted medication's id.
    DeleteMedication(ThunkEvent<String>),
    SelectPatient(Option<String>),
}

impl CaregiverState {
    /// Patients in list order.
    pub fn patients(&self) -> Vec<&Patient> {
        self.patient_order
            .iter()
            .filter_map(|id| self.patients.get(id))
            .collect()
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.get(id)
    }

    pub fn medications_for(&self, patient_id: &str) -> Vec<&Medication> {
        self.medications_by_patient
            .get(patient_id)
            .map(|ids| ids.iter().filter_map(|id| self.medications.get(id)).collect())
            .unwrap_or_default()
    }

    fn upsert_patient(&mut self, patient: Patient) {
        if !self.patients.contains_key(&patient.id) {
            self.patient_order.push(patient.id.clone());
        }
        self.patients.insert(patient.id.clone(), patient);
    }

    fn upsert_medication(&mut self, medication: Medication) {
        let ids = self
            .medications_by_patient
            .entry(medication.patient_id.clone())
            .or_default();
        if !ids.contains(&medication.id) {
            ids.push(medication.id.clone());
        }
        self.medications.insert(medication.id.clone(), medication);
    }

    fn remove_medication(&mut self, id: &str) {
        if let Some(medication) = self.medications.remove(id) {
            if let Some(ids) = self.medications_by_patient.get_mut(&medication.patient_id) {
                ids.retain(|m| m != id);
            }
        }
    }

    pub fn reduce(&mut self, action: CaregiverAction) {
        match action {
            CaregiverAction::FetchPatients(event) => {
                if let Some(patients) = event.settle(&mut self.loading, &mut self.error) {
                    self.patient_order = patients.iter().map(|p| p.id.clone()).collect();
                    self.patients = patients.into_iter().map(|p| (p.id.clone(), p)).collect();
                    let known = &self.patients;
                    self.medications_by_patient.retain(|id, _| known.contains_key(id));
                    self.medications
                        .retain(|_, m| known.contains_key(&m.patient_id));
                }
            }
            CaregiverAction::FetchPatient(event) => {
                if let Some(patient) = event.settle(&mut self.loading, &mut self.error) {
                    self.selected_patient = Some(patient.id.clone());
                    self.upsert_patient(patient);
                }
            }
            CaregiverAction::SearchPatients(event) => {
                if let Some(results) = event.settle(&mut self.loading, &mut self.error) {
                    self.search_results = results;
                }
            }
            CaregiverAction::AddPatient(event) => {
                if let Some(patient) = event.settle(&mut self.loading, &mut self.error) {
                    self.search_results.clear();
                    self.upsert_patient(patient);
                }
            }
            CaregiverAction::RemovePatient(event) => {
                if let Some(id) = event.settle(&mut self.loading, &mut self.error) {
                    self.patients.remove(&id);
                    self.patient_order.retain(|p| p != &id);
                    for med_id in self.medications_by_patient.remove(&id).unwrap_or_default() {
                        self.medications.remove(&med_id);
                    }
                    if self.selected_patient.as_deref() == Some(id.as_str()) {
                        self.selected_patient = None;
                    }
                }
            }
            CaregiverAction::FetchMedications(event) => {
                if let Some((patient_id, medications)) =
                    event.settle(&mut self.loading, &mut self.error)
                {
                    for old in self
                        .medications_by_patient
                        .remove(&patient_id)
                        .unwrap_or_default()
                    {
                        self.medications.remove(&old);
                    }
                    self.medications_by_patient.insert(patient_id, Vec::new());
                    for medication in medications {
                        self.upsert_medication(medication);
                    }
                }
            }
            CaregiverAction::AddMedication(event) | CaregiverAction::UpdateMedication(event) => {
                if let Some(medication) = event.settle(&mut self.loading, &mut self.error) {
                    self.upsert_medication(medication);
                }
            }
            CaregiverAction::DeleteMedication(event) => {
                if let Some(id) = event.settle(&mut self.loading, &mut self.error) {
                    self.remove_medication(&id);
                }
            }
            CaregiverAction::SelectPatient(id) => self.selected_patient = id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, MealTiming, PatientStatus};
    use chrono::NaiveDate;

    fn patient(id: &str, name: &str) -> Patient {
        Patient {
            id: id.into(),
            name: name.into(),
            email: format!("{id}@example.com"),
            age: Some(70),
            status: PatientStatus::Active,
            last_activity: None,
            alert_count: 0,
            adherence_rate: None,
        }
    }

    fn medication(id: &str, patient_id: &str) -> Medication {
        Medication {
            id: id.into(),
            name: format!("Med {id}"),
            dosage: "10".into(),
            unit: "mg".into(),
            frequency: Frequency::OnceDaily,
            timing: MealTiming::Any,
            quantity: 30,
            remaining_quantity: 30,
            expiry_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            barcode: "MT0000000A".into(),
            patient_id: patient_id.into(),
            caregiver_id: "c1".into(),
            instructions: None,
        }
    }

    fn with_patients() -> CaregiverState {
        let mut state = CaregiverState::default();
        state.reduce(CaregiverAction::FetchPatients(ThunkEvent::Fulfilled(vec![
            patient("p2", "Bob Lee"),
            patient("p1", "Jane Doe"),
        ])));
        state
    }

    #[test]
    fn test_fetch_patients_keeps_backend_order() {
        let state = with_patients();
        let names: Vec<_> = state.patients().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bob Lee", "Jane Doe"]);
        assert!(!state.loading);
    }

    #[test]
    fn test_add_patient_appends_and_clears_search() {
        let mut state = with_patients();
        state.reduce(CaregiverAction::SearchPatients(ThunkEvent::Fulfilled(vec![
            patient("p3", "New Person"),
        ])));
        assert_eq!(state.search_results.len(), 1);

        state.reduce(CaregiverAction::AddPatient(ThunkEvent::Fulfilled(patient(
            "p3",
            "New Person",
        ))));
        assert!(state.search_results.is_empty());
        assert_eq!(state.patient_order, ["p2", "p1", "p3"]);

        // Re-adding replaces without duplicating the order entry
        state.reduce(CaregiverAction::FetchPatient(ThunkEvent::Fulfilled(patient(
            "p3",
            "Renamed Person",
        ))));
        assert_eq!(state.patient_order.len(), 3);
        assert_eq!(state.patient("p3").unwrap().name, "Renamed Person");
        assert_eq!(state.selected_patient.as_deref(), Some("p3"));
    }

    #[test]
    fn test_medications_are_normalized_per_patient() {
        let mut state = with_patients();
        state.reduce(CaregiverAction::FetchMedications(ThunkEvent::Fulfilled((
            "p1".into(),
            vec![medication("m1", "p1"), medication("m2", "p1")],
        ))));
        state.reduce(CaregiverAction::AddMedication(ThunkEvent::Fulfilled(
            medication("m3", "p2"),
        )));
        assert_eq!(state.medications_for("p1").len(), 2);
        assert_eq!(state.medications_for("p2").len(), 1);
        assert!(state.medications_for("nobody").is_empty());

        // Refetch replaces the patient's list
        state.reduce(CaregiverAction::FetchMedications(ThunkEvent::Fulfilled((
            "p1".into(),
            vec![medication("m2", "p1")],
        ))));
        assert_eq!(state.medications_for("p1").len(), 1);
        assert!(!state.medications.contains_key("m1"));

        let mut updated = medication("m2", "p1");
        updated.remaining_quantity = 4;
        state.reduce(CaregiverAction::UpdateMedication(ThunkEvent::Fulfilled(updated)));
        assert_eq!(state.medications_for("p1")[0].remaining_quantity, 4);

        state.reduce(CaregiverAction::DeleteMedication(ThunkEvent::Fulfilled(
            "m2".into(),
        )));
        assert!(state.medications_for("p1").is_empty());
    }

    #[test]
    fn test_remove_patient_drops_their_medications() {
        let mut state = with_patients();
        state.reduce(CaregiverAction::SelectPatient(Some("p1".into())));
        state.reduce(CaregiverAction::AddMedication(ThunkEvent::Fulfilled(
            medication("m1", "p1"),
        )));
        state.reduce(CaregiverAction::RemovePatient(ThunkEvent::Fulfilled("p1".into())));

        assert!(state.patient("p1").is_none());
        assert_eq!(state.patient_order, ["p2"]);
        assert!(state.medications.is_empty());
        assert!(state.selected_patient.is_none());
    }

    #[test]
    fn test_rejected_request_sets_error() {
        let mut state = with_patients();
        state.reduce(CaregiverAction::AddPatient(ThunkEvent::Pending));
        assert!(state.loading);
        state.reduce(CaregiverAction::AddPatient(ThunkEvent::Rejected(
            "Patient not found".into(),
        )));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Patient not found"));
        assert_eq!(state.patients().len(), 2);
    }
}
