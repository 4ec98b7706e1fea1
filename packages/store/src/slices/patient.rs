use crate::models::{DoseConfirmation, Medication};
use crate::slices::ThunkEvent;

/// State of the patient-role app: own medications and the last scan result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientState {
    pub medications: Vec<Medication>,
    pub last_confirmation: Option<DoseConfirmation>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PatientAction {
    FetchMedications(ThunkEvent<Vec<Medication>>),
    ConfirmDose(ThunkEvent<DoseConfirmation>),
}

impl PatientState {
    pub fn reduce(&mut self, action: PatientAction) {
        match action {
            PatientAction::FetchMedications(event) => {
                if let Some(medications) = event.settle(&mut self.loading, &mut self.error) {
                    self.medications = medications;
                }
            }
            PatientAction::ConfirmDose(event) => {
                if matches!(event, ThunkEvent::Pending) {
                    self.last_confirmation = None;
                }
                if let Some(confirmation) = event.settle(&mut self.loading, &mut self.error) {
                    if let Some(m) = self
                        .medications
                        .iter_mut()
                        .find(|m| m.id == confirmation.medication_id)
                    {
                        m.remaining_quantity = confirmation.remaining_quantity;
                    }
                    self.last_confirmation = Some(confirmation);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, MealTiming};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_confirm_dose_updates_remaining() {
        let mut state = PatientState::default();
        state.reduce(PatientAction::FetchMedications(ThunkEvent::Fulfilled(vec![
            Medication {
                id: "m1".into(),
                name: "Aspirin".into(),
                dosage: "81".into(),
                unit: "mg".into(),
                frequency: Frequency::OnceDaily,
                timing: MealTiming::AfterFood,
                quantity: 30,
                remaining_quantity: 12,
                expiry_date: NaiveDate::from_ymd_opt(2027, 5, 1).unwrap(),
                barcode: "MTASP00001".into(),
                patient_id: "p1".into(),
                caregiver_id: "c1".into(),
                instructions: None,
            },
        ])));

        state.reduce(PatientAction::ConfirmDose(ThunkEvent::Pending));
        assert!(state.loading);

        let confirmation = DoseConfirmation {
            medication_id: "m1".into(),
            medication_name: "Aspirin".into(),
            taken_at: Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap(),
            remaining_quantity: 11,
        };
        state.reduce(PatientAction::ConfirmDose(ThunkEvent::Fulfilled(confirmation.clone())));
        assert_eq!(state.medications[0].remaining_quantity, 11);
        assert_eq!(state.last_confirmation, Some(confirmation));
    }

    #[test]
    fn test_rejected_scan_reports_error() {
        let mut state = PatientState::default();
        state.reduce(PatientAction::ConfirmDose(ThunkEvent::Rejected(
            "Barcode does not match any of your medications".into(),
        )));
        assert!(state.last_confirmation.is_none());
        assert!(state.error.is_some());
    }
}
