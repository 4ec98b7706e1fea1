//! # Notification → patient disambiguation
//!
//! Some notifications arrive without a `patientId`; the only hint is the patient's
//! name inside the free-text message. This module pulls the name out of the three fixed
//! phrasings and matches it against the caregiver's patients.
//!
//! Duplicate names are possible and not solved structurally. When several patients
//! share the name the candidates are scored and the best one wins:
//!
//! | Signal | Points |
//! |--------|--------|
//! | last activity within 30 days of the notification | +10 |
//! | status `active` | +5 |
//! | status `critical` | +8 |
//! | SOS notification | + the patient's alert count |
//!
//! Ties go to the earliest candidate in list order. Without a notification timestamp
//! the scores mean little, so the caller is asked to let the user pick.
//! This is a best-effort heuristic.

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Notification, NotificationType, Patient, PatientStatus};

const RECENT_ACTIVITY_DAYS: i64 = 30;
const RECENT_ACTIVITY_SCORE: i64 = 10;
const ACTIVE_SCORE: i64 = 5;
const CRITICAL_SCORE: i64 = 8;

/// Tried in order; the first capture wins.
static NAME_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        // "Emergency alert from Jane Doe. Immediate assistance required."
        // Anchored on the fixed tail so initials like "Mary J. Blige" survive.
        Regex::new(r"(?i)emergency alert from\s+(.+?)[.!]?\s+immediate assistance")
            .expect("emergency regex"),
        Regex::new(r"(?i)emergency alert from\s+(.+?)\s*(?:[.!,]|$)").expect("emergency regex"),
        // "New medication Aspirin added for John Smith"
        Regex::new(r"(?i)new medication\s+.+?\s+added for\s+(.+?)\s*(?:[.!,]|$)")
            .expect("medication regex"),
        // "Patient Bob Lee added to your care"
        Regex::new(r"(?i)patient\s+(.+?)\s+added to your care").expect("patient regex"),
    ]
});

/// Outcome of resolving a notification to one of the caregiver's patients.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Resolved(String),
    /// Several equally plausible patients; the user has to choose.
    NeedsSelection(Vec<Patient>),
    NotFound,
}

/// Extract the patient name mentioned in a notification message.
pub fn extract_patient_name(message: &str) -> Option<String> {
    NAME_PATTERNS.iter().find_map(|re| {
        let name = re.captures(message)?.get(1)?.as_str().trim();
        (!name.is_empty()).then(|| name.to_string())
    })
}

/// Resolve `notification` against the caregiver's `patients`.
pub fn resolve_patient(notification: &Notification, patients: &[Patient]) -> Resolution {
    if let Some(id) = &notification.patient_id {
        return Resolution::Resolved(id.clone());
    }

    let Some(name) = extract_patient_name(&notification.message) else {
        tracing::debug!("No patient name in notification {}", notification.id);
        return Resolution::NotFound;
    };

    let wanted = name.to_lowercase();
    let candidates: Vec<&Patient> = patients
        .iter()
        .filter(|p| p.name.trim().to_lowercase() == wanted)
        .collect();

    match candidates.as_slice() {
        [] => Resolution::NotFound,
        [only] => Resolution::Resolved(only.id.clone()),
        _ => {
            let Some(at) = notification.created_at else {
                return Resolution::NeedsSelection(candidates.into_iter().cloned().collect());
            };
            let mut best = candidates[0];
            let mut best_score = score(best, notification.r#type, at);
            for &candidate in &candidates[1..] {
                let s = score(candidate, notification.r#type, at);
                if s > best_score {
                    best = candidate;
                    best_score = s;
                }
            }
            tracing::info!(
                "Resolved \"{}\" to patient {} among {} candidates (score {})",
                name,
                best.id,
                candidates.len(),
                best_score
            );
            Resolution::Resolved(best.id.clone())
        }
    }
}

fn score(patient: &Patient, kind: NotificationType, at: DateTime<Utc>) -> i64 {
    let mut score = 0;
    if let Some(last) = patient.last_activity {
        let window = Duration::days(RECENT_ACTIVITY_DAYS);
        let gap = at.signed_duration_since(last);
        if gap <= window && gap >= -window {
            score += RECENT_ACTIVITY_SCORE;
        }
    }
    score += match patient.status {
        PatientStatus::Active => ACTIVE_SCORE,
        PatientStatus::Critical => CRITICAL_SCORE,
        PatientStatus::Inactive => 0,
    };
    if kind == NotificationType::Sos {
        score += i64::from(patient.alert_count);
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::TimeZone;

    fn patient(id: &str, name: &str, status: PatientStatus, days_ago: Option<i64>, alerts: u32) -> Patient {
        Patient {
            id: id.into(),
            name: name.into(),
            email: format!("{id}@example.com"),
            age: None,
            status,
            last_activity: days_ago.map(|d| now() - Duration::days(d)),
            alert_count: alerts,
            adherence_rate: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap()
    }

    fn notification(kind: NotificationType, message: &str, at: Option<DateTime<Utc>>) -> Notification {
        Notification {
            id: "n1".into(),
            r#type: kind,
            title: "t".into(),
            message: message.into(),
            priority: Priority::High,
            read: false,
            patient_id: None,
            created_at: at,
        }
    }

    #[test]
    fn test_extract_names() {
        assert_eq!(
            extract_patient_name("Emergency alert from Jane Doe. Immediate assistance required."),
            Some("Jane Doe".to_string())
        );
        assert_eq!(
            extract_patient_name("New medication Aspirin added for John Smith"),
            Some("John Smith".to_string())
        );
        assert_eq!(
            extract_patient_name("Patient Bob Lee added to your care"),
            Some("Bob Lee".to_string())
        );
        assert_eq!(extract_patient_name("Your weekly report is ready"), None);
    }

    #[test]
    fn test_extract_name_with_initial() {
        assert_eq!(
            extract_patient_name("Emergency alert from Mary J. Blige. Immediate assistance required."),
            Some("Mary J. Blige".to_string())
        );
        // Without the usual tail the first period still ends the name
        assert_eq!(
            extract_patient_name("Emergency alert from Jane Doe! Call now."),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_name_with_initial_resolves() {
        let patients = vec![patient("p1", "Mary J. Blige", PatientStatus::Active, None, 0)];
        let n = notification(
            NotificationType::Sos,
            "Emergency alert from Mary J. Blige. Immediate assistance required.",
            Some(now()),
        );
        assert_eq!(resolve_patient(&n, &patients), Resolution::Resolved("p1".into()));
    }

    #[test]
    fn test_explicit_patient_id_wins() {
        let mut n = notification(NotificationType::Sos, "Emergency alert from Jane Doe.", None);
        n.patient_id = Some("p42".into());
        assert_eq!(resolve_patient(&n, &[]), Resolution::Resolved("p42".into()));
    }

    #[test]
    fn test_single_case_insensitive_match() {
        let patients = vec![
            patient("p1", "Bob Lee", PatientStatus::Active, None, 0),
            patient("p2", "Jane Doe", PatientStatus::Active, None, 0),
        ];
        let n = notification(NotificationType::PatientAdded, "Patient BOB LEE added to your care", None);
        assert_eq!(resolve_patient(&n, &patients), Resolution::Resolved("p1".into()));
    }

    #[test]
    fn test_partial_name_is_not_a_match() {
        let patients = vec![patient("p1", "Jane Doe-Smith", PatientStatus::Active, None, 0)];
        let n = notification(NotificationType::Sos, "Emergency alert from Jane Doe.", Some(now()));
        assert_eq!(resolve_patient(&n, &patients), Resolution::NotFound);
    }

    #[test]
    fn test_duplicates_without_timestamp_need_selection() {
        let patients = vec![
            patient("p1", "Jane Doe", PatientStatus::Active, Some(1), 0),
            patient("p2", "Jane Doe", PatientStatus::Critical, Some(1), 3),
        ];
        let n = notification(NotificationType::Sos, "Emergency alert from Jane Doe.", None);
        match resolve_patient(&n, &patients) {
            Resolution::NeedsSelection(c) => {
                assert_eq!(c.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), ["p1", "p2"]);
            }
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicates_scored() {
        let patients = vec![
            // 5 (active), stale
            patient("p1", "Jane Doe", PatientStatus::Active, Some(90), 0),
            // 10 + 0 (inactive), recent
            patient("p2", "Jane Doe", PatientStatus::Inactive, Some(3), 0),
            // 8 (critical) + 4 alerts on SOS, stale
            patient("p3", "Jane Doe", PatientStatus::Critical, None, 4),
        ];
        let sos = notification(NotificationType::Sos, "Emergency alert from Jane Doe.", Some(now()));
        assert_eq!(resolve_patient(&sos, &patients), Resolution::Resolved("p3".into()));

        // Alert count only counts for SOS
        let added = notification(
            NotificationType::MedicationAdded,
            "New medication Aspirin added for Jane Doe",
            Some(now()),
        );
        assert_eq!(resolve_patient(&added, &patients), Resolution::Resolved("p2".into()));
    }

    #[test]
    fn test_ties_go_to_first_found() {
        let patients = vec![
            patient("p1", "Jane Doe", PatientStatus::Active, Some(2), 0),
            patient("p2", "jane doe", PatientStatus::Active, Some(5), 0),
        ];
        let n = notification(NotificationType::General, "Emergency alert from Jane Doe.", Some(now()));
        assert_eq!(resolve_patient(&n, &patients), Resolution::Resolved("p1".into()));
    }
}
