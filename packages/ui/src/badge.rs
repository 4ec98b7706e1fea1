use dioxus::prelude::*;
use store::models::{Priority, PatientStatus};

#[component]
pub fn StatusBadge(status: PatientStatus) -> Element {
    let (class, text) = match status {
        PatientStatus::Active => ("badge badge-ok", "Active"),
        PatientStatus::Inactive => ("badge badge-muted", "Inactive"),
        PatientStatus::Critical => ("badge badge-danger", "Critical"),
    };
    rsx! { span { class: "{class}", "{text}" } }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> Element {
    let (class, text) = match priority {
        Priority::Low => ("badge badge-muted", "Low"),
        Priority::Medium => ("badge", "Medium"),
        Priority::High => ("badge badge-warn", "High"),
        Priority::Critical => ("badge badge-danger", "Critical"),
    };
    rsx! { span { class: "{class}", "{text}" } }
}
