use dioxus::prelude::*;
use store::NotificationSettings;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local notification preferences; push delivery itself is handled by the OS.
#[component]
pub fn Settings() -> Element {
    let client = ui::use_client();
    let config = ui::use_config();
    let mut settings = use_signal(NotificationSettings::default);
    let mut loaded = use_signal(|| false);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                settings.set(client.session().settings().await);
                loaded.set(true);
            }
        }
    });

    // Persist every change once the stored values are in
    use_effect(move || {
        let snapshot = settings();
        if !loaded() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            client.session().save_settings(&snapshot).await;
            tracing::debug!("Saved notification settings: {:?}", snapshot);
        });
    });

    let current = settings();

    rsx! {
        h1 { class: "screen-title", "Settings" }

        div {
            class: "card",
            h2 { class: "section-title", "Notifications" }
            label {
                class: "toggle",
                input {
                    r#type: "checkbox",
                    checked: current.push_enabled,
                    onchange: move |_| settings.with_mut(|s| s.push_enabled = !s.push_enabled),
                }
                "Push notifications"
            }
            label {
                class: "toggle",
                input {
                    r#type: "checkbox",
                    checked: current.email_enabled,
                    onchange: move |_| settings.with_mut(|s| s.email_enabled = !s.email_enabled),
                }
                "Email notifications"
            }
            label {
                class: "toggle",
                input {
                    r#type: "checkbox",
                    checked: current.medication_reminders,
                    onchange: move |_| {
                        settings.with_mut(|s| s.medication_reminders = !s.medication_reminders)
                    },
                }
                "Medication reminders"
            }
            label {
                class: "toggle",
                input {
                    r#type: "checkbox",
                    checked: current.emergency_alerts,
                    onchange: move |_| settings.with_mut(|s| s.emergency_alerts = !s.emergency_alerts),
                }
                "Emergency (SOS) alerts"
            }
        }

        div {
            class: "card",
            h2 { class: "section-title", "About" }
            p { class: "list-subtitle", "Server: {config.api.base_url}" }
            p { class: "list-subtitle", "Version {VERSION}" }
        }
    }
}
