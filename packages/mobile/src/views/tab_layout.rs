use dioxus::prelude::*;
use store::UserRole;

use crate::Route;

/// Signed-in shell: bottom tab bar per role. Bounces to login when the session
/// is gone (logout or a 401 anywhere).
#[component]
pub fn TabLayout() -> Element {
    let state = ui::use_app_state();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let auth = state.read().auth.clone();
    let Some(role) = auth.role.filter(|_| auth.is_authenticated) else {
        nav.replace(Route::Login {});
        return rsx! {};
    };
    let unread = state.read().notifications.unread_count;

    let entries: Vec<(Route, &str)> = match role {
        UserRole::Caregiver => vec![
            (Route::Patients {}, "Patients"),
            (Route::Notifications {}, "Alerts"),
            (Route::Profile {}, "Profile"),
            (Route::Settings {}, "Settings"),
        ],
        UserRole::Patient => vec![
            (Route::Scan {}, "Medications"),
            (Route::Notifications {}, "Alerts"),
            (Route::Profile {}, "Profile"),
            (Route::Settings {}, "Settings"),
        ],
    };
    let tabs: Vec<(Route, String, String)> = entries
        .into_iter()
        .map(|(target, label)| {
            let class = if target == route { "tab tab-active" } else { "tab" };
            let text = match target {
                Route::Notifications {} if unread > 0 => format!("{label} ({unread})"),
                _ => label.to_string(),
            };
            (target, class.to_string(), text)
        })
        .collect();

    rsx! {
        div {
            class: "screen",
            Outlet::<Route> {}
        }
        nav {
            class: "tab-bar no-print",
            for (target, class, text) in tabs {
                Link {
                    key: "{text}",
                    class: class,
                    to: target,
                    "{text}"
                }
            }
        }
    }
}
