use api::{thunks, Resolution};
use dioxus::prelude::*;
use store::slices::CaregiverAction;
use store::{Notification, Patient, UserRole};
use ui::{Alert, PatientPickerDialog, PriorityBadge};

use crate::Route;

fn received_at(notification: &Notification) -> String {
    notification
        .created_at
        .map(|at| at.format("%b %d, %H:%M").to_string())
        .unwrap_or_default()
}

#[component]
pub fn Notifications() -> Element {
    let state = ui::use_app_state();
    let client = ui::use_client();
    let mut alert = ui::use_alert();
    let nav = use_navigator();
    let mut choices = use_signal(|| Option::<Vec<Patient>>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let mut dispatch = ui::dispatcher(state);
                if let Err(e) = thunks::fetch_notifications(&client, &mut dispatch).await {
                    ui::show_error(alert, &e);
                }
            }
        }
    });

    let (items, unread, loading, role) = {
        let app = state.read();
        (
            app.notifications
                .items()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>(),
            app.notifications.unread_count,
            app.notifications.loading,
            app.auth.role,
        )
    };

    let open = {
        let client = client.clone();
        move |notification: Notification| {
            let client = client.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                if role != Some(UserRole::Caregiver) {
                    if !notification.read {
                        if let Err(e) = thunks::mark_notification_read(
                            &client,
                            &mut dispatch,
                            &notification.id,
                        )
                        .await
                        {
                            ui::show_error(alert, &e);
                        }
                    }
                    return;
                }
                match thunks::open_notification(&client, &mut dispatch, &notification).await {
                    Ok(Resolution::Resolved(id)) => {
                        dispatch(CaregiverAction::SelectPatient(Some(id.clone())).into());
                        nav.push(Route::PatientDetail { id });
                    }
                    Ok(Resolution::NeedsSelection(patients)) => choices.set(Some(patients)),
                    Ok(Resolution::NotFound) => alert.set(Some(Alert::info(
                        notification.title.clone(),
                        "This notification is not linked to one of your patients.",
                    ))),
                    Err(e) => ui::show_error(alert, &e),
                }
            });
        }
    };

    let delete = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            spawn(async move {
                let mut dispatch = ui::dispatcher(state);
                if let Err(e) = thunks::delete_notification(&client, &mut dispatch, &id).await {
                    ui::show_error(alert, &e);
                }
            });
        }
    };

    let mark_all = move |_| {
        let client = client.clone();
        spawn(async move {
            let mut dispatch = ui::dispatcher(state);
            if let Err(e) = thunks::mark_all_read(&client, &mut dispatch).await {
                ui::show_error(alert, &e);
            }
        });
    };

    rsx! {
        div {
            class: "list-header",
            h1 { class: "screen-title", "Notifications" }
            button {
                class: "btn",
                disabled: unread == 0 || loading,
                onclick: mark_all,
                "Mark all read"
            }
        }

        if items.is_empty() {
            p { class: "muted", if loading { "Loading..." } else { "You're all caught up." } }
        }

        ul {
            class: "list",
            for notification in items {
                li {
                    key: "{notification.id}",
                    class: if notification.read { "list-item" } else { "list-item list-item-unread" },
                    div {
                        class: "list-header list-item-button",
                        onclick: {
                            let open = open.clone();
                            let notification = notification.clone();
                            move |_| open(notification.clone())
                        },
                        span { class: "list-title", "{notification.title}" }
                        PriorityBadge { priority: notification.priority }
                    }
                    div { class: "list-subtitle", "{notification.message}" }
                    div {
                        class: "list-header",
                        span { class: "list-subtitle", "{received_at(&notification)}" }
                        button {
                            class: "link",
                            onclick: {
                                let delete = delete.clone();
                                let id = notification.id.clone();
                                move |_| delete(id.clone())
                            },
                            "Delete"
                        }
                    }
                }
            }
        }

        if let Some(patients) = choices() {
            PatientPickerDialog {
                patients: patients,
                on_select: move |id: String| {
                    choices.set(None);
                    let mut dispatch = ui::dispatcher(state);
                    dispatch(CaregiverAction::SelectPatient(Some(id.clone())).into());
                    nav.push(Route::PatientDetail { id });
                },
                on_cancel: move |_| choices.set(None),
            }
        }
    }
}
