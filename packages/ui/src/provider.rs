//! App-wide context: the store, the API client and the alert dialog.

use dioxus::prelude::*;
use store::{Action, AppConfig, AppState};

use crate::alert::{Alert, AlertModal};
use crate::client::Client;

/// The root store signal.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// The API client. Provided at launch.
pub fn use_client() -> Client {
    use_context::<Client>()
}

/// The loaded configuration. Provided at launch.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Signal driving the app-wide [`AlertModal`].
pub fn use_alert() -> Signal<Option<Alert>> {
    use_context::<Signal<Option<Alert>>>()
}

/// A `dispatch` closure for the thunks in `api::thunks`.
pub fn dispatcher(mut state: Signal<AppState>) -> impl FnMut(Action) {
    move |action| state.write().dispatch(action)
}

/// Provider component that owns the store and restores the persisted session.
///
/// Children are only rendered once the session has been read back, so route
/// guards never see a signed-out state that is about to change.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let state = use_context_provider(|| Signal::new(AppState::default()));
    let mut alert = use_context_provider(|| Signal::new(Option::<Alert>::None));
    let client = use_client();
    let mut restored = use_signal(|| false);

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let mut dispatch = dispatcher(state);
            api::thunks::restore_session(&client, &mut dispatch).await;
            restored.set(true);
        }
    });

    rsx! {
        if restored() {
            {children}
        } else {
            div { class: "screen-center", p { class: "muted", "Loading..." } }
        }
        if let Some(current) = alert() {
            AlertModal {
                alert: current,
                on_close: move |_| alert.set(None),
            }
        }
    }
}
