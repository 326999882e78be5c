use dioxus::prelude::*;
use tracing::{debug, error};

use crate::models::{DemoField, DemoFormFields};
use crate::services::demo_form::{DemoFormController, SubmitError};
use crate::state::{spawn_detached, use_app_actions, AppActions};
use crate::storage::default_store;
use crate::API_CLIENT;

#[derive(Clone, Copy)]
pub struct DemoFormHandle {
    pub fields: Signal<DemoFormFields>,
    pub submitting: Signal<bool>,
    actions: AppActions,
}

/// Form state seeded from the stored draft.
pub fn use_demo_form() -> DemoFormHandle {
    let actions = use_app_actions();
    let fields = use_signal(|| {
        let store = default_store();
        let backend = API_CLIENT.get().cloned();
        DemoFormController::new(&store, &backend).load_draft()
    });
    let submitting = use_signal(|| false);

    DemoFormHandle {
        fields,
        submitting,
        actions,
    }
}

impl DemoFormHandle {
    pub fn set_field(&self, field: DemoField, value: String) {
        let mut fields = self.fields;
        fields.write().set(field, value);
    }

    pub fn submit(&self) {
        let snapshot = self.fields.read().clone();
        let actions = self.actions;

        if !snapshot.has_required() {
            actions.notify_error(SubmitError::MissingRequired.notice());
            return;
        }

        let mut fields = self.fields;
        let mut submitting = self.submitting;
        submitting.set(true);
        let search = current_search();

        // Outlives the form; its signals may be gone by the time this resolves.
        spawn_detached(async move {
            let store = default_store();
            let backend = API_CLIENT.get().cloned();
            let controller = DemoFormController::new(&store, &backend);

            match controller.submit(&snapshot, &search).await {
                Ok(outcome) => {
                    debug!(submitted_at = %outcome.request().submitted_at, "demo form submitted");
                    actions.notify_success(outcome.notice());
                    if let Ok(mut current) = fields.try_write() {
                        *current = DemoFormFields::default();
                    }
                }
                Err(err) => {
                    error!("demo form submission failed: {err}");
                    actions.notify_error(err.notice());
                }
            }

            if let Ok(mut flag) = submitting.try_write() {
                *flag = false;
            }
        });
    }
}

/// Query string of the page at the moment of the call.
fn current_search() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}
