use tracing::{info, warn};

use super::Navigation;
use crate::address::AddressSelection;
use crate::config::ClientConfig;
use crate::error::{SubmitError, TransportError, ValidationError};
use crate::form::{EntityFormBinder, UpdatePayload};
use crate::model::profile_fields;
use crate::remote::ProfileStore;

pub const SAVED_MESSAGE: &str = "성공적으로 저장되었습니다.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(Navigation),
    /// Focus `field` and show the prompt; the editor stays open.
    Invalid(ValidationError),
    /// Save was not offered yet (profile not loaded) or is already running.
    NotReady,
    Failed(Navigation),
}

pub struct ProfileEditorScreen {
    user_id: String,
    binder: EntityFormBinder,
    config: ClientConfig,
}

impl ProfileEditorScreen {
    pub fn new(config: &ClientConfig, user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            binder: EntityFormBinder::new(&profile_fields()),
            config: config.clone(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn binder(&self) -> &EntityFormBinder {
        &self.binder
    }

    pub fn save_enabled(&self) -> bool {
        self.binder.can_submit()
    }

    /// Fetches the profile and hydrates the form.
    pub fn load<S>(&mut self, store: &S) -> Result<(), Navigation>
    where
        S: ProfileStore + ?Sized,
    {
        match store.profile(&self.user_id) {
            Ok(entity) => {
                self.binder.hydrate(&entity);
                Ok(())
            }
            Err(err) => {
                warn!(user_id = %self.user_id, error = %err, "profile fetch failed");
                Err(Navigation::ErrorScreen(self.config.error_url()))
            }
        }
    }

    /// Typed input. Returns false for fields the editor does not have.
    pub fn edit(&mut self, key: &str, value: impl Into<String>) -> bool {
        self.binder.set_field(key, value)
    }

    pub fn apply_address(&mut self, selection: &AddressSelection) {
        selection.apply_to(&mut self.binder);
    }

    pub fn save<S>(&mut self, store: &S) -> SaveOutcome
    where
        S: ProfileStore + ?Sized,
    {
        let user_id = self.user_id.clone();
        let sink = |payload: &UpdatePayload| -> Result<(), TransportError> {
            store.save_profile(&user_id, payload)
        };
        match self.binder.submit(&sink) {
            Ok(()) => {
                info!(user_id = %self.user_id, "profile saved");
                SaveOutcome::Saved(Navigation::DeepLink(self.config.profile_saved_link()))
            }
            Err(SubmitError::Invalid(err)) => SaveOutcome::Invalid(err),
            Err(SubmitError::NotReady | SubmitError::Busy) => SaveOutcome::NotReady,
            Err(SubmitError::Transport(_)) => {
                SaveOutcome::Failed(Navigation::ErrorScreen(self.config.error_url()))
            }
        }
    }
}
