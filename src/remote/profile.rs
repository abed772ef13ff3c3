use super::{ProfileStore, RemoteClient};
use crate::error::TransportError;
use crate::form::UpdatePayload;
use crate::model::Entity;

impl RemoteClient {
    pub fn get_profile(&self, user_id: &str) -> Result<Entity, TransportError> {
        let req = self
            .client
            .get(self.url(&format!("/api/v2/users/{}/profile", user_id)));
        self.send_json(req, "get profile")
    }

    /// Form-encoded, matching what the profile endpoint reads.
    pub fn update_profile(
        &self,
        user_id: &str,
        payload: &UpdatePayload,
    ) -> Result<(), TransportError> {
        let req = self
            .client
            .put(self.url(&format!("/api/v2/users/{}/profile", user_id)))
            .form(payload);
        self.send(req, "update profile")?;
        Ok(())
    }
}

impl ProfileStore for RemoteClient {
    fn profile(&self, user_id: &str) -> Result<Entity, TransportError> {
        self.get_profile(user_id)
    }

    fn save_profile(&self, user_id: &str, payload: &UpdatePayload) -> Result<(), TransportError> {
        self.update_profile(user_id, payload)
    }
}
