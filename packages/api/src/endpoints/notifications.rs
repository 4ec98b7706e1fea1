use store::models::Notification;
use store::KeyValueStore;

use crate::client::{segment, ApiClient};
use crate::error::ApiError;
use crate::transport::{Method, Transport};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("/notifications".into()).await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(
            Method::Put,
            format!("/notifications/{}/read", segment(id)),
            None,
        )
        .await
        .map(|_| ())
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.send_unit(Method::Put, "/notifications/read-all".into(), None)
            .await
            .map(|_| ())
    }

    pub async fn delete_notification(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(
            Method::Delete,
            format!("/notifications/{}", segment(id)),
            None,
        )
        .await
        .map(|_| ())
    }
}
