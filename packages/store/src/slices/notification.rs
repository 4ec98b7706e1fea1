use std::collections::HashMap;

use crate::models::Notification;
use crate::slices::ThunkEvent;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    pub by_id: HashMap<String, Notification>,
    /// Ids newest first, as listed by the backend.
    pub order: Vec<String>,
    pub unread_count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationAction {
    Fetch(ThunkEvent<Vec<Notification>>),
    MarkRead(ThunkEvent<String>),
    MarkAllRead(ThunkEvent<()>),
    Delete(ThunkEvent<String>),
}

impl NotificationState {
    pub fn items(&self) -> Vec<&Notification> {
        self.order.iter().filter_map(|id| self.by_id.get(id)).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.by_id.get(id)
    }

    fn recount(&mut self) {
        self.unread_count = self.by_id.values().filter(|n| !n.read).count();
    }

    pub fn reduce(&mut self, action: NotificationAction) {
        match action {
            NotificationAction::Fetch(event) => {
                if let Some(items) = event.settle(&mut self.loading, &mut self.error) {
                    self.order = items.iter().map(|n| n.id.clone()).collect();
                    self.by_id = items.into_iter().map(|n| (n.id.clone(), n)).collect();
                }
            }
            NotificationAction::MarkRead(event) => {
                if let Some(id) = event.settle(&mut self.loading, &mut self.error) {
                    if let Some(n) = self.by_id.get_mut(&id) {
                        n.read = true;
                    }
                }
            }
            NotificationAction::MarkAllRead(event) => {
                if event.settle(&mut self.loading, &mut self.error).is_some() {
                    self.by_id.values_mut().for_each(|n| n.read = true);
                }
            }
            NotificationAction::Delete(event) => {
                if let Some(id) = event.settle(&mut self.loading, &mut self.error) {
                    self.by_id.remove(&id);
                    self.order.retain(|n| n != &id);
                }
            }
        }
        self.recount();
    }
}
