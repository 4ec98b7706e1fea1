//! Canned transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use store::{MemoryStore, SessionStorage, User, UserRole};

use crate::client::ApiClient;
use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

type Reply = Result<HttpResponse, TransportError>;

/// Replays queued responses in order and records every request it receives.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, body.to_string().into_bytes());
    }

    pub(crate) fn push_raw(&self, status: u16, body: Vec<u8>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body }));
    }

    pub(crate) fn push_failure(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no canned reply for {:?} {}", request.method, request.path))
    }
}

pub(crate) fn client(fake: &FakeTransport) -> ApiClient<FakeTransport, MemoryStore> {
    ApiClient::new(fake.clone(), SessionStorage::new(MemoryStore::new()))
}

pub(crate) fn caregiver() -> User {
    User {
        id: "c1".into(),
        email: "carol@example.com".into(),
        name: "Carol Giver".into(),
        role: UserRole::Caregiver,
        is_verified: true,
        phone: None,
    }
}
