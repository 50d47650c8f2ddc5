//! Scripted transport for native tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::api::ApiClient;
use super::error::ApiError;
use super::http::{ApiRequest, RawResponse, Transport};
use crate::state::storage::MemoryTokens;

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<RawResponse, ApiError>>>>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_string() }));
        self
    }

    pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Transport(reason.to_owned())));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}

pub type TestApi = ApiClient<ScriptedTransport, MemoryTokens>;

pub fn test_api(transport: &ScriptedTransport, tokens: &MemoryTokens) -> TestApi {
    ApiClient::new(transport.clone(), tokens.clone(), "")
}

pub fn user_json(id: i64, email: &str, is_admin: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": email,
        "full_name": null,
        "is_admin": is_admin,
        "is_active": true,
        "created_at": "2024-05-01T10:00:00",
    })
}

pub fn sweet_json(id: i64, name: &str, quantity: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "category": "Chocolate",
        "price": 2.5,
        "quantity": quantity,
        "description": null,
        "image_url": null,
        "is_available": true,
        "is_in_stock": quantity > 0,
        "created_at": "2024-05-01T10:00:00",
        "updated_at": null,
    })
}
