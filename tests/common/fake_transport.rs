//! In-memory transport and confirmation doubles for manager tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use portfolio_cms::http::{ApiError, Transport};
use portfolio_cms::interact::Confirm;
use serde_json::Value;
use std::collections::VecDeque;

/// A request the manager sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// A scripted answer. Not `ApiError` directly because it is not `Clone`.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
}

/// Records calls and replays queued replies; an empty queue answers `null`.
#[derive(Default)]
pub struct FakeTransport {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_json(&self, value: Value) -> &Self {
        self.replies.lock().push_back(Reply::Json(value));
        self
    }

    pub fn reply_status(&self, status: u16) -> &Self {
        self.replies.lock().push_back(Reply::Status(status));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.method == method).count()
    }

    fn answer(&self, method: &'static str, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.calls.lock().push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        match self.replies.lock().pop_front() {
            None => Ok(Value::Null),
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Status(status)) => Err(ApiError::StatusError {
                url: format!("http://fake/{}", path),
                status,
                body: String::new(),
            }),
        }
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.answer("GET", path, None)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.answer("POST", path, Some(body))
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.answer("PATCH", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.answer("DELETE", path, None)
    }
}

/// Confirmation double with a fixed answer that remembers prompts.
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn yes() -> Self {
        Self {
            answer: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().push(prompt.to_string());
        self.answer
    }
}
