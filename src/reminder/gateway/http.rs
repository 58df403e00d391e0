//! Placeholder HTTP transport.
//!
//! The gateway maps every operation onto the REST request it would send
//! (`POST /reminders`, `PATCH /reminders/{id}`, `GET /reminders`,
//! `DELETE /reminders`, `GET /health`) and answers with a stub payload that
//! describes that request. Nothing goes over the wire.

use super::{GatewayResult, Payload, ReminderGateway};
use crate::error::BackendError;
use serde::Serialize;
use std::time::Duration;

/// HTTP method of a planned request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A request the gateway would send to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRequest {
    pub method: Method,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct ReminderBody<'a> {
    title: &'a str,
    message: &'a str,
    /// Seconds until the reminder fires
    duration: u64,
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    backend_uri: String,
}

impl HttpGateway {
    pub fn new(uri: impl Into<String>) -> Self {
        let mut backend_uri = uri.into();
        while backend_uri.ends_with('/') {
            backend_uri.pop();
        }
        Self { backend_uri }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.backend_uri, path)
    }

    fn ensure_reachable(&self) -> GatewayResult<()> {
        if is_http_uri(&self.backend_uri) {
            Ok(())
        } else {
            Err(BackendError::Transport(format!(
                "unsupported backend address '{}'",
                self.backend_uri
            )))
        }
    }

    fn reminder_body(
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<serde_json::Value> {
        serde_json::to_value(ReminderBody {
            title,
            message,
            duration: duration.as_secs(),
        })
        .map_err(|e| BackendError::Other(e.to_string()))
    }

    pub fn plan_create(
        &self,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<PlannedRequest> {
        Ok(PlannedRequest {
            method: Method::Post,
            url: self.url("/reminders"),
            body: Some(Self::reminder_body(title, message, duration)?),
        })
    }

    pub fn plan_edit(
        &self,
        id: &str,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<PlannedRequest> {
        Ok(PlannedRequest {
            method: Method::Patch,
            url: self.url(&format!("/reminders/{id}")),
            body: Some(Self::reminder_body(title, message, duration)?),
        })
    }

    pub fn plan_fetch(&self, ids: &[String]) -> PlannedRequest {
        let url = if ids.is_empty() {
            self.url("/reminders")
        } else {
            self.url(&format!("/reminders?ids={}", ids.join(",")))
        };
        PlannedRequest {
            method: Method::Get,
            url,
            body: None,
        }
    }

    pub fn plan_delete(&self, ids: &[String]) -> PlannedRequest {
        PlannedRequest {
            method: Method::Delete,
            url: self.url("/reminders"),
            body: Some(serde_json::json!({ "ids": ids })),
        }
    }

    fn stub_response(&self, request: &PlannedRequest) -> GatewayResult<Payload> {
        log::debug!("{:?} {}", request.method, request.url);
        serde_json::to_string_pretty(request).map_err(|e| BackendError::Other(e.to_string()))
    }
}

fn is_http_uri(uri: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| uri.len() > scheme.len() && uri.starts_with(scheme))
}

impl ReminderGateway for HttpGateway {
    fn create(
        &mut self,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload> {
        self.ensure_reachable()?;
        let request = self.plan_create(title, message, duration)?;
        self.stub_response(&request)
    }

    fn edit(
        &mut self,
        id: &str,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload> {
        self.ensure_reachable()?;
        let request = self.plan_edit(id, title, message, duration)?;
        self.stub_response(&request)
    }

    fn fetch(&mut self, ids: &[String]) -> GatewayResult<Payload> {
        self.ensure_reachable()?;
        let request = self.plan_fetch(ids);
        self.stub_response(&request)
    }

    fn delete(&mut self, ids: &[String]) -> GatewayResult<()> {
        self.ensure_reachable()?;
        let request = self.plan_delete(ids);
        self.stub_response(&request).map(|_| ())
    }

    fn health_check(&mut self, host: &str) -> bool {
        let healthy = is_http_uri(host);
        log::debug!("GET {}/health -> {}", host.trim_end_matches('/'), healthy);
        healthy
    }

    fn address(&self) -> &str {
        &self.backend_uri
    }
}
