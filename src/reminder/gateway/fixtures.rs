//! Deterministic fake gateway for router tests.

use super::{GatewayResult, Payload, ReminderGateway};
use crate::error::BackendError;
use std::time::Duration;

/// A gateway call as the fake saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create {
        title: String,
        message: String,
        duration: Duration,
    },
    Edit {
        id: String,
        title: String,
        message: String,
        duration: Duration,
    },
    Fetch(Vec<String>),
    Delete(Vec<String>),
    HealthCheck(String),
}

/// Records every call and answers with a fixed payload, or with `failure`
/// when one is set.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    pub calls: Vec<Call>,
    pub failure: Option<BackendError>,
    pub healthy: bool,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            healthy: true,
            ..Self::default()
        }
    }

    pub fn failing(error: BackendError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    pub fn last_call(&self) -> Option<&Call> {
        self.calls.last()
    }

    fn answer(&mut self, call: Call, payload: &str) -> GatewayResult<Payload> {
        self.calls.push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(payload.to_string()),
        }
    }
}

impl ReminderGateway for RecordingGateway {
    fn create(
        &mut self,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload> {
        let call = Call::Create {
            title: title.into(),
            message: message.into(),
            duration,
        };
        self.answer(call, "{\"id\":\"1\"}")
    }

    fn edit(
        &mut self,
        id: &str,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload> {
        let call = Call::Edit {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            duration,
        };
        self.answer(call, &format!("{{\"id\":\"{id}\"}}"))
    }

    fn fetch(&mut self, ids: &[String]) -> GatewayResult<Payload> {
        self.answer(Call::Fetch(ids.to_vec()), "[]")
    }

    fn delete(&mut self, ids: &[String]) -> GatewayResult<()> {
        self.answer(Call::Delete(ids.to_vec()), "").map(|_| ())
    }

    fn health_check(&mut self, host: &str) -> bool {
        self.calls.push(Call::HealthCheck(host.to_string()));
        self.healthy
    }

    fn address(&self) -> &str {
        "fake://"
    }
}
