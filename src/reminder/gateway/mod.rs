//! # Backend Gateway
//!
//! The [`ReminderGateway`] trait is everything the router knows about the
//! backend. Each reminder operation is one method returning either a payload
//! to show the user or a [`BackendError`].
//!
//! ## Implementations
//!
//! - [`http::HttpGateway`]: placeholder HTTP transport. It works out the REST
//!   request each operation maps to and answers with a stub payload; no
//!   sockets are opened.
//! - [`memory::InMemoryGateway`]: deterministic in-process store, selected with
//!   the `memory://` backend address and used throughout the tests.
//! - `fixtures::RecordingGateway`: call-counting fake that can be told to fail
//!   (tests and the `test_utils` feature only).
//!
//! ## Choosing an implementation
//!
//! [`Backend`] wraps the production choices behind one type so the CLI can
//! pick at runtime from the configured address.

use crate::error::BackendError;
use std::time::Duration;

pub mod http;
pub mod memory;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

/// Body returned by a successful backend call, shown to the user verbatim.
pub type Payload = String;

pub type GatewayResult<T> = std::result::Result<T, BackendError>;

pub const MEMORY_SCHEME: &str = "memory://";

/// Access to the remote reminder service.
pub trait ReminderGateway {
    /// Create a reminder
    fn create(
        &mut self,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload>;

    /// Replace title, message and duration of an existing reminder
    fn edit(
        &mut self,
        id: &str,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload>;

    /// Fetch the given reminders, or every reminder when `ids` is empty
    fn fetch(&mut self, ids: &[String]) -> GatewayResult<Payload>;

    /// Delete the given reminders
    fn delete(&mut self, ids: &[String]) -> GatewayResult<()>;

    /// Whether the service at `host` is up
    fn health_check(&mut self, host: &str) -> bool;

    /// Connection target this gateway talks to
    fn address(&self) -> &str;
}

/// The gateways the binary can run against.
pub enum Backend {
    Http(http::HttpGateway),
    Memory(memory::InMemoryGateway),
}

impl Backend {
    /// Picks the gateway for a backend address: `memory://` selects the
    /// in-memory store, anything else is treated as an HTTP base URI.
    pub fn for_address(address: &str) -> Self {
        if address.starts_with(MEMORY_SCHEME) {
            Backend::Memory(memory::InMemoryGateway::with_address(address))
        } else {
            Backend::Http(http::HttpGateway::new(address))
        }
    }

    fn inner(&mut self) -> &mut dyn ReminderGateway {
        match self {
            Backend::Http(g) => g,
            Backend::Memory(g) => g,
        }
    }
}

impl ReminderGateway for Backend {
    fn create(
        &mut self,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload> {
        self.inner().create(title, message, duration)
    }

    fn edit(
        &mut self,
        id: &str,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload> {
        self.inner().edit(id, title, message, duration)
    }

    fn fetch(&mut self, ids: &[String]) -> GatewayResult<Payload> {
        self.inner().fetch(ids)
    }

    fn delete(&mut self, ids: &[String]) -> GatewayResult<()> {
        self.inner().delete(ids)
    }

    fn health_check(&mut self, host: &str) -> bool {
        self.inner().health_check(host)
    }

    fn address(&self) -> &str {
        match self {
            Backend::Http(g) => g.address(),
            Backend::Memory(g) => g.address(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_scheme_selects_in_memory_gateway() {
        let backend = Backend::for_address("memory://scratch");
        assert!(matches!(backend, Backend::Memory(_)));
        assert_eq!(backend.address(), "memory://scratch");
    }

    #[test]
    fn other_addresses_select_http_gateway() {
        let backend = Backend::for_address("http://localhost:3000");
        assert!(matches!(backend, Backend::Http(_)));
        assert_eq!(backend.address(), "http://localhost:3000");
    }
}
