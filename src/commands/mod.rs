//! Host Command Wrappers
//!
//! Frontend bindings to the host resource's NUI callbacks, organized by
//! concern. Every call goes through [`HostBridge`] so the refresh discipline
//! can be exercised without a browser.

mod nui;
mod stash;

use async_trait::async_trait;
use leptos_nui::NuiError;
use serde_json::Value;
use std::fmt;

// Re-export all public items
pub use nui::*;
pub use stash::*;

/// NUI callbacks registered by the host resource
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Close,
    GetPlayerCoords,
    CreateStash,
    UpdateStash,
    DeleteStash,
    TeleportToStash,
    ViewStash,
    GetStashes,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::GetPlayerCoords => "getPlayerCoords",
            Self::CreateStash => "createStash",
            Self::UpdateStash => "updateStash",
            Self::DeleteStash => "deleteStash",
            Self::TeleportToStash => "teleportToStash",
            Self::ViewStash => "viewStash",
            Self::GetStashes => "getStashes",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a host call did not produce the expected result
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Transport(#[from] NuiError),
    #[error("could not encode {endpoint} request: {reason}")]
    Encode { endpoint: Endpoint, reason: String },
    #[error("unexpected {endpoint} response: {reason}")]
    Decode { endpoint: Endpoint, reason: String },
    #[error("{endpoint} was rejected by the host")]
    Rejected { endpoint: Endpoint },
}

/// Request/response channel to the embedding host
#[async_trait(?Send)]
pub trait HostBridge {
    /// Call `endpoint` and parse its JSON answer
    async fn request(&self, endpoint: Endpoint, body: Value) -> Result<Value, BridgeError>;

    /// Call `endpoint` without caring about the answer
    async fn notify(&self, endpoint: Endpoint, body: Value) -> Result<(), BridgeError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records calls and answers `request`s from a queue
    #[derive(Default)]
    pub(crate) struct MockBridge {
        pub calls: RefCell<Vec<(Endpoint, Value)>>,
        responses: RefCell<VecDeque<Result<Value, BridgeError>>>,
    }

    impl MockBridge {
        pub fn respond(self, response: Result<Value, BridgeError>) -> Self {
            self.responses.borrow_mut().push_back(response);
            self
        }

        pub fn endpoints(&self) -> Vec<Endpoint> {
            self.calls.borrow().iter().map(|(e, _)| *e).collect()
        }

        pub fn body(&self, index: usize) -> Value {
            self.calls.borrow()[index].1.clone()
        }
    }

    #[async_trait(?Send)]
    impl HostBridge for MockBridge {
        async fn request(&self, endpoint: Endpoint, body: Value) -> Result<Value, BridgeError> {
            self.calls.borrow_mut().push((endpoint, body));
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(NuiError::Fetch("no response queued".into()).into()))
        }

        async fn notify(&self, endpoint: Endpoint, body: Value) -> Result<(), BridgeError> {
            self.calls.borrow_mut().push((endpoint, body));
            Ok(())
        }
    }
}
