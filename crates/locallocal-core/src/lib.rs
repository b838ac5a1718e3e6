// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for LocalLocal AI Chat.
//!
//! Holds the error type, the model selector and descriptors shared by the
//! engine and the HTTP gateway, and the traits through which latency and
//! randomness are injected into the simulated models.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::LocalLocalError;
pub use traits::{ChoiceSource, Latency};
pub use types::{ModelChoice, ModelDescriptor};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_has_all_variants() {
        let _config = LocalLocalError::Config("test".into());
        let _engine = LocalLocalError::Engine {
            message: "test".into(),
            source: None,
        };
        let _server = LocalLocalError::Server {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _timeout = LocalLocalError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = LocalLocalError::Internal("test".into());
    }

    #[test]
    fn error_messages_carry_detail() {
        let err = LocalLocalError::Engine {
            message: "model exploded".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "engine error: model exploded");

        let err = LocalLocalError::Timeout {
            duration: std::time::Duration::from_millis(1500),
        };
        assert_eq!(err.to_string(), "operation timed out after 1.5s");
    }

    #[test]
    fn traits_are_object_safe() {
        fn _assert_latency(_: &dyn Latency) {}
        fn _assert_choice(_: &dyn ChoiceSource) {}
    }
}
