// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the engine and the HTTP gateway.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which simulated model answers a chat message.
///
/// The string forms (`gemma`, `router`, `both`) are what the chat form posts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ModelChoice {
    /// Direct answer from the conversational model.
    Gemma,
    /// Intent classification only.
    Router,
    /// Router analysis followed by the direct answer.
    Both,
}

impl ModelChoice {
    /// All selectable models, in the order they are advertised.
    pub const ALL: [ModelChoice; 3] = [ModelChoice::Gemma, ModelChoice::Router, ModelChoice::Both];

    /// Fixed descriptor advertised by `GET /api/models`.
    pub fn descriptor(self) -> ModelDescriptor {
        let (name, description) = match self {
            ModelChoice::Gemma => ("Gemma 2-2B", "Google's instruction-tuned model (Simulated)"),
            ModelChoice::Router => ("Arch Router 1.5B", "Katanemo's routing model (Simulated)"),
            ModelChoice::Both => ("Pipeline Mode", "Router + Gemma pipeline (Simulated)"),
        };
        ModelDescriptor {
            id: self.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            status: "ready".to_string(),
        }
    }
}

/// Public description of a selectable model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn model_choice_display_and_parse() {
        for choice in ModelChoice::ALL {
            let s = choice.to_string();
            assert_eq!(ModelChoice::from_str(&s).unwrap(), choice);
        }
        assert_eq!(ModelChoice::Gemma.to_string(), "gemma");
        assert_eq!(ModelChoice::Router.to_string(), "router");
        assert_eq!(ModelChoice::Both.to_string(), "both");
    }

    #[test]
    fn model_choice_rejects_unknown_values() {
        assert!(ModelChoice::from_str("invalid_mode").is_err());
        assert!(ModelChoice::from_str("").is_err());
        // The form posts exact lowercase identifiers.
        assert!(ModelChoice::from_str("Gemma").is_err());
    }

    #[test]
    fn model_choice_serde_is_lowercase() {
        let json = serde_json::to_string(&ModelChoice::Both).unwrap();
        assert_eq!(json, "\"both\"");
        let parsed: ModelChoice = serde_json::from_str("\"router\"").unwrap();
        assert_eq!(parsed, ModelChoice::Router);
    }

    #[test]
    fn descriptors_are_fixed() {
        let ids: Vec<String> = ModelChoice::ALL.iter().map(|c| c.descriptor().id).collect();
        assert_eq!(ids, vec!["gemma", "router", "both"]);

        let gemma = ModelChoice::Gemma.descriptor();
        assert_eq!(gemma.name, "Gemma 2-2B");
        assert_eq!(gemma.status, "ready");

        let both = ModelChoice::Both.descriptor();
        assert_eq!(both.description, "Router + Gemma pipeline (Simulated)");
    }
}
