// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based intent classification for the simulated routing model.
//!
//! Classifies messages into one of eight fixed categories with zero-cost
//! substring rules. Confidence is a per-category constant, not a score.

use serde::Serialize;
use strum::Display;

use crate::rules::{normalize, Predicate};

/// Intent categories reported by the routing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteCategory {
    TechnicalProgramming,
    ScientificMathematical,
    FactualKnowledge,
    CreativeContent,
    RealtimeDataRequest,
    SocialGreeting,
    MetaAssistance,
    GeneralInquiry,
}

impl RouteCategory {
    /// Fixed confidence percentage reported for this category.
    pub fn confidence(self) -> u8 {
        match self {
            RouteCategory::TechnicalProgramming => 94,
            RouteCategory::ScientificMathematical => 91,
            RouteCategory::FactualKnowledge => 89,
            RouteCategory::CreativeContent => 86,
            RouteCategory::RealtimeDataRequest => 93,
            RouteCategory::SocialGreeting => 95,
            RouteCategory::MetaAssistance => 92,
            RouteCategory::GeneralInquiry => 76,
        }
    }

    /// Why a message lands in this category.
    pub fn reasoning(self) -> &'static str {
        match self {
            RouteCategory::TechnicalProgramming => "Contains programming-related keywords",
            RouteCategory::ScientificMathematical => {
                "Detected scientific or mathematical concepts"
            }
            RouteCategory::FactualKnowledge => "Requesting specific factual information",
            RouteCategory::CreativeContent => "Request for creative or entertainment content",
            RouteCategory::RealtimeDataRequest => "Requires current/live information",
            RouteCategory::SocialGreeting => "Standard conversational greeting detected",
            RouteCategory::MetaAssistance => "User requesting information about AI capabilities",
            RouteCategory::GeneralInquiry => {
                "Broad topic that doesn't match specific categories"
            }
        }
    }

    /// Downstream component that would take the message.
    pub fn recommended_handler(self) -> &'static str {
        match self {
            RouteCategory::TechnicalProgramming => {
                "Code Assistant with syntax highlighting and debugging capabilities"
            }
            RouteCategory::ScientificMathematical => {
                "STEM Knowledge Base with calculation support"
            }
            RouteCategory::FactualKnowledge => "Encyclopedia/Facts Database",
            RouteCategory::CreativeContent => "Creative Writing Engine",
            RouteCategory::RealtimeDataRequest => "External API Service (Weather/Time)",
            RouteCategory::SocialGreeting => "Conversational AI with personality",
            RouteCategory::MetaAssistance => "Help System with feature documentation",
            RouteCategory::GeneralInquiry => "General Knowledge Assistant",
        }
    }

    /// Shape of the answer that component would give.
    pub fn expected_response_type(self) -> &'static str {
        match self {
            RouteCategory::TechnicalProgramming => "Technical explanation with examples",
            RouteCategory::ScientificMathematical => "Factual explanation with formulas/data",
            RouteCategory::FactualKnowledge => "Precise factual answer with context",
            RouteCategory::CreativeContent => "Original creative content",
            RouteCategory::RealtimeDataRequest => {
                "Current data with disclaimer about API access"
            }
            RouteCategory::SocialGreeting => "Friendly greeting with capability overview",
            RouteCategory::MetaAssistance => "Comprehensive capability list with examples",
            RouteCategory::GeneralInquiry => {
                "Contextual response with request for clarification if needed"
            }
        }
    }
}

/// Ordered category table. Messages matching none fall into
/// [`RouteCategory::GeneralInquiry`].
pub static ROUTE_RULES: &[(RouteCategory, Predicate)] = &[
    (
        RouteCategory::TechnicalProgramming,
        Predicate::ContainsAny(&[
            "code",
            "programming",
            "python",
            "javascript",
            "html",
            "css",
            "algorithm",
        ]),
    ),
    (
        RouteCategory::ScientificMathematical,
        Predicate::ContainsAny(&[
            "math",
            "calculate",
            "equation",
            "formula",
            "science",
            "physics",
            "chemistry",
            "biology",
        ]),
    ),
    (
        RouteCategory::FactualKnowledge,
        Predicate::ContainsAny(&[
            "states",
            "country",
            "capital",
            "population",
            "geography",
            "history",
        ]),
    ),
    (
        RouteCategory::CreativeContent,
        Predicate::ContainsAny(&["joke", "story", "creative", "write", "poem", "funny"]),
    ),
    (
        RouteCategory::RealtimeDataRequest,
        Predicate::ContainsAny(&["weather", "time", "current", "now", "today", "temperature"]),
    ),
    (
        RouteCategory::SocialGreeting,
        Predicate::ContainsAny(&["hello", "hi", "hey", "good morning", "how are you"]),
    ),
    (
        RouteCategory::MetaAssistance,
        Predicate::ContainsAny(&["help", "what can you do", "assist", "support"]),
    ),
];

/// Result of classifying a message's intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingAnalysis {
    pub category: RouteCategory,
    /// Confidence as an integer percentage.
    pub confidence: u8,
    pub reasoning: &'static str,
    pub recommended_handler: &'static str,
    pub expected_response_type: &'static str,
}

impl RoutingAnalysis {
    /// Analysis carrying the fixed values of `category`.
    pub fn for_category(category: RouteCategory) -> Self {
        Self {
            category,
            confidence: category.confidence(),
            reasoning: category.reasoning(),
            recommended_handler: category.recommended_handler(),
            expected_response_type: category.expected_response_type(),
        }
    }
}

impl std::fmt::Display for RoutingAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ROUTING ANALYSIS: Query classified as {}", self.category)?;
        writeln!(f, "Confidence: {}%", self.confidence)?;
        writeln!(f, "Reasoning: {}", self.reasoning)?;
        writeln!(f, "Recommended Handler: {}", self.recommended_handler)?;
        write!(f, "Expected Response Type: {}", self.expected_response_type)
    }
}

/// Classify a message. Total: unmatched input is a general inquiry.
pub fn classify(text: &str) -> RoutingAnalysis {
    let normalized = normalize(text);
    let category = ROUTE_RULES
        .iter()
        .find(|(_, predicate)| predicate.matches(&normalized))
        .map(|(category, _)| *category)
        .unwrap_or(RouteCategory::GeneralInquiry);
    RoutingAnalysis::for_category(category)
}
