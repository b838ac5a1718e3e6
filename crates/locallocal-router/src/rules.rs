// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Building blocks of the ordered rule tables.
//!
//! A rule pairs a [`Predicate`] over normalized text with something that
//! produces the reply. Tables are scanned in order and the first match wins.

use locallocal_core::ChoiceSource;

/// Lower-case and trim a message before rule evaluation.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Substring test over normalized text.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// Matches every input. Terminates a table.
    Always,
    /// At least one phrase occurs in the text.
    ContainsAny(&'static [&'static str]),
    /// Every nested predicate matches.
    AllOf(&'static [Predicate]),
}

impl Predicate {
    /// Evaluate against text already passed through [`normalize`].
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::ContainsAny(phrases) => phrases.iter().any(|p| normalized.contains(p)),
            Predicate::AllOf(parts) => parts.iter().all(|p| p.matches(normalized)),
        }
    }
}

/// How a matched rule produces its reply.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// A canned answer.
    Fixed(&'static str),
    /// A template filled with the original, un-normalized user text.
    Echo(fn(&str) -> String),
    /// `prefix` followed by one entry of `pool`, drawn through a [`ChoiceSource`].
    Pick {
        prefix: &'static str,
        pool: &'static [&'static str],
    },
}

impl Reply {
    /// Produce the reply text for `original` input.
    pub fn render(&self, original: &str, choice: &dyn ChoiceSource) -> String {
        match self {
            Reply::Fixed(text) => (*text).to_string(),
            Reply::Echo(template) => template(original),
            Reply::Pick { prefix, pool } => {
                // Out-of-range picks are clamped rather than trusted.
                let index = choice.pick(pool.len()).min(pool.len().saturating_sub(1));
                format!("{prefix}{}", pool.get(index).copied().unwrap_or_default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl ChoiceSource for Fixed {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Hello THERE \n"), "hello there");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn contains_any_is_substring_based() {
        let p = Predicate::ContainsAny(&["dna", "speed of light"]);
        assert!(p.matches("what is dna?"));
        assert!(p.matches("the speed of light"));
        assert!(!p.matches("speed of sound"));
    }

    #[test]
    fn all_of_requires_every_part() {
        let p = Predicate::AllOf(&[
            Predicate::ContainsAny(&["capital"]),
            Predicate::ContainsAny(&["usa", "america"]),
        ]);
        assert!(p.matches("capital of america"));
        assert!(!p.matches("capital of france"));
        assert!(!p.matches("america"));
    }

    #[test]
    fn always_matches_empty_text() {
        assert!(Predicate::Always.matches(""));
    }

    #[test]
    fn echo_receives_original_text() {
        let reply = Reply::Echo(|s| format!("<{s}>"));
        assert_eq!(reply.render("  MiXeD ", &Fixed(0)), "<  MiXeD >");
    }

    #[test]
    fn pick_uses_choice_source_and_clamps() {
        let reply = Reply::Pick {
            prefix: "> ",
            pool: &["a", "b", "c"],
        };
        assert_eq!(reply.render("", &Fixed(1)), "> b");
        assert_eq!(reply.render("", &Fixed(99)), "> c");
    }
}
