// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server-rendered chat page.
//!
//! The page is a single form posting to `/chat`. Every interpolated value is
//! HTML-escaped.

use std::fmt::Write;

use locallocal_core::ModelChoice;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>LocalLocal AI Chat</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #1f2933; }
h1 { font-size: 1.6rem; margin-bottom: 0.2rem; }
.subtitle { color: #616e7c; margin-top: 0; }
form { display: grid; gap: 0.75rem; }
textarea { width: 100%; min-height: 6rem; font: inherit; padding: 0.5rem; box-sizing: border-box; }
select, button { font: inherit; padding: 0.4rem 0.8rem; }
.response { white-space: pre-wrap; background: #f5f7fa; border-left: 4px solid #3e7bfa; padding: 1rem; margin-top: 1.5rem; }
.you { color: #616e7c; margin-top: 1.5rem; }
</style>
</head>
<body>
<h1>LocalLocal AI Chat</h1>
<p class="subtitle">Chat with AI models locally (simulated)</p>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Values shown on the page. Everything is absent on first load.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatPage<'a> {
    pub user_input: Option<&'a str>,
    pub response: Option<&'a str>,
    pub model_choice: Option<&'a str>,
}

impl ChatPage<'_> {
    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(HEAD.len() + 2048);
        html.push_str(HEAD);

        html.push_str("<form method=\"post\" action=\"/chat\">\n");
        html.push_str("<label for=\"user_input\">Message</label>\n");
        let _ = writeln!(
            html,
            "<textarea id=\"user_input\" name=\"user_input\" placeholder=\"Ask me anything...\">{}</textarea>",
            escape_html(self.user_input.unwrap_or_default())
        );

        html.push_str("<label for=\"model_choice\">Model</label>\n");
        html.push_str("<select id=\"model_choice\" name=\"model_choice\">\n");
        let selected = self.model_choice.unwrap_or("gemma");
        for choice in ModelChoice::ALL {
            let descriptor = choice.descriptor();
            let marker = if descriptor.id == selected { " selected" } else { "" };
            let _ = writeln!(
                html,
                "<option value=\"{}\"{marker}>{} - {}</option>",
                descriptor.id,
                escape_html(&descriptor.name),
                escape_html(&descriptor.description)
            );
        }
        html.push_str("</select>\n<button type=\"submit\">Send</button>\n</form>\n");

        if let Some(input) = self.user_input.filter(|s| !s.is_empty()) {
            let _ = writeln!(
                html,
                "<p class=\"you\"><strong>You:</strong> {}</p>",
                escape_html(input)
            );
        }
        if let Some(response) = self.response {
            let _ = writeln!(
                html,
                "<div class=\"response\">{}</div>",
                escape_html(response)
            );
        }

        html.push_str(TAIL);
        html
    }
}

/// Escape text for safe inclusion in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn empty_page_has_form_and_no_response() {
        let html = ChatPage::default().render();
        assert!(html.contains("<form method=\"post\" action=\"/chat\">"));
        assert!(html.contains("<option value=\"gemma\" selected>"));
        assert!(!html.contains("class=\"response\""));
    }

    #[test]
    fn populated_page_escapes_values() {
        let html = ChatPage {
            user_input: Some("<script>alert(1)</script>"),
            response: Some("I understand you're asking about '<b>'."),
            model_choice: Some("router"),
        }
        .render();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("asking about &#x27;&lt;b&gt;&#x27;."));
        assert!(html.contains("<option value=\"router\" selected>"));
        assert!(html.contains("<option value=\"gemma\">"));
    }

    #[test]
    fn unknown_model_choice_selects_nothing() {
        let html = ChatPage {
            model_choice: Some("invalid_mode"),
            ..ChatPage::default()
        }
        .render();
        assert!(!html.contains(" selected>"));
    }
}
