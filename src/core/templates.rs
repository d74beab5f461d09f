//! Template system for consistent card output.
//!
//! Every line the viewer prints comes from one of the [`TEMPLATES`] strings.
//! Placeholders (`{name}`) are substituted in a single pass and each one is
//! colored according to what it holds, so templates themselves stay plain
//! text.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output lines
//! - [`TemplateContext`]: Values available to placeholders
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Rendering with colors
//! - [`render_template_plain`]: Plain text rendering for testing
//! - [`strip_ansi_codes`]: Utility for removing color codes
//!
//! # Template Categories
//! - **Header**: Position within the collection
//! - **Card**: Title, level badge, example sentence and translation
//! - **Details**: Labelled metadata lines and the full example list
//! - **States**: Load failure, empty collection, render fault

use crate::core::{colors::get_level_badge, level::Level};
use colored::*;
use std::fmt::Write;

/// Template definitions for all output formatting
pub struct Templates {
    // Header
    pub header_position: &'static str,

    // Card
    pub card_title: &'static str,
    pub card_sentence: &'static str,
    pub card_translation: &'static str,
    pub card_no_examples: &'static str,
    pub details_hint_show: &'static str,
    pub details_hint_hide: &'static str,

    // Details
    pub detail_line: &'static str,
    pub section_examples: &'static str,
    pub example_item: &'static str,
    pub example_item_translation: &'static str,

    // States
    pub state_load_failed: &'static str,
    pub state_empty: &'static str,
    pub state_render_fault: &'static str,
    pub state_retry_hint: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    header_position: "Grammar Point {position} / {total}",
    card_title: "{name}  {level}",
    card_sentence: "   {sentence}",
    card_translation: "   {translation}",
    card_no_examples: "   (no examples)",
    details_hint_show: "   Show Details",
    details_hint_hide: "   Hide Details",
    detail_line: "   {label}: {value}",
    section_examples: "➤ All Examples:",
    example_item: "   [{n}] {sentence}",
    example_item_translation: "       {translation}",
    state_load_failed: "Could not load grammar points: {reason}",
    state_empty: "No grammar points available.",
    state_render_fault: "Something went wrong.",
    state_retry_hint: "Type 'retry' to try again.",
};

/// Context for template rendering
///
/// `sentence` and `translation` arrive already styled (highlight and dimming
/// depend on card state), so they are inserted as-is.
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub position: Option<usize>,
    pub total: Option<usize>,
    pub name: Option<&'a str>,
    pub level: Option<Level>,
    pub sentence: Option<&'a str>,
    pub translation: Option<&'a str>,
    pub label: Option<&'a str>,
    pub value: Option<&'a str>,
    pub n: Option<usize>,
    pub reason: Option<&'a str>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + context.name.map_or(0, str::len)
        + context.sentence.map_or(0, str::len)
        + context.translation.map_or(0, str::len)
        + context.label.map_or(0, str::len)
        + context.value.map_or(0, str::len)
        + context.reason.map_or(0, str::len)
        + 64; // Extra space for numbers and color codes

    let mut result = String::with_capacity(estimated_capacity);

    if template.starts_with('➤') {
        // Section headers are colored as a whole
        render_template_single_pass(template, context, &mut result);
        return result.blue().to_string();
    }

    render_template_single_pass(template, context, &mut result);
    result
}

/// Single-pass template renderer
fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;

        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            // No closing brace found, treat as literal
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        match placeholder.as_str() {
            "position" => {
                if let Some(value) = context.position {
                    let _ = write!(output, "{}", value.to_string().white().bold());
                }
            }
            "total" => {
                if let Some(value) = context.total {
                    let _ = write!(output, "{}", value.to_string().white());
                }
            }
            "name" => {
                if let Some(value) = context.name {
                    let _ = write!(output, "{}", value.bold());
                }
            }
            "level" => {
                if let Some(level) = context.level {
                    let _ = write!(output, "{}", get_level_badge(level));
                }
            }
            "sentence" => {
                if let Some(value) = context.sentence {
                    output.push_str(value);
                }
            }
            "translation" => {
                if let Some(value) = context.translation {
                    output.push_str(value);
                }
            }
            "label" => {
                if let Some(value) = context.label {
                    let _ = write!(output, "{}", value.blue());
                }
            }
            "value" => {
                if let Some(value) = context.value {
                    output.push_str(value);
                }
            }
            "n" => {
                if let Some(value) = context.n {
                    let _ = write!(output, "{}", value.to_string().bright_black());
                }
            }
            "reason" => {
                if let Some(value) = context.reason {
                    let _ = write!(output, "{}", value.red());
                }
            }
            _ => {
                // Unknown placeholder, keep as-is
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
        }
    }
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break; // End of escape sequence
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
