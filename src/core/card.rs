//! Terminal rendering of the active card and of the non-card screens.

use crate::core::{
    collection::{Entry, Example},
    colors::{format_highlight, format_translation},
    deck::Deck,
    error::{DeckError, Result},
    highlight::highlight,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use rand::Rng;

/// Render the deck's active card, details included when visible
pub fn render_card<R: Rng>(deck: &Deck<R>) -> Result<String> {
    let entry = deck
        .current_entry()
        .ok_or_else(|| DeckError::entry_missing(deck.position(), deck.len()))?;
    let display = deck.display();

    let mut lines = Vec::new();

    lines.push(render_template(
        TEMPLATES.header_position,
        &TemplateContext {
            position: Some(deck.position()),
            total: Some(deck.len()),
            ..Default::default()
        },
    ));
    lines.push(String::new());

    let name = if entry.name.is_empty() {
        "Loading..."
    } else {
        entry.name.as_str()
    };
    lines.push(render_template(
        TEMPLATES.card_title,
        &TemplateContext {
            name: Some(name),
            level: Some(entry.level),
            ..Default::default()
        },
    ));
    lines.push(String::new());

    match deck.current_example() {
        Some(example) => {
            let sentence = format_sentence(example);
            let translation =
                format_translation(&example.english, display.translation_revealed).to_string();
            lines.push(render_template(
                TEMPLATES.card_sentence,
                &TemplateContext {
                    sentence: Some(&sentence),
                    ..Default::default()
                },
            ));
            lines.push(render_template(
                TEMPLATES.card_translation,
                &TemplateContext {
                    translation: Some(&translation),
                    ..Default::default()
                },
            ));
        }
        None => lines.push(render_template(
            TEMPLATES.card_no_examples,
            &TemplateContext::default(),
        )),
    }
    lines.push(String::new());

    if display.details_visible {
        lines.push(render_template(
            TEMPLATES.details_hint_hide,
            &TemplateContext::default(),
        ));
        lines.push(String::new());
        lines.extend(render_details(entry));
    } else {
        lines.push(render_template(
            TEMPLATES.details_hint_show,
            &TemplateContext::default(),
        ));
    }

    Ok(lines.join("\n"))
}

fn render_details(entry: &Entry) -> Vec<String> {
    let mut fields = vec![
        ("Romaji", entry.romaji.as_str()),
        ("Meaning", entry.meaning.as_str()),
        ("Level", entry.level.as_str()),
        ("Equivalent", entry.equivalent.as_str()),
        ("Reference", entry.reference.as_str()),
    ];
    if let Some(id) = entry.id.as_deref() {
        fields.push(("Entry", id));
    }

    let mut lines: Vec<String> = fields
        .into_iter()
        .map(|(label, value)| {
            render_template(
                TEMPLATES.detail_line,
                &TemplateContext {
                    label: Some(label),
                    value: Some(value),
                    ..Default::default()
                },
            )
        })
        .collect();

    if entry.has_examples() {
        lines.push(String::new());
        lines.push(render_template(
            TEMPLATES.section_examples,
            &TemplateContext::default(),
        ));
        for (i, example) in entry.examples.iter().enumerate() {
            let sentence = format_sentence(example);
            // The full list keeps every translation hidden
            let translation = format_translation(&example.english, false).to_string();
            lines.push(render_template(
                TEMPLATES.example_item,
                &TemplateContext {
                    n: Some(i + 1),
                    sentence: Some(&sentence),
                    ..Default::default()
                },
            ));
            lines.push(render_template(
                TEMPLATES.example_item_translation,
                &TemplateContext {
                    translation: Some(&translation),
                    ..Default::default()
                },
            ));
        }
    }

    lines
}

fn format_sentence(example: &Example) -> String {
    format_highlight(&highlight(
        &example.japanese,
        example.grammar_point_index,
        example.span_len(),
    ))
}

pub fn render_load_failed(reason: &str) -> String {
    render_template(
        TEMPLATES.state_load_failed,
        &TemplateContext {
            reason: Some(reason),
            ..Default::default()
        },
    )
}

pub fn render_empty() -> String {
    render_template(TEMPLATES.state_empty, &TemplateContext::default())
}

pub fn render_fault() -> String {
    [
        render_template(TEMPLATES.state_render_fault, &TemplateContext::default()),
        render_template(TEMPLATES.state_retry_hint, &TemplateContext::default()),
    ]
    .join("\n")
}
