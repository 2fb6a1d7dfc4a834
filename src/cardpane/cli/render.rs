use cardpane::api::{CmdMessage, MessageLevel, MoveOutcome};
use cardpane::filter::{Facet, TypeFacets};
use cardpane::model::{Card, CardOutput};
use cardpane::selection::SelectionTracker;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SELECTED_MARKER: &str = "●";
const PREVIEW_CHARS: usize = 50;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_cards(cards: &[Card], selection: &SelectionTracker, line_width: usize) {
    if cards.is_empty() {
        println!("No cards to show.");
        return;
    }
    for card in cards {
        println!("{}", card_row(card, selection.is_selected(card.id), line_width));
    }
}

/// One list row: marker, id, title plus source preview, output kinds on the right.
fn card_row(card: &Card, selected: bool, line_width: usize) -> String {
    let marker = if selected {
        format!(" {} ", SELECTED_MARKER)
    } else {
        "   ".to_string()
    };
    let idx = format!("{}. ", card.id);
    let kinds = output_summary(&card.outputs);

    let preview: String = card
        .source_code
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let body = if preview.is_empty() {
        card.title.clone()
    } else {
        format!("{}  {}", card.title, preview)
    };

    let fixed = marker.width() + idx.width() + kinds.width() + 1;
    let available = line_width.saturating_sub(fixed);
    let body = truncate_to_width(&body, available);
    let padding = available.saturating_sub(body.width());

    format!(
        "{}{}{}{} {}",
        marker.cyan(),
        idx.yellow(),
        body,
        " ".repeat(padding),
        kinds.dimmed()
    )
}

fn output_summary(outputs: &[CardOutput]) -> String {
    if outputs.is_empty() {
        return "-".to_string();
    }
    outputs
        .iter()
        .map(|o| o.kind.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

pub(super) fn print_full_cards(cards: &[Card]) {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", card.id.to_string().yellow(), card.title.bold());
        println!("--------------------------------");
        println!("{}", card.source_code);
        for output in &card.outputs {
            println!("{}", format!("[{}]", output.kind).dimmed());
            println!("{}", output_text(output));
        }
    }
}

fn output_text(output: &CardOutput) -> String {
    match &output.content {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(super) fn print_facets(facets: &TypeFacets) {
    for facet in Facet::all() {
        let state = if facets.is_enabled(*facet) {
            "on".green()
        } else {
            "off".red()
        };
        println!("{:<6}{}", facet.name(), state);
    }
}

pub(super) fn print_move(outcome: &MoveOutcome) {
    let order: Vec<String> = outcome.order.iter().map(|id| id.to_string()).collect();
    println!("{} {}", "order:".dimmed(), order.join(" "));
    println!("{} {}", "sort:".dimmed(), outcome.mode);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    // One column is reserved for the ellipsis.
    let budget = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > budget {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
