use crate::app::{App, DetailsPanel};
use crate::domain::DetailFragment;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SAVINGS_NOTICE: &str =
    "Savings mode: no API key configured, live detail fetch skipped.";

const SAMPLE_NOTICE: &str = "No live details for this entry; it comes from the sample dataset.";

pub fn render_details(app: &App, f: &mut Frame<'_>) {
    // The card list stays visible behind the panel
    super::main::render_main(app, f);

    let Some(place) = app.selected_place() else {
        return;
    };

    let popup_area = centered_rect(70, 60, f.area());
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(format!(" Details: {} ", place.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = match &app.details {
        DetailsPanel::Requested | DetailsPanel::Loading => {
            Paragraph::new("Loading...").style(Style::default().fg(Color::Green))
        }
        DetailsPanel::SavingsMode => {
            Paragraph::new(SAVINGS_NOTICE).style(Style::default().fg(Color::Yellow))
        }
        DetailsPanel::NoLiveDetail => {
            Paragraph::new(SAMPLE_NOTICE).style(Style::default().fg(Color::Yellow))
        }
        DetailsPanel::Failed(message) => Paragraph::new(Text::from(vec![
            TextLine::from("Failed to fetch details"),
            TextLine::from(message.clone()),
        ]))
        .style(Style::default().fg(Color::Red)),
        DetailsPanel::Loaded(fragment) => {
            let lines: Vec<TextLine<'_>> = detail_lines(fragment, &place.name)
                .into_iter()
                .map(TextLine::from)
                .collect();
            Paragraph::new(Text::from(lines))
        }
        DetailsPanel::Closed => Paragraph::new(""),
    };

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), popup_area);
}

/// Panel body for a loaded fragment. Empty fields are dropped; a nameless
/// fragment falls back to the card title.
pub fn detail_lines(fragment: &DetailFragment, fallback_name: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if fragment.display_name.is_empty() {
        lines.push(fallback_name.to_string());
    } else {
        lines.push(fragment.display_name.clone());
    }

    if let Some(address) = &fragment.formatted_address {
        lines.push(address.clone());
    }

    if let Some(phone) = &fragment.phone {
        lines.push(format!("TEL: {phone}"));
    }

    lines.extend(fragment.opening_hours.iter().cloned());

    if let Some(website) = &fragment.website {
        lines.push(website.clone());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_fragment_lists_every_field() {
        let fragment = DetailFragment {
            display_name: "Yakitori Alley".to_string(),
            formatted_address: Some("Shinjuku 1-2".to_string()),
            phone: Some("+81 3-1234-5678".to_string()),
            opening_hours: vec!["Mon: 17:00 - 23:00".to_string()],
            website: Some("https://example.jp".to_string()),
        };

        let lines = detail_lines(&fragment, "Card Title");
        assert_eq!(lines[0], "Yakitori Alley");
        assert!(lines.contains(&"TEL: +81 3-1234-5678".to_string()));
        assert!(lines.contains(&"Mon: 17:00 - 23:00".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("https://example.jp"));
    }

    #[test]
    fn empty_fields_are_dropped_and_name_falls_back() {
        let fragment = DetailFragment {
            display_name: String::new(),
            formatted_address: None,
            phone: None,
            opening_hours: Vec::new(),
            website: None,
        };

        let lines = detail_lines(&fragment, "Card Title");
        assert_eq!(lines, vec!["Card Title".to_string()]);
    }
}
