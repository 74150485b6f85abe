use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

use crate::domain::Place;

/// Rows one card occupies including its border.
pub const CARD_HEIGHT: u16 = 6;

/// Text rows inside the card border. Always this many lines so every card
/// has the same height.
pub const CARD_INNER_LINES: usize = 4;

/// Tags shown on a card at most; the rest stay in the data.
const MAX_TAGS: usize = 3;

/// Builds the four body lines of one card: meta, badges, description, price.
pub fn card_lines(place: &Place) -> Vec<TextLine<'static>> {
    let mut lines = Vec::with_capacity(CARD_INNER_LINES);

    lines.push(TextLine::from(meta_spans(place)));
    lines.push(TextLine::from(badge_spans(place)));
    lines.push(TextLine::from(Span::styled(
        place.description.clone().unwrap_or_default(),
        Style::default().fg(Color::Gray),
    )));
    lines.push(TextLine::from(footer_spans(place)));

    lines
}

fn meta_spans(place: &Place) -> Vec<Span<'static>> {
    let rating = place
        .rating
        .map_or_else(|| "-".to_string(), |value| format!("{value:.1}"));
    let reviews = place.review_count.unwrap_or(0);

    let mut spans = vec![
        Span::styled(
            format!("⭐ {rating}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" · {reviews} reviews")),
    ];

    if let Some(level) = place.price_level {
        spans.push(Span::styled(
            format!(" · {}", level.symbols()),
            Style::default().fg(Color::Green),
        ));
    }

    spans
}

fn badge_spans(place: &Place) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    if let Some(address) = &place.address {
        spans.push(badge(address.clone(), Color::Blue));
    }

    for tag in place.tags.iter().take(MAX_TAGS) {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(badge(tag.clone(), Color::Magenta));
    }

    spans
}

fn badge(text: String, color: Color) -> Span<'static> {
    Span::styled(format!("[{text}]"), Style::default().fg(color))
}

/// Footer line: reference price and the maps link, whichever exist.
fn footer_spans(place: &Place) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    if let Some(level) = place.price_level {
        spans.push(Span::styled(
            format!("Reference price: {}", level.reference_range()),
            Style::default().fg(Color::Green),
        ));
    }

    if let Some(url) = &place.maps_url {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            url.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceLevel;

    fn sparse_place() -> Place {
        Place {
            name: "Bare".to_string(),
            rating: None,
            review_count: None,
            address: None,
            price_level: None,
            description: None,
            tags: Vec::new(),
            maps_url: None,
            detail_resource: None,
        }
    }

    fn full_place() -> Place {
        Place {
            name: "Full".to_string(),
            rating: Some(4.4),
            review_count: Some(812),
            address: Some("Shinjuku 1-2".to_string()),
            price_level: Some(PriceLevel::Moderate),
            description: Some("Counter seats only.".to_string()),
            tags: vec![
                "yakitori".to_string(),
                "counter".to_string(),
                "izakaya".to_string(),
                "smoky".to_string(),
            ],
            maps_url: Some("https://maps.google.com/?cid=1".to_string()),
            detail_resource: None,
        }
    }

    fn line_text(line: &TextLine<'_>) -> String {
        line.spans.iter().map(|span| span.content.clone()).collect()
    }

    #[test]
    fn every_card_has_the_same_line_count() {
        assert_eq!(card_lines(&sparse_place()).len(), CARD_INNER_LINES);
        assert_eq!(card_lines(&full_place()).len(), CARD_INNER_LINES);
    }

    #[test]
    fn missing_rating_renders_as_a_dash() {
        let lines = card_lines(&sparse_place());
        let meta = line_text(&lines[0]);
        assert!(meta.contains("⭐ -"));
        assert!(meta.contains("0 reviews"));
    }

    #[test]
    fn at_most_three_tags_are_shown() {
        let lines = card_lines(&full_place());
        let badges = line_text(&lines[1]);
        assert!(badges.contains("[yakitori]"));
        assert!(badges.contains("[izakaya]"));
        assert!(!badges.contains("[smoky]"));
    }

    #[test]
    fn price_level_fills_meta_and_footer() {
        let lines = card_lines(&full_place());
        assert!(line_text(&lines[0]).contains("¥¥"));
        assert!(line_text(&lines[3]).contains("¥2,000 - ¥3,999"));
    }

    #[test]
    fn maps_link_shows_even_next_to_a_price() {
        let lines = card_lines(&full_place());
        let footer = line_text(&lines[3]);
        assert!(footer.contains("https://maps.google.com/?cid=1"));

        let mut linked_only = sparse_place();
        linked_only.maps_url = Some("https://maps.google.com/?cid=2".to_string());
        let lines = card_lines(&linked_only);
        assert!(line_text(&lines[3]).contains("https://maps.google.com/?cid=2"));
    }
}
