use crate::app::{App, SearchState};
use crate::ui::widgets::cards::{card_lines, CARD_HEIGHT};
use crate::ui::widgets::lists::scroll_offset;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = build_main_layout(f);

    render_title_section(app, f, main_layout[0]);
    render_results_section(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);

    if app.show_help {
        render_help_popup(f, f.area());
    }
}

fn build_main_layout(f: &Frame<'_>) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and badge
            Constraint::Min(CARD_HEIGHT), // Card list
            Constraint::Length(3), // Status line
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)))
        .to_vec()
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Place Scout ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(title_block, area);

    let title_inner = area.inner(Margin::new(1, 1));
    let title_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(title_inner);

    let title_paragraph = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Text-only ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "place search",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title_paragraph, title_chunks[0]);

    // Data-source badge: live API or the bundled sample
    let badge_paragraph = Paragraph::new(TextLine::from(Span::styled(
        format!("source: {}", app.source.label()),
        Style::default().fg(Color::Yellow),
    )))
    .alignment(Alignment::Right);
    f.render_widget(badge_paragraph, title_chunks[1]);
}

fn render_results_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let visible = app.visible_places();
    let total_cards = visible.len();

    if total_cards == 0 {
        let block = Block::default()
            .title("Results")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No results yet. Press s to search.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let outer_block = Block::default()
        .title(format!(
            "Results ({} of {total_cards})",
            app.selected_index + 1
        ))
        .borders(Borders::ALL);
    let inner = outer_block.inner(area);
    f.render_widget(outer_block, area);

    let max_visible_cards = (inner.height / CARD_HEIGHT) as usize;
    let offset = scroll_offset(total_cards, max_visible_cards, app.selected_index);

    let window = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_cards);

    let card_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); max_visible_cards])
        .split(inner);

    for (slot, (index, place)) in window.enumerate() {
        let is_selected = index == app.selected_index;
        let border_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let card_block = Block::default()
            .title(place.name.clone())
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = Paragraph::new(Text::from(card_lines(place))).block(card_block);
        f.render_widget(paragraph, card_areas[slot]);
    }
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if app.search_state == SearchState::Requested {
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Searching...")
            .style(Style::default().fg(Color::Green))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX);
        // Stateless clone: the shared state advances in App::update
        let mut spinner_state = app.throbber_state.clone();
        f.render_stateful_widget(throbber, status_block.inner(area), &mut spinner_state);
        f.render_widget(status_block, area);
        return;
    }

    let paragraph = Paragraph::new(app.status_message.clone())
        .block(status_block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("s", key_style),
        Span::raw(": Search   "),
        Span::styled("c", key_style),
        Span::raw(": Clear   "),
        Span::styled("↑/↓", key_style),
        Span::raw(": Navigate   "),
        Span::styled("Enter", key_style),
        Span::raw(": Details   "),
        Span::styled("F1", key_style),
        Span::raw(": Help   "),
        Span::styled("q", key_style),
        Span::raw(": Quit"),
    ];

    let help_paragraph = Paragraph::new(TextLine::from(help_text)).alignment(Alignment::Center);
    f.render_widget(help_paragraph, area);
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        TextLine::from("s        Run the place search (live, sample fallback)"),
        TextLine::from("c        Clear results and status"),
        TextLine::from("↑/↓      Move between cards"),
        TextLine::from("Home/End Jump to first/last card"),
        TextLine::from("Enter    Open details for the selected card"),
        TextLine::from("Esc      Close details / help"),
        TextLine::from("q        Quit"),
        TextLine::from(""),
        TextLine::from("Details are fetched on demand only; without an API"),
        TextLine::from("key the app runs entirely on the sample dataset."),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);
}
