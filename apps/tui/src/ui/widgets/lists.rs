/// First visible card index so the selection always stays on screen.
pub const fn scroll_offset(
    total_cards: usize,
    max_visible_cards: usize,
    selected_index: usize,
) -> usize {
    if total_cards <= max_visible_cards {
        0
    } else if selected_index < max_visible_cards {
        selected_index
    } else {
        selected_index - max_visible_cards + 1
    }
}
