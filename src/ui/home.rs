//! Home list rendering.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::Post;
use crate::view::{byline, excerpt, post_actions};

use super::theme::{COLOR_BORDER, COLOR_CATEGORY, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED};
use super::action_spans;

/// Rows taken by one card, borders included.
const CARD_HEIGHT: u16 = 6;

pub fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(placeholder) = app.home.placeholder() {
        let text = Paragraph::new(Line::from(Span::styled(
            placeholder,
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center);
        let [_, middle, _] = Layout::vertical([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(text, middle);
        return;
    }

    let Some(list) = app.home.list() else {
        return;
    };

    let visible = (area.height / CARD_HEIGHT).max(1) as usize;
    let first = scroll_offset(app.selected, visible);

    for (row, (index, post)) in list
        .posts()
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let card = Rect {
            x: area.x,
            y: area.y + row as u16 * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(row as u16 * CARD_HEIGHT)),
        };
        render_card(frame, card, post, index == app.selected, app);
    }
}

/// First visible card so that `selected` stays on screen.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if selected >= visible {
        selected + 1 - visible
    } else {
        0
    }
}

fn render_card(frame: &mut Frame, area: Rect, post: &Post, selected: bool, app: &App) {
    let border = if selected { COLOR_SELECTED } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let mut title = vec![Span::styled(
        post.title.clone(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if selected {
        title.insert(0, Span::styled("> ", Style::default().fg(COLOR_SELECTED)));
    }

    let mut footer = vec![Span::styled(
        byline(post),
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    )];
    footer.extend(action_spans(&post_actions(post, app.viewer())));

    let lines = vec![
        Line::from(Span::styled(
            post.category.clone(),
            Style::default().fg(COLOR_CATEGORY).add_modifier(Modifier::BOLD),
        )),
        Line::from(title),
        Line::from(excerpt(&post.description)),
        Line::from(footer),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
