//! Post detail rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::view::{detail_subtitle, post_actions};

use super::action_spans;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let Some(post) = app.detail.as_ref().and_then(|d| d.post.as_ref()) else {
        let loading = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(loading, area);
        return;
    };

    let dim = Style::default().fg(COLOR_DIM);
    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail_subtitle(post), dim)),
        Line::from(Span::styled(
            post.author.clone(),
            dim.add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(format!("Image: {}", post.image_url), dim)),
        Line::default(),
    ];
    lines.extend(post.description.lines().map(|l| Line::from(l.to_string())));

    let actions = action_spans(&post_actions(post, app.viewer()));
    if !actions.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(actions));
    }

    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}
