//! Navigation bar rendering.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view::{NavAction, NavBar};

use super::theme::{COLOR_NAV_BG, COLOR_NAV_FG};

/// Key bound to each navigation entry.
pub fn nav_key(action: NavAction) -> char {
    match action {
        NavAction::Login => 'l',
        NavAction::Signup => 's',
        NavAction::NewPost => 'n',
        NavAction::Logout => 'x',
    }
}

pub fn render_nav(frame: &mut Frame, area: Rect, nav: &NavBar) {
    let bar = Style::default().bg(COLOR_NAV_BG).fg(COLOR_NAV_FG);

    let mut spans = Vec::new();
    if let Some(name) = &nav.user_name {
        spans.push(Span::styled(
            name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
    }
    for action in &nav.actions {
        spans.push(Span::raw(format!("[{}] {}  ", nav_key(*action), action.label())));
    }
    let actions = Line::from(spans);
    let actions_width = (actions.width() as u16).min(area.width);

    let [title_area, actions_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(actions_width)]).areas(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", nav.title),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .style(bar);
    frame.render_widget(title, title_area);

    let actions = Paragraph::new(actions)
        .alignment(Alignment::Right)
        .style(bar);
    frame.render_widget(actions, actions_area);
}
