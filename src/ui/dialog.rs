//! Delete confirmation overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::ConfirmDialog;

use super::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 5;

pub fn render_dialog(frame: &mut Frame, dialog: &ConfirmDialog) {
    let area = centered(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);

    // Clear the background behind the dialog
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " Confirm ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let lines = vec![
        Line::from(dialog.prompt),
        Line::default(),
        Line::from(vec![
            Span::styled("[y] Delete", Style::default().fg(COLOR_ERROR)),
            Span::raw("   "),
            Span::styled("[n] Cancel", Style::default().fg(COLOR_DIM)),
        ]),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(body, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_small_area() {
        let rect = centered(Rect::new(0, 0, 20, 3), 40, 5);
        assert_eq!(rect, Rect::new(0, 0, 20, 3));

        let rect = centered(Rect::new(0, 0, 80, 25), 40, 5);
        assert_eq!(rect, Rect::new(20, 10, 40, 5));
    }
}
