//! Prompt pane: the element, its details and the question with the echoed choice

use crate::input::InputEvent;
use crate::prompt::Prompt;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

/// Text never wraps wider than this, however wide the terminal
pub const WRAP_WIDTH: u16 = 80;

/// Lines making up the prompt, before wrapping
pub fn prompt_lines<'a>(prompt: &'a Prompt, pending: Option<InputEvent>) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("What about:  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            prompt.element.title.as_str(),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if !prompt.element.details.is_empty() {
        lines.push(Line::default());
        lines.extend(
            prompt
                .element
                .details
                .lines()
                .map(|l| Line::styled(l, Style::default().fg(DEFAULT_THEME.fg))),
        );
    }

    lines.push(Line::default());

    let mut question = vec![
        Span::styled(
            prompt.question.text.as_str(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::raw(" "),
        Span::styled(
            prompt.question.answer_hint(),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
        Span::raw("  "),
    ];
    if let Some(choice) = pending {
        question.push(Span::styled(
            choice.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(question));

    lines
}

/// Horizontally centred slice of `area`, at most `max_width` wide
fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let side = (area.width - width) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(side),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

/// Render the prompt pane
pub fn render_prompt_pane(
    frame: &mut Frame,
    area: Rect,
    prompt: &Prompt,
    pending: Option<InputEvent>,
) {
    // borders + padding take 4 columns
    let area = centered(area, WRAP_WIDTH + 4);

    let block = Block::default()
        .title(" Quick Rater ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 1, 1, 0));

    let paragraph = Paragraph::new(prompt_lines(prompt, pending))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Element, Question};
    use std::time::Instant;

    fn prompt(details: &str, is_binary: bool) -> Prompt {
        Prompt {
            seq: 0,
            element: Element {
                id: 1,
                title: "Coffee".to_string(),
                details: details.to_string(),
            },
            question: Question {
                id: 1,
                text: "Would you have it again?".to_string(),
                is_binary,
            },
            started_at: Instant::now(),
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_without_details() {
        let p = prompt("", true);
        let lines = prompt_lines(&p, None);
        assert_eq!(lines.len(), 3);
        assert_eq!(text(&lines[0]), "What about:  Coffee");
        assert_eq!(text(&lines[2]), "Would you have it again? [Y/n]  ");
    }

    #[test]
    fn test_lines_with_details_and_echo() {
        let p = prompt("Dark roast\nNo sugar", false);
        let lines = prompt_lines(&p, Some(InputEvent::Rating(4)));
        assert_eq!(text(&lines[2]), "Dark roast");
        assert_eq!(text(&lines[3]), "No sugar");
        assert_eq!(
            text(lines.last().expect("question line")),
            "Would you have it again? [1-5]  4"
        );
    }

    #[test]
    fn test_centered_caps_width() {
        let wide = centered(Rect::new(0, 0, 200, 10), 84);
        assert_eq!(wide.width, 84);
        assert_eq!(wide.x, 58);
        let narrow = centered(Rect::new(0, 0, 40, 10), 84);
        assert_eq!(narrow.width, 40);
        assert_eq!(narrow.x, 0);
    }
}
