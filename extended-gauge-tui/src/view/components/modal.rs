//! Modal components

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FieldInput, FieldInputError, Modal};
use crate::util::hex_to_rgb;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::EditField { .. } => render_edit_field(app, frame, modal),
        Modal::ConfirmRemove { .. } => render_confirm_remove(frame, modal),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// Centered area of at most `width` x `height`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Clear `area`, draw the frame and return the content area
fn modal_block(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Styles::modal());
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn render_edit_field(app: &App, frame: &mut Frame, modal: &Modal) {
    let Modal::EditField {
        label,
        input,
        error,
        ..
    } = modal
    else {
        return;
    };

    let texts = t();
    let c = colors();
    let area = centered_rect(60, 10, frame.area());
    let inner = modal_block(
        frame,
        area,
        &format!("{}: {label}", texts.modal.edit_field.title),
        c.border_focused,
    );

    let input_style = Style::default().fg(c.highlight).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from("")];

    match input {
        FieldInput::Text(buffer) => {
            lines.push(Line::styled(format!("> {buffer}_"), input_style));
        }
        FieldInput::Number { buffer, min, max } => {
            lines.push(Line::styled(format!("> {buffer}_"), input_style));
            if min.is_some() || max.is_some() {
                let bound = |b: &Option<f64>| b.map(|b| b.to_string()).unwrap_or_default();
                lines.push(Line::styled(
                    format!(
                        "{}: {} .. {}",
                        texts.modal.edit_field.range,
                        bound(min),
                        bound(max)
                    ),
                    Style::default().fg(c.muted),
                ));
            }
        }
        FieldInput::Color(buffer) => {
            let swatch = hex_to_rgb(buffer).map_or(c.muted, |[r, g, b]| Color::Rgb(r, g, b));
            lines.push(Line::from(vec![
                Span::styled(format!("> {buffer}_  "), input_style),
                Span::styled("■■", Style::default().fg(swatch)),
            ]));
        }
        FieldInput::Boolean(on) => {
            let text = if *on { texts.common.yes } else { texts.common.no };
            lines.push(Line::styled(format!("◀ {text} ▶"), input_style));
        }
        FieldInput::Choice { options, index } => {
            if options.iter().all(String::is_empty) {
                lines.push(Line::styled(
                    texts.modal.edit_field.no_choices,
                    Style::default().fg(c.muted),
                ));
            } else {
                let option = options
                    .get(*index)
                    .filter(|option| !option.is_empty())
                    .map_or(texts.common.none, String::as_str);
                let text = match app.session.entities().get(option) {
                    Some(state) if state.friendly_name() != option => {
                        format!("{option}  ({})", state.friendly_name())
                    }
                    _ => option.to_string(),
                };
                lines.push(Line::styled(format!("◀ {text} ▶"), input_style));
                lines.push(Line::styled(
                    format!("{}/{}", index + 1, options.len()),
                    Style::default().fg(c.muted),
                ));
            }
        }
    }

    lines.push(Line::from(""));
    if let Some(error) = error {
        let message = match error {
            FieldInputError::InvalidNumber => texts.modal.edit_field.invalid_number,
            FieldInputError::InvalidColor => texts.modal.edit_field.invalid_color,
        };
        lines.push(Line::styled(message, Style::default().fg(c.error)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_confirm_remove(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmRemove { text, focus, .. } = modal else {
        return;
    };

    let texts = t();
    let c = colors();
    let area = centered_rect(44, 9, frame.area());
    let inner = modal_block(frame, area, texts.modal.confirm_remove.title, c.error);

    let cancel_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(c.fg)
    };
    let remove_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.modal.confirm_remove.message),
            Style::default().fg(c.fg),
        ),
        Line::styled(format!("  \"{text}\""), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.remove), remove_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let keys = &t().hints.keys;
    let area = centered_rect(56, 9, frame.area());
    let inner = modal_block(frame, area, title, c.error);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            format!("{} / {}", keys.esc, keys.enter),
            Style::default().fg(c.muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let c = colors();
    let height = u16::try_from(help.entries.len()).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(56, height, frame.area());
    let inner = modal_block(frame, area, help.title, c.border_focused);

    let mut lines = vec![Line::from("")];
    lines.extend(help.entries.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
            Span::styled(*description, Style::default().fg(c.fg)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), inner);
}
