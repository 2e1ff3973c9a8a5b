//! Page editor: one line per row

use extended_gauge_core::types::{SchemaField, Selector};
use extended_gauge_core::ConfigValue;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, Row, RowKind};
use crate::util::{hex_to_rgb, rgb_to_hex};
use crate::view::theme::{colors, Styles};

/// Label column width, in display cells
const LABEL_WIDTH: usize = 28;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    if app.rows.is_empty() {
        let empty = Paragraph::new(Line::styled(
            format!("  {}", t().editor.empty_page),
            Style::default().fg(c.muted),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = app
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| render_row(app, row, i == app.selected))
        .collect();

    // keep the selection on screen
    let height = usize::from(area.height).max(1);
    let offset = (app.selected + 1).saturating_sub(height);

    let paragraph = Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

fn render_row(app: &App, row: &Row, is_selected: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };
    let style = if is_selected {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };

    match &row.kind {
        RowKind::Heading => Line::styled(
            format!(" {}", row.label),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        ),

        RowKind::Menu { icon } => Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{icon} {}", row.label), style),
        ]),

        RowKind::Field {
            field,
            value,
            error,
        } => {
            let padding = LABEL_WIDTH.saturating_sub(row.label.width());
            let mut spans = vec![
                Span::styled(prefix, style),
                Span::styled(format!("{}{:padding$}", row.label, ""), style),
                Span::styled(": ", Style::default().fg(c.muted)),
            ];
            spans.extend(value_spans(app, field, value));
            if let Some(error) = error {
                spans.push(Span::styled(
                    format!("  ! {error}"),
                    Style::default().fg(c.error),
                ));
            }
            Line::from(spans)
        }

        RowKind::EditLink => Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("→ {}", row.label), style),
        ]),

        RowKind::Element { sortable, .. } => {
            let mut spans = vec![
                Span::styled(prefix, style),
                Span::styled(format!("• {}", row.label), style),
            ];
            if *sortable && is_selected {
                spans.push(Span::styled(
                    format!("  {}", t().hints.keys.reorder),
                    Style::default().fg(c.muted),
                ));
            }
            Line::from(spans)
        }

        RowKind::AddElement { enabled } => {
            let mut spans = vec![Span::styled(prefix, style)];
            if *enabled {
                spans.push(Span::styled(format!("+ {}", row.label), style));
            } else {
                spans.push(Span::styled(
                    format!("+ {}", row.label),
                    style.fg(c.muted),
                ));
                spans.push(Span::styled(
                    format!("  {}", t().editor.add_disabled),
                    Style::default().fg(c.muted),
                ));
            }
            Line::from(spans)
        }

        RowKind::Notice => Line::styled(format!("   ! {}", row.label), Style::default().fg(c.error)),

        RowKind::Custom => Line::styled(format!("   {}", row.label), Style::default().fg(c.muted)),
    }
}

/// Display of a field value according to its selector
fn value_spans(app: &App, field: &SchemaField, value: &ConfigValue) -> Vec<Span<'static>> {
    let texts = t();
    let c = colors();
    let value_style = Style::default().fg(c.highlight);
    let unset = || vec![Span::styled(texts.editor.not_set, Style::default().fg(c.muted))];

    match &field.selector {
        Selector::Boolean {} => {
            let text = if value.as_bool().unwrap_or(false) {
                texts.common.yes
            } else {
                texts.common.no
            };
            vec![Span::styled(text, value_style)]
        }

        Selector::ColorRgb {} => match rgb_to_hex(value) {
            Some(hex) => {
                let swatch = hex_to_rgb(&hex).map_or(c.fg, |[r, g, b]| Color::Rgb(r, g, b));
                vec![
                    Span::styled("■ ", Style::default().fg(swatch)),
                    Span::styled(hex, value_style),
                ]
            }
            None => unset(),
        },

        Selector::Entity { .. } => match value.as_str().filter(|id| !id.is_empty()) {
            Some(id) => {
                let text = match app.session.entities().get(id) {
                    Some(state) if state.friendly_name() != id => {
                        format!("{} ({id})", state.friendly_name())
                    }
                    _ => id.to_string(),
                };
                vec![Span::styled(text, value_style)]
            }
            None => unset(),
        },

        Selector::Text {} | Selector::Number { .. } | Selector::Select { .. } => match value {
            ConfigValue::Null => unset(),
            ConfigValue::String(text) if text.is_empty() => unset(),
            ConfigValue::String(text) => vec![Span::styled(text.clone(), value_style)],
            other => vec![Span::styled(other.to_string(), value_style)],
        },
    }
}
