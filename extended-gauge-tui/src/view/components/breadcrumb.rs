//! Breadcrumb panel: the stack of open pages

use extended_gauge_core::services::page_header;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let editor = app.session.editor();
    let stack = editor.stack();
    let hooks = editor.hooks().as_ref();
    let current = stack.depth().saturating_sub(1);

    let block = Block::default()
        .title(format!(" {} ", texts.editor.breadcrumb))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let items: Vec<ListItem> = stack
        .frames()
        .iter()
        .enumerate()
        .map(|(i, page_frame)| {
            let label = page_header(&page_frame.page, page_frame.is_add, hooks)
                .unwrap_or_else(|| texts.editor.main_page.to_string());
            let label = match page_frame.row_index {
                Some(row) => format!("{label} #{}", row + 1),
                None => label,
            };

            let is_current = i == current;
            let prefix = if is_current { "▶ " } else { "  " };
            let style = if is_current {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            let mut lines = vec![Line::from(Span::styled(
                format!("{}{prefix}{label}", "  ".repeat(i)),
                style,
            ))];
            let path = stack.path_of(i);
            if !path.is_root() {
                lines.push(Line::from(Span::styled(
                    format!("{}    {path}", "  ".repeat(i)),
                    Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
