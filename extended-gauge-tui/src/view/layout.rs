//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // title bar + panels + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(app, frame, title_area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(content_area);

    components::breadcrumb::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, status_area);

    // modal on top
    components::modal::render(app, frame);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let bar = Style::default().bg(c.highlight).fg(c.selected_fg);

    let mut spans = vec![Span::styled(
        format!(
            " {} v{}  {}",
            texts.common.app_name,
            env!("CARGO_PKG_VERSION"),
            app.session.path().display()
        ),
        bar,
    )];
    if app.session.is_dirty() {
        spans.push(Span::styled(format!("  [{}]", texts.editor.modified), bar));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let page = app.page.as_ref();

    let header = page
        .and_then(|page| page.header.clone())
        .unwrap_or_else(|| texts.editor.main_page.to_string());
    let path = page
        .filter(|page| !page.path.is_root())
        .map(|page| format!(" {} ", page.path))
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" {header} "))
        .title_style(Styles::title())
        .title_bottom(Line::styled(path, Style::default().fg(colors().muted)))
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::editor::render(app, frame, inner_area);
}
