//! Status bar

use extended_gauge_core::types::Selector;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FieldInput, Modal, RowKind};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::hint_desc()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Styles::hint_desc()));
        spans.push(Span::styled(msg.clone(), Styles::hint_key()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the open modal or the selected row
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let mut hints = Vec::new();

    if let Some(modal) = &app.modal.active {
        match modal {
            Modal::EditField { input, .. } => {
                if matches!(input, FieldInput::Boolean(_) | FieldInput::Choice { .. }) {
                    hints.push((keys.arrows_lr, actions.switch_option));
                }
                hints.push((keys.enter, actions.confirm));
                hints.push((keys.esc, actions.cancel));
            }
            Modal::ConfirmRemove { .. } => {
                hints.push((keys.arrows_lr, actions.select));
                hints.push((keys.enter, actions.confirm));
                hints.push((keys.esc, actions.cancel));
            }
            Modal::Error { .. } | Modal::Help => {
                hints.push((keys.esc, actions.back));
            }
        }
        return hints;
    }

    hints.push((keys.arrows_ud, actions.select));

    match app.selected_row().map(|row| &row.kind) {
        Some(RowKind::Menu { .. } | RowKind::EditLink) => {
            hints.push((keys.enter, actions.open));
        }
        Some(RowKind::Field { field, .. }) => {
            if matches!(field.selector, Selector::Boolean {}) {
                hints.push((keys.space, actions.toggle));
            } else {
                hints.push((keys.enter, actions.edit));
            }
        }
        Some(RowKind::Element { sortable, .. }) => {
            hints.push((keys.enter, actions.edit));
            hints.push((keys.remove, actions.remove));
            if *sortable {
                hints.push((keys.reorder, actions.reorder));
            }
        }
        Some(RowKind::AddElement { .. }) => {
            hints.push((keys.enter, actions.confirm));
        }
        _ => {}
    }

    if app.page.as_ref().is_some_and(|page| page.can_go_back) {
        hints.push((keys.esc, actions.back));
    }
    hints.push((keys.save, actions.save));
    hints.push((keys.quit, actions.quit));

    hints
}
