//! Page panel updates

use extended_gauge_core::types::{Record, Selector};
use extended_gauge_core::{ConfigValue, CoreError, CoreResult, ElementList, ElementListChange};

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, FieldInput, RowKind};

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.select_previous(),
        ContentMessage::SelectNext => app.select_next(),
        ContentMessage::SelectFirst => app.select_first(),
        ContentMessage::SelectLast => app.select_last(),
        ContentMessage::Confirm => confirm(app),
        ContentMessage::Toggle => toggle(app),
        ContentMessage::Remove => ask_remove(app),
        ContentMessage::MoveUp => move_selected(app, false),
        ContentMessage::MoveDown => move_selected(app, true),
    }
}

fn confirm(app: &mut App) {
    let Some(row) = app.selected_row().cloned() else {
        return;
    };

    match row.kind {
        RowKind::Menu { .. } | RowKind::EditLink => open_section(app, &row.section),

        RowKind::Field { field, value, .. } => {
            if matches!(field.selector, Selector::Boolean {}) {
                let on = value.as_bool().unwrap_or(false);
                write_field(app, &row.section, &field.name, Some((!on).into()));
            } else {
                let input = FieldInput::for_field(&field, &value, app.session.entities());
                app.modal
                    .show_field_editor(&row.section, &field.name, &row.label, input);
            }
        }

        RowKind::Element { index, .. } => {
            change_list(app, &row.section, |list| list.edit(index));
        }

        RowKind::AddElement { enabled: true } => {
            change_list(app, &row.section, |list| Some(list.add()));
        }
        RowKind::AddElement { enabled: false } => {
            app.set_status(t().status_bar.add_disabled);
        }

        RowKind::Heading | RowKind::Notice | RowKind::Custom => {}
    }
}

fn toggle(app: &mut App) {
    let Some(row) = app.selected_row().cloned() else {
        return;
    };
    if let RowKind::Field { field, value, .. } = row.kind {
        if matches!(field.selector, Selector::Boolean {}) {
            let on = value.as_bool().unwrap_or(false);
            write_field(app, &row.section, &field.name, Some((!on).into()));
        }
    }
}

fn ask_remove(app: &mut App) {
    let Some(row) = app.selected_row().cloned() else {
        return;
    };
    if let RowKind::Element { index, .. } = row.kind {
        app.modal.show_confirm_remove(&row.section, index, &row.label);
    }
}

fn move_selected(app: &mut App, down: bool) {
    let Some(row) = app.selected_row().cloned() else {
        return;
    };
    let RowKind::Element {
        index,
        sortable: true,
    } = row.kind
    else {
        return;
    };
    let target = if down {
        index + 1
    } else {
        match index.checked_sub(1) {
            Some(target) => target,
            None => return,
        }
    };

    if let Some(Some(_)) = change_list(app, &row.section, |list| list.move_element(index, target)) {
        app.select_element(&row.section, target);
    }
}

fn open_section(app: &mut App, section: &str) {
    match app.session.editor_mut().open_section(section) {
        Ok(true) => {
            app.refresh();
            app.select_first();
            app.clear_status();
        }
        Ok(false) => log::debug!("Section {section} links to no page"),
        Err(e) => report_error(app, &e),
    }
}

/// Store one field of a form section; `None` removes the field
pub(super) fn write_field(app: &mut App, section: &str, field: &str, value: Option<ConfigValue>) {
    match store_field(app, section, field, value) {
        Ok(_) => app.refresh(),
        Err(e) => report_error(app, &e),
    }
}

fn store_field(
    app: &mut App,
    section: &str,
    field: &str,
    value: Option<ConfigValue>,
) -> CoreResult<ConfigValue> {
    let data = app.session.editor().section_data(section)?;
    let mut record: Record = data.as_object().cloned().unwrap_or_default();
    match value {
        Some(value) => {
            record.insert(field.to_string(), value);
        }
        None => {
            record.shift_remove(field);
        }
    }
    app.session
        .editor_mut()
        .update_form_values(section, ConfigValue::object(record))
}

/// Build a change from the current rows of `section` and apply it.
///
/// `None` when no change was made or applying failed, otherwise what the editor
/// returned. A change that opened or closed a page selects the first row.
pub(super) fn change_list(
    app: &mut App,
    section: &str,
    make: impl FnOnce(&ElementList) -> Option<ElementListChange>,
) -> Option<Option<ConfigValue>> {
    let list = match app.session.editor().element_list(section) {
        Ok(list) => list,
        Err(e) => {
            report_error(app, &e);
            return None;
        }
    };
    let change = make(&list)?;

    let depth = app.session.editor().stack().depth();
    match app.session.editor_mut().apply_list_change(section, change) {
        Ok(root) => {
            app.refresh();
            if app.session.editor().stack().depth() != depth {
                app.select_first();
            }
            Some(root)
        }
        Err(e) => {
            report_error(app, &e);
            None
        }
    }
}

pub(super) fn report_error(app: &mut App, error: &CoreError) {
    if error.is_expected() {
        log::warn!("{error}");
    } else {
        log::error!("{error}");
    }
    app.modal.show_error(t().common.error, &error.to_string());
}
