//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              main loop (app.rs)                            │
//！│                                                                            │
//！│  ┌────────────────────────────── UI layer ────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │  layer  │ translate│   layer   │  consume │  layer   │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ mutates       │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          └───────────┘   ┌───── │  Model   │         │   │
//！│  │   │  layer  │                          │      │  layer   │         │   │
//！│  │   └────┬────┘ ◀──────── reads ─────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ editor calls      │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │terminal │                                │ Backend  │              │
//！│      │ (Util)  │                                │  layer   │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  extended-gauge-  │           │
//！│                                           │       core        │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/update/mod.rs
//! Update layer: state changes
//!
//! The Update layer consumes messages and is the only place that changes the
//! Model. Every edit goes through the `ConfigEditor` held by the session.
//!
//!
//! Module structure:
//!     src/update/mod.rs
//!         mod content;            // page panel: selection, fields, list rows
//!         mod modal;              // field editor, removal confirmation
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!         pub async fn save(app: &mut App) {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Page panel (content.rs)
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Confirm acts on the selected row:
//!         Menu / EditLink     →  ConfigEditor::open_section
//!         boolean Field       →  flipped in place
//!         other Field         →  field editor modal
//!         Element             →  ElementList::edit, opens the row's page
//!         AddElement          →  ElementList::add, opens the new row's page
//!
//!     Field values are written back as the whole section record through
//!     ConfigEditor::update_form_values, which validates the section and runs
//!     the card's derived-value hook.
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Saving
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Save only raises `save_requested`. The main loop owns the runtime and
//!     calls `save()`, which writes the card file and announces the save on
//!     the event bus.
//!
//!
//! After an update control returns to the main loop (app.rs), and the View
//! layer draws the changed Model on the next pass.
//!

mod content;
mod modal;

use crate::i18n::{current_language, set_language, t};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme::set_theme;

pub fn update(app: &mut App, msg: AppMessage) {
    if !matches!(msg, AppMessage::Quit | AppMessage::Noop) {
        app.quit_armed = false;
    }

    match msg {
        AppMessage::Quit => {
            if app.session.is_dirty() && !app.quit_armed {
                app.quit_armed = true;
                app.set_status(t().status_bar.unsaved_quit);
            } else {
                app.should_quit = true;
            }
        }

        AppMessage::ForceQuit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.session.editor_mut().go_back() {
                app.refresh();
                app.select_first();
                app.clear_status();
            }
        }

        AppMessage::Save => {
            app.save_requested = true;
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            app.theme = app.theme.toggle();
            set_theme(app.theme);
        }

        AppMessage::SwitchLanguage => {
            let language = current_language().next();
            set_language(language);
            log::info!("UI language switched to {}", language.code());
            app.refresh();
            app.set_status(language.display_name());
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// Carry out a requested save
pub async fn save(app: &mut App) {
    app.save_requested = false;
    match app.session.save().await {
        Ok(()) => {
            if !app.session.hooks().take_saved() {
                log::warn!("Save of {} was not announced to the editor", app.session.path().display());
            }
            log::info!("Saved {}", app.session.path().display());
            app.set_status(t().status_bar.saved);
        }
        Err(e) => {
            log::error!("Saving {} failed: {e:#}", app.session.path().display());
            app.set_status(format!("{}: {e}", t().status_bar.save_failed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{main_page, CardFile, EditorSession};
    use crate::message::{ContentMessage, ModalMessage};
    use crate::model::{FieldInputError, Modal, RowKind};
    use extended_gauge_core::traits::InMemoryEntityStore;
    use extended_gauge_core::ConfigValue;
    use serde_json::json;
    use tempfile::TempDir;

    async fn app_with(tmp: &TempDir, config: serde_json::Value) -> App {
        let file = CardFile::new(tmp.path().join("card.json"));
        let session =
            EditorSession::start(main_page().unwrap(), config.into(), InMemoryEntityStore::new(), file)
                .await;
        App::new(session)
    }

    fn select_field(app: &mut App, name: &str) {
        app.selected = app
            .rows
            .iter()
            .position(|row| matches!(&row.kind, RowKind::Field { field, .. } if field.name == name))
            .unwrap();
    }

    fn content(app: &mut App, msg: ContentMessage) {
        update(app, AppMessage::Content(msg));
    }

    fn modal(app: &mut App, msg: ModalMessage) {
        update(app, AppMessage::Modal(msg));
    }

    fn config_at(app: &App, section: &str, field: &str) -> Option<ConfigValue> {
        let config = app.session.editor().config()?;
        config.get(section)?.get(field).cloned()
    }

    fn segment_ids(app: &App) -> Vec<i64> {
        let config = app.session.editor().config().unwrap();
        config
            .get("segment_list")
            .and_then(ConfigValue::as_list)
            .unwrap_or_default()
            .iter()
            .filter_map(|segment| segment.get("id").and_then(ConfigValue::as_i64))
            .collect()
    }

    fn two_segments() -> serde_json::Value {
        json!({
            "segment_list": [
                { "id": 0, "title": { "title": "Low" } },
                { "id": 1, "title": { "title": "High" } }
            ]
        })
    }

    #[tokio::test]
    async fn field_editor_writes_the_section() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, json!({})).await;
        assert!(!app.session.is_dirty());

        select_field(&mut app, "min_value");
        content(&mut app, ContentMessage::Confirm);
        assert!(matches!(app.modal.active, Some(Modal::EditField { .. })));

        modal(&mut app, ModalMessage::Input('5'));
        modal(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        assert_eq!(config_at(&app, "main", "min_value").and_then(|v| v.as_i64()), Some(5));
        assert!(app.session.sync_changes() > 0);
        assert!(app.session.is_dirty());
    }

    #[tokio::test]
    async fn invalid_number_keeps_the_editor_open() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, json!({})).await;

        select_field(&mut app, "max_value");
        content(&mut app, ContentMessage::Confirm);
        modal(&mut app, ModalMessage::Input('x'));
        modal(&mut app, ModalMessage::Confirm);

        let Some(Modal::EditField { error, .. }) = &app.modal.active else {
            panic!("field editor expected");
        };
        assert_eq!(*error, Some(FieldInputError::InvalidNumber));
        assert!(config_at(&app, "main", "max_value").is_none());

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn space_toggles_boolean_fields() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, json!({ "main": { "show_needle": true } })).await;

        select_field(&mut app, "show_needle");
        content(&mut app, ContentMessage::Toggle);
        assert_eq!(config_at(&app, "main", "show_needle"), Some(ConfigValue::Bool(false)));
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn adding_a_segment_opens_its_page() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, json!({})).await;

        app.select_last();
        content(&mut app, ContentMessage::Confirm);

        let stack = app.session.editor().stack();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current().unwrap().is_add, Some(true));
        assert_eq!(segment_ids(&app), [0]);
        assert!(app.page.as_ref().unwrap().can_go_back);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.session.editor().stack().depth(), 1);
        assert_eq!(app.rows.last().unwrap().kind, RowKind::AddElement { enabled: false });

        app.select_last();
        content(&mut app, ContentMessage::Confirm);
        assert_eq!(app.session.editor().stack().depth(), 1);
        assert_eq!(app.status_message.as_deref(), Some(t().status_bar.add_disabled));
    }

    #[tokio::test]
    async fn entity_settings_open_from_the_link_row() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, json!({})).await;

        app.selected = app.rows.iter().position(|row| row.kind == RowKind::EditLink).unwrap();
        content(&mut app, ContentMessage::Confirm);
        assert_eq!(app.session.editor().stack().depth(), 2);
        assert_eq!(app.session.editor().stack().page_name(), "entity");
    }

    #[tokio::test]
    async fn removal_needs_confirmation() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, two_segments()).await;

        app.select_element("segment_list", 0);
        content(&mut app, ContentMessage::Remove);
        assert!(matches!(app.modal.active, Some(Modal::ConfirmRemove { index: 0, .. })));

        // focus starts on cancel
        modal(&mut app, ModalMessage::Confirm);
        assert_eq!(segment_ids(&app), [0, 1]);

        content(&mut app, ContentMessage::Remove);
        modal(&mut app, ModalMessage::ToggleRemoveFocus);
        modal(&mut app, ModalMessage::Confirm);
        assert_eq!(segment_ids(&app), [1]);
        assert_eq!(app.status_message.as_deref(), Some(t().status_bar.removed));
    }

    #[tokio::test]
    async fn moving_a_row_keeps_it_selected() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, two_segments()).await;

        app.select_element("segment_list", 0);
        content(&mut app, ContentMessage::MoveUp);
        assert_eq!(segment_ids(&app), [0, 1]);

        content(&mut app, ContentMessage::MoveDown);
        assert_eq!(segment_ids(&app), [1, 0]);
        assert_eq!(app.selected_row().unwrap().kind, RowKind::Element { index: 1, sortable: true });
        assert_eq!(app.selected_row().unwrap().label, "Low");

        content(&mut app, ContentMessage::MoveDown);
        assert_eq!(segment_ids(&app), [1, 0]);
    }

    #[tokio::test]
    async fn quitting_with_unsaved_changes_asks_once() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, json!({})).await;
        select_field(&mut app, "show_needle");
        content(&mut app, ContentMessage::Toggle);
        app.session.sync_changes();

        update(&mut app, AppMessage::Quit);
        assert!(!app.should_quit);
        assert!(app.quit_armed);

        update(&mut app, AppMessage::ShowHelp);
        assert!(!app.quit_armed);
        update(&mut app, AppMessage::GoBack);

        update(&mut app, AppMessage::Quit);
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn save_writes_the_card_file() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, json!({})).await;
        select_field(&mut app, "show_needle");
        content(&mut app, ContentMessage::Toggle);

        update(&mut app, AppMessage::Save);
        assert!(app.save_requested);
        save(&mut app).await;

        assert!(!app.save_requested);
        assert!(!app.session.is_dirty());
        assert_eq!(app.status_message.as_deref(), Some(t().status_bar.saved));
        let saved = CardFile::new(tmp.path().join("card.json")).load().await.unwrap().unwrap();
        assert_eq!(
            saved.get("main").and_then(|m| m.get("show_needle")),
            Some(&ConfigValue::Bool(true))
        );
    }
}
