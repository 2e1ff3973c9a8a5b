//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, Modal};

/// Wait up to `timeout` for an input event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an input event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // a resize redraws on the next pass
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Release and Repeat arrive as separate events on Windows
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::ForceQuit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::SAVE.matches(&key) {
        return AppMessage::Save;
    }

    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    if DefaultKeymap::SWITCH_LANGUAGE.matches(&key) {
        return AppMessage::SwitchLanguage;
    }

    if DefaultKeymap::BACK.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Backspace)
    {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    handle_content_keys(key)
}

fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_REMOVE.matches(&key) {
        return AppMessage::Content(ContentMessage::Remove);
    }
    if DefaultKeymap::MOVE_UP.matches(&key) {
        return AppMessage::Content(ContentMessage::MoveUp);
    }
    if DefaultKeymap::MOVE_DOWN.matches(&key) {
        return AppMessage::Content(ContentMessage::MoveDown);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }
    if DefaultKeymap::TOGGLE.matches(&key) {
        return AppMessage::Content(ContentMessage::Toggle);
    }
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if key.code == KeyCode::Esc || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match &app.modal.active {
        Some(Modal::EditField { input, .. }) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
                AppMessage::Modal(ModalMessage::NextOption)
            }
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
                AppMessage::Modal(ModalMessage::PrevOption)
            }
            KeyCode::Char(' ') if !input.accepts_text() => {
                AppMessage::Modal(ModalMessage::NextOption)
            }
            KeyCode::Char(c)
                if input.accepts_text()
                    && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) =>
            {
                AppMessage::Modal(ModalMessage::Input(c))
            }
            _ => AppMessage::Noop,
        },

        Some(Modal::ConfirmRemove { .. }) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                AppMessage::Modal(ModalMessage::ToggleRemoveFocus)
            }
            _ => AppMessage::Noop,
        },

        Some(Modal::Error { .. } | Modal::Help) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },

        None => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{main_page, CardFile, EditorSession};
    use crate::model::FieldInput;
    use crossterm::event::KeyEventState;
    use extended_gauge_core::traits::InMemoryEntityStore;
    use tempfile::TempDir;

    async fn app(tmp: &TempDir) -> App {
        let file = CardFile::new(tmp.path().join("card.json"));
        let session = EditorSession::start(
            main_page().unwrap(),
            serde_json::json!({}).into(),
            InMemoryEntityStore::new(),
            file,
        )
        .await;
        App::new(session)
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[tokio::test]
    async fn global_keys() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;

        let msg = handle_event(press(KeyCode::Char('s'), KeyModifiers::CONTROL), &app);
        assert!(matches!(msg, AppMessage::Save));
        let msg = handle_event(press(KeyCode::Char('?'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::ShowHelp));
        let msg = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::GoBack));
        let msg = handle_event(press(KeyCode::Up, KeyModifiers::ALT), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::MoveUp)));
        let msg = handle_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::SelectNext)));
    }

    #[tokio::test]
    async fn releases_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;

        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(handle_event(Event::Key(release), &app), AppMessage::Noop));
    }

    #[tokio::test]
    async fn open_field_editor_takes_typed_characters() {
        let tmp = TempDir::new().unwrap();
        let mut app = app(&tmp).await;
        app.modal
            .show_field_editor("main", "min_value", "min", FieldInput::Text(String::new()));

        let msg = handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Input('q'))));
        let msg = handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Input('A'))));
        let msg = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Close)));
    }

    #[tokio::test]
    async fn choice_editor_cycles_with_space() {
        let tmp = TempDir::new().unwrap();
        let mut app = app(&tmp).await;
        app.modal.show_field_editor(
            "main",
            "show_needle",
            "needle",
            FieldInput::Boolean(false),
        );

        let msg = handle_event(press(KeyCode::Char(' '), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::NextOption)));
        let msg = handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Noop));
    }
}
