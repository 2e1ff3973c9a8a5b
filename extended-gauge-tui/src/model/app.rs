//! Application state

use extended_gauge_core::PageView;

use super::{build_rows, ModalState, Row, RowKind};
use crate::backend::EditorSession;
use crate::view::theme::Theme;

pub struct App {
    pub should_quit: bool,

    /// First quit press with unsaved changes
    pub quit_armed: bool,

    pub status_message: Option<String>,

    pub modal: ModalState,

    pub session: EditorSession,

    /// Last rendered page
    pub page: Option<PageView>,

    /// Rows of `page`
    pub rows: Vec<Row>,

    /// Index into `rows`
    pub selected: usize,

    /// Picked up by the main loop, which owns the async save
    pub save_requested: bool,

    pub theme: Theme,
}

impl App {
    pub fn new(session: EditorSession) -> Self {
        let mut app = Self {
            should_quit: false,
            quit_armed: false,
            status_message: None,
            modal: ModalState::new(),
            session,
            page: None,
            rows: Vec::new(),
            selected: 0,
            save_requested: false,
            theme: Theme::default(),
        };
        app.refresh();
        app.select_first();
        app
    }

    /// Re-render the current page from the editor
    pub fn refresh(&mut self) {
        self.page = self.session.editor_mut().render();
        self.rows = match &self.page {
            Some(page) => build_rows(page, self.session.hooks()),
            None => Vec::new(),
        };

        if self.selected >= self.rows.len() {
            self.select_last();
        } else if !self.rows[self.selected].is_selectable() {
            self.select_next();
        }
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.selected).filter(|row| row.is_selectable())
    }

    pub fn select_next(&mut self) {
        if let Some(index) = (self.selected + 1..self.rows.len()).find(|&i| self.rows[i].is_selectable()) {
            self.selected = index;
        } else if !self.rows.get(self.selected).is_some_and(Row::is_selectable) {
            self.select_last();
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(index) = (0..self.selected).rev().find(|&i| self.rows[i].is_selectable()) {
            self.selected = index;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = self.rows.iter().position(Row::is_selectable).unwrap_or(0);
    }

    pub fn select_last(&mut self) {
        self.selected = self
            .rows
            .iter()
            .rposition(Row::is_selectable)
            .unwrap_or(0);
    }

    /// Select the row of list element `index` in `section`, if shown
    pub fn select_element(&mut self, section: &str, index: usize) {
        let position = self.rows.iter().position(|row| {
            row.section == section
                && matches!(row.kind, RowKind::Element { index: i, .. } if i == index)
        });
        if let Some(position) = position {
            self.selected = position;
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CardFile;
    use tempfile::TempDir;

    async fn app(tmp: &TempDir) -> App {
        let file = CardFile::new(tmp.path().join("card.json"));
        App::new(EditorSession::open(file, None).await.unwrap())
    }

    #[tokio::test]
    async fn selection_starts_on_first_selectable_row() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;
        assert_eq!(app.selected, 1);
        assert!(matches!(app.selected_row().unwrap().kind, RowKind::Field { .. }));
    }

    #[tokio::test]
    async fn selection_skips_headings() {
        let tmp = TempDir::new().unwrap();
        let mut app = app(&tmp).await;

        app.select_next();
        // title heading, title field, entity heading, entity field
        assert_eq!(app.selected, 3);
        app.select_previous();
        assert_eq!(app.selected, 1);
        app.select_previous();
        assert_eq!(app.selected, 1);

        app.select_last();
        assert!(matches!(app.selected_row().unwrap().kind, RowKind::AddElement { .. }));
        app.select_next();
        assert!(matches!(app.selected_row().unwrap().kind, RowKind::AddElement { .. }));
    }

    #[tokio::test]
    async fn status_is_set_and_cleared() {
        let tmp = TempDir::new().unwrap();
        let mut app = app(&tmp).await;
        app.set_status("hello");
        assert_eq!(app.status_message.as_deref(), Some("hello"));
        app.clear_status();
        assert!(app.status_message.is_none());
    }
}
