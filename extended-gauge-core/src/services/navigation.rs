//! Navigation stack
//!
//! Each [`Frame`] binds one page template to a location in the configuration
//! graph. Frame `i` edits the value found by following the section name recorded
//! on frame `i - 1` (after its row index, if any) from frame `i - 1`'s cursor.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::types::{ConfigPath, ConfigValue, ErrorMap, Page, PageSection, PathStep};

/// One displayed page and the data it edits
#[derive(Debug, Clone)]
pub struct Frame {
    pub page: Arc<Page>,
    /// Value this frame edits; a list when `row_index` is set
    pub cursor: ConfigValue,
    pub row_index: Option<usize>,
    /// Section last opened from this frame
    pub section_name: Option<String>,
    /// `Some(true)` while creating a row, `Some(false)` while editing one
    pub is_add: Option<bool>,
    /// Validation errors per section name
    pub errors: BTreeMap<String, ErrorMap>,
}

impl Frame {
    pub fn new(page: Arc<Page>, cursor: ConfigValue) -> Self {
        Self {
            page,
            cursor,
            row_index: None,
            section_name: None,
            is_add: None,
            errors: BTreeMap::new(),
        }
    }

    /// The record the page's sections read from: the cursor, or its selected row
    pub fn page_data(&self) -> ConfigValue {
        match self.row_index {
            Some(row) => self.cursor.get_index(row).cloned().unwrap_or_default(),
            None => self.cursor.clone(),
        }
    }

    /// Data of one section of this page (`Null` when absent)
    pub fn section_data(&self, name: &str) -> ConfigValue {
        self.page_data().get(name).cloned().unwrap_or_default()
    }

    pub fn section_errors(&self, name: &str) -> ErrorMap {
        self.errors.get(name).cloned().unwrap_or_default()
    }
}

/// Stack of open pages, root page at the bottom
#[derive(Debug, Clone, Default)]
pub struct NavigationStack {
    frames: Vec<Frame>,
}

impl NavigationStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over with a single root frame bound to the whole configuration
    pub fn seed(&mut self, page: Arc<Page>, root: ConfigValue) {
        self.frames = vec![Frame::new(page, root)];
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub(crate) fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Configuration root as seen by the bottom frame
    pub fn root(&self) -> Option<&ConfigValue> {
        self.frames.first().map(|frame| &frame.cursor)
    }

    /// Open the page linked from `section`.
    ///
    /// Returns `false` without changing anything when the section has no link or
    /// the stack is empty.
    pub fn push(&mut self, section: &PageSection, row_index: Option<usize>, is_add: Option<bool>) -> bool {
        let Some(link) = section.link.as_ref() else {
            log::debug!("Section {} has no linked page", section.name);
            return false;
        };
        let Some(current) = self.frames.last_mut() else {
            return false;
        };

        current.section_name = Some(section.name.clone());
        let cursor = current.section_data(&section.name);

        let mut child = Frame::new(Arc::clone(link), cursor);
        child.row_index = row_index;
        child.is_add = row_index.and(is_add);
        self.frames.push(child);

        log::debug!("Opened {} (depth {})", self.path_of(self.frames.len() - 1), self.frames.len());
        true
    }

    /// Close the current page; the root page is never removed
    pub fn pop(&mut self) -> Option<Frame> {
        if self.frames.len() <= 1 {
            return None;
        }
        self.frames.pop()
    }

    /// Name of the section through which the current page was reached, empty on the root page
    pub fn page_name(&self) -> &str {
        self.frames
            .len()
            .checked_sub(2)
            .and_then(|i| self.frames[i].section_name.as_deref())
            .unwrap_or_default()
    }

    /// Location of frame `index`'s cursor from the configuration root.
    ///
    /// The path stops before the row index of the frame itself.
    pub fn path_of(&self, index: usize) -> ConfigPath {
        let mut path = ConfigPath::root();
        for frame in self.frames.iter().take(index) {
            if let Some(row) = frame.row_index {
                path.push(PathStep::Index(row));
            }
            if let Some(name) = &frame.section_name {
                path.push(PathStep::key(name.clone()));
            }
        }
        path
    }

    /// Path of the data shown by the current page, row index included
    pub fn current_path(&self) -> ConfigPath {
        let Some(index) = self.frames.len().checked_sub(1) else {
            return ConfigPath::root();
        };
        let path = self.path_of(index);
        match self.frames[index].row_index {
            Some(row) => path.child(PathStep::Index(row)),
            None => path,
        }
    }

    /// Bind every frame to a new configuration root.
    ///
    /// Cursors are found again by replaying the recorded section names and row
    /// indexes. Frames whose row no longer exists are dropped together with
    /// everything above them.
    pub fn rebase(&mut self, root: ConfigValue) {
        let Some(first) = self.frames.first_mut() else {
            return;
        };
        first.cursor = root;

        for i in 1..self.frames.len() {
            let cursor = {
                let parent = &self.frames[i - 1];
                let row_ok = parent
                    .row_index
                    .is_none_or(|row| parent.cursor.get_index(row).is_some());
                match &parent.section_name {
                    Some(name) if row_ok => Some(parent.section_data(name)),
                    _ => None,
                }
            };
            let Some(cursor) = cursor else {
                self.truncate(i);
                return;
            };

            let child = &mut self.frames[i];
            child.cursor = cursor;
            if let Some(row) = child.row_index {
                if child.cursor.get_index(row).is_none() {
                    self.truncate(i);
                    return;
                }
            }
        }
    }

    fn truncate(&mut self, len: usize) {
        log::warn!(
            "Configuration no longer contains {}, closing {} page(s)",
            self.current_path(),
            self.frames.len() - len
        );
        self.frames.truncate(len);
    }
}
