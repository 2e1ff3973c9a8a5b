//! Copy-on-write propagation of edits down to the configuration root

use crate::error::{CoreError, CoreResult};
use crate::types::{ConfigValue, PathStep};

use super::navigation::NavigationStack;

/// What an edited value replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget<'a> {
    /// The current frame's whole cursor
    Cursor,
    /// One named field of the current frame's page data
    Section(&'a str),
}

/// Write `updated` into the current frame and rebuild every ancestor cursor.
///
/// Each level gets a shallow copy along the edited path; values off the path keep
/// their identity. Cursors are only updated when every level succeeded. Returns
/// the new configuration root.
pub fn commit(
    stack: &mut NavigationStack,
    target: EditTarget<'_>,
    updated: ConfigValue,
) -> CoreResult<ConfigValue> {
    let frames = stack.frames_mut();
    let Some(top) = frames.len().checked_sub(1) else {
        return Err(CoreError::NotInitialized);
    };

    let (start, mut explicit_name) = match target {
        EditTarget::Cursor => (top.checked_sub(1), None),
        EditTarget::Section(name) => (Some(top), Some(name)),
    };

    // New cursors from `start` down to the root
    let mut rebuilt = Vec::with_capacity(top + 1);
    let mut value = updated.clone();
    if let Some(start) = start {
        for i in (0..=start).rev() {
            let frame = &frames[i];
            let name = match explicit_name.take() {
                Some(name) => name,
                None => frame.section_name.as_deref().ok_or_else(|| {
                    CoreError::InvalidPath(format!("frame {i} has no open section"))
                })?,
            };

            let mut steps = Vec::with_capacity(2);
            if let Some(row) = frame.row_index {
                steps.push(PathStep::Index(row));
            }
            steps.push(PathStep::key(name));

            value = frame.cursor.replace_at(&steps, value)?;
            rebuilt.push((i, value.clone()));
        }
    }

    if target == EditTarget::Cursor {
        frames[top].cursor = updated;
    }
    for (i, cursor) in rebuilt {
        frames[i].cursor = cursor;
    }

    log::debug!("Committed edit at depth {}", top + 1);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Page, PageSection, SectionKind};
    use serde_json::json;
    use std::sync::Arc;

    fn stack_with(page: Page, root: serde_json::Value) -> NavigationStack {
        let mut stack = NavigationStack::new();
        stack.seed(Arc::new(page), ConfigValue::from(root));
        stack
    }

    #[test]
    fn section_edit_at_root_shares_siblings() {
        let page = Page::new(vec![
            PageSection::new("a", SectionKind::Form),
            PageSection::new("b", SectionKind::Form),
        ]);
        let mut stack = stack_with(page, json!({ "a": { "x": 1 }, "b": { "y": 2 } }));
        let old_root = stack.root().unwrap().clone();

        let new_root = commit(&mut stack, EditTarget::Section("a"), json!({ "x": 5 }).into()).unwrap();

        assert!(!new_root.ptr_eq(&old_root));
        assert!(new_root.get("b").unwrap().ptr_eq(old_root.get("b").unwrap()));
        assert!(!new_root.get("a").unwrap().ptr_eq(old_root.get("a").unwrap()));
        assert_eq!(new_root.get("a").unwrap().get("x").unwrap().as_i64(), Some(5));
        assert!(stack.root().unwrap().ptr_eq(&new_root));
    }

    #[test]
    fn cursor_edit_in_row_reaches_root() {
        let row_page = Page::new(vec![PageSection::new("f", SectionKind::Form)]);
        let page = Page::new(vec![
            PageSection::new("list", SectionKind::ElementList).with_link(row_page),
            PageSection::new("other", SectionKind::Form),
        ]);
        let mut stack = stack_with(
            page,
            json!({
                "list": [ { "id": 0, "f": { "v": 1 } }, { "id": 1, "f": { "v": 2 } } ],
                "other": { "z": 0 }
            }),
        );
        let old_root = stack.root().unwrap().clone();
        let section = stack.current().unwrap().page.section("list").unwrap().clone();
        stack.push(&section, Some(0), Some(false));

        let top = stack.current().unwrap();
        let new_row = top.page_data().with_key("f", json!({ "v": 9 }).into()).unwrap();
        let new_cursor = top.cursor.with_index(0, new_row).unwrap();
        let new_root = commit(&mut stack, EditTarget::Cursor, new_cursor.clone()).unwrap();

        let old_list = old_root.get("list").unwrap();
        let new_list = new_root.get("list").unwrap();
        assert_eq!(
            new_root.resolve(&[PathStep::key("list"), PathStep::Index(0), PathStep::key("f"), PathStep::key("v")])
                .and_then(ConfigValue::as_i64),
            Some(9)
        );
        assert!(!new_list.ptr_eq(old_list));
        assert!(!new_list.get_index(0).unwrap().ptr_eq(old_list.get_index(0).unwrap()));
        assert!(new_list.get_index(1).unwrap().ptr_eq(old_list.get_index(1).unwrap()));
        assert!(new_root.get("other").unwrap().ptr_eq(old_root.get("other").unwrap()));
        assert!(stack.current().unwrap().cursor.ptr_eq(&new_cursor));
        assert!(new_list.ptr_eq(&new_cursor));
    }

    #[test]
    fn failed_commit_leaves_cursors_alone() {
        let page = Page::new(vec![PageSection::new("a", SectionKind::Form)]);
        let mut stack = stack_with(page, json!("not a record"));
        let before = stack.root().unwrap().clone();

        let err = commit(&mut stack, EditTarget::Section("a"), ConfigValue::Null).unwrap_err();

        assert!(matches!(err, CoreError::InvalidPath(_)));
        assert!(stack.root().unwrap().ptr_eq(&before));
    }

    #[test]
    fn commit_on_empty_stack() {
        let mut stack = NavigationStack::new();
        assert_eq!(
            commit(&mut stack, EditTarget::Cursor, ConfigValue::Null).unwrap_err(),
            CoreError::NotInitialized
        );
    }
}
