//! Element list controller
//!
//! Turns list gestures into [`ElementListChange`] values. Every operation works on
//! a copy of the row sequence; rows themselves are shared, never rebuilt.

use serde::{Deserialize, Serialize};

use crate::types::{ConfigValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Add,
    Edit,
    Remove,
    Move,
}

/// A proposed list change: the new sequence plus the row it concerns
#[derive(Debug, Clone)]
pub struct ElementListChange {
    pub elements: Vec<ConfigValue>,
    pub index: usize,
    pub kind: ChangeKind,
}

impl ElementListChange {
    /// The new sequence as a configuration value
    pub fn to_value(&self) -> ConfigValue {
        ConfigValue::list(self.elements.clone())
    }
}

/// Rows of an element list section
#[derive(Debug, Clone, Default)]
pub struct ElementList {
    elements: Vec<ConfigValue>,
}

impl ElementList {
    /// Wrap a list value; `Null` and non-list values read as an empty list
    pub fn from_value(value: &ConfigValue) -> Self {
        Self {
            elements: value.as_list().map(<[ConfigValue]>::to_vec).unwrap_or_default(),
        }
    }

    pub fn elements(&self) -> &[ConfigValue] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Id for a new row.
    ///
    /// Ids are sorted; the first id that does not follow its predecessor leaves a
    /// gap below it, and that gap is reused. Without gaps the id after the largest
    /// one is returned. When that would overflow, the lowest unused
    /// non-negative id is taken instead.
    pub fn next_id(&self) -> i64 {
        let mut ids: Vec<i64> = self
            .elements
            .iter()
            .filter_map(|element| element.get("id").and_then(ConfigValue::as_i64))
            .collect();
        ids.sort_unstable();

        let gap = ids.windows(2).find_map(|pair| {
            (pair[0].checked_add(1) != Some(pair[1]))
                .then(|| pair[1].checked_sub(1))
                .flatten()
        });
        if let Some(id) = gap {
            return id;
        }
        match ids.last() {
            None => 0,
            Some(max) => max.checked_add(1).unwrap_or_else(|| lowest_unused(&ids)),
        }
    }

    /// Append `{ "id": next_id }`
    pub fn add(&self) -> ElementListChange {
        let mut record = Record::new();
        record.insert("id".to_string(), self.next_id().into());

        let mut elements = self.elements.clone();
        elements.push(ConfigValue::object(record));
        ElementListChange {
            index: elements.len() - 1,
            elements,
            kind: ChangeKind::Add,
        }
    }

    pub fn edit(&self, index: usize) -> Option<ElementListChange> {
        (index < self.elements.len()).then(|| ElementListChange {
            elements: self.elements.clone(),
            index,
            kind: ChangeKind::Edit,
        })
    }

    pub fn remove(&self, index: usize) -> Option<ElementListChange> {
        if index >= self.elements.len() {
            return None;
        }
        let mut elements = self.elements.clone();
        elements.remove(index);
        Some(ElementListChange {
            elements,
            index,
            kind: ChangeKind::Remove,
        })
    }

    /// Take the row at `old_index` out and insert it at `new_index` of the
    /// shortened sequence
    pub fn move_element(&self, old_index: usize, new_index: usize) -> Option<ElementListChange> {
        if old_index == new_index
            || old_index >= self.elements.len()
            || new_index >= self.elements.len()
        {
            return None;
        }
        let mut elements = self.elements.clone();
        let element = elements.remove(old_index);
        elements.insert(new_index, element);
        Some(ElementListChange {
            elements,
            index: 0,
            kind: ChangeKind::Move,
        })
    }

    /// Display text of a row: its `title.title` field
    pub fn row_text(element: &ConfigValue) -> String {
        element
            .get("title")
            .and_then(|title| title.get("title"))
            .and_then(ConfigValue::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// A new row may only be added once the last row has a title
    pub fn can_add(&self) -> bool {
        self.elements
            .last()
            .is_none_or(|last| !Self::row_text(last).trim().is_empty())
    }

    /// Reordering only makes sense with more than one row
    pub fn is_sortable(&self, sortable: bool) -> bool {
        sortable && self.elements.len() > 1
    }
}

/// `ids` must be sorted
fn lowest_unused(ids: &[i64]) -> i64 {
    (0..i64::MAX)
        .find(|id| ids.binary_search(id).is_err())
        .unwrap_or_default()
}
