//! Path addressing into the configuration graph

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step from a container to one of its children
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl PathStep {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }
}

/// Absolute location of a value, starting at the configuration root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigPath(Vec<PathStep>);

impl ConfigPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: PathStep) {
        self.0.push(step);
    }

    /// Copy of this path extended by one step
    #[must_use]
    pub fn child(&self, step: PathStep) -> Self {
        let mut path = self.clone();
        path.push(step);
        path
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathStep>> for ConfigPath {
    fn from(steps: Vec<PathStep>) -> Self {
        Self(steps)
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Key(key) if i == 0 => write!(f, "{key}")?,
                PathStep::Key(key) => write!(f, ".{key}")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mixes_keys_and_indexes() {
        let path = ConfigPath::from(vec![
            PathStep::key("segment_list"),
            PathStep::Index(0),
            PathStep::key("title"),
        ]);
        assert_eq!(path.to_string(), "segment_list[0].title");
        assert_eq!(ConfigPath::root().to_string(), "");
    }

    #[test]
    fn child_leaves_parent_untouched() {
        let parent = ConfigPath::root().child(PathStep::key("entity"));
        let child = parent.child(PathStep::key("settings"));
        assert_eq!(parent.len(), 1);
        assert_eq!(child.to_string(), "entity.settings");
    }

    #[test]
    fn serializes_as_plain_array() {
        let path = ConfigPath::from(vec![PathStep::key("segment_list"), PathStep::Index(2)]);
        assert_eq!(
            serde_json::to_value(&path).unwrap(),
            serde_json::json!(["segment_list", 2])
        );
    }
}
