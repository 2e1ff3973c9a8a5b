//! Modal state

use extended_gauge_core::types::{SchemaField, Selector};
use extended_gauge_core::{ConfigValue, EntityStore};

use crate::util::{hex_to_rgb, rgb_to_hex};

/// Input held by the field editor, one variant per selector family
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Number {
        buffer: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    Boolean(bool),
    /// Entity and select fields; an empty option clears the field
    Choice {
        options: Vec<String>,
        index: usize,
    },
    /// Color as `#rrggbb`
    Color(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInputError {
    InvalidNumber,
    InvalidColor,
}

impl FieldInput {
    /// Editor state for the current value of a field
    pub fn for_field(field: &SchemaField, value: &ConfigValue, entities: &dyn EntityStore) -> Self {
        let text = || match value {
            ConfigValue::Null => String::new(),
            ConfigValue::String(s) => s.clone(),
            other => other.to_string(),
        };

        match &field.selector {
            Selector::Text {} => Self::Text(text()),
            Selector::Number { min, max, .. } => Self::Number {
                buffer: text(),
                min: *min,
                max: *max,
            },
            Selector::Boolean {} => Self::Boolean(value.as_bool().unwrap_or(false)),
            Selector::Entity { filter } => {
                let mut options = vec![String::new()];
                options.extend(
                    entities
                        .entity_ids()
                        .into_iter()
                        .filter(|id| filter.matches(id)),
                );
                Self::choice(options, value.as_str())
            }
            Selector::Select { options } => Self::choice(options.clone(), value.as_str()),
            Selector::ColorRgb {} => Self::Color(rgb_to_hex(value).unwrap_or_default()),
        }
    }

    /// Choice positioned on `current`, which is added when it is not offered
    fn choice(mut options: Vec<String>, current: Option<&str>) -> Self {
        let index = match current {
            Some(current) => match options.iter().position(|o| o == current) {
                Some(index) => index,
                None => {
                    options.push(current.to_string());
                    options.len() - 1
                }
            },
            None => 0,
        };
        Self::Choice { options, index }
    }

    /// Whether typed characters go into the input
    pub fn accepts_text(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Number { .. } | Self::Color(_))
    }

    pub fn push(&mut self, c: char) {
        match self {
            Self::Text(buffer) | Self::Number { buffer, .. } | Self::Color(buffer) => buffer.push(c),
            Self::Boolean(_) | Self::Choice { .. } => {}
        }
    }

    pub fn pop(&mut self) {
        match self {
            Self::Text(buffer) | Self::Number { buffer, .. } | Self::Color(buffer) => {
                buffer.pop();
            }
            Self::Boolean(_) | Self::Choice { .. } => {}
        }
    }

    pub fn next_option(&mut self) {
        match self {
            Self::Boolean(on) => *on = !*on,
            Self::Choice { options, index } if !options.is_empty() => {
                *index = (*index + 1) % options.len();
            }
            _ => {}
        }
    }

    pub fn prev_option(&mut self) {
        match self {
            Self::Boolean(on) => *on = !*on,
            Self::Choice { options, index } if !options.is_empty() => {
                *index = index.checked_sub(1).unwrap_or(options.len() - 1);
            }
            _ => {}
        }
    }

    /// Value to store; `None` removes the field from its section
    pub fn to_value(&self) -> Result<Option<ConfigValue>, FieldInputError> {
        match self {
            Self::Text(text) => Ok(Some(text.clone().into()).filter(|_| !text.is_empty())),
            Self::Number { buffer, .. } => {
                let buffer = buffer.trim();
                if buffer.is_empty() {
                    return Ok(None);
                }
                let number: f64 = buffer
                    .parse()
                    .map_err(|_| FieldInputError::InvalidNumber)?;
                if !number.is_finite() {
                    return Err(FieldInputError::InvalidNumber);
                }
                Ok(Some(match buffer.parse::<i64>() {
                    Ok(integer) => integer.into(),
                    Err(_) => number.into(),
                }))
            }
            Self::Boolean(on) => Ok(Some((*on).into())),
            Self::Choice { options, index } => Ok(options
                .get(*index)
                .filter(|option| !option.is_empty())
                .map(|option| option.as_str().into())),
            Self::Color(text) => {
                if text.trim().is_empty() {
                    return Ok(None);
                }
                let rgb = hex_to_rgb(text).ok_or(FieldInputError::InvalidColor)?;
                Ok(Some(ConfigValue::list(
                    rgb.iter().map(|c| i64::from(*c).into()).collect(),
                )))
            }
        }
    }
}

/// Modal kinds
#[derive(Debug, Clone)]
pub enum Modal {
    /// Edit one field of a form section
    EditField {
        section: String,
        field: String,
        /// Localised field label
        label: String,
        input: FieldInput,
        error: Option<FieldInputError>,
    },
    /// Confirm removal of a list row
    ConfirmRemove {
        section: String,
        index: usize,
        text: String,
        /// 0 = cancel, 1 = remove
        focus: usize,
    },
    Error {
        title: String,
        message: String,
    },
    Help,
}

#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_field_editor(&mut self, section: &str, field: &str, label: &str, input: FieldInput) {
        self.show(Modal::EditField {
            section: section.to_string(),
            field: field.to_string(),
            label: label.to_string(),
            input,
            error: None,
        });
    }

    pub fn show_confirm_remove(&mut self, section: &str, index: usize, text: &str) {
        self.show(Modal::ConfirmRemove {
            section: section.to_string(),
            index,
            text: text.to_string(),
            focus: 0,
        });
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }
}
