//! Internationalisation (i18n)
//!
//! Fixed UI texts are plain Rust structs, checked at compile time. Card texts
//! (labels and errors named by the site structure) are looked up by key with
//! [`localize`], falling back to English and then to the key itself.

use std::sync::atomic::{AtomicUsize, Ordering};

mod de_de;
mod en_us;
pub mod keys;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (US)
    #[default]
    EnUs,
    /// German (Germany)
    DeDe,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::DeDe]
    }

    /// Name of the language in the language itself
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::DeDe => "Deutsch",
        }
    }

    /// BCP 47 code
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::DeDe => "de-DE",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en_US" | "en" => Some(Language::EnUs),
            "de-DE" | "de_DE" | "de" => Some(Language::DeDe),
            _ => None,
        }
    }

    /// Next language, for cycling
    #[must_use]
    pub fn next(self) -> Language {
        let all = Self::all();
        let position = all.iter().position(|lang| *lang == self).unwrap_or(0);
        all[(position + 1) % all.len()]
    }

    fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::DeDe => &de_de::TRANSLATIONS,
        }
    }
}

/// Current language index
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// Texts of the current language
///
/// # Example
///
/// ```ignore
/// let text = t().common.cancel; // "Cancel" or "Abbrechen"
/// ```
pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::DeDe => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::DeDe,
        _ => Language::EnUs,
    }
}

/// Card text for a dotted key such as `editor.min_value`
pub fn localize(key: &str) -> String {
    localize_in(current_language(), key)
}

fn localize_in(lang: Language, key: &str) -> String {
    let lookup = |translations: &'static Translations| {
        translations
            .card
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    };
    lookup(lang.translations())
        .or_else(|| lookup(Language::EnUs.translations()))
        .unwrap_or(key)
        .to_string()
}
