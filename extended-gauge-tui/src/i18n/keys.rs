//! Translation key definitions
//!
//! Every fixed UI text lives in a struct field, so a missing translation is a
//! compile error.
//!
//! ## Grouping
//!
//! 1. **By UI location**: a text belongs to the component it appears in
//! 2. **Modal contents go to `modal.*`**
//! 3. **Shared words go to `common.*`**
//! 4. **Key names and actions go to `hints.*`**
//! 5. **Card texts** (labels and errors of the page tree) are looked up by
//!    dotted key in `card`, because their keys come from the site structure

/// Root of all translation texts
pub struct Translations {
    /// Shared words
    pub common: CommonTexts,
    /// Key hints (key names + action words)
    pub hints: HintTexts,
    /// Editor page texts
    pub editor: EditorTexts,
    /// Modal contents
    pub modal: ModalTexts,
    /// Status bar messages
    pub status_bar: StatusBarTexts,
    /// Help modal
    pub help: HelpTexts,
    /// Card texts by dotted key (`editor.*`, `error.*`)
    pub card: &'static [(&'static str, &'static str)],
}

// ============================================================================
// Shared texts
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub none: &'static str,
    pub cancel: &'static str,
    pub remove: &'static str,
    pub error: &'static str,
}

// ============================================================================
// Key hints
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub space: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
    pub save: &'static str,      // "Ctrl+s"
    pub remove: &'static str,    // "Alt+d"
    pub reorder: &'static str,   // "Alt+↑↓"
    pub quit: &'static str,      // "q"
}

pub struct ActionTexts {
    pub select: &'static str,
    pub open: &'static str,
    pub edit: &'static str,
    pub toggle: &'static str,
    pub switch_option: &'static str,
    pub remove: &'static str,
    pub reorder: &'static str,
    pub back: &'static str,
    pub save: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// Editor page
// ============================================================================

pub struct EditorTexts {
    /// Header of pages without a title
    pub main_page: &'static str,
    /// Link row of entity sections
    pub edit_settings: &'static str,
    /// Shown in place of an unset value
    pub not_set: &'static str,
    /// Add row while the last row has no title
    pub add_disabled: &'static str,
    pub untitled_row: &'static str,
    pub empty_page: &'static str,
    pub modified: &'static str,
    pub breadcrumb: &'static str,
}

// ============================================================================
// Modals
// ============================================================================

pub struct ModalTexts {
    pub edit_field: EditFieldTexts,
    pub confirm_remove: ConfirmRemoveTexts,
}

pub struct EditFieldTexts {
    pub title: &'static str,
    pub invalid_number: &'static str,
    pub invalid_color: &'static str,
    pub range: &'static str,
    pub no_choices: &'static str,
}

pub struct ConfirmRemoveTexts {
    pub title: &'static str,
    pub message: &'static str,
}

// ============================================================================
// Status bar
// ============================================================================

pub struct StatusBarTexts {
    pub saved: &'static str,
    pub save_failed: &'static str,
    pub removed: &'static str,
    pub removal_vetoed: &'static str,
    pub add_disabled: &'static str,
    pub unsaved_quit: &'static str,
}

// ============================================================================
// Help
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    /// (key, description) rows
    pub entries: &'static [(&'static str, &'static str)],
}
