//! Page panel messages

#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== Selection ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    /// Open, edit or add, depending on the selected row
    Confirm,

    /// Flip a boolean field in place
    Toggle,

    // ========== List rows ==========
    /// Ask before removing the selected row
    Remove,
    MoveUp,
    MoveDown,
}
