//! Modal messages

#[derive(Debug, Clone)]
pub enum ModalMessage {
    Close,

    /// Apply the field editor or answer the confirmation
    Confirm,

    /// Next choice of a choice or boolean field
    NextOption,

    /// Previous choice of a choice or boolean field
    PrevOption,

    /// Switch between cancel and remove in the confirmation
    ToggleRemoveFocus,

    /// Typed character
    Input(char),

    Backspace,
}
