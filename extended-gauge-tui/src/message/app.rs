//! Top-level message

use super::{ContentMessage, ModalMessage};

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit; asks once more while changes are unsaved
    Quit,

    /// Quit without asking
    ForceQuit,

    /// Message for the page panel
    Content(ContentMessage),

    /// Message for the open modal
    Modal(ModalMessage),

    /// Close the modal or return to the previous page
    GoBack,

    /// Write the card file
    Save,

    ShowHelp,

    ToggleTheme,

    /// Switch to the next UI language
    SwitchLanguage,

    ClearStatus,

    /// Unhandled input
    Noop,
}
