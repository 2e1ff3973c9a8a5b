//! Modal updates

use super::content::{change_list, write_field};
use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::EditField { .. } => handle_edit_field(app, msg),
        Modal::ConfirmRemove { .. } => handle_confirm_remove(app, msg),
        Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

fn handle_edit_field(app: &mut App, msg: ModalMessage) {
    let Some(Modal::EditField {
        ref section,
        ref field,
        ref mut input,
        ref mut error,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => app.modal.close(),

        ModalMessage::NextOption => input.next_option(),
        ModalMessage::PrevOption => input.prev_option(),

        ModalMessage::Input(c) => {
            if input.accepts_text() {
                input.push(c);
                *error = None;
            }
        }

        ModalMessage::Backspace => {
            input.pop();
            *error = None;
        }

        ModalMessage::Confirm => match input.to_value() {
            Ok(value) => {
                let section = section.clone();
                let field = field.clone();
                app.modal.close();
                write_field(app, &section, &field, value);
            }
            Err(e) => *error = Some(e),
        },

        ModalMessage::ToggleRemoveFocus => {}
    }
}

fn handle_confirm_remove(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmRemove {
        ref section,
        index,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => app.modal.close(),

        ModalMessage::ToggleRemoveFocus | ModalMessage::NextOption | ModalMessage::PrevOption => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus != 1 {
                app.modal.close();
                return;
            }

            let section = section.clone();
            app.modal.close();
            match change_list(app, &section, |list| list.remove(index)) {
                Some(Some(_)) => app.set_status(t().status_bar.removed),
                Some(None) => app.set_status(t().status_bar.removal_vetoed),
                None => {}
            }
        }

        ModalMessage::Input(_) | ModalMessage::Backspace => {}
    }
}

fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
