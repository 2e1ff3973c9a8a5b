//! English translation (en-US)

use super::keys::{
    ActionTexts, CommonTexts, ConfirmRemoveTexts, EditFieldTexts, EditorTexts, HelpTexts,
    HintTexts, KeyNames, ModalTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Extended Gauge Editor",
        yes: "Yes",
        no: "No",
        none: "(none)",
        cancel: "Cancel",
        remove: "Remove",
        error: "Error",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            space: "Space",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            save: "Ctrl+s",
            remove: "Alt+d",
            reorder: "Alt+↑↓",
            quit: "q",
        },
        actions: ActionTexts {
            select: "Select",
            open: "Open",
            edit: "Edit",
            toggle: "Toggle",
            switch_option: "Switch",
            remove: "Remove",
            reorder: "Reorder",
            back: "Back",
            save: "Save",
            confirm: "Confirm",
            cancel: "Cancel",
            quit: "Quit",
        },
    },

    editor: EditorTexts {
        main_page: "Gauge card",
        edit_settings: "Edit settings",
        not_set: "-",
        add_disabled: "(give the last row a title first)",
        untitled_row: "(untitled)",
        empty_page: "Nothing to configure here",
        modified: "modified",
        breadcrumb: "Pages",
    },

    modal: ModalTexts {
        edit_field: EditFieldTexts {
            title: "Edit",
            invalid_number: "Not a number",
            invalid_color: "Use #rrggbb, #rgb or rgb(r, g, b)",
            range: "Range",
            no_choices: "No matching entities",
        },
        confirm_remove: ConfirmRemoveTexts {
            title: "Remove row",
            message: "Remove this row?",
        },
    },

    status_bar: StatusBarTexts {
        saved: "Saved",
        save_failed: "Save failed",
        removed: "Row removed",
        removal_vetoed: "Row kept",
        add_disabled: "The last row needs a title before adding another",
        unsaved_quit: "Unsaved changes, press q again to quit",
    },

    help: HelpTexts {
        title: "Help",
        entries: &[
            ("↑↓ / j k", "Move selection"),
            ("Home / End", "First / last row"),
            ("Enter", "Open page, edit field, edit row"),
            ("Space", "Toggle a switch"),
            ("Alt+d", "Remove list row"),
            ("Alt+↑↓", "Move list row"),
            ("Esc", "Back to the previous page"),
            ("Ctrl+s", "Save the card"),
            ("Alt+t", "Switch theme"),
            ("Alt+l", "Switch language"),
            ("? / Alt+h", "This help"),
            ("q", "Quit"),
        ],
    },

    card: &[
        // Pages
        ("editor.entity_settings", "Entity settings"),
        ("editor.edit_segment", "Edit segment"),
        ("editor.add_segment", "Add segment"),
        // Sections
        ("editor.title", "Title"),
        ("editor.entity", "Entity"),
        ("editor.main", "Gauge"),
        ("editor.settings", "Settings"),
        ("editor.segment_list", "Segments"),
        ("editor.segment_list_empty", "No segments yet"),
        // Fields
        ("editor.min_value", "Minimum value"),
        ("editor.max_value", "Maximum value"),
        ("editor.color_value", "Value color"),
        ("editor.color_background", "Background color"),
        ("editor.show_needle", "Show needle"),
        ("editor.show_entity_name", "Show entity name"),
        ("editor.show_min_max_values", "Show minimum and maximum"),
        ("editor.show_segment_labels", "Show segment labels"),
        ("editor.segment_lower", "Lower bound"),
        ("editor.segment_upper", "Upper bound"),
        ("editor.segment_color", "Segment color"),
        ("editor.segment_value_replacement", "Text instead of value"),
        ("editor.name", "Name"),
        ("editor.unit_of_measurement", "Unit of measurement"),
        ("editor.conversion_factor", "Conversion factor"),
        ("editor.decimals", "Decimals"),
        ("editor.thousand_separator", "Thousands separator"),
        ("editor.decimal_separator", "Decimal separator"),
        // Errors
        ("error.value_lower_greater_than_upper", "The minimum value is greater than the maximum value"),
        ("error.range_lower_greater_than_upper", "The lower bound is greater than the upper bound"),
        ("error.out_of_range", "Value out of range"),
    ],
};
