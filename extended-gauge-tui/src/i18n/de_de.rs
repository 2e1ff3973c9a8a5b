//! German translation (de-DE)

use super::keys::{
    ActionTexts, CommonTexts, ConfirmRemoveTexts, EditFieldTexts, EditorTexts, HelpTexts,
    HintTexts, KeyNames, ModalTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Extended Gauge Editor",
        yes: "Ja",
        no: "Nein",
        none: "(keine)",
        cancel: "Abbrechen",
        remove: "Entfernen",
        error: "Fehler",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            space: "Leertaste",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            save: "Strg+s",
            remove: "Alt+d",
            reorder: "Alt+↑↓",
            quit: "q",
        },
        actions: ActionTexts {
            select: "Auswählen",
            open: "Öffnen",
            edit: "Bearbeiten",
            toggle: "Umschalten",
            switch_option: "Wechseln",
            remove: "Entfernen",
            reorder: "Verschieben",
            back: "Zurück",
            save: "Speichern",
            confirm: "Bestätigen",
            cancel: "Abbrechen",
            quit: "Beenden",
        },
    },

    editor: EditorTexts {
        main_page: "Gauge-Karte",
        edit_settings: "Einstellungen bearbeiten",
        not_set: "-",
        add_disabled: "(zuerst der letzten Zeile einen Titel geben)",
        untitled_row: "(ohne Titel)",
        empty_page: "Hier gibt es nichts einzustellen",
        modified: "geändert",
        breadcrumb: "Seiten",
    },

    modal: ModalTexts {
        edit_field: EditFieldTexts {
            title: "Bearbeiten",
            invalid_number: "Keine Zahl",
            invalid_color: "Format #rrggbb, #rgb oder rgb(r, g, b)",
            range: "Bereich",
            no_choices: "Keine passenden Entitäten",
        },
        confirm_remove: ConfirmRemoveTexts {
            title: "Zeile entfernen",
            message: "Diese Zeile entfernen?",
        },
    },

    status_bar: StatusBarTexts {
        saved: "Gespeichert",
        save_failed: "Speichern fehlgeschlagen",
        removed: "Zeile entfernt",
        removal_vetoed: "Zeile behalten",
        add_disabled: "Die letzte Zeile braucht einen Titel",
        unsaved_quit: "Ungespeicherte Änderungen, q erneut drücken zum Beenden",
    },

    help: HelpTexts {
        title: "Hilfe",
        entries: &[
            ("↑↓ / j k", "Auswahl bewegen"),
            ("Pos1 / Ende", "Erste / letzte Zeile"),
            ("Enter", "Seite öffnen, Feld oder Zeile bearbeiten"),
            ("Leertaste", "Schalter umschalten"),
            ("Alt+d", "Listenzeile entfernen"),
            ("Alt+↑↓", "Listenzeile verschieben"),
            ("Esc", "Zurück zur vorigen Seite"),
            ("Strg+s", "Karte speichern"),
            ("Alt+t", "Farbschema wechseln"),
            ("Alt+l", "Sprache wechseln"),
            ("? / Alt+h", "Diese Hilfe"),
            ("q", "Beenden"),
        ],
    },

    card: &[
        ("editor.entity_settings", "Entitätseinstellungen"),
        ("editor.edit_segment", "Segment bearbeiten"),
        ("editor.add_segment", "Segment hinzufügen"),
        ("editor.title", "Titel"),
        ("editor.entity", "Entität"),
        ("editor.main", "Anzeige"),
        ("editor.settings", "Einstellungen"),
        ("editor.segment_list", "Segmente"),
        ("editor.segment_list_empty", "Noch keine Segmente"),
        ("editor.min_value", "Minimalwert"),
        ("editor.max_value", "Maximalwert"),
        ("editor.color_value", "Farbe des Werts"),
        ("editor.color_background", "Hintergrundfarbe"),
        ("editor.show_needle", "Zeiger anzeigen"),
        ("editor.show_entity_name", "Entitätsname anzeigen"),
        ("editor.show_min_max_values", "Minimum und Maximum anzeigen"),
        ("editor.show_segment_labels", "Segmentbeschriftungen anzeigen"),
        ("editor.segment_lower", "Untergrenze"),
        ("editor.segment_upper", "Obergrenze"),
        ("editor.segment_color", "Segmentfarbe"),
        ("editor.segment_value_replacement", "Text statt Wert"),
        ("editor.name", "Name"),
        ("editor.unit_of_measurement", "Maßeinheit"),
        ("editor.conversion_factor", "Umrechnungsfaktor"),
        ("editor.decimals", "Nachkommastellen"),
        ("editor.thousand_separator", "Tausendertrennzeichen"),
        ("editor.decimal_separator", "Dezimaltrennzeichen"),
        ("error.value_lower_greater_than_upper", "Der Minimalwert ist größer als der Maximalwert"),
        ("error.range_lower_greater_than_upper", "Die Untergrenze ist größer als die Obergrenze"),
        ("error.out_of_range", "Wert außerhalb des Bereichs"),
    ],
};
