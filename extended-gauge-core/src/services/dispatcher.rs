//! Page renderer / section dispatcher
//!
//! Builds the [`PageView`] of the current frame. Form and custom sections are
//! validated while rendering, so the frame's error maps always describe the data
//! on screen.

use std::sync::Arc;

use crate::traits::EditorHooks;
use crate::types::{
    ConfigValue, CustomView, ElementListView, ElementRow, EntityView, ErrorMap, FormView,
    MenuView, Page, PageSection, PageView, SectionKind, SectionView, DEFAULT_MENU_ICON,
};

use super::element_list::ElementList;
use super::navigation::{Frame, NavigationStack};

/// Render the current page; `None` before the stack was seeded
pub fn render_page(stack: &mut NavigationStack, hooks: &dyn EditorHooks) -> Option<PageView> {
    let depth = stack.depth();
    let path = stack.current_path();
    let page_name = stack.page_name().to_string();
    let frame = stack.current_mut()?;
    let page = Arc::clone(&frame.page);

    let sections = page
        .sections
        .iter()
        .map(|section| render_section(frame, &page_name, section, hooks))
        .collect();

    Some(PageView {
        header: page_header(&page, frame.is_add, hooks),
        can_go_back: depth > 1,
        depth,
        path,
        sections,
    })
}

/// Localised page title, the alternative title while a row is being added
pub fn page_header(page: &Page, is_add: Option<bool>, hooks: &dyn EditorHooks) -> Option<String> {
    let title = page.title.as_deref().filter(|t| !t.trim().is_empty())?;
    let text = if is_add == Some(true) {
        page.alternative_title.as_deref().unwrap_or(title)
    } else {
        title
    };
    Some(hooks.localize_text(text))
}

fn render_section(
    frame: &mut Frame,
    page_name: &str,
    section: &PageSection,
    hooks: &dyn EditorHooks,
) -> SectionView {
    match section.kind {
        SectionKind::Menu => SectionView::Menu(MenuView {
            name: section.name.clone(),
            header: hooks.localize_text(section_title(section)),
            icon: section
                .icon
                .clone()
                .unwrap_or_else(|| DEFAULT_MENU_ICON.to_string()),
        }),
        SectionKind::Form => {
            let data = frame.section_data(&section.name);
            validate_section(frame, page_name, section, &data, hooks);
            SectionView::Form(form_view(frame, section, data, hooks))
        }
        SectionKind::Entity => {
            let data = frame.section_data(&section.name);
            SectionView::Entity(EntityView {
                form: form_view(frame, section, data, hooks),
                can_edit: section.link.is_some(),
            })
        }
        SectionKind::ElementList => {
            SectionView::ElementList(element_list_view(frame, section, hooks))
        }
        SectionKind::Custom => {
            let data = frame.section_data(&section.name);
            validate_section(frame, page_name, section, &data, hooks);
            let errors = frame.section_errors(&section.name);
            let content = hooks.render_custom(section, &data, &errors);
            SectionView::Custom(CustomView {
                name: section.name.clone(),
                data,
                errors: localize_errors(&errors, hooks),
                content,
            })
        }
    }
}

/// Run the validation hook and store its error map on the frame
pub(crate) fn validate_section(
    frame: &mut Frame,
    page_name: &str,
    section: &PageSection,
    data: &ConfigValue,
    hooks: &dyn EditorHooks,
) -> bool {
    let mut errors = ErrorMap::new();
    let valid = hooks.validate_form(page_name, section, data, &mut errors);
    frame.errors.insert(section.name.clone(), errors);
    valid
}

fn section_title(section: &PageSection) -> &str {
    section
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(&section.name)
}

fn localize_errors(errors: &ErrorMap, hooks: &dyn EditorHooks) -> ErrorMap {
    errors
        .iter()
        .map(|(field, key)| (field.clone(), hooks.localize_error(key)))
        .collect()
}

fn form_view(
    frame: &Frame,
    section: &PageSection,
    data: ConfigValue,
    hooks: &dyn EditorHooks,
) -> FormView {
    FormView {
        name: section.name.clone(),
        schema: section.resolve_schema(&data),
        errors: localize_errors(&frame.section_errors(&section.name), hooks),
        data,
    }
}

fn element_list_view(
    frame: &Frame,
    section: &PageSection,
    hooks: &dyn EditorHooks,
) -> ElementListView {
    let list = ElementList::from_value(&frame.section_data(&section.name));
    let add_new_key = section
        .link
        .as_ref()
        .and_then(|page| page.alternative_title.as_deref())
        .unwrap_or_default();

    ElementListView {
        name: section.name.clone(),
        title: hooks.localize_text(section_title(section)),
        empty_text: hooks.localize_text(section.alternative_title.as_deref().unwrap_or_default()),
        add_new_text: hooks.localize_text(add_new_key),
        sortable: list.is_sortable(section.sortable),
        rows: list
            .elements()
            .iter()
            .enumerate()
            .map(|(index, element)| ElementRow {
                index,
                id: element.get("id").and_then(ConfigValue::as_i64),
                text: ElementList::row_text(element),
            })
            .collect(),
        can_add: list.can_add(),
    }
}
