//! Editor session
//!
//! [`ConfigEditor`] ties the pieces together for one open editor: it owns the
//! navigation stack, calls the host hooks, commits edits through the propagation
//! engine and reports every new root to the [`ConfigListener`].

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{
    BusEvent, ConfigListener, EditorHooks, EventBus, EventCallback, Subscription,
    CONFIG_SAVED_EVENT,
};
use crate::types::{ConfigValue, Page, PageSection, PageView, SectionKind};

use super::dispatcher::{render_page, validate_section};
use super::element_list::{ChangeKind, ElementList, ElementListChange};
use super::navigation::NavigationStack;
use super::propagation::{commit, EditTarget};

/// One editing session over a card configuration
pub struct ConfigEditor {
    main_page: Arc<Page>,
    stack: NavigationStack,
    hooks: Arc<dyn EditorHooks>,
    listener: Arc<dyn ConfigListener>,
    subscription: Option<Subscription>,
}

impl ConfigEditor {
    pub fn new(
        main_page: Arc<Page>,
        hooks: Arc<dyn EditorHooks>,
        listener: Arc<dyn ConfigListener>,
    ) -> Self {
        Self {
            main_page,
            stack: NavigationStack::new(),
            hooks,
            listener,
            subscription: None,
        }
    }

    /// Supply the host's current configuration.
    ///
    /// The first call binds the root page. Later calls ignore a root identical to
    /// the one the editor already holds, and otherwise rebind every open page to
    /// the new root.
    pub fn set_config(&mut self, config: ConfigValue) {
        match self.stack.root() {
            None => {
                log::debug!("Editor seeded with configuration");
                self.stack.seed(Arc::clone(&self.main_page), config);
            }
            Some(root) if root.ptr_eq(&config) => {}
            Some(_) => self.stack.rebase(config),
        }
    }

    /// Current configuration root
    pub fn config(&self) -> Option<&ConfigValue> {
        self.stack.root()
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn hooks(&self) -> &Arc<dyn EditorHooks> {
        &self.hooks
    }

    /// Render model of the current page
    pub fn render(&mut self) -> Option<PageView> {
        render_page(&mut self.stack, self.hooks.as_ref())
    }

    fn current_section(&self, name: &str) -> CoreResult<PageSection> {
        let frame = self.stack.current().ok_or(CoreError::NotInitialized)?;
        frame
            .page
            .section(name)
            .cloned()
            .ok_or_else(|| CoreError::SectionNotFound(name.to_string()))
    }

    /// Data of a section on the current page
    pub fn section_data(&self, name: &str) -> CoreResult<ConfigValue> {
        self.current_section(name)?;
        let frame = self.stack.current().ok_or(CoreError::NotInitialized)?;
        Ok(frame.section_data(name))
    }

    /// Rows of an element list section on the current page
    pub fn element_list(&self, name: &str) -> CoreResult<ElementList> {
        self.section_data(name)
            .map(|data| ElementList::from_value(&data))
    }

    /// Open the page linked from a section of the current page.
    ///
    /// Returns `false` when the section has no link.
    pub fn open_section(&mut self, name: &str) -> CoreResult<bool> {
        let section = self.current_section(name)?;
        Ok(self.stack.push(&section, None, None))
    }

    /// Return to the previous page; `false` on the root page
    pub fn go_back(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    /// Store a new value for one form section of the current page.
    ///
    /// The section is validated first; only valid data passes through the
    /// `value_changed` hook, but the data is committed either way. Returns the new
    /// configuration root.
    pub fn update_form_values(&mut self, name: &str, value: ConfigValue) -> CoreResult<ConfigValue> {
        let section = self.current_section(name)?;
        let page_name = self.stack.page_name().to_string();
        let frame = self.stack.current_mut().ok_or(CoreError::NotInitialized)?;

        let page_data = frame.page_data();
        let previous = page_data
            .get(name)
            .filter(|old| !old.is_null())
            .cloned()
            .unwrap_or_else(ConfigValue::empty_object);
        let mut page_data = page_data.with_key(name, value.clone())?;

        if validate_section(frame, &page_name, &section, &value, self.hooks.as_ref()) {
            page_data = self
                .hooks
                .value_changed(&page_name, page_data, name, &value, &previous);
        } else {
            log::debug!("Section {name} is invalid, derived values skipped");
        }

        let cursor = match frame.row_index {
            Some(row) => frame.cursor.with_index(row, page_data)?,
            None => page_data,
        };
        let root = commit(&mut self.stack, EditTarget::Cursor, cursor)?;
        self.listener.config_changed(&root);
        Ok(root)
    }

    /// Apply a list change produced by [`ElementList`] for a section of the current page.
    ///
    /// Returns the new root for committed changes and `None` for navigation only
    /// (`Edit`) or a vetoed removal.
    pub fn apply_list_change(
        &mut self,
        name: &str,
        change: ElementListChange,
    ) -> CoreResult<Option<ConfigValue>> {
        let section = self.current_section(name)?;
        if section.kind != SectionKind::ElementList {
            return Err(CoreError::NotAnElementList(name.to_string()));
        }
        let ElementListChange {
            mut elements,
            index,
            kind,
        } = change;
        let len = elements.len();

        match kind {
            ChangeKind::Add => {
                let element = elements
                    .get(index)
                    .cloned()
                    .ok_or(CoreError::RowOutOfRange { index, len })?;
                elements[index] = self.hooks.list_element_added(name, element);

                let root = self.commit_list(name, elements)?;
                self.stack.push(&section, Some(index), Some(true));
                Ok(Some(root))
            }
            ChangeKind::Edit => {
                if index >= len {
                    return Err(CoreError::RowOutOfRange { index, len });
                }
                self.stack.push(&section, Some(index), Some(false));
                Ok(None)
            }
            ChangeKind::Remove => {
                let current = self.element_list(name)?;
                let removed = current
                    .elements()
                    .get(index)
                    .cloned()
                    .ok_or(CoreError::RowOutOfRange {
                        index,
                        len: current.len(),
                    })?;
                if !self.hooks.list_element_removing(name, &removed) {
                    log::debug!("Removal of {name}[{index}] vetoed");
                    return Ok(None);
                }
                self.commit_list(name, elements).map(Some)
            }
            ChangeKind::Move => self.commit_list(name, elements).map(Some),
        }
    }

    fn commit_list(&mut self, name: &str, elements: Vec<ConfigValue>) -> CoreResult<ConfigValue> {
        let root = commit(
            &mut self.stack,
            EditTarget::Section(name),
            ConfigValue::list(elements),
        )?;
        self.listener.config_changed(&root);
        Ok(root)
    }

    /// Subscribe to the host's "configuration saved" event.
    ///
    /// A failed subscription is logged and the editor keeps working without it.
    pub async fn attach(&mut self, bus: &dyn EventBus) {
        self.detach();

        let hooks = Arc::clone(&self.hooks);
        let callback: EventCallback = Arc::new(move |event: &BusEvent| {
            if event.event_type == CONFIG_SAVED_EVENT {
                hooks.config_saved();
            }
        });

        match bus.subscribe(CONFIG_SAVED_EVENT, callback).await {
            Ok(subscription) => self.subscription = Some(subscription),
            Err(e) => log::error!("Error while subscribing to the {CONFIG_SAVED_EVENT} event: {e}"),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Drop the saved-event subscription, if any
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl Drop for ConfigEditor {
    fn drop(&mut self) {
        self.detach();
    }
}
