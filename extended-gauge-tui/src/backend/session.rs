//! Editing session
//!
//! Wraps one [`ConfigEditor`] with everything the terminal host keeps around it:
//! the card file, the entity states, the change channel and the event bus on
//! which saves are announced.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use extended_gauge_core::traits::{
    BusEvent, ChannelConfigListener, InMemoryEntityStore, InMemoryEventBus, CONFIG_SAVED_EVENT,
};
use extended_gauge_core::{ConfigEditor, ConfigValue, EditorHooks, EntityStore, EventBus, Page};
use tokio::sync::mpsc::UnboundedReceiver;

use super::{default_config, load_entity_store, main_page, CardFile, GaugeEditorHooks};

pub struct EditorSession {
    editor: ConfigEditor,
    changes: UnboundedReceiver<ConfigValue>,
    bus: InMemoryEventBus,
    hooks: Arc<GaugeEditorHooks>,
    entities: Arc<InMemoryEntityStore>,
    card_file: CardFile,
    dirty: bool,
}

impl EditorSession {
    /// Open the card file (or a new card) with optional entity states
    pub async fn open(card_file: CardFile, states: Option<&Path>) -> Result<Self> {
        let entities = load_entity_store(states).await?;
        let (config, dirty) = match card_file.load().await? {
            Some(config) => (config, false),
            None => {
                log::info!(
                    "{} not found, starting from the default card",
                    card_file.path().display()
                );
                (default_config(), true)
            }
        };

        let mut session = Self::start(main_page()?, config, entities, card_file).await;
        session.dirty = dirty;
        Ok(session)
    }

    /// Build a session over an already loaded configuration
    pub async fn start(
        main_page: Arc<Page>,
        config: ConfigValue,
        entities: InMemoryEntityStore,
        card_file: CardFile,
    ) -> Self {
        let entities = Arc::new(entities);
        let hooks = Arc::new(GaugeEditorHooks::new(
            Arc::clone(&entities) as Arc<dyn EntityStore>
        ));
        let (listener, changes) = ChannelConfigListener::new();

        let mut editor = ConfigEditor::new(
            main_page,
            Arc::clone(&hooks) as Arc<dyn EditorHooks>,
            Arc::new(listener),
        );
        editor.set_config(config);

        let bus = InMemoryEventBus::new();
        editor.attach(&bus).await;

        Self {
            editor,
            changes,
            bus,
            hooks,
            entities,
            card_file,
            dirty: false,
        }
    }

    pub fn editor(&self) -> &ConfigEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ConfigEditor {
        &mut self.editor
    }

    pub fn hooks(&self) -> &GaugeEditorHooks {
        &self.hooks
    }

    pub fn entities(&self) -> &dyn EntityStore {
        self.entities.as_ref()
    }

    pub fn path(&self) -> &Path {
        self.card_file.path()
    }

    /// Unsaved changes exist
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Hand every emitted configuration back to the editor, as the host does.
    ///
    /// Returns the number of configurations received.
    pub fn sync_changes(&mut self) -> usize {
        let mut received = 0;
        while let Ok(config) = self.changes.try_recv() {
            self.editor.set_config(config);
            received += 1;
        }
        if received > 0 {
            self.dirty = true;
        }
        received
    }

    /// Write the configuration and announce the save on the bus
    pub async fn save(&mut self) -> Result<()> {
        self.sync_changes();
        let Some(config) = self.editor.config().cloned() else {
            return Ok(());
        };

        self.card_file.save(&config).await?;
        self.dirty = false;
        self.bus.publish(BusEvent::new(CONFIG_SAVED_EVENT)).await?;
        Ok(())
    }
}
