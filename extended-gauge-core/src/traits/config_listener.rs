//! Configuration changed notification Trait

use tokio::sync::mpsc;

use crate::types::ConfigValue;

/// Receives the new configuration root after every committed edit
///
/// Navigation (opening a page, going back) never produces a notification.
pub trait ConfigListener: Send + Sync {
    fn config_changed(&self, config: &ConfigValue);
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConfigListener;

impl ConfigListener for NoopConfigListener {
    fn config_changed(&self, _config: &ConfigValue) {}
}

/// Forwards every new root into an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelConfigListener {
    tx: mpsc::UnboundedSender<ConfigValue>,
}

impl ChannelConfigListener {
    /// Create a listener together with the receiving end of its channel
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ConfigValue>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ConfigListener for ChannelConfigListener {
    fn config_changed(&self, config: &ConfigValue) {
        if self.tx.send(config.clone()).is_err() {
            log::debug!("Configuration receiver dropped, change not forwarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_listener_forwards_shared_root() {
        let (listener, mut rx) = ChannelConfigListener::new();
        let root = ConfigValue::empty_object();

        listener.config_changed(&root);

        let received = rx.try_recv().unwrap();
        assert!(received.ptr_eq(&root));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn channel_listener_survives_closed_receiver() {
        let (listener, rx) = ChannelConfigListener::new();
        drop(rx);
        listener.config_changed(&ConfigValue::Null);
    }
}
