//! The redirect boundary: where the flow hands a checkout URL to the runtime
//! environment for full navigation.

use tokio::sync::mpsc;
use url::Url;

/// Receives checkout URLs the donor should be navigated to.
pub trait RedirectBoundary: Send + Sync {
    /// Called while the flow's state lock is held; must not call back into the flow.
    fn navigate(&self, url: &Url);
}

/// Forwards redirect URLs over a channel to whatever owns navigation.
#[derive(Debug, Clone)]
pub struct ChannelRedirect {
    tx: mpsc::UnboundedSender<Url>,
}

impl ChannelRedirect {
    /// Create a boundary and the receiver the embedding runtime listens on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Url>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl RedirectBoundary for ChannelRedirect {
    fn navigate(&self, url: &Url) {
        if self.tx.send(url.clone()).is_err() {
            tracing::warn!(url = %url, "Redirect receiver dropped, navigation not delivered");
        }
    }
}
