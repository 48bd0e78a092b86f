use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::utils::error::{Result, StorefrontError};

// ============================================================================
// Scoped One-Shot Timers
// ============================================================================
//
// A timer never mutates page state itself. When it fires it posts an event
// into the owning page's channel; the page applies the event on its own
// thread, in delivery order, like any other user action. The task is aborted
// when the timer is cancelled or dropped, so a torn-down page never receives
// a late event.
//
// ============================================================================

#[derive(Debug)]
pub struct OneShotTimer {
    handle: Option<JoinHandle<()>>,
}

impl OneShotTimer {
    /// Schedules `event` to be sent on `tx` after `delay`.
    pub fn schedule<E>(delay: Duration, tx: UnboundedSender<E>, event: E) -> Result<Self>
    where
        E: Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| StorefrontError::RuntimeUnavailable)?;

        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(event).is_err() {
                tracing::debug!("Timer fired after its page was closed");
            }
        });

        Ok(Self {
            handle: Some(handle),
        })
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for OneShotTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A page notification that clears itself after a fixed delay.
///
/// Each `show` bumps a generation counter, and `expire` only clears the
/// message if the generation still matches, so an older timer can never
/// clear a newer message.
#[derive(Debug, Default)]
pub struct TransientMessage {
    text: Option<String>,
    generation: u64,
    timer: Option<OneShotTimer>,
}

impl TransientMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show<E, F>(
        &mut self,
        text: impl Into<String>,
        ttl: Duration,
        tx: &UnboundedSender<E>,
        make_event: F,
    ) -> Result<()>
    where
        E: Send + 'static,
        F: FnOnce(u64) -> E,
    {
        self.generation += 1;
        self.text = Some(text.into());
        // Replacing the timer aborts the previous one.
        self.timer = Some(OneShotTimer::schedule(
            ttl,
            tx.clone(),
            make_event(self.generation),
        )?);
        Ok(())
    }

    /// Returns whether the message was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.text.is_none() {
            return false;
        }
        self.text = None;
        self.timer = None;
        true
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().map(OneShotTimer::is_pending).unwrap_or(false)
    }
}

/// Event channel owned by a page. Timers get clones of the sender; only the
/// page drains the receiver.
#[derive(Debug)]
pub struct PageEvents<E> {
    tx: UnboundedSender<E>,
    rx: UnboundedReceiver<E>,
}

impl<E> Default for PageEvents<E> {
    fn default() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl<E> PageEvents<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender(&self) -> &UnboundedSender<E> {
        &self.tx
    }

    pub fn try_next(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next event, or returns `None` straight away when nothing
    /// is queued and no timer is left to produce one.
    pub async fn next(&mut self, timers_pending: bool) -> Option<E> {
        if let Some(event) = self.try_next() {
            return Some(event);
        }
        if !timers_pending {
            return None;
        }
        self.rx.recv().await
    }
}
