//! Clipboard handling with a timed, cancelable clear.
//!
//! Copying schedules a best-effort clear ~30 seconds later so a password
//! does not linger in the clipboard indefinitely. At most one clear is
//! pending at a time: a new copy supersedes the previous timer. The
//! clear is a UX mitigation, not a security guarantee; if the process
//! exits first, nothing is cleared.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::Error;

/// Delay between a copy and the scheduled clipboard clear.
pub const CLEAR_DELAY: Duration = Duration::from_secs(30);

/// Handle to a scheduled action; dropping or cancelling it stops the
/// action from running.
pub struct ClearHandle {
    cancel: Sender<()>,
}

impl ClearHandle {
    pub fn cancel(self) {
        let _ = self.cancel.send(());
    }
}

/// Run `action` on a background thread after `delay`, unless the
/// returned handle is cancelled (or dropped) first.
pub fn schedule<F>(delay: Duration, action: F) -> ClearHandle
where
    F: FnOnce() + Send + 'static,
{
    let (cancel, rx) = mpsc::channel();

    thread::spawn(move || {
        // Ok(()) is an explicit cancel; Disconnected means the handle
        // was dropped, which also counts as cancellation.
        if let Err(RecvTimeoutError::Timeout) = rx.recv_timeout(delay) {
            action();
        }
    });

    ClearHandle { cancel }
}

/// Platform clipboard with the copy-then-clear lifecycle.
pub struct Clipboard {
    ctx: ClipboardContext,
    pending_clear: Option<ClearHandle>,
}

impl Clipboard {
    pub fn new() -> Result<Self, Error> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { ctx, pending_clear: None })
    }

    /// Copy `text` and schedule the delayed clear, superseding any clear
    /// still pending from an earlier copy.
    pub fn copy(&mut self, text: &str) -> Result<(), Error> {
        self.cancel_pending_clear();

        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;

        // Some providers hand back a copy of what was set; scrub it.
        if let Ok(mut echoed) = self.ctx.get_contents() {
            echoed.zeroize();
        }

        self.pending_clear = Some(schedule(CLEAR_DELAY, || {
            // The clearing thread needs its own context; the owning one
            // is not Send.
            if let Ok(mut ctx) = ClipboardContext::new() {
                let _ = ctx.set_contents(String::new());
            }
        }));

        Ok(())
    }

    /// Drop any pending clear without running it.
    pub fn cancel_pending_clear(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn scheduled_action_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let handle = schedule(Duration::from_millis(30), move || {
            flag.store(true, Ordering::SeqCst);
        });
        assert!(!fired.load(Ordering::SeqCst));

        thread::sleep(Duration::from_millis(300));
        assert!(fired.load(Ordering::SeqCst));
        drop(handle);
    }

    #[test]
    fn cancelled_action_never_fires() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let handle = schedule(Duration::from_millis(30), move || {
            flag.store(true, Ordering::SeqCst);
        });
        handle.cancel();

        thread::sleep(Duration::from_millis(300));
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        drop(schedule(Duration::from_millis(30), move || {
            flag.store(true, Ordering::SeqCst);
        }));

        thread::sleep(Duration::from_millis(300));
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[test]
    fn newer_schedule_supersedes_cancelled_one() {
        let first = Arc::new(AtomicBool::new(false));
        let second = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&first);
        let old = schedule(Duration::from_millis(30), move || {
            flag.store(true, Ordering::SeqCst);
        });
        old.cancel();

        let flag = Arc::clone(&second);
        let _keep = schedule(Duration::from_millis(30), move || {
            flag.store(true, Ordering::SeqCst);
        });

        thread::sleep(Duration::from_millis(300));
        assert!(!first.load(Ordering::SeqCst));
        assert!(second.load(Ordering::SeqCst));
    }
}
