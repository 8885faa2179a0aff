//! Explicit frame scheduling.
//!
//! The host owns the clock; the scheduler only hands out handles for "the
//! next frame" and remembers which one is live. The host asks for the
//! pending handle when its frame timer fires and passes it back into the
//! game. A handle that has been cancelled or already claimed is stale and
//! runs nothing.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    pending: Option<TickHandle>,
    issued: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the next tick. Calling this while a tick is already pending
    /// returns the existing handle rather than queueing a second one.
    pub fn start(&mut self) -> TickHandle {
        if let Some(handle) = self.pending {
            return handle;
        }
        self.issued += 1;
        let handle = TickHandle(self.issued);
        self.pending = Some(handle);
        handle
    }

    /// Cancel the pending tick, if any. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.pending = None;
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    /// Consume `handle` if it is the live one. The caller must `start`
    /// again to keep the loop going.
    pub fn claim(&mut self, handle: TickHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
