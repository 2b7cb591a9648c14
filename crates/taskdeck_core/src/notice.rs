//! Transient status notice scheduling.
//!
//! # Responsibility
//! - Hold the single currently visible notice with its expiry deadline.
//! - Guarantee a stale expiry never clears a newer message.
//!
//! # Invariants
//! - At most one notice is visible at a time.
//! - Each `notify` mints a new generation; `expire` is a no-op unless its
//!   generation matches the current notice.

use std::time::{Duration, Instant};

/// How long a notice stays visible after being posted.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// A transient status message with its scheduled expiry.
#[derive(Debug, Clone)]
struct Notice {
    message: String,
    generation: u64,
    expires_at: Instant,
}

/// Owner of the single visible notice and its expiry bookkeeping.
///
/// Single-threaded by design: the caller either polls `current()` (the
/// deadline is checked lazily) or drives the scheduled expiry itself by
/// calling `expire` with the generation returned from `notify`.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notice>,
    next_generation: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts `message` as the sole visible notice and restarts the expiry
    /// clock. Returns the generation to hand to `expire`.
    ///
    /// A notice posted while another is pending replaces it; the prior
    /// generation becomes stale and its expiry turns into a no-op.
    pub fn notify(&mut self, message: impl Into<String>) -> u64 {
        self.notify_at(Instant::now(), message)
    }

    /// Deterministic variant of `notify` taking the current time explicitly.
    pub fn notify_at(&mut self, now: Instant, message: impl Into<String>) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.current = Some(Notice {
            message: message.into(),
            generation,
            expires_at: now + NOTICE_TTL,
        });
        generation
    }

    /// Scheduled-expiry callback for the notice of `generation`.
    ///
    /// Returns whether a notice was cleared. A mismatched generation means
    /// a newer notice replaced the one this expiry was scheduled for.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(notice) if notice.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the visible notice, clearing it first if its deadline passed.
    pub fn current(&mut self) -> Option<&str> {
        self.current_at(Instant::now())
    }

    /// Deterministic variant of `current` taking the current time explicitly.
    pub fn current_at(&mut self, now: Instant) -> Option<&str> {
        if let Some(notice) = &self.current {
            if now >= notice.expires_at {
                self.current = None;
            }
        }
        self.current.as_ref().map(|notice| notice.message.as_str())
    }

    /// Drops the visible notice unconditionally.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
