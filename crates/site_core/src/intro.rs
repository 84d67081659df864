//! The one-time intro sequence shown on first visit per browser session.
//!
//! The gate itself is a synchronous one-way state machine; the timers that
//! drive it forward (the deadline and the fade-out) belong to the hosting
//! surface, which must hold them as cancelable handles and clear them on
//! teardown.

use std::time::Duration;

/// How long the intro stays fully visible before the fade begins.
pub const INTRO_DURATION: Duration = Duration::from_secs(10);
/// Length of the fade-out window between `begin_fade` and `complete`.
pub const INTRO_FADE_OUT: Duration = Duration::from_millis(800);
/// Session-storage key for the seen-this-session flag.
pub const INTRO_SEEN_KEY: &str = "kindlight.intro.seen";

/// Session-scoped flag storage. The web frontend backs this with the
/// browser's session storage; tests use an in-memory map.
pub trait SessionStore {
    fn get_flag(&self, key: &str) -> bool;
    fn set_flag(&self, key: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Visible,
    Fading,
    Done,
}

/// One-way machine: `Visible -> Fading -> Done`. When the session flag is
/// already set at construction the gate starts at `Done` and the earlier
/// phases are never visited.
pub struct IntroGate<S> {
    store: S,
    phase: IntroPhase,
}

impl<S: SessionStore> IntroGate<S> {
    pub fn new(store: S) -> Self {
        let phase = if store.get_flag(INTRO_SEEN_KEY) {
            IntroPhase::Done
        } else {
            IntroPhase::Visible
        };
        Self { store, phase }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == IntroPhase::Done
    }

    /// `Visible -> Fading`, driven by the deadline timer. Returns whether the
    /// transition happened; any other phase is a no-op.
    pub fn begin_fade(&mut self) -> bool {
        if self.phase != IntroPhase::Visible {
            return false;
        }
        self.phase = IntroPhase::Fading;
        true
    }

    /// `Fading -> Done`, driven by the fade-out timer. Writes the session
    /// flag, so within this session `Visible` is unreachable from here on.
    pub fn complete(&mut self) -> bool {
        if self.phase != IntroPhase::Fading {
            return false;
        }
        self.phase = IntroPhase::Done;
        self.store.set_flag(INTRO_SEEN_KEY);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct MemorySessionStore {
        flags: Arc<Mutex<BTreeSet<String>>>,
        writes: Arc<Mutex<u32>>,
    }

    impl MemorySessionStore {
        fn preset(key: &str) -> Self {
            let store = Self::default();
            store.flags.lock().expect("flags lock").insert(key.into());
            store
        }

        fn write_count(&self) -> u32 {
            *self.writes.lock().expect("writes lock")
        }
    }

    impl SessionStore for MemorySessionStore {
        fn get_flag(&self, key: &str) -> bool {
            self.flags.lock().expect("flags lock").contains(key)
        }

        fn set_flag(&self, key: &str) {
            self.flags.lock().expect("flags lock").insert(key.into());
            *self.writes.lock().expect("writes lock") += 1;
        }
    }

    #[test]
    fn fresh_session_walks_visible_fading_done() {
        let store = MemorySessionStore::default();
        let mut gate = IntroGate::new(store.clone());

        assert_eq!(gate.phase(), IntroPhase::Visible);
        assert!(gate.begin_fade());
        assert_eq!(gate.phase(), IntroPhase::Fading);
        assert!(gate.complete());
        assert_eq!(gate.phase(), IntroPhase::Done);
        assert!(store.get_flag(INTRO_SEEN_KEY));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn seen_session_starts_done_without_writing() {
        let store = MemorySessionStore::preset(INTRO_SEEN_KEY);
        let mut gate = IntroGate::new(store.clone());

        assert_eq!(gate.phase(), IntroPhase::Done);
        assert!(gate.is_done());
        // Neither timer callback can move a finished gate.
        assert!(!gate.begin_fade());
        assert!(!gate.complete());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn out_of_order_transitions_are_no_ops() {
        let store = MemorySessionStore::default();
        let mut gate = IntroGate::new(store.clone());

        // Completing before the fade began does nothing.
        assert!(!gate.complete());
        assert_eq!(gate.phase(), IntroPhase::Visible);

        assert!(gate.begin_fade());
        // A second deadline firing is absorbed.
        assert!(!gate.begin_fade());
        assert!(gate.complete());

        // The flag is written exactly once even if callbacks repeat.
        assert!(!gate.complete());
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn done_is_terminal() {
        let mut gate = IntroGate::new(MemorySessionStore::default());
        gate.begin_fade();
        gate.complete();
        assert!(!gate.begin_fade());
        assert_eq!(gate.phase(), IntroPhase::Done);
    }
}
