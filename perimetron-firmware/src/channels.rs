//! Inter-task communication channels
//!
//! Defines the static signaling primitives between Embassy tasks.
//! Command signals have binary-semaphore semantics: a second give
//! before a take is absorbed, not queued.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU8, Ordering};

use perimetron_core::input::ButtonEventSet;
use perimetron_core::series::{Algorithm, PendingCommands};

/// One-shot start/stop/reset signals for a single series engine
pub struct CommandChannel {
    start: Signal<CriticalSectionRawMutex, ()>,
    stop: Signal<CriticalSectionRawMutex, ()>,
    reset: Signal<CriticalSectionRawMutex, ()>,
}

impl CommandChannel {
    pub const fn new() -> Self {
        Self {
            start: Signal::new(),
            stop: Signal::new(),
            reset: Signal::new(),
        }
    }

    pub fn signal_start(&self) {
        self.start.signal(());
    }

    pub fn signal_stop(&self) {
        self.stop.signal(());
    }

    pub fn signal_reset(&self) {
        self.reset.signal(());
    }

    /// Non-blocking poll-and-clear of all three signals
    pub fn take_pending(&self) -> PendingCommands {
        PendingCommands {
            start: self.start.try_take().is_some(),
            stop: self.stop.try_take().is_some(),
            reset: self.reset.try_take().is_some(),
        }
    }
}

/// Command channels, one per engine
pub static LEIBNIZ_COMMANDS: CommandChannel = CommandChannel::new();
pub static NILKANTHA_COMMANDS: CommandChannel = CommandChannel::new();

const BOTH_ENGINES: [&CommandChannel; 2] = [&LEIBNIZ_COMMANDS, &NILKANTHA_COMMANDS];

/// Broadcast start to both engines (each tracks run state independently
/// of which algorithm is displayed)
pub fn broadcast_start() {
    for channel in BOTH_ENGINES {
        channel.signal_start();
    }
}

/// Broadcast stop to both engines
pub fn broadcast_stop() {
    for channel in BOTH_ENGINES {
        channel.signal_stop();
    }
}

/// Broadcast reset to both engines
pub fn broadcast_reset() {
    for channel in BOTH_ENGINES {
        channel.signal_reset();
    }
}

/// Pending short-press bits from the button task
static BUTTON_EVENTS: AtomicU8 = AtomicU8::new(0);

/// OR new press bits into the shared event set
pub fn post_button_events(events: ButtonEventSet) {
    BUTTON_EVENTS.fetch_or(events.bits(), Ordering::AcqRel);
}

/// Atomically drain and clear the shared event set
pub fn drain_button_events() -> ButtonEventSet {
    ButtonEventSet::from_bits(BUTTON_EVENTS.swap(0, Ordering::AcqRel))
}

/// Which algorithm the display follows (and which engine runs in
/// ActiveOnly mode); written only by the controller
static ACTIVE_ALGORITHM: AtomicU8 = AtomicU8::new(Algorithm::Leibniz.index());

pub fn active_algorithm() -> Algorithm {
    Algorithm::from_index(ACTIVE_ALGORITHM.load(Ordering::Relaxed))
}

/// Toggle the active algorithm, returning the new selection
pub fn toggle_active_algorithm() -> Algorithm {
    let next = active_algorithm().toggled();
    ACTIVE_ALGORITHM.store(next.index(), Ordering::Relaxed);
    next
}
