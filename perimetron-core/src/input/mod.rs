//! Button events and command dispatch
//!
//! The input aggregator ORs short-press bits into a shared event set;
//! the controller drains the set once per cycle and maps it to at most
//! one action. Dispatch is exact-match on the combined bit pattern: a
//! cycle that collects more than one button press matches no pattern
//! and is dropped.

mod debounce;

pub use debounce::PressDebouncer;

// Event bit per button, S1 lowest
const EV_S1: u8 = 1 << 0;
const EV_S2: u8 = 1 << 1;
const EV_S3: u8 = 1 << 2;
const EV_S4: u8 = 1 << 3;

/// The four user buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    S1,
    S2,
    S3,
    S4,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::S1, Button::S2, Button::S3, Button::S4];

    /// Bit this button sets in the event set
    pub const fn event_bit(self) -> u8 {
        match self {
            Button::S1 => EV_S1,
            Button::S2 => EV_S2,
            Button::S3 => EV_S3,
            Button::S4 => EV_S4,
        }
    }

    /// Stable array index for per-button driver state
    pub const fn index(self) -> usize {
        match self {
            Button::S1 => 0,
            Button::S2 => 1,
            Button::S3 => 2,
            Button::S4 => 3,
        }
    }
}

/// Classification of a debounced press edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// No press edge pending
    None,
    /// Press shorter than the long-press threshold
    Short,
    /// Press at or above the long-press threshold (reserved, unused)
    Long,
}

/// Bitset of pending button presses between aggregator and controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEventSet(u8);

impl ButtonEventSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn set(&mut self, button: Button) {
        self.0 |= button.event_bit();
    }

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.event_bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Action the controller performs for one drained event set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    Start,
    Stop,
    Reset,
    SwitchAlgorithm,
}

/// Map an event set to its action
///
/// Exact-match dispatch: only a single-bit set selects an action.
pub fn dispatch(events: ButtonEventSet) -> Option<ButtonAction> {
    match events.bits() {
        EV_S1 => Some(ButtonAction::Start),
        EV_S2 => Some(ButtonAction::Stop),
        EV_S3 => Some(ButtonAction::Reset),
        EV_S4 => Some(ButtonAction::SwitchAlgorithm),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bit_dispatch() {
        let mut events = ButtonEventSet::new();
        events.set(Button::S1);
        assert_eq!(dispatch(events), Some(ButtonAction::Start));

        assert_eq!(
            dispatch(ButtonEventSet::from_bits(Button::S2.event_bit())),
            Some(ButtonAction::Stop)
        );
        assert_eq!(
            dispatch(ButtonEventSet::from_bits(Button::S3.event_bit())),
            Some(ButtonAction::Reset)
        );
        assert_eq!(
            dispatch(ButtonEventSet::from_bits(Button::S4.event_bit())),
            Some(ButtonAction::SwitchAlgorithm)
        );
    }

    #[test]
    fn test_empty_set_dispatches_nothing() {
        assert_eq!(dispatch(ButtonEventSet::new()), None);
    }

    #[test]
    fn test_combined_bits_dispatch_nothing() {
        // Exact-match dispatch: every multi-bit combination is dropped
        for bits in 0u8..16 {
            if bits.count_ones() > 1 {
                assert_eq!(dispatch(ButtonEventSet::from_bits(bits)), None);
            }
        }
    }

    #[test]
    fn test_set_accumulates_presses() {
        let mut events = ButtonEventSet::new();
        assert!(events.is_empty());

        events.set(Button::S2);
        events.set(Button::S4);
        assert!(events.contains(Button::S2));
        assert!(events.contains(Button::S4));
        assert!(!events.contains(Button::S1));
        assert_eq!(events.bits(), 0b1010);
    }

    #[test]
    fn test_event_bits_are_distinct() {
        let mut seen = 0u8;
        for button in Button::ALL {
            assert_eq!(seen & button.event_bit(), 0);
            seen |= button.event_bit();
        }
    }
}
