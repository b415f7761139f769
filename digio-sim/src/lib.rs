//! Simulated GPIO backend
//!
//! [`SimPort`] stands in for real hardware in host-side tests: it keeps a
//! mode and a line level per pin and records every call a wrapper makes,
//! distinguishing direct register access from the generic runtime
//! primitives. Tests inject external line levels with
//! [`SimPort::set_level`] and assert on the recorded [`Event`]s.
//!
//! The access traits are implemented for `&SimPort`, so a test hands a
//! reference to the wrapper under test and keeps its own handle for
//! assertions:
//!
//! ```
//! use digio_hal::{PinMode, Port};
//! use digio_sim::{Event, SimPort};
//!
//! let sim = SimPort::new();
//! (&sim).pin_mode(4, PinMode::Output);
//! (&sim).write(4, true);
//! assert!(sim.level(4));
//! assert_eq!(sim.events()[1], Event::Write { pin: 4, value: true });
//! ```

use std::cell::RefCell;

use digio_hal::{PinBit, PinMode, Port};

/// Number of pins the simulator models
pub const PIN_COUNT: usize = 32;

/// One recorded pin access
///
/// The `Read`/`Write` variants are the generic runtime primitives; the
/// `Direct` variants are compile-time-resolved register accesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// `Port::pin_mode` call
    Mode { pin: u8, mode: PinMode },
    /// `Port::read` call
    Read { pin: u8 },
    /// `Port::write` call
    Write { pin: u8, value: bool },
    /// `PinBit::read_bit` call
    DirectRead { pin: u8 },
    /// `PinBit::write_bit` call
    DirectWrite { pin: u8, value: bool },
}

#[derive(Debug)]
struct SimState {
    modes: [Option<PinMode>; PIN_COUNT],
    levels: [bool; PIN_COUNT],
    events: Vec<Event>,
}

/// Simulated pin backend
///
/// Out-of-range pin numbers panic; the simulator treats them as bugs in
/// the test rather than modeling the hardware's undefined behavior.
#[derive(Debug)]
pub struct SimPort {
    state: RefCell<SimState>,
}

impl Default for SimPort {
    fn default() -> Self {
        Self::new()
    }
}

impl SimPort {
    /// Create a simulator with every pin unconfigured and low
    pub fn new() -> Self {
        Self {
            state: RefCell::new(SimState {
                modes: [None; PIN_COUNT],
                levels: [false; PIN_COUNT],
                events: Vec::new(),
            }),
        }
    }

    /// Set the line level seen by reads, as if driven externally
    pub fn set_level(&self, pin: u8, level: bool) {
        self.state.borrow_mut().levels[pin as usize] = level;
    }

    /// Current line level of a pin
    pub fn level(&self, pin: u8) -> bool {
        self.state.borrow().levels[pin as usize]
    }

    /// Mode the pin was last configured with, if any
    pub fn mode(&self, pin: u8) -> Option<PinMode> {
        self.state.borrow().modes[pin as usize]
    }

    /// All recorded events, oldest first
    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    /// The recorded writes (generic and direct), oldest first
    pub fn writes(&self) -> Vec<(u8, bool)> {
        self.state
            .borrow()
            .events
            .iter()
            .filter_map(|e| match *e {
                Event::Write { pin, value } | Event::DirectWrite { pin, value } => {
                    Some((pin, value))
                }
                _ => None,
            })
            .collect()
    }

    /// Discard the recorded events, keeping pin modes and levels
    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear();
    }

    fn record(&self, event: Event) {
        self.state.borrow_mut().events.push(event);
    }
}

impl Port for &SimPort {
    fn pin_mode(&mut self, pin: u8, mode: PinMode) {
        {
            let mut state = self.state.borrow_mut();
            state.modes[pin as usize] = Some(mode);
            // The pull-up holds the line high until something drives it
            if mode == PinMode::InputPullUp {
                state.levels[pin as usize] = true;
            }
        }
        self.record(Event::Mode { pin, mode });
    }

    fn read(&self, pin: u8) -> bool {
        self.record(Event::Read { pin });
        self.state.borrow().levels[pin as usize]
    }

    fn write(&mut self, pin: u8, value: bool) {
        self.state.borrow_mut().levels[pin as usize] = value;
        self.record(Event::Write { pin, value });
    }
}

impl<const PIN: u8> PinBit<PIN> for &SimPort {
    fn read_bit(&self) -> bool {
        self.record(Event::DirectRead { pin: PIN });
        self.state.borrow().levels[PIN as usize]
    }

    fn write_bit(&mut self, value: bool) {
        self.state.borrow_mut().levels[PIN as usize] = value;
        self.record(Event::DirectWrite { pin: PIN, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_follow_writes() {
        let sim = SimPort::new();
        assert!(!sim.level(3));

        (&sim).write(3, true);
        assert!(sim.level(3));

        (&sim).write(3, false);
        assert!(!sim.level(3));
    }

    #[test]
    fn test_injected_level_is_read_back() {
        let sim = SimPort::new();
        sim.set_level(7, true);
        assert!((&sim).read(7));
        assert!(<&SimPort as PinBit<7>>::read_bit(&&sim));
    }

    #[test]
    fn test_pullup_raises_line() {
        let sim = SimPort::new();
        (&sim).pin_mode(2, PinMode::InputPullUp);
        assert!(sim.level(2));

        (&sim).pin_mode(3, PinMode::Input);
        assert!(!sim.level(3));
    }

    #[test]
    fn test_events_record_access_path() {
        let sim = SimPort::new();
        (&sim).write(1, true);
        <&SimPort as PinBit<1>>::write_bit(&mut &sim, false);
        (&sim).read(1);

        assert_eq!(
            sim.events(),
            vec![
                Event::Write { pin: 1, value: true },
                Event::DirectWrite { pin: 1, value: false },
                Event::Read { pin: 1 },
            ]
        );
        assert_eq!(sim.writes(), vec![(1, true), (1, false)]);
    }
}
