//! GPIO pin access traits
//!
//! Provides the two access paths the pin wrappers build on: generic
//! runtime primitives that look the pin up on every call, and
//! compile-time-resolved single-bit register access.

/// Pin mode, configured once when a wrapper is constructed
///
/// There is no API to reconfigure a pin afterwards; a wrapper's mode is
/// fixed for its entire lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// High-impedance input
    Input,
    /// Input with the internal pull-up resistor enabled
    InputPullUp,
    /// Push-pull output
    Output,
}

/// Generic runtime pin access
///
/// The backend resolves the pin number to its hardware register on every
/// call. Backends perform no validation; what an out-of-range pin number
/// does is platform-defined.
pub trait Port {
    /// Configure the mode of a pin
    fn pin_mode(&mut self, pin: u8, mode: PinMode);

    /// Read the electrical level of a pin
    fn read(&self, pin: u8) -> bool;

    /// Drive a pin to the given level
    ///
    /// Backends also detach any peripheral (such as a PWM timer) still
    /// driving the pin, so the written level actually reaches the line.
    fn write(&mut self, pin: u8, value: bool);
}

/// Direct bit access for a pin known at compile time
///
/// Implementations resolve the pin's register address and bit offset at
/// compile time, so [`read_bit`](PinBit::read_bit) and
/// [`write_bit`](PinBit::write_bit) compile down to single register
/// operations. An invalid pin number fails when the backend's mapping
/// table is evaluated, which is a compile error rather than a runtime one.
pub trait PinBit<const PIN: u8>: Port {
    /// Read the pin's bit in the input register
    fn read_bit(&self) -> bool;

    /// Write the pin's bit in the output register
    fn write_bit(&mut self, value: bool);
}
