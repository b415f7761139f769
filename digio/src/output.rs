//! Digital output wrappers
//!
//! [`Output`] resolves the pin at compile time and writes the output
//! register bit directly; [`OutputPin`] takes the pin number at runtime
//! and goes through the backend's generic write primitive.

use core::convert::Infallible;

use digio_hal::{PinBit, PinMode, Port};

/// Digital output with a compile-time pin number
///
/// Writes are direct bit writes on the output register resolved at
/// compile time. Construction configures the pin as an output and
/// immediately drives the initial level.
pub struct Output<P: PinBit<PIN>, const PIN: u8> {
    port: P,
}

impl<P: PinBit<PIN>, const PIN: u8> Output<P, PIN> {
    /// Configure the pin as an output driven low
    pub fn new(port: P) -> Self {
        Self::with_initial(port, false)
    }

    /// Configure the pin as an output driven to `initial`
    pub fn with_initial(mut port: P, initial: bool) -> Self {
        port.pin_mode(PIN, PinMode::Output);
        // The generic write rather than write_bit: its side effect is to
        // detach a peripheral (e.g. PWM) that may still drive the pin.
        port.write(PIN, initial);
        Self { port }
    }

    /// Drive the pin to the given level
    pub fn write(&mut self, value: bool) {
        self.port.write_bit(value);
    }

    /// Drive the pin high
    pub fn set_high(&mut self) {
        self.write(true);
    }

    /// Drive the pin low
    pub fn set_low(&mut self) {
        self.write(false);
    }

    /// Invert the driven level
    ///
    /// Read-modify-write; not synchronized against anything else touching
    /// the pin between the read and the write.
    pub fn toggle(&mut self) {
        let level = self.read();
        self.write(!level);
    }

    /// Drive `value`, then immediately drive its negation
    ///
    /// The two writes are issued back to back with nothing in between;
    /// the pulse width is whatever two register writes take.
    pub fn pulse(&mut self, value: bool) {
        self.write(value);
        self.write(!value);
    }

    /// Read back the level on the line
    pub fn read(&self) -> bool {
        self.port.read_bit()
    }

    /// True if the pin is driven high
    pub fn is_set_high(&self) -> bool {
        self.read()
    }

    /// True if the pin is driven low
    pub fn is_set_low(&self) -> bool {
        !self.read()
    }
}

impl<P: PinBit<PIN>, const PIN: u8> embedded_hal::digital::ErrorType for Output<P, PIN> {
    type Error = Infallible;
}

impl<P: PinBit<PIN>, const PIN: u8> embedded_hal::digital::OutputPin for Output<P, PIN> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Output::set_low(self);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Output::set_high(self);
        Ok(())
    }
}

impl<P: PinBit<PIN>, const PIN: u8> embedded_hal::digital::StatefulOutputPin for Output<P, PIN> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(Output::is_set_high(self))
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(Output::is_set_low(self))
    }
}

/// Digital output where the pin number is only known at runtime
///
/// Semantics match [`Output`], but every access goes through the
/// backend's generic read/write primitives instead of direct register
/// access.
pub struct OutputPin<P: Port> {
    port: P,
    pin: u8,
}

impl<P: Port> OutputPin<P> {
    /// Configure the pin as an output driven low
    pub fn new(port: P, pin: u8) -> Self {
        Self::with_initial(port, pin, false)
    }

    /// Configure the pin as an output driven to `initial`
    pub fn with_initial(mut port: P, pin: u8, initial: bool) -> Self {
        port.pin_mode(pin, PinMode::Output);
        port.write(pin, initial);
        Self { port, pin }
    }

    // Accesses could be faster here by resolving the register and bit
    // mask once in the constructor and using them below, at the cost of a
    // few bytes per instance.

    /// Drive the pin to the given level
    pub fn write(&mut self, value: bool) {
        self.port.write(self.pin, value);
    }

    /// Drive the pin high
    pub fn set_high(&mut self) {
        self.write(true);
    }

    /// Drive the pin low
    pub fn set_low(&mut self) {
        self.write(false);
    }

    /// Invert the driven level
    pub fn toggle(&mut self) {
        let level = self.read();
        self.write(!level);
    }

    /// Drive `value`, then immediately drive its negation
    pub fn pulse(&mut self, value: bool) {
        self.write(value);
        self.write(!value);
    }

    /// Read back the level on the line
    pub fn read(&self) -> bool {
        self.port.read(self.pin)
    }

    /// True if the pin is driven high
    pub fn is_set_high(&self) -> bool {
        self.read()
    }

    /// True if the pin is driven low
    pub fn is_set_low(&self) -> bool {
        !self.read()
    }
}

impl<P: Port> embedded_hal::digital::ErrorType for OutputPin<P> {
    type Error = Infallible;
}

impl<P: Port> embedded_hal::digital::OutputPin for OutputPin<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        OutputPin::set_low(self);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        OutputPin::set_high(self);
        Ok(())
    }
}

impl<P: Port> embedded_hal::digital::StatefulOutputPin for OutputPin<P> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(OutputPin::is_set_high(self))
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(OutputPin::is_set_low(self))
    }
}
