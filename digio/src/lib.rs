//! Fast digital I/O pin wrappers
//!
//! Wraps raw GPIO access in small typed objects, in two flavors:
//!
//! - [`Input`], [`InputLow`], [`Output`]: the pin number is a const
//!   generic. Reads and writes are direct register bit operations whose
//!   address and bit offset the backend resolves at compile time.
//! - [`InputPin`], [`OutputPin`]: the pin number is a runtime value.
//!   Every access goes through the backend's generic read/write
//!   primitives, which repeat the pin lookup per call.
//!
//! A wrapper configures its pin's mode once, at construction, and the mode
//! never changes afterwards. None of the operations can fail: invalid
//! compile-time pins are rejected by the backend's mapping table at
//! compile time, and invalid runtime pins are platform-defined.
//!
//! All five types also implement the `embedded-hal` digital traits with
//! `Infallible` errors, so they plug into ecosystem drivers.
//!
//! ```
//! use digio::{InputLow, Output};
//! use digio_sim::SimPort;
//!
//! let sim = SimPort::new();
//! let button = InputLow::<_, 2>::new(&sim);
//! let mut led = Output::<_, 13>::new(&sim);
//!
//! sim.set_level(2, false); // button pressed, line pulled low
//! if button.read() {
//!     led.set_high();
//! }
//! assert!(led.read());
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod input;
pub mod output;

pub use digio_hal::{PinBit, PinMode, Port};
pub use input::{Input, InputLow, InputPin};
pub use output::{Output, OutputPin};
