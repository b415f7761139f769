//! ATmega328P backend for the digio pin wrappers
//!
//! Implements the digio-hal access traits over the ATmega328P's
//! memory-mapped port registers, using the Arduino Uno digital pin
//! numbering. The compile-time path resolves register addresses through a
//! `const fn` mapping table; the runtime path repeats that lookup on every
//! call.
//!
//! This crate contains the workspace's only `unsafe` code: the volatile
//! register accesses.

#![no_std]

pub mod gpio;

pub use gpio::Atmega328p;
