//! digio hardware abstraction layer
//!
//! This crate defines the seam between the digio pin wrappers and the
//! platform that owns the GPIO hardware. The wrappers never touch a
//! register themselves; everything goes through one of two access paths:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Pin wrappers (digio)                   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  digio-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ digio-hal-avr │       │   digio-sim   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`pin::Port`] - generic runtime primitives (pin number resolved on
//!   every call)
//! - [`pin::PinBit`] - direct bit access for a pin number fixed at compile
//!   time

#![no_std]
#![deny(unsafe_code)]

pub mod pin;

// Re-export key traits at crate root for convenience
pub use pin::{PinBit, PinMode, Port};
