//! ATmega328P GPIO access
//!
//! Register map for the three I/O ports and the timer compare-output
//! controls, plus the [`Atmega328p`] backend implementing the digio-hal
//! access traits.
//!
//! Pin numbering follows the Arduino Uno convention: digital pins 0-7 on
//! PORTD, 8-13 on PORTB, 14-19 on PORTC.

use core::ptr;

use digio_hal::{PinBit, PinMode, Port};

/// Highest valid digital pin number
pub const PIN_MAX: u8 = 19;

// I/O register addresses in data space.
const PINB: usize = 0x23;
const DDRB: usize = 0x24;
const PORTB: usize = 0x25;
const PINC: usize = 0x26;
const DDRC: usize = 0x27;
const PORTC: usize = 0x28;
const PIND: usize = 0x29;
const DDRD: usize = 0x2a;
const PORTD: usize = 0x2b;

// Timer/counter compare-output control registers.
const TCCR0A: usize = 0x44;
const TCCR1A: usize = 0x80;
const TCCR2A: usize = 0xb0;

/// Register addresses and bit offset for one pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRegs {
    /// Input register (PINx)
    pub input: usize,
    /// Output register (PORTx)
    pub output: usize,
    /// Direction register (DDRx)
    pub dir: usize,
    /// Bit offset within the registers
    pub bit: u8,
}

/// Map a digital pin number to its registers
///
/// The `PinBit` implementation evaluates this in const context, so an
/// out-of-range compile-time pin number is a compile error.
pub const fn pin_regs(pin: u8) -> PinRegs {
    match pin {
        0..=7 => PinRegs {
            input: PIND,
            output: PORTD,
            dir: DDRD,
            bit: pin,
        },
        8..=13 => PinRegs {
            input: PINB,
            output: PORTB,
            dir: DDRB,
            bit: pin - 8,
        },
        14..=19 => PinRegs {
            input: PINC,
            output: PORTC,
            dir: DDRC,
            bit: pin - 14,
        },
        _ => panic!("no such pin"),
    }
}

/// Timer compare-output channel for a PWM-capable pin
///
/// Returns the control register and the COMxy1 mask that connects the
/// timer to the pin, or None for pins without a timer channel.
pub const fn pwm_channel(pin: u8) -> Option<(usize, u8)> {
    match pin {
        3 => Some((TCCR2A, 1 << 5)),  // OC2B
        5 => Some((TCCR0A, 1 << 5)),  // OC0B
        6 => Some((TCCR0A, 1 << 7)),  // OC0A
        9 => Some((TCCR1A, 1 << 7)),  // OC1A
        10 => Some((TCCR1A, 1 << 5)), // OC1B
        11 => Some((TCCR2A, 1 << 7)), // OC2A
        _ => None,
    }
}

/// The ATmega328P's GPIO ports
///
/// Zero-sized handle; every instance addresses the same hardware
/// registers. Exclusive ownership of each physical pin is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atmega328p;

impl Atmega328p {
    #[inline(always)]
    fn read_reg_bit(addr: usize, bit: u8) -> bool {
        let reg = addr as *const u8;
        unsafe { ptr::read_volatile(reg) & (1 << bit) != 0 }
    }

    /// Read-modify-write of a single register bit. Not atomic; interrupt
    /// handlers touching other bits of the same register race with this.
    #[inline(always)]
    fn write_reg_bit(addr: usize, bit: u8, value: bool) {
        let reg = addr as *mut u8;
        unsafe {
            let cur = ptr::read_volatile(reg);
            let new = if value {
                cur | (1 << bit)
            } else {
                cur & !(1 << bit)
            };
            ptr::write_volatile(reg, new);
        }
    }

    #[inline(always)]
    fn clear_reg_bits(addr: usize, mask: u8) {
        let reg = addr as *mut u8;
        unsafe {
            let cur = ptr::read_volatile(reg);
            ptr::write_volatile(reg, cur & !mask);
        }
    }
}

impl Port for Atmega328p {
    fn pin_mode(&mut self, pin: u8, mode: PinMode) {
        if pin > PIN_MAX {
            return;
        }
        let regs = pin_regs(pin);
        match mode {
            PinMode::Input => {
                Self::write_reg_bit(regs.dir, regs.bit, false);
                Self::write_reg_bit(regs.output, regs.bit, false);
            }
            PinMode::InputPullUp => {
                Self::write_reg_bit(regs.dir, regs.bit, false);
                // PORT bit while the pin is an input selects the pull-up
                Self::write_reg_bit(regs.output, regs.bit, true);
            }
            PinMode::Output => {
                Self::write_reg_bit(regs.dir, regs.bit, true);
            }
        }
    }

    fn read(&self, pin: u8) -> bool {
        if pin > PIN_MAX {
            return false;
        }
        let regs = pin_regs(pin);
        Self::read_reg_bit(regs.input, regs.bit)
    }

    fn write(&mut self, pin: u8, value: bool) {
        if pin > PIN_MAX {
            return;
        }
        // Detach the timer first so the port register drives the line.
        if let Some((reg, mask)) = pwm_channel(pin) {
            Self::clear_reg_bits(reg, mask);
        }
        let regs = pin_regs(pin);
        Self::write_reg_bit(regs.output, regs.bit, value);
    }
}

impl<const PIN: u8> PinBit<PIN> for Atmega328p {
    #[inline(always)]
    fn read_bit(&self) -> bool {
        let regs = const { pin_regs(PIN) };
        Self::read_reg_bit(regs.input, regs.bit)
    }

    #[inline(always)]
    fn write_bit(&mut self, value: bool) {
        let regs = const { pin_regs(PIN) };
        Self::write_reg_bit(regs.output, regs.bit, value);
    }
}
