//! Minimal HAL crate for a 16-bit general-purpose timer peripheral with three
//! capture/compare channels.
//!
//! Allows for flexible timer access, without direct interaction with registers.
//! It is minimal in the sense that it covers a single peripheral: the platform
//! supplies the register block address, and all timer logic runs through a
//! small register backend, so the same code drives real hardware or an
//! in-memory register file under test.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod regs;
pub mod timer;

mod error;

pub use error::Error;

#[cfg(test)]
mod mock;
