//! # LS-8 emulator
//! An emulator for the LS-8, a small 8-bit register machine: 256 bytes of
//! memory, eight general purpose byte registers (one reserved as the stack
//! pointer), and a thirteen-operation instruction set mixing ALU work and
//! flow control under a single dispatch.
//!
//! This crate is the machine itself. Turning the textual binary program
//! format into a loadable image lives in the companion `ls8-loader` crate,
//! and front ends (such as `ls8-cli`) drive the machine and decide where
//! `PRN` output goes through the [`Console`] trait.

pub mod bus;
pub mod error;
pub mod machine;
pub mod memory;
pub mod opcode;

pub use bus::Console;
pub use error::Fault;
pub use machine::{Flags, Machine};
pub use memory::Memory;
pub use opcode::Opcode;
