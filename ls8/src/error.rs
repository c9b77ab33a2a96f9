//! # Machine faults
//! Fatal conditions raised by the execution engine. The LS-8 has no notion
//! of recovery: any fault ends the run, and the front end reports it.

use thiserror::Error;

/// A fatal condition encountered while executing a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// The byte fetched at `pc` is not in the opcode table.
    #[error("unsupported operation {opcode:#04x} at address {pc:#04x}")]
    UnsupportedOperation { opcode: u8, pc: u8 },

    /// A memory access fell outside the 256 byte address space.
    #[error("memory address {address:#06x} out of range")]
    AddressOutOfRange { address: u16 },

    /// An operand named a register outside r0..r7.
    #[error("register index {index} out of range")]
    RegisterOutOfRange { index: u8 },

    /// The stack grew past the bottom of memory: SP would drop below 0.
    #[error("stack overflow at address {pc:#04x}")]
    StackOverflow { pc: u8 },

    /// More values popped than pushed: SP would pass the top of memory.
    #[error("stack underflow at address {pc:#04x}")]
    StackUnderflow { pc: u8 },
}
