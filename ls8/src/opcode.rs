//! # Opcode table
//! The thirteen LS-8 operations, keyed by their encoded byte value. The
//! instruction width is derived mechanically from the operand count, so the
//! fetch loop and the decoder cannot disagree about how far to advance the
//! program counter.

use core::fmt;

/// One decoded LS-8 operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Hlt,
    Ldi,
    Prn,
    Add,
    Mul,
    Push,
    Pop,
    Call,
    Ret,
    Cmp,
    Jmp,
    Jeq,
    Jne,
}

impl Opcode {
    /// Decodes an instruction byte, or `None` if it is not a known opcode.
    pub const fn decode(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Self::Hlt),
            0x82 => Some(Self::Ldi),
            0x47 => Some(Self::Prn),
            0xa0 => Some(Self::Add),
            0xa2 => Some(Self::Mul),
            0x45 => Some(Self::Push),
            0x46 => Some(Self::Pop),
            0x50 => Some(Self::Call),
            0x11 => Some(Self::Ret),
            0xa7 => Some(Self::Cmp),
            0x54 => Some(Self::Jmp),
            0x55 => Some(Self::Jeq),
            0x56 => Some(Self::Jne),
            _ => None,
        }
    }

    /// How many operand bytes follow the instruction byte.
    pub const fn operand_count(self) -> u8 {
        match self {
            Self::Hlt | Self::Ret => 0,
            Self::Prn | Self::Push | Self::Pop | Self::Call | Self::Jmp | Self::Jeq | Self::Jne => {
                1
            }
            Self::Ldi | Self::Add | Self::Mul | Self::Cmp => 2,
        }
    }

    /// Encoded width in bytes: the instruction byte plus its operands.
    pub const fn width(self) -> u8 {
        1 + self.operand_count()
    }

    /// Whether this operation sets the program counter itself. The generic
    /// width-based advance is skipped for exactly these five.
    pub const fn transfers_control(self) -> bool {
        matches!(
            self,
            Self::Call | Self::Ret | Self::Jmp | Self::Jeq | Self::Jne
        )
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Cmp => "CMP",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
