//! # The LS-8 machine
//! Owns all emulation state: memory, register file, program counter,
//! condition flags and the running state. Execution is exposed one
//! instruction at a time through [`Machine::step`], so a front end can
//! interleave its own logging, or driven to completion with
//! [`Machine::run`].

use core::cmp::Ordering;

use crate::{bus::Console, error::Fault, memory::Memory, opcode::Opcode};

/// Index of the register reserved as the stack pointer.
pub const SP: usize = 7;

/// Power-on stack pointer. The stack grows downward from just below the top
/// of usable memory.
pub const STACK_TOP: u8 = 0xf4;

/// Condition codes set by `CMP` and consumed by the conditional jumps.
///
/// Bit 0 is Equal, bit 1 Greater-than, bit 2 Less-than (`0b00000LGE`).
/// A comparison sets exactly one bit and clears the other two. The power-on
/// state has none set, so conditional jumps before the first `CMP` observe
/// "not equal" and fall through.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    pub const EQUAL: u8 = 0b001;
    pub const GREATER: u8 = 0b010;
    pub const LESS: u8 = 0b100;

    /// Compares two byte values, setting exactly one bit.
    pub fn compare(a: u8, b: u8) -> Self {
        Self(match a.cmp(&b) {
            Ordering::Less => Self::LESS,
            Ordering::Greater => Self::GREATER,
            Ordering::Equal => Self::EQUAL,
        })
    }

    pub fn equal(self) -> bool {
        self.0 & Self::EQUAL != 0
    }
    pub fn greater(self) -> bool {
        self.0 & Self::GREATER != 0
    }
    pub fn less(self) -> bool {
        self.0 & Self::LESS != 0
    }

    /// The raw 3-bit condition code.
    pub fn bits(self) -> u8 {
        self.0
    }
}

/// The LS-8 machine.
///
/// A machine is constructed in its power-on state, given a program image
/// with [`load_program`](Machine::load_program), then stepped or run to
/// completion. All state is held by value, so independent machines never
/// share anything.
///
/// ```rust
/// use ls8::Machine;
///
/// // LDI r0,8 / LDI r1,9 / MUL r0,r1 / PRN r0 / HLT
/// let program = [0x82, 0, 8, 0x82, 1, 9, 0xa2, 0, 1, 0x47, 0, 0x01];
///
/// let mut machine = Machine::new();
/// machine.load_program(&program)?;
///
/// let mut output = Vec::new();
/// machine.run(&mut output)?;
/// assert_eq!(output, [72]);
/// assert!(!machine.is_running());
/// # Ok::<(), ls8::Fault>(())
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    memory: Memory,
    registers: [u8; 8],
    pc: u8,
    flags: Flags,
    running: bool,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Returns a machine in its power-on state: zeroed memory and registers
    /// except for SP at [`STACK_TOP`], PC at 0, no flags set, running.
    pub fn new() -> Self {
        let mut registers = [0; 8];
        registers[SP] = STACK_TOP;
        Self {
            memory: Memory::new(),
            registers,
            pc: 0,
            flags: Flags::default(),
            running: true,
        }
    }

    /// Copies a program image into memory starting at address 0.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), Fault> {
        self.memory.load(image)
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }
    pub fn registers(&self) -> &[u8; 8] {
        &self.registers
    }
    pub fn pc(&self) -> u8 {
        self.pc
    }
    pub fn flags(&self) -> Flags {
        self.flags
    }
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn register(&self, index: u8) -> Result<u8, Fault> {
        self.registers
            .get(index as usize)
            .copied()
            .ok_or(Fault::RegisterOutOfRange { index })
    }

    fn register_mut(&mut self, index: u8) -> Result<&mut u8, Fault> {
        self.registers
            .get_mut(index as usize)
            .ok_or(Fault::RegisterOutOfRange { index })
    }

    /// Pushes a byte: SP moves down one cell, then the value is written at
    /// the new SP.
    fn push(&mut self, value: u8) -> Result<(), Fault> {
        let sp = self.registers[SP]
            .checked_sub(1)
            .ok_or(Fault::StackOverflow { pc: self.pc })?;
        self.registers[SP] = sp;
        self.memory.write(sp.into(), value)
    }

    /// Pops a byte: the value at SP is read, then SP moves up one cell.
    fn pop(&mut self) -> Result<u8, Fault> {
        let sp = self.registers[SP];
        let value = self.memory.read(sp.into())?;
        self.registers[SP] = sp
            .checked_add(1)
            .ok_or(Fault::StackUnderflow { pc: self.pc })?;
        Ok(value)
    }

    /// Executes the instruction at the current program counter.
    ///
    /// Returns the opcode that ran, or `None` if the machine has already
    /// halted. Operand bytes are read only when the opcode declares them, so
    /// a one byte instruction at the top of memory never faults on a
    /// lookahead it would not use.
    pub fn step(&mut self, console: &mut impl Console) -> Result<Option<Opcode>, Fault> {
        if !self.running {
            return Ok(None);
        }

        let pc = self.pc;
        let byte = self.memory.read(pc.into())?;
        let op = Opcode::decode(byte).ok_or(Fault::UnsupportedOperation { opcode: byte, pc })?;

        let a = if op.operand_count() >= 1 {
            self.memory.read(u16::from(pc) + 1)?
        } else {
            0
        };
        let b = if op.operand_count() >= 2 {
            self.memory.read(u16::from(pc) + 2)?
        } else {
            0
        };

        match op {
            Opcode::Hlt => self.running = false,
            // The second operand is an immediate, not a register lookup.
            Opcode::Ldi => *self.register_mut(a)? = b,
            Opcode::Prn => console.print(self.register(a)?),
            Opcode::Add => {
                let sum = self.register(a)?.wrapping_add(self.register(b)?);
                *self.register_mut(a)? = sum;
            }
            Opcode::Mul => {
                let product = self.register(a)?.wrapping_mul(self.register(b)?);
                *self.register_mut(a)? = product;
            }
            Opcode::Push => {
                let value = self.register(a)?;
                self.push(value)?;
            }
            Opcode::Pop => {
                let value = self.pop()?;
                *self.register_mut(a)? = value;
            }
            Opcode::Call => {
                // Return address is the instruction after the CALL.
                self.push(pc.wrapping_add(2))?;
                self.pc = self.register(a)?;
            }
            Opcode::Ret => self.pc = self.pop()?,
            Opcode::Cmp => self.flags = Flags::compare(self.register(a)?, self.register(b)?),
            Opcode::Jmp => self.pc = self.register(a)?,
            Opcode::Jeq => {
                self.pc = if self.flags.equal() {
                    self.register(a)?
                } else {
                    pc.wrapping_add(2)
                };
            }
            Opcode::Jne => {
                self.pc = if self.flags.equal() {
                    pc.wrapping_add(2)
                } else {
                    self.register(a)?
                };
            }
        }

        if !op.transfers_control() {
            self.pc = pc.wrapping_add(op.width());
        }
        Ok(Some(op))
    }

    /// Runs the fetch-decode-execute loop until `HLT` or a fault.
    pub fn run(&mut self, console: &mut impl Console) -> Result<(), Fault> {
        while self.step(console)?.is_some() {}
        Ok(())
    }

    /// One-line state dump: program counter, the next three memory bytes,
    /// the condition code and all eight registers, in hex. Cells past the
    /// end of memory read as zero here.
    pub fn trace(&self) -> String {
        let pc = u16::from(self.pc);
        let mut line = format!(
            "PC: {:02X} | {:02X} {:02X} {:02X} | FL: {:03b} |",
            self.pc,
            self.memory.read_or_zero(pc),
            self.memory.read_or_zero(pc + 1),
            self.memory.read_or_zero(pc + 2),
            self.flags.bits(),
        );
        for value in self.registers {
            line.push_str(&format!(" {value:02X}"));
        }
        line
    }
}
