//! # LS-8 memory
//! A flat 256 byte address space holding the loaded program and the runtime
//! stack. Addresses are taken as [`u16`] so that cells one past the end are
//! representable and can be rejected instead of silently wrapping around.

use crate::error::Fault;

/// Number of addressable cells.
pub const MEMORY_SIZE: usize = 256;

/// The LS-8 address space: 256 zero-initialized byte cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Returns a zeroed memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `address`.
    pub fn read(&self, address: u16) -> Result<u8, Fault> {
        self.cells
            .get(address as usize)
            .copied()
            .ok_or(Fault::AddressOutOfRange { address })
    }

    /// Writes `value` to the cell at `address`.
    pub fn write(&mut self, address: u16, value: u8) -> Result<(), Fault> {
        match self.cells.get_mut(address as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Fault::AddressOutOfRange { address }),
        }
    }

    /// Copies a program image into memory starting at address 0.
    pub fn load(&mut self, image: &[u8]) -> Result<(), Fault> {
        if image.len() > MEMORY_SIZE {
            return Err(Fault::AddressOutOfRange {
                address: MEMORY_SIZE as u16,
            });
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Reads the byte at `address`, or 0 past the end of memory. Used by the
    /// trace dump, whose three byte window can overhang the top of memory.
    pub(crate) fn read_or_zero(&self, address: u16) -> u8 {
        self.cells.get(address as usize).copied().unwrap_or(0)
    }
}
