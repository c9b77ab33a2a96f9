//! # LS-8 program loader
//! LS-8 programs ship as text: one byte per line written as eight binary
//! digits, `#` starting a comment, blank and comment-only lines ignored.
//! This crate turns that format into the byte image the machine loads at
//! address 0.
//!
//! ```rust
//! let image = ls8_loader::parse(
//!     "10000010 # LDI R0,42\n00000000\n00101010\n\n00000001 # HLT\n",
//! )?;
//! assert_eq!(image, [0x82, 0x00, 0x2a, 0x01]);
//! # Ok::<(), ls8_loader::LoadError>(())
//! ```

use std::{fs, io, path::Path};

use thiserror::Error;

#[cfg(test)]
mod test;

/// Largest image the 256 byte LS-8 address space can hold.
pub const MAX_IMAGE_BYTES: usize = 256;

/// A reason a program image could not be loaded. All of these are fatal:
/// nothing executes from a program that failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A non-blank line did not start with eight binary digits.
    #[error("line {line}: malformed instruction {text:?}: expected eight binary digits")]
    MalformedInstruction { line: usize, text: String },

    /// The image does not fit in the 256 byte address space.
    #[error("program too large: {bytes} bytes for a {MAX_IMAGE_BYTES} byte memory")]
    ProgramTooLarge { bytes: usize },

    /// The program file could not be read.
    #[error("failed to read program file: {0}")]
    File(#[from] io::Error),
}

/// Parses binary-text source into a program image.
///
/// Each line is stripped of its `#` comment and surrounding whitespace.
/// What remains, if anything, must begin with eight binary digits encoding
/// one byte; characters past the eighth are ignored. Line numbers in errors
/// are 1-based.
pub fn parse(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let text = match raw.split_once('#') {
            Some((code, _comment)) => code,
            None => raw,
        }
        .trim();
        if text.is_empty() {
            continue;
        }
        image.push(parse_byte(text).ok_or_else(|| LoadError::MalformedInstruction {
            line: index + 1,
            text: text.to_string(),
        })?);
    }
    if image.len() > MAX_IMAGE_BYTES {
        return Err(LoadError::ProgramTooLarge { bytes: image.len() });
    }
    Ok(image)
}

/// Reads and parses a program file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let source = fs::read_to_string(path)?;
    parse(&source)
}

fn parse_byte(text: &str) -> Option<u8> {
    let digits = text.get(..8)?;
    // from_str_radix would also take a sign, so check the digits ourselves.
    if !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(digits, 2).ok()
}
