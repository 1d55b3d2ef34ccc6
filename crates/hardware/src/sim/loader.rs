//! Program Loader.
//!
//! This module turns the LS-8 program text format into a memory image. It performs:
//! 1. **Comment stripping:** Everything from `#` to the end of a line is ignored.
//! 2. **Literal parsing:** Each remaining non-blank line is one 8-bit base-2 literal.
//! 3. **Placement:** Bytes are assigned consecutive addresses starting at 0.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::{COMMENT_CHAR, MEMORY_SIZE};
use crate::common::error::LoadError;

/// Strips the comment and surrounding whitespace from one source line.
///
/// Returns `None` for lines that carry no byte.
fn code_of(line: &str) -> Option<&str> {
    let code = line
        .split_once(COMMENT_CHAR)
        .map_or(line, |(code, _)| code)
        .trim();
    (!code.is_empty()).then_some(code)
}

/// Parses one base-2 literal, with or without a `0b` prefix.
fn parse_literal(text: &str) -> Option<u8> {
    let digits = text.strip_prefix("0b").unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|c| c == b'0' || c == b'1') {
        return None;
    }
    u8::from_str_radix(digits, 2).ok()
}

/// Parses program text into a memory image.
///
/// Blank and comment-only lines consume no address.
///
/// # Errors
///
/// [`LoadError::InvalidLiteral`] for a token that is not an 8-bit binary
/// number, [`LoadError::ProgramTooLarge`] when the image exceeds memory.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let Some(code) = code_of(line) else {
            continue;
        };
        let byte = parse_literal(code).ok_or_else(|| LoadError::InvalidLiteral {
            line: idx + 1,
            text: code.to_string(),
        })?;
        if image.len() == MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge {
                capacity: MEMORY_SIZE,
            });
        }
        image.push(byte);
    }
    Ok(image)
}

/// Reads a program file from disk and parses it.
///
/// # Arguments
///
/// * `path` - Path to the program text file.
///
/// # Returns
///
/// The memory image, ready to be copied to address 0.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&source)?;
    debug!("loaded {} byte(s) from {}", image.len(), path.display());
    Ok(image)
}
