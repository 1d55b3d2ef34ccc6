//! LS-8 Instruction Decoder.
//!
//! Maps opcode bytes to [`Opcode`] variants through a 256-entry table built at
//! compile time, so decoding is a single indexed load.

use crate::isa::instruction::{Instruction, Opcode};

/// Number of distinct opcode byte values.
const TABLE_SIZE: usize = 1 << u8::BITS;

/// Builds the byte -> opcode lookup table.
const fn build_table() -> [Option<Opcode>; TABLE_SIZE] {
    let mut table = [None; TABLE_SIZE];
    let mut i = 0;
    while i < Opcode::ALL.len() {
        let op = Opcode::ALL[i];
        table[op as usize] = Some(op);
        i += 1;
    }
    table
}

/// Opcode lookup table indexed by the raw byte.
static DECODE_TABLE: [Option<Opcode>; TABLE_SIZE] = build_table();

/// Looks up the operation named by an opcode byte.
#[inline]
pub fn lookup(raw: u8) -> Option<Opcode> {
    DECODE_TABLE[raw as usize]
}

/// Decodes an opcode byte into an [`Instruction`].
///
/// Unknown bytes decode to an instruction with `opcode == None`; whether that is
/// tolerated is the execution engine's decision.
#[inline]
pub fn decode(raw: u8) -> Instruction {
    Instruction {
        raw,
        opcode: lookup(raw),
    }
}
