//! Instruction Disassembler for the LS-8.
//!
//! Converts opcode bytes and their operands into assembly text for debug
//! tracing, the `disasm` command, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! let (text, len) = disassemble(&[0b1000_0010, 0, 8], 0);
//! assert_eq!(text, "LDI R0, 8");
//! assert_eq!(len, 3);
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::Opcode;

/// Formats a register operand.
#[inline]
fn reg(idx: u8) -> String {
    format!("R{idx}")
}

/// Disassembles the instruction starting at `pc` in `mem`.
///
/// Operand bytes missing past the end of `mem` are shown as `??`. Unknown
/// opcodes are shown as a `DB` data byte and occupy the same number of bytes the
/// execution engine would skip over.
///
/// # Arguments
///
/// * `mem` - Memory image to read from.
/// * `pc` - Address of the opcode byte.
///
/// # Returns
///
/// The assembly text and the instruction length in bytes.
pub fn disassemble(mem: &[u8], pc: usize) -> (String, usize) {
    let Some(&raw) = mem.get(pc) else {
        return ("??".to_string(), 1);
    };
    let inst = decode(raw);
    let operand = |i: usize| mem.get(pc + 1 + i).copied();

    let Some(op) = inst.opcode else {
        return (format!("DB {raw:#010b}"), inst.size());
    };

    let operands: Vec<String> = (0..inst.operand_count())
        .map(|i| match (op, i, operand(i)) {
            (_, _, None) => "??".to_string(),
            (Opcode::Ldi, 1, Some(imm)) => imm.to_string(),
            (_, _, Some(r)) => reg(r),
        })
        .collect();

    let text = if operands.is_empty() {
        op.mnemonic().to_string()
    } else {
        format!("{} {}", op.mnemonic(), operands.join(", "))
    };
    (text, inst.size())
}

/// Disassembles a whole program image into `(address, text)` pairs.
///
/// Walks the image linearly; data bytes embedded in the program are shown as
/// whatever instruction they happen to decode to.
pub fn disassemble_program(image: &[u8]) -> Vec<(usize, String)> {
    let mut listing = Vec::new();
    let mut pc = 0;
    while pc < image.len() {
        let (text, len) = disassemble(image, pc);
        listing.push((pc, text));
        pc += len;
    }
    listing
}
