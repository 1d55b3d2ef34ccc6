//! Instruction encoding and decoding utilities.
//!
//! Provides field extraction for the opcode byte and the closed [`Opcode`]
//! enumeration that the execution engine dispatches on.

use std::fmt;

use crate::common::constants::{ALU_MASK, INSTRUCTION_ID_MASK, OPERAND_COUNT_SHIFT, SETS_PC_MASK};
use crate::isa::opcodes;

/// Trait for extracting instruction fields from an opcode byte.
pub trait OpcodeBits {
    /// Number of operand bytes following the opcode (bits 7-6).
    fn operand_count(&self) -> usize;

    /// Total instruction length in bytes: operand count plus the opcode itself.
    ///
    /// This is the amount the program counter advances after a non-branching
    /// instruction.
    fn size(&self) -> usize;

    /// Whether the opcode is routed to the ALU (bit 5).
    fn is_alu(&self) -> bool;

    /// Whether the opcode may set the program counter (bit 4).
    fn sets_pc(&self) -> bool;

    /// Instruction identifier within its group (bits 3-0).
    fn instruction_id(&self) -> u8;
}

impl OpcodeBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        (self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.operand_count() + 1
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_MASK != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_MASK != 0
    }

    #[inline(always)]
    fn instruction_id(&self) -> u8 {
        self & INSTRUCTION_ID_MASK
    }
}

/// Every instruction the LS-8 understands.
///
/// The discriminant of each variant is its opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    Nop = opcodes::NOP,
    Hlt = opcodes::HLT,
    Ldi = opcodes::LDI,
    Ld = opcodes::LD,
    St = opcodes::ST,
    Push = opcodes::PUSH,
    Pop = opcodes::POP,
    Prn = opcodes::PRN,
    Pra = opcodes::PRA,
    Call = opcodes::CALL,
    Ret = opcodes::RET,
    Jmp = opcodes::JMP,
    Jeq = opcodes::JEQ,
    Jne = opcodes::JNE,
    Jgt = opcodes::JGT,
    Jlt = opcodes::JLT,
    Jle = opcodes::JLE,
    Jge = opcodes::JGE,
    Add = opcodes::ADD,
    Sub = opcodes::SUB,
    Mul = opcodes::MUL,
    Div = opcodes::DIV,
    Mod = opcodes::MOD,
    Inc = opcodes::INC,
    Dec = opcodes::DEC,
    Cmp = opcodes::CMP,
    And = opcodes::AND,
    Not = opcodes::NOT,
    Or = opcodes::OR,
    Xor = opcodes::XOR,
    Shl = opcodes::SHL,
    Shr = opcodes::SHR,
}

/// Broad instruction categories used for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstClass {
    /// Arithmetic, logic, shift, and compare.
    Alu,
    /// `LDI` and `LD`.
    Load,
    /// `ST`.
    Store,
    /// `PUSH` and `POP`.
    Stack,
    /// Calls, returns, and jumps.
    Branch,
    /// `PRN` and `PRA`.
    Io,
    /// `NOP` and `HLT`.
    System,
}

impl Opcode {
    /// All opcodes, in opcode-table order.
    pub const ALL: [Self; 32] = [
        Self::Nop,
        Self::Hlt,
        Self::Ldi,
        Self::Ld,
        Self::St,
        Self::Push,
        Self::Pop,
        Self::Prn,
        Self::Pra,
        Self::Call,
        Self::Ret,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Jgt,
        Self::Jlt,
        Self::Jle,
        Self::Jge,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Inc,
        Self::Dec,
        Self::Cmp,
        Self::And,
        Self::Not,
        Self::Or,
        Self::Xor,
        Self::Shl,
        Self::Shr,
    ];

    /// The opcode byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic, upper case.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Ld => "LD",
            Self::St => "ST",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Prn => "PRN",
            Self::Pra => "PRA",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Jgt => "JGT",
            Self::Jlt => "JLT",
            Self::Jle => "JLE",
            Self::Jge => "JGE",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }

    /// Looks up an opcode by mnemonic, ignoring case.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }

    /// Statistics category of the instruction.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Nop | Self::Hlt => InstClass::System,
            Self::Ldi | Self::Ld => InstClass::Load,
            Self::St => InstClass::Store,
            Self::Push | Self::Pop => InstClass::Stack,
            Self::Prn | Self::Pra => InstClass::Io,
            Self::Call
            | Self::Ret
            | Self::Jmp
            | Self::Jeq
            | Self::Jne
            | Self::Jgt
            | Self::Jlt
            | Self::Jle
            | Self::Jge => InstClass::Branch,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Mod
            | Self::Inc
            | Self::Dec
            | Self::Cmp
            | Self::And
            | Self::Not
            | Self::Or
            | Self::Xor
            | Self::Shl
            | Self::Shr => InstClass::Alu,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded view of one opcode byte.
///
/// `opcode` is `None` for bytes that name no instruction; the field accessors
/// still work on them because they only look at the byte layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The raw opcode byte as fetched.
    pub raw: u8,
    /// The recognised operation, if any.
    pub opcode: Option<Opcode>,
}

impl Instruction {
    /// Number of operand bytes following the opcode.
    #[inline]
    pub fn operand_count(self) -> usize {
        self.raw.operand_count()
    }

    /// Program counter advance for this instruction.
    #[inline]
    pub fn size(self) -> usize {
        self.raw.size()
    }

    /// Whether this instruction is dispatched to the ALU.
    #[inline]
    pub fn is_alu(self) -> bool {
        self.raw.is_alu()
    }

    /// Whether this instruction may set the program counter.
    #[inline]
    pub fn sets_pc(self) -> bool {
        self.raw.sets_pc()
    }
}
