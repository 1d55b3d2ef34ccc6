//! LS-8 Opcodes.
//!
//! Raw byte values of every supported instruction, grouped the way the
//! instruction layout groups them.

// System.

/// No operation.
pub const NOP: u8 = 0b0000_0000;
/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

// Load / store.

/// Load immediate: `LDI reg, value`.
pub const LDI: u8 = 0b1000_0010;
/// Load from the address held in a register: `LD reg_a, reg_b`.
pub const LD: u8 = 0b1000_0011;
/// Store to the address held in a register: `ST reg_a, reg_b`.
pub const ST: u8 = 0b1000_0100;

// Stack.

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

// I/O.

/// Print a register as a decimal line.
pub const PRN: u8 = 0b0100_0111;
/// Print a register as an ASCII character.
pub const PRA: u8 = 0b0100_1000;

// Subroutines.

/// Call the subroutine at the address held in a register.
pub const CALL: u8 = 0b0101_0000;
/// Return from a subroutine.
pub const RET: u8 = 0b0001_0001;

// Jumps.

/// Unconditional jump.
pub const JMP: u8 = 0b0101_0100;
/// Jump if equal.
pub const JEQ: u8 = 0b0101_0101;
/// Jump if not equal.
pub const JNE: u8 = 0b0101_0110;
/// Jump if greater than.
pub const JGT: u8 = 0b0101_0111;
/// Jump if less than.
pub const JLT: u8 = 0b0101_1000;
/// Jump if less than or equal.
pub const JLE: u8 = 0b0101_1001;
/// Jump if greater than or equal.
pub const JGE: u8 = 0b0101_1010;

// ALU.

/// `reg_a += reg_b`
pub const ADD: u8 = 0b1010_0000;
/// `reg_a -= reg_b`
pub const SUB: u8 = 0b1010_0001;
/// `reg_a *= reg_b`
pub const MUL: u8 = 0b1010_0010;
/// `reg_a /= reg_b`
pub const DIV: u8 = 0b1010_0011;
/// `reg_a %= reg_b`
pub const MOD: u8 = 0b1010_0100;
/// `reg += 1`
pub const INC: u8 = 0b0110_0101;
/// `reg -= 1`
pub const DEC: u8 = 0b0110_0110;
/// Compare two registers into `FL`.
pub const CMP: u8 = 0b1010_0111;
/// `reg_a &= reg_b`
pub const AND: u8 = 0b1010_1000;
/// `reg = !reg`
pub const NOT: u8 = 0b0110_1001;
/// `reg_a |= reg_b`
pub const OR: u8 = 0b1010_1010;
/// `reg_a ^= reg_b`
pub const XOR: u8 = 0b1010_1011;
/// `reg_a <<= reg_b`
pub const SHL: u8 = 0b1010_1100;
/// `reg_a >>= reg_b`
pub const SHR: u8 = 0b1010_1101;
