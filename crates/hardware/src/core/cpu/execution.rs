//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode at the program counter and the operands it declares.
//! 2. **Dispatch:** Routes ALU opcodes to the ALU and applies every other effect directly.
//! 3. **Control Transfer:** Advances the program counter or, for a taken branch, sets it.
//! 4. **Halting:** Stops on `HLT` and, gracefully, on a division by zero.

use std::io::Write;

use tracing::warn;

use super::Cpu;
use crate::common::constants::DIVIDE_BY_ZERO_MESSAGE;
use crate::common::error::SimError;
use crate::core::units::alu::{Alu, AluOp, AluOutput};
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Opcode};

/// Why the machine stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// A `HLT` instruction executed.
    Hlt,
    /// `DIV` or `MOD` was given a zero divisor.
    DivideByZero,
}

/// Result of executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The machine is still running.
    Running,
    /// The machine has stopped and further steps are no-ops.
    Halted(HaltReason),
}

/// What an instruction does to the program counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Fall through to the next instruction.
    Advance,
    /// Transfer control; the automatic advance is suppressed.
    Jump(usize),
    /// Stop after advancing past this instruction.
    Halt(HaltReason),
}

impl Cpu {
    /// Executes a single instruction.
    ///
    /// Output from `PRN`, `PRA`, and the division-by-zero diagnostic goes to
    /// `out`. Once halted, further calls return the same outcome without
    /// touching any state.
    ///
    /// # Errors
    ///
    /// Out-of-range memory or register accesses, illegal opcodes under strict
    /// decoding, and output failures abort the instruction. The program counter
    /// is left at the faulting instruction.
    pub fn step(&mut self, out: &mut dyn Write) -> Result<StepOutcome, SimError> {
        if let Some(reason) = self.halt_reason {
            return Ok(StepOutcome::Halted(reason));
        }

        let pc = self.pc;
        let inst = decode(self.ram.read(pc)?);
        let [a, b] = self.fetch_operands(pc, inst.operand_count())?;
        let next = pc + inst.size();

        let flow = match inst.opcode {
            Some(op) if inst.is_alu() => self.execute_alu(op, a, b, out)?,
            Some(op) => self.dispatch(op, next, a, b, out)?,
            None => self.unknown_opcode(inst, pc)?,
        };

        self.stats.record(inst.opcode.map(Opcode::class));

        match flow {
            Flow::Advance => self.pc = next,
            Flow::Jump(target) => {
                self.stats.branches_taken += 1;
                self.pc = target;
            }
            Flow::Halt(reason) => {
                self.pc = next;
                self.halt_reason = Some(reason);
                return Ok(StepOutcome::Halted(reason));
            }
        }
        Ok(StepOutcome::Running)
    }

    /// Applies a non-ALU instruction.
    ///
    /// `next` is the address of the following instruction, used as the `CALL`
    /// return address.
    fn dispatch(
        &mut self,
        op: Opcode,
        next: usize,
        a: u8,
        b: u8,
        out: &mut dyn Write,
    ) -> Result<Flow, SimError> {
        let ra = usize::from(a);
        let rb = usize::from(b);

        let flow = match op {
            Opcode::Nop => Flow::Advance,
            Opcode::Hlt => Flow::Halt(HaltReason::Hlt),

            Opcode::Ldi => {
                self.regs.write(ra, b)?;
                Flow::Advance
            }
            Opcode::Ld => {
                let addr = self.regs.read(rb)?;
                let val = self.ram.read(usize::from(addr))?;
                self.regs.write(ra, val)?;
                Flow::Advance
            }
            Opcode::St => {
                let addr = self.regs.read(ra)?;
                let val = self.regs.read(rb)?;
                self.ram.write(usize::from(addr), val)?;
                Flow::Advance
            }

            Opcode::Push => {
                let val = self.regs.read(ra)?;
                self.push(val)?;
                Flow::Advance
            }
            Opcode::Pop => {
                let val = self.pop()?;
                self.regs.write(ra, val)?;
                Flow::Advance
            }

            Opcode::Prn => {
                writeln!(out, "{}", self.regs.read(ra)?)?;
                Flow::Advance
            }
            Opcode::Pra => {
                write!(out, "{}", char::from(self.regs.read(ra)?))?;
                Flow::Advance
            }

            Opcode::Call => {
                let target = self.regs.read(ra)?;
                let ret = u8::try_from(next).map_err(|_| SimError::AddressOutOfRange(next))?;
                self.push(ret)?;
                Flow::Jump(usize::from(target))
            }
            Opcode::Ret => Flow::Jump(usize::from(self.pop()?)),

            Opcode::Jmp => self.jump_if(true, ra)?,
            Opcode::Jeq => self.jump_if(self.flags.eq, ra)?,
            Opcode::Jne => self.jump_if(!self.flags.eq, ra)?,
            Opcode::Jgt => self.jump_if(self.flags.gt, ra)?,
            Opcode::Jlt => self.jump_if(self.flags.lt, ra)?,
            Opcode::Jge => self.jump_if(self.flags.gt || self.flags.eq, ra)?,
            Opcode::Jle => self.jump_if(self.flags.lt || self.flags.eq, ra)?,

            // Everything left is ALU-dispatched.
            _ => self.execute_alu(op, a, b, out)?,
        };
        Ok(flow)
    }

    /// Runs an ALU opcode and writes back its result.
    ///
    /// A zero divisor leaves every register untouched, writes the diagnostic
    /// line, and halts.
    fn execute_alu(
        &mut self,
        op: Opcode,
        a: u8,
        b: u8,
        out: &mut dyn Write,
    ) -> Result<Flow, SimError> {
        let alu_op = AluOp::try_from(op)?;
        let ra = usize::from(a);
        let lhs = self.regs.read(ra)?;
        let rhs = if alu_op.is_unary() {
            0
        } else {
            self.regs.read(usize::from(b))?
        };

        Ok(match Alu::execute(alu_op, lhs, rhs) {
            AluOutput::Value(val) => {
                self.regs.write(ra, val)?;
                Flow::Advance
            }
            AluOutput::Flags(flags) => {
                self.flags = flags;
                Flow::Advance
            }
            AluOutput::DivideByZero => {
                warn!("{op} R{a}, R{b} at {:#04x}: division by zero", self.pc);
                writeln!(out, "{DIVIDE_BY_ZERO_MESSAGE}")?;
                Flow::Halt(HaltReason::DivideByZero)
            }
        })
    }

    /// Jumps to the address held in `reg` when `taken`.
    ///
    /// The register is validated even when the branch falls through.
    fn jump_if(&self, taken: bool, reg: usize) -> Result<Flow, SimError> {
        let target = self.regs.read(reg)?;
        Ok(if taken {
            Flow::Jump(usize::from(target))
        } else {
            Flow::Advance
        })
    }

    /// Handles an opcode byte that names no instruction.
    ///
    /// By default the byte is skipped along with the operands its layout
    /// declares, and a warning is logged. Strict decoding makes it fatal.
    fn unknown_opcode(&self, inst: Instruction, pc: usize) -> Result<Flow, SimError> {
        if self.strict_opcodes {
            return Err(SimError::IllegalInstruction {
                opcode: inst.raw,
                pc,
            });
        }
        warn!(
            "unknown opcode {:#010b} at {:#04x}; skipping {} byte(s)",
            inst.raw,
            pc,
            inst.size()
        );
        Ok(Flow::Advance)
    }
}
