use ls8_core::isa::Opcode;

/// Assembles an LS-8 program one instruction at a time.
///
/// ```ignore
/// let image = ProgramBuilder::new().ldi(0, 8).prn(0).hlt().build();
/// ```
#[derive(Debug, Default, Clone)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address the next instruction will be placed at.
    pub fn here(&self) -> u8 {
        u8::try_from(self.bytes.len()).unwrap()
    }

    fn emit(mut self, op: Opcode, operands: &[u8]) -> Self {
        self.bytes.push(op.byte());
        self.bytes.extend_from_slice(operands);
        self
    }

    /// Appends raw bytes (data, or opcodes the ISA does not define).
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn nop(self) -> Self {
        self.emit(Opcode::Nop, &[])
    }

    pub fn hlt(self) -> Self {
        self.emit(Opcode::Hlt, &[])
    }

    pub fn ldi(self, reg: u8, imm: u8) -> Self {
        self.emit(Opcode::Ldi, &[reg, imm])
    }

    pub fn ld(self, dst: u8, addr_reg: u8) -> Self {
        self.emit(Opcode::Ld, &[dst, addr_reg])
    }

    pub fn st(self, addr_reg: u8, src: u8) -> Self {
        self.emit(Opcode::St, &[addr_reg, src])
    }

    pub fn push(self, reg: u8) -> Self {
        self.emit(Opcode::Push, &[reg])
    }

    pub fn pop(self, reg: u8) -> Self {
        self.emit(Opcode::Pop, &[reg])
    }

    pub fn prn(self, reg: u8) -> Self {
        self.emit(Opcode::Prn, &[reg])
    }

    pub fn pra(self, reg: u8) -> Self {
        self.emit(Opcode::Pra, &[reg])
    }

    pub fn call(self, reg: u8) -> Self {
        self.emit(Opcode::Call, &[reg])
    }

    pub fn ret(self) -> Self {
        self.emit(Opcode::Ret, &[])
    }

    /// Any single-register control transfer (`JMP`, `JEQ`, ...).
    pub fn jump(self, op: Opcode, reg: u8) -> Self {
        self.emit(op, &[reg])
    }

    pub fn jmp(self, reg: u8) -> Self {
        self.jump(Opcode::Jmp, reg)
    }

    pub fn jne(self, reg: u8) -> Self {
        self.jump(Opcode::Jne, reg)
    }

    /// Any two-register ALU operation (`ADD`, `CMP`, ...).
    pub fn alu(self, op: Opcode, a: u8, b: u8) -> Self {
        self.emit(op, &[a, b])
    }

    pub fn add(self, a: u8, b: u8) -> Self {
        self.alu(Opcode::Add, a, b)
    }

    pub fn sub(self, a: u8, b: u8) -> Self {
        self.alu(Opcode::Sub, a, b)
    }

    pub fn mul(self, a: u8, b: u8) -> Self {
        self.alu(Opcode::Mul, a, b)
    }

    pub fn div(self, a: u8, b: u8) -> Self {
        self.alu(Opcode::Div, a, b)
    }

    pub fn modulo(self, a: u8, b: u8) -> Self {
        self.alu(Opcode::Mod, a, b)
    }

    pub fn cmp(self, a: u8, b: u8) -> Self {
        self.alu(Opcode::Cmp, a, b)
    }

    pub fn inc(self, reg: u8) -> Self {
        self.emit(Opcode::Inc, &[reg])
    }

    pub fn dec(self, reg: u8) -> Self {
        self.emit(Opcode::Dec, &[reg])
    }

    pub fn not(self, reg: u8) -> Self {
        self.emit(Opcode::Not, &[reg])
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    /// Renders the program in the text format the loader reads.
    pub fn to_source(&self) -> String {
        let mut source = String::from("# generated by ProgramBuilder\n");
        for byte in &self.bytes {
            source.push_str(&format!("{byte:08b}\n"));
        }
        source
    }
}
