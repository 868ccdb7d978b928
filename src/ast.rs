/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Register {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
    Pc,
    Sl,
    Sb,
    Sp,
    Fp,
    Hp,
}

impl Register {
    // Register file index as encoded into an operand byte.
    pub fn index(self) -> u8 {
        match self {
            Register::R0 => 0,
            Register::R1 => 1,
            Register::R2 => 2,
            Register::R3 => 3,
            Register::R4 => 4,
            Register::R5 => 5,
            Register::R6 => 6,
            Register::R7 => 7,
            Register::R8 => 8,
            Register::R9 => 9,
            Register::R10 => 10,
            Register::R11 => 11,
            Register::R12 => 12,
            Register::R13 => 13,
            Register::R14 => 14,
            Register::R15 => 15,
            Register::Pc => 16,
            Register::Sl => 17,
            Register::Sb => 18,
            Register::Sp => 19,
            Register::Fp => 20,
            Register::Hp => 21,
        }
    }

    // Register names match case-insensitively.
    pub fn from_name(name: &str) -> Option<Register> {
        match name.to_ascii_lowercase().as_str() {
            "r0" => Some(Register::R0),
            "r1" => Some(Register::R1),
            "r2" => Some(Register::R2),
            "r3" => Some(Register::R3),
            "r4" => Some(Register::R4),
            "r5" => Some(Register::R5),
            "r6" => Some(Register::R6),
            "r7" => Some(Register::R7),
            "r8" => Some(Register::R8),
            "r9" => Some(Register::R9),
            "r10" => Some(Register::R10),
            "r11" => Some(Register::R11),
            "r12" => Some(Register::R12),
            "r13" => Some(Register::R13),
            "r14" => Some(Register::R14),
            "r15" => Some(Register::R15),
            "pc" => Some(Register::Pc),
            "sl" => Some(Register::Sl),
            "sb" => Some(Register::Sb),
            "sp" => Some(Register::Sp),
            "fp" => Some(Register::Fp),
            "hp" => Some(Register::Hp),
            _ => None,
        }
    }
}

// Represents all possible forms an argument to an instruction or directive
// can take after literal parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Register(Register),
    Immediate(i32), // #n or 'c'
    Label(String),  // e.g., MAIN
    String(String), // raw body of a "..." literal, escapes not yet applied
}

// --- Instructions ---

// Enum representing a single instruction, one variant per mnemonic.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    // Control flow
    Jmp(String),           // JMP label
    Jmr(Register),         // JMR r1
    Bnz(Register, String), // BNZ r1, label
    Bgt(Register, String), // BGT r1, label
    Blt(Register, String), // BLT r1, label
    Brz(Register, String), // BRZ r1, label

    // Data movement
    Mov(Register, Register), // MOV r1, r2
    Movi(Register, i32),     // MOVI r1, #10 AND MOVI r1, 'c'
    Lda(Register, String),   // LDA r1, label
    Str(Register, String),   // STR r1, label
    Ldr(Register, String),   // LDR r1, label
    Stb(Register, String),   // STB r1, label
    Ldb(Register, String),   // LDB r1, label
    Istr(Register, Register), // ISTR r1, r2
    Ildr(Register, Register), // ILDR r1, r2
    Istb(Register, Register), // ISTB r1, r2
    Ildb(Register, Register), // ILDB r1, r2

    // Arithmetic
    Add(Register, Register, Register), // ADD r1, r2, r3
    Addi(Register, Register, i32),     // ADDI r1, r2, #10
    Sub(Register, Register, Register), // SUB r1, r2, r3
    Subi(Register, Register, i32),     // SUBI r1, r2, #10
    Mul(Register, Register, Register), // MUL r1, r2, r3
    Muli(Register, Register, i32),     // MULI r1, r2, #10
    Div(Register, Register, Register), // DIV r1, r2, r3
    Sdiv(Register, Register, Register), // SDIV r1, r2, r3
    Divi(Register, Register, i32),     // DIVI r1, r2, #10

    // Logical
    And(Register, Register, Register), // AND r1, r2, r3
    Or(Register, Register, Register),  // OR r1, r2, r3

    // Comparison
    Cmp(Register, Register, Register), // CMP r1, r2, r3
    Cmpi(Register, Register, i32),     // CMPI r1, r2, #10

    // Hardware trap
    Trp(i32), // TRP #0

    // Heap allocation
    Alci(Register, i32),      // ALCI r1, #16
    Allc(Register, String),   // ALLC r1, label
    Iallc(Register, Register), // IALLC r1, r2

    // Stack
    Pshr(Register), // PSHR r1
    Pshb(Register), // PSHB r1
    Popr(Register), // POPR r1
    Popb(Register), // POPB r1
    Call(String),   // CALL label
    Ret,            // RET
}

// --- Directives ---

// A data directive reserves or initializes bytes in the data segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Int(i32),    // .int #42, defaults to 0
    Byt(u8),     // .byt #255 AND .byt 'c', defaults to 0
    Bts(u8),     // .bts #16, a zero-filled block
    Str(StrArg), // .str "text" AND .str #16
}

// The two spellings of a .str operand. Both emit a length byte, the body (or
// a zero-filled reservation), and a trailing NUL.
#[derive(Debug, Clone, PartialEq)]
pub enum StrArg {
    Literal(Vec<u8>), // escape-processed body, at most 255 bytes
    Reserve(u8),      // declared body length
}

// --- Assembly Line Structure ---

// Represents a single source line: an optional label plus at most one
// instruction or directive.
#[derive(Debug, Clone, Default)]
pub struct AssemblyLine {
    pub line_number: usize,
    pub label: Option<String>,
    pub instruction: Option<Instruction>,
    pub directive: Option<Directive>,
}
