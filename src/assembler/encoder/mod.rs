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

pub mod constants;

use crate::ast::Instruction;
use constants::*;

/// One entry of the provisional code section produced by pass 1.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeEntry {
    /// Fully encoded 8-byte instruction, no symbol reference.
    Encoded([u8; 8]),
    /// jmp/call: the resolved address lands in the immediate field.
    JumpTo {
        opcode: u8,
        target: String,
        line: usize,
    },
    /// Branches and memory references: the register goes in operand 1 and
    /// the resolved address in the immediate field.
    RegisterTarget {
        opcode: u8,
        reg: u8,
        target: String,
        line: usize,
    },
}

/// Pack one fixed-width instruction: opcode byte, three operand bytes, and
/// the 32-bit little-endian immediate field.
pub fn encode_word(opcode: u8, op1: u8, op2: u8, op3: u8, immediate: i32) -> [u8; 8] {
    let [i0, i1, i2, i3] = immediate.to_le_bytes();
    [opcode, op1, op2, op3, i0, i1, i2, i3]
}

/// Translate an instruction into its pass-1 form. Label-free instructions
/// encode immediately; label references become deferred records that pass 2
/// completes once every address is known.
pub fn encode_instruction(instruction: &Instruction, line: usize) -> CodeEntry {
    match instruction {
        // --------- Control flow ---------
        Instruction::Jmp(target) => CodeEntry::JumpTo {
            opcode: JMP_OPCODE,
            target: target.clone(),
            line,
        },
        Instruction::Jmr(reg) => {
            CodeEntry::Encoded(encode_word(JMR_OPCODE, reg.index(), 0, 0, 0))
        }
        Instruction::Bnz(reg, target) => CodeEntry::RegisterTarget {
            opcode: BNZ_OPCODE,
            reg: reg.index(),
            target: target.clone(),
            line,
        },
        Instruction::Bgt(reg, target) => CodeEntry::RegisterTarget {
            opcode: BGT_OPCODE,
            reg: reg.index(),
            target: target.clone(),
            line,
        },
        Instruction::Blt(reg, target) => CodeEntry::RegisterTarget {
            opcode: BLT_OPCODE,
            reg: reg.index(),
            target: target.clone(),
            line,
        },
        Instruction::Brz(reg, target) => CodeEntry::RegisterTarget {
            opcode: BRZ_OPCODE,
            reg: reg.index(),
            target: target.clone(),
            line,
        },
        Instruction::Call(target) => CodeEntry::JumpTo {
            opcode: CALL_OPCODE,
            target: target.clone(),
            line,
        },
        Instruction::Ret => CodeEntry::Encoded(encode_word(RET_OPCODE, 0, 0, 0, 0)),

        // --------- Data movement ---------
        Instruction::Mov(rd, rs) => {
            CodeEntry::Encoded(encode_word(MOV_OPCODE, rd.index(), rs.index(), 0, 0))
        }
        Instruction::Movi(rd, imm) => {
            CodeEntry::Encoded(encode_word(MOVI_OPCODE, rd.index(), 0, 0, *imm))
        }
        Instruction::Lda(rd, target) => CodeEntry::RegisterTarget {
            opcode: LDA_OPCODE,
            reg: rd.index(),
            target: target.clone(),
            line,
        },
        Instruction::Str(rs, target) => CodeEntry::RegisterTarget {
            opcode: STR_OPCODE,
            reg: rs.index(),
            target: target.clone(),
            line,
        },
        Instruction::Ldr(rd, target) => CodeEntry::RegisterTarget {
            opcode: LDR_OPCODE,
            reg: rd.index(),
            target: target.clone(),
            line,
        },
        Instruction::Stb(rs, target) => CodeEntry::RegisterTarget {
            opcode: STB_OPCODE,
            reg: rs.index(),
            target: target.clone(),
            line,
        },
        Instruction::Ldb(rd, target) => CodeEntry::RegisterTarget {
            opcode: LDB_OPCODE,
            reg: rd.index(),
            target: target.clone(),
            line,
        },
        Instruction::Istr(rs, addr) => {
            CodeEntry::Encoded(encode_word(ISTR_OPCODE, rs.index(), addr.index(), 0, 0))
        }
        Instruction::Ildr(rd, addr) => {
            CodeEntry::Encoded(encode_word(ILDR_OPCODE, rd.index(), addr.index(), 0, 0))
        }
        Instruction::Istb(rs, addr) => {
            CodeEntry::Encoded(encode_word(ISTB_OPCODE, rs.index(), addr.index(), 0, 0))
        }
        Instruction::Ildb(rd, addr) => {
            CodeEntry::Encoded(encode_word(ILDB_OPCODE, rd.index(), addr.index(), 0, 0))
        }

        // --------- Arithmetic ---------
        Instruction::Add(rd, rs1, rs2) => CodeEntry::Encoded(encode_word(
            ADD_OPCODE,
            rd.index(),
            rs1.index(),
            rs2.index(),
            0,
        )),
        Instruction::Addi(rd, rs, imm) => {
            CodeEntry::Encoded(encode_word(ADDI_OPCODE, rd.index(), rs.index(), 0, *imm))
        }
        Instruction::Sub(rd, rs1, rs2) => CodeEntry::Encoded(encode_word(
            SUB_OPCODE,
            rd.index(),
            rs1.index(),
            rs2.index(),
            0,
        )),
        Instruction::Subi(rd, rs, imm) => {
            CodeEntry::Encoded(encode_word(SUBI_OPCODE, rd.index(), rs.index(), 0, *imm))
        }
        Instruction::Mul(rd, rs1, rs2) => CodeEntry::Encoded(encode_word(
            MUL_OPCODE,
            rd.index(),
            rs1.index(),
            rs2.index(),
            0,
        )),
        Instruction::Muli(rd, rs, imm) => {
            CodeEntry::Encoded(encode_word(MULI_OPCODE, rd.index(), rs.index(), 0, *imm))
        }
        Instruction::Div(rd, rs1, rs2) => CodeEntry::Encoded(encode_word(
            DIV_OPCODE,
            rd.index(),
            rs1.index(),
            rs2.index(),
            0,
        )),
        Instruction::Sdiv(rd, rs1, rs2) => CodeEntry::Encoded(encode_word(
            SDIV_OPCODE,
            rd.index(),
            rs1.index(),
            rs2.index(),
            0,
        )),
        Instruction::Divi(rd, rs, imm) => {
            CodeEntry::Encoded(encode_word(DIVI_OPCODE, rd.index(), rs.index(), 0, *imm))
        }

        // --------- Logical ---------
        Instruction::And(rd, rs1, rs2) => CodeEntry::Encoded(encode_word(
            AND_OPCODE,
            rd.index(),
            rs1.index(),
            rs2.index(),
            0,
        )),
        Instruction::Or(rd, rs1, rs2) => CodeEntry::Encoded(encode_word(
            OR_OPCODE,
            rd.index(),
            rs1.index(),
            rs2.index(),
            0,
        )),

        // --------- Comparison ---------
        Instruction::Cmp(rd, rs1, rs2) => CodeEntry::Encoded(encode_word(
            CMP_OPCODE,
            rd.index(),
            rs1.index(),
            rs2.index(),
            0,
        )),
        Instruction::Cmpi(rd, rs, imm) => {
            CodeEntry::Encoded(encode_word(CMPI_OPCODE, rd.index(), rs.index(), 0, *imm))
        }

        // --------- Traps and heap allocation ---------
        Instruction::Trp(imm) => CodeEntry::Encoded(encode_word(TRP_OPCODE, 0, 0, 0, *imm)),
        Instruction::Alci(rd, imm) => {
            CodeEntry::Encoded(encode_word(ALCI_OPCODE, rd.index(), 0, 0, *imm))
        }
        Instruction::Allc(rd, target) => CodeEntry::RegisterTarget {
            opcode: ALLC_OPCODE,
            reg: rd.index(),
            target: target.clone(),
            line,
        },
        Instruction::Iallc(rd, rs) => {
            CodeEntry::Encoded(encode_word(IALLC_OPCODE, rd.index(), rs.index(), 0, 0))
        }

        // --------- Stack ---------
        Instruction::Pshr(reg) => {
            CodeEntry::Encoded(encode_word(PSHR_OPCODE, reg.index(), 0, 0, 0))
        }
        Instruction::Pshb(reg) => {
            CodeEntry::Encoded(encode_word(PSHB_OPCODE, reg.index(), 0, 0, 0))
        }
        Instruction::Popr(reg) => {
            CodeEntry::Encoded(encode_word(POPR_OPCODE, reg.index(), 0, 0, 0))
        }
        Instruction::Popb(reg) => {
            CodeEntry::Encoded(encode_word(POPB_OPCODE, reg.index(), 0, 0, 0))
        }
    }
}
