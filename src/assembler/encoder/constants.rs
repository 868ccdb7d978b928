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

// instruction opcodes, numbered per the VM4380 ISA
pub const JMP_OPCODE: u8 = 1;
pub const JMR_OPCODE: u8 = 2;
pub const BNZ_OPCODE: u8 = 3;
pub const BGT_OPCODE: u8 = 4;
pub const BLT_OPCODE: u8 = 5;
pub const BRZ_OPCODE: u8 = 6;
pub const MOV_OPCODE: u8 = 7;
pub const MOVI_OPCODE: u8 = 8;
pub const LDA_OPCODE: u8 = 9;
pub const STR_OPCODE: u8 = 10;
pub const LDR_OPCODE: u8 = 11;
pub const STB_OPCODE: u8 = 12;
pub const LDB_OPCODE: u8 = 13;
pub const ISTR_OPCODE: u8 = 14;
pub const ILDR_OPCODE: u8 = 15;
pub const ISTB_OPCODE: u8 = 16;
pub const ILDB_OPCODE: u8 = 17;
pub const ADD_OPCODE: u8 = 18;
pub const ADDI_OPCODE: u8 = 19;
pub const SUB_OPCODE: u8 = 20;
pub const SUBI_OPCODE: u8 = 21;
pub const MUL_OPCODE: u8 = 22;
pub const MULI_OPCODE: u8 = 23;
pub const DIV_OPCODE: u8 = 24;
pub const SDIV_OPCODE: u8 = 25;
pub const DIVI_OPCODE: u8 = 26;
pub const AND_OPCODE: u8 = 27;
pub const OR_OPCODE: u8 = 28;
pub const CMP_OPCODE: u8 = 29;
pub const CMPI_OPCODE: u8 = 30;
pub const TRP_OPCODE: u8 = 31;
pub const ALCI_OPCODE: u8 = 32;
pub const ALLC_OPCODE: u8 = 33;
pub const IALLC_OPCODE: u8 = 34;
pub const PSHR_OPCODE: u8 = 35;
pub const PSHB_OPCODE: u8 = 36;
pub const POPR_OPCODE: u8 = 37;
pub const POPB_OPCODE: u8 = 38;
pub const CALL_OPCODE: u8 = 39;
pub const RET_OPCODE: u8 = 40;

// every encoded instruction occupies exactly this many bytes
pub const INSTRUCTION_SIZE: u32 = 8;
