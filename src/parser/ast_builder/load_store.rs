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

use crate::ast::Instruction;
use crate::parser::ast_builder::AstBuilder;
use crate::parser::ast_builder::constants::*;
use anyhow::{Context, Result};

impl<'a> AstBuilder<'a> {
    // register-to-register move
    pub fn build_mov(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Mov(rd, rs))
    }

    // immediate-to-register move
    pub fn build_movi(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;

        Ok(Instruction::Movi(rd, imm))
    }

    // load the address of a label
    pub fn build_lda(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Lda(rd, target))
    }

    // word store to a labeled address
    pub fn build_str(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Str(rs, target))
    }

    // word load from a labeled address
    pub fn build_ldr(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Ldr(rd, target))
    }

    // byte store to a labeled address
    pub fn build_stb(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Stb(rs, target))
    }

    // byte load from a labeled address
    pub fn build_ldb(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Ldb(rd, target))
    }

    // indirect word store through an address register
    pub fn build_istr(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let addr = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Istr(rs, addr))
    }

    // indirect word load through an address register
    pub fn build_ildr(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let addr = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Ildr(rd, addr))
    }

    // indirect byte store through an address register
    pub fn build_istb(&mut self) -> Result<Instruction> {
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let addr = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Istb(rs, addr))
    }

    // indirect byte load through an address register
    pub fn build_ildb(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let addr = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Ildb(rd, addr))
    }
}
