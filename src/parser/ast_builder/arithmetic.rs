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
    pub fn build_add(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs1 = self.expect_register().context(INVALID_OP_MSG)?;
        let rs2 = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Add(rd, rs1, rs2))
    }

    pub fn build_addi(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;

        Ok(Instruction::Addi(rd, rs, imm))
    }

    pub fn build_sub(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs1 = self.expect_register().context(INVALID_OP_MSG)?;
        let rs2 = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Sub(rd, rs1, rs2))
    }

    pub fn build_subi(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;

        Ok(Instruction::Subi(rd, rs, imm))
    }

    pub fn build_mul(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs1 = self.expect_register().context(INVALID_OP_MSG)?;
        let rs2 = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Mul(rd, rs1, rs2))
    }

    pub fn build_muli(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;

        Ok(Instruction::Muli(rd, rs, imm))
    }

    pub fn build_div(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs1 = self.expect_register().context(INVALID_OP_MSG)?;
        let rs2 = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Div(rd, rs1, rs2))
    }

    pub fn build_sdiv(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs1 = self.expect_register().context(INVALID_OP_MSG)?;
        let rs2 = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Sdiv(rd, rs1, rs2))
    }

    pub fn build_divi(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;

        Ok(Instruction::Divi(rd, rs, imm))
    }

    pub fn build_and(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs1 = self.expect_register().context(INVALID_OP_MSG)?;
        let rs2 = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::And(rd, rs1, rs2))
    }

    pub fn build_or(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs1 = self.expect_register().context(INVALID_OP_MSG)?;
        let rs2 = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Or(rd, rs1, rs2))
    }

    pub fn build_cmp(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs1 = self.expect_register().context(INVALID_OP_MSG)?;
        let rs2 = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Cmp(rd, rs1, rs2))
    }

    pub fn build_cmpi(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs = self.expect_register().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;

        Ok(Instruction::Cmpi(rd, rs, imm))
    }
}
