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
    // hardware trap
    pub fn build_trp(&mut self) -> Result<Instruction> {
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;

        Ok(Instruction::Trp(imm))
    }

    // heap allocation with an immediate size
    pub fn build_alci(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let imm = self.expect_immediate().context(INVALID_OP_MSG)?;

        Ok(Instruction::Alci(rd, imm))
    }

    // heap allocation sized by a labeled word
    pub fn build_allc(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Allc(rd, target))
    }

    // heap allocation sized through an address register
    pub fn build_iallc(&mut self) -> Result<Instruction> {
        let rd = self.expect_register().context(INVALID_OP_MSG)?;
        let rs = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Iallc(rd, rs))
    }
}
