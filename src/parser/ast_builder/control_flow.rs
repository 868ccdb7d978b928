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
    // build and check operands for a jump instruction
    pub fn build_jmp(&mut self) -> Result<Instruction> {
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Jmp(target))
    }

    // build and check operands for a jump-to-register instruction
    pub fn build_jmr(&mut self) -> Result<Instruction> {
        let reg = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Jmr(reg))
    }

    // branches name the register to test and the destination label
    pub fn build_bnz(&mut self) -> Result<Instruction> {
        let check = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Bnz(check, target))
    }

    pub fn build_bgt(&mut self) -> Result<Instruction> {
        let check = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Bgt(check, target))
    }

    pub fn build_blt(&mut self) -> Result<Instruction> {
        let check = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Blt(check, target))
    }

    pub fn build_brz(&mut self) -> Result<Instruction> {
        let check = self.expect_register().context(INVALID_OP_MSG)?;
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Brz(check, target))
    }

    // build and check operands for a call instruction
    pub fn build_call(&mut self) -> Result<Instruction> {
        let target = self.expect_target().context(INVALID_OP_MSG)?;

        Ok(Instruction::Call(target))
    }
}
