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
    // push a word onto the stack
    pub fn build_pshr(&mut self) -> Result<Instruction> {
        let reg = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Pshr(reg))
    }

    // push a byte onto the stack
    pub fn build_pshb(&mut self) -> Result<Instruction> {
        let reg = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Pshb(reg))
    }

    // pop a word from the stack
    pub fn build_popr(&mut self) -> Result<Instruction> {
        let reg = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Popr(reg))
    }

    // pop a byte from the stack
    pub fn build_popb(&mut self) -> Result<Instruction> {
        let reg = self.expect_register().context(INVALID_OP_MSG)?;

        Ok(Instruction::Popb(reg))
    }
}
