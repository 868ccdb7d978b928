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

mod arithmetic;
mod constants;
mod control_flow;
mod directive;
mod load_store;
mod operand_builders;
mod stack;
mod system;
mod utility_functions;
mod validators;

use crate::ast::{Directive, Instruction};
use crate::parser::Rule;
use anyhow::Result;
use pest::iterators::{Pair, Pairs};

pub struct AstBuilder<'a> {
    line_number: usize,
    rule: Rule,
    pairs: Pairs<'a, Rule>,
}

impl<'a> AstBuilder<'a> {
    pub fn new(pair: Pair<'a, Rule>) -> Self {
        Self {
            line_number: pair.as_span().start_pos().line_col().0,
            rule: pair.as_rule(),
            pairs: pair.into_inner(),
        }
    }

    // Helper to build an Instruction from a statement pair. Each builder pops
    // exactly the operands its shape requires; leftovers are an arity error.
    pub fn build_instruction(mut self) -> Result<Instruction> {
        let instruction = match self.rule {
            Rule::jmp_op => self.build_jmp()?,
            Rule::jmr_op => self.build_jmr()?,
            Rule::bnz_op => self.build_bnz()?,
            Rule::bgt_op => self.build_bgt()?,
            Rule::blt_op => self.build_blt()?,
            Rule::brz_op => self.build_brz()?,
            Rule::mov_op => self.build_mov()?,
            Rule::movi_op => self.build_movi()?,
            Rule::lda_op => self.build_lda()?,
            Rule::str_op => self.build_str()?,
            Rule::ldr_op => self.build_ldr()?,
            Rule::stb_op => self.build_stb()?,
            Rule::ldb_op => self.build_ldb()?,
            Rule::istr_op => self.build_istr()?,
            Rule::ildr_op => self.build_ildr()?,
            Rule::istb_op => self.build_istb()?,
            Rule::ildb_op => self.build_ildb()?,
            Rule::add_op => self.build_add()?,
            Rule::addi_op => self.build_addi()?,
            Rule::sub_op => self.build_sub()?,
            Rule::subi_op => self.build_subi()?,
            Rule::mul_op => self.build_mul()?,
            Rule::muli_op => self.build_muli()?,
            Rule::div_op => self.build_div()?,
            Rule::sdiv_op => self.build_sdiv()?,
            Rule::divi_op => self.build_divi()?,
            Rule::and_op => self.build_and()?,
            Rule::or_op => self.build_or()?,
            Rule::cmp_op => self.build_cmp()?,
            Rule::cmpi_op => self.build_cmpi()?,
            Rule::trp_op => self.build_trp()?,
            Rule::alci_op => self.build_alci()?,
            Rule::allc_op => self.build_allc()?,
            Rule::iallc_op => self.build_iallc()?,
            Rule::pshr_op => self.build_pshr()?,
            Rule::pshb_op => self.build_pshb()?,
            Rule::popr_op => self.build_popr()?,
            Rule::popb_op => self.build_popb()?,
            Rule::call_op => self.build_call()?,
            Rule::ret_op => Instruction::Ret,
            _ => unreachable!("Unknown instruction rule: {:?}", self.rule),
        };

        self.expect_done()?;
        Ok(instruction)
    }

    pub fn build_directive(mut self) -> Result<Directive> {
        let directive = match self.rule {
            Rule::int_directive => self.build_int_directive()?,
            Rule::byt_directive => self.build_byt_directive()?,
            Rule::bts_directive => self.build_bts_directive()?,
            Rule::str_directive => self.build_str_directive()?,
            _ => unreachable!("Unknown directive rule: {:?}", self.rule),
        };

        self.expect_done()?;
        Ok(directive)
    }
}
