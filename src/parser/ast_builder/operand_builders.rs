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

use crate::ast::{Operand, Register};
use crate::errors::AssemblyError;
use crate::parser::Rule;
use crate::parser::ast_builder::utility_functions::*;
use anyhow::Result;
use pest::iterators::Pair;

// Helper to build an Operand from a pest pair
pub fn build_operand(pair: Pair<Rule>) -> Result<Operand> {
    match pair.as_rule() {
        Rule::register => build_register(pair),
        Rule::number => Ok(Operand::Immediate(pair_to_number(&pair)? as i32)),
        Rule::character => Ok(Operand::Immediate(pair_to_char(&pair)?)),
        Rule::string => build_string_literal(pair),
        Rule::identifier => Ok(Operand::Label(pair.as_str().to_string())),
        _ => unreachable!("Unknown operand rule: {:?}", pair.as_rule()),
    }
}

// build a register operand from a pair
pub fn build_register(pair: Pair<Rule>) -> Result<Operand> {
    let line = pair.as_span().start_pos().line_col().0;
    match Register::from_name(pair.as_str()) {
        Some(reg) => Ok(Operand::Register(reg)),
        None => Err(AssemblyError::ParseRegister {
            line,
            reason: format!("invalid register name: {}", pair.as_str()),
        }
        .into()),
    }
}

// build a string operand; the raw body is kept, escapes are applied by the
// directive builder
pub fn build_string_literal(pair: Pair<Rule>) -> Result<Operand> {
    let line = pair.as_span().start_pos().line_col().0;
    let body = pair
        .into_inner()
        .next()
        .ok_or_else(|| AssemblyError::ParseString {
            line,
            reason: "Expected a string body.".to_string(),
        })?;
    Ok(Operand::String(body.as_str().to_string()))
}
