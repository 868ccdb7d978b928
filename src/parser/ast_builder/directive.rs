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

use crate::ast::{Directive, StrArg};
use crate::errors::AssemblyError;
use crate::parser::Rule;
use crate::parser::ast_builder::AstBuilder;
use crate::parser::ast_builder::utility_functions::*;
use anyhow::Result;

impl<'a> AstBuilder<'a> {
    // .int emits a 32-bit little-endian word, defaulting to zero
    pub fn build_int_directive(&mut self) -> Result<Directive> {
        let value = match self.pairs.next() {
            Some(pair) if pair.as_rule() == Rule::number => pair_to_number(&pair)? as i32,
            Some(_) => {
                return Err(AssemblyError::InvalidDirective {
                    line: self.line_number,
                    reason: "Invalid value in .int directive".to_string(),
                }
                .into());
            }
            None => 0,
        };

        Ok(Directive::Int(value))
    }

    // .byt emits one byte from a #n or 'c' literal, defaulting to zero
    pub fn build_byt_directive(&mut self) -> Result<Directive> {
        let value = match self.pairs.next() {
            Some(pair) => match pair.as_rule() {
                Rule::number => {
                    let value = pair_to_number(&pair)?;
                    check_unsigned_byte(value, self.line_number)?;
                    value as u8
                }
                Rule::character => {
                    let value = pair_to_char(&pair)?;
                    check_unsigned_byte(value as i64, self.line_number)?;
                    value as u8
                }
                _ => {
                    return Err(AssemblyError::InvalidDirective {
                        line: self.line_number,
                        reason: "Invalid value in .byt directive".to_string(),
                    }
                    .into());
                }
            },
            None => 0,
        };

        Ok(Directive::Byt(value))
    }

    // .bts reserves a zero-filled block
    pub fn build_bts_directive(&mut self) -> Result<Directive> {
        let pair = self
            .pairs
            .next()
            .filter(|pair| pair.as_rule() == Rule::number)
            .ok_or_else(|| AssemblyError::InvalidDirective {
                line: self.line_number,
                reason: "Invalid value in .bts directive".to_string(),
            })?;

        let value = pair_to_number(&pair)?;
        check_unsigned_byte(value, self.line_number)?;

        Ok(Directive::Bts(value as u8))
    }

    // .str takes a quoted literal or a reserve length
    pub fn build_str_directive(&mut self) -> Result<Directive> {
        let pair = self
            .pairs
            .next()
            .ok_or_else(|| AssemblyError::InvalidDirective {
                line: self.line_number,
                reason: "Invalid value in .str directive".to_string(),
            })?;

        match pair.as_rule() {
            Rule::string => {
                let body = pair
                    .into_inner()
                    .next()
                    .ok_or_else(|| AssemblyError::ParseString {
                        line: self.line_number,
                        reason: "Expected a string body.".to_string(),
                    })?;
                let bytes = unescape_string(body.as_str(), self.line_number)?;
                if bytes.len() > 255 {
                    return Err(AssemblyError::ParseString {
                        line: self.line_number,
                        reason: "String too long".to_string(),
                    }
                    .into());
                }
                Ok(Directive::Str(StrArg::Literal(bytes)))
            }
            Rule::number => {
                let value = pair_to_number(&pair)?;
                check_unsigned_byte(value, self.line_number)?;
                Ok(Directive::Str(StrArg::Reserve(value as u8)))
            }
            _ => Err(AssemblyError::InvalidDirective {
                line: self.line_number,
                reason: "Invalid value in .str directive".to_string(),
            }
            .into()),
        }
    }
}
