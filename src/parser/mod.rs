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

mod ast_builder;

use crate::ast::AssemblyLine;
use crate::errors::AssemblyError;
use anyhow::Result;
use ast_builder::AstBuilder;
use pest::Parser;
use pest_derive::Parser;

// Derive the parser from our grammar file.
#[derive(Parser)]
#[grammar = "./grammar.pest"]
pub struct Asm4380Parser;

// Main parsing function that takes the entire source code string.
pub fn parse_source(source: &str) -> Result<Vec<AssemblyLine>> {
    let pairs = Asm4380Parser::parse(Rule::program, source).map_err(AssemblyError::Syntax)?;
    let mut lines = Vec::new();

    for line_pair in pairs
        .flatten()
        .filter(|p| p.as_rule() == Rule::line_content)
    {
        let mut assembly_line = AssemblyLine::default();
        assembly_line.line_number = line_pair.as_span().start_pos().line_col().0;

        for pair in line_pair.into_inner() {
            match pair.as_rule() {
                Rule::label => {
                    assembly_line.label = Some(pair.as_str().to_string());
                }
                Rule::int_directive
                | Rule::byt_directive
                | Rule::bts_directive
                | Rule::str_directive => {
                    assembly_line.directive = Some(AstBuilder::new(pair).build_directive()?);
                }
                _ => {
                    assembly_line.instruction = Some(AstBuilder::new(pair).build_instruction()?);
                }
            }
        }

        lines.push(assembly_line);
    }

    Ok(lines)
}

// ------------- unit tests -------------
