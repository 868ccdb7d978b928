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

pub mod encoder;
pub mod symbol_table;

use crate::ast::{AssemblyLine, Directive, Instruction, StrArg};
use crate::errors::AssemblyError;
use encoder::CodeEntry;
use encoder::constants::INSTRUCTION_SIZE;
use symbol_table::{SymbolTable, define_symbol, resolve_symbol};

/// Byte size of the entry-address header word at the front of the image.
pub const HEADER_SIZE: u32 = 4;

/// Everything pass 1 learns about a program: the entry address, the finished
/// data segment, the provisional code section, and the label addresses.
#[derive(Debug)]
pub struct ProgramLayout {
    pub entry_addr: u32,
    pub data_segment: Vec<u8>,
    pub code_section: Vec<CodeEntry>,
    pub symbol_table: SymbolTable,
}

/// Pass 1: walk the lines in order, assign label addresses, lay out the data
/// segment, and collect the provisional code section.
pub fn first_pass(lines: &[AssemblyLine]) -> Result<ProgramLayout, AssemblyError> {
    let mut symbol_table = SymbolTable::new();
    let mut data_segment: Vec<u8> = Vec::new();
    let mut code_section: Vec<CodeEntry> = Vec::new();

    // A file whose first meaningful line is already an instruction has no
    // data segment and starts in code mode with the entry at the header end.
    let starts_with_code = lines
        .first()
        .is_some_and(|line| line.instruction.is_some());

    let mut in_data = !starts_with_code;
    let mut entered_code = starts_with_code;
    let mut entry_addr = HEADER_SIZE;
    let mut data_addr = HEADER_SIZE;
    let mut code_addr = HEADER_SIZE;

    for line in lines {
        if in_data {
            if let Some(instruction) = &line.instruction {
                // The transition out of the data segment must be a bare
                // `jmp <label>`; it doubles as the entry instruction.
                if line.label.is_some() || !matches!(instruction, Instruction::Jmp(_)) {
                    return Err(AssemblyError::MissingJmpMain {
                        line: line.line_number,
                    });
                }
                in_data = false;
                entered_code = true;
                entry_addr = data_addr;
                code_addr = data_addr;
            } else if let Some(directive) = &line.directive {
                if let Some(label) = &line.label {
                    define_symbol(&mut symbol_table, label, data_addr, line.line_number)?;
                }
                data_addr += emit_data_directive(directive, &mut data_segment);
                continue;
            } else {
                continue;
            }
        }

        if line.directive.is_some() {
            return Err(AssemblyError::InvalidDirective {
                line: line.line_number,
                reason: "data directives must appear before the code segment".to_string(),
            });
        }

        if let Some(label) = &line.label {
            define_symbol(&mut symbol_table, label, code_addr, line.line_number)?;
        }

        if let Some(instruction) = &line.instruction {
            code_section.push(encoder::encode_instruction(instruction, line.line_number));
            code_addr += INSTRUCTION_SIZE;
        }
    }

    if !entered_code {
        return Err(AssemblyError::MissingMain {
            line: lines.last().map_or(0, |line| line.line_number),
        });
    }

    Ok(ProgramLayout {
        entry_addr,
        data_segment,
        code_section,
        symbol_table,
    })
}

// Append the bytes of one data directive and report how far the data address
// advances.
fn emit_data_directive(directive: &Directive, data_segment: &mut Vec<u8>) -> u32 {
    match directive {
        Directive::Int(value) => {
            data_segment.extend_from_slice(&value.to_le_bytes());
            4
        }
        Directive::Byt(value) => {
            data_segment.push(*value);
            1
        }
        Directive::Bts(count) => {
            data_segment.resize(data_segment.len() + *count as usize, 0);
            *count as u32
        }
        Directive::Str(StrArg::Literal(bytes)) => {
            data_segment.push(bytes.len() as u8);
            data_segment.extend_from_slice(bytes);
            data_segment.push(0);
            bytes.len() as u32 + 2
        }
        Directive::Str(StrArg::Reserve(count)) => {
            data_segment.push(*count);
            data_segment.resize(data_segment.len() + *count as usize, 0);
            data_segment.push(0);
            *count as u32 + 2
        }
    }
}

/// Pass 2: replace deferred records with encoded instructions using resolved
/// label addresses, producing the final code-segment bytes.
pub fn second_pass(
    code_section: &[CodeEntry],
    symbol_table: &SymbolTable,
) -> Result<Vec<u8>, AssemblyError> {
    let mut bytecode = Vec::with_capacity(code_section.len() * INSTRUCTION_SIZE as usize);

    for entry in code_section {
        match entry {
            CodeEntry::Encoded(bytes) => bytecode.extend_from_slice(bytes),
            CodeEntry::JumpTo {
                opcode,
                target,
                line,
            } => {
                let address = resolve_symbol(symbol_table, target, *line)?;
                bytecode.extend_from_slice(&encoder::encode_word(*opcode, 0, 0, 0, address as i32));
            }
            CodeEntry::RegisterTarget {
                opcode,
                reg,
                target,
                line,
            } => {
                let address = resolve_symbol(symbol_table, target, *line)?;
                bytecode
                    .extend_from_slice(&encoder::encode_word(*opcode, *reg, 0, 0, address as i32));
            }
        }
    }

    Ok(bytecode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    #[test]
    fn test_first_pass_code_only() {
        let lines = parse_source("trp #0\n").unwrap();
        let layout = first_pass(&lines).unwrap();
        assert_eq!(layout.entry_addr, 4);
        assert!(layout.data_segment.is_empty());
        assert_eq!(layout.code_section.len(), 1);
    }

    #[test]
    fn test_first_pass_data_then_code() {
        let lines = parse_source("V .INT #42\njmp MAIN\nMAIN trp #0\n").unwrap();
        let layout = first_pass(&lines).unwrap();
        assert_eq!(layout.entry_addr, 8);
        assert_eq!(layout.data_segment, vec![42, 0, 0, 0]);
        assert_eq!(layout.code_section.len(), 2);
        assert_eq!(layout.symbol_table.get("V"), Some(&4));
        assert_eq!(layout.symbol_table.get("MAIN"), Some(&16));
    }

    #[test]
    fn test_first_pass_data_addresses() {
        let source = "A .INT #1\nB .BYT #2\nC .BTS #3\nD .STR \"hi\"\nE .STR #2\njmp M\nM trp #0\n";
        let lines = parse_source(source).unwrap();
        let layout = first_pass(&lines).unwrap();
        assert_eq!(layout.symbol_table.get("A"), Some(&4));
        assert_eq!(layout.symbol_table.get("B"), Some(&8));
        assert_eq!(layout.symbol_table.get("C"), Some(&9));
        assert_eq!(layout.symbol_table.get("D"), Some(&12));
        assert_eq!(layout.symbol_table.get("E"), Some(&16));
        // 4 + 1 + 3 + 4 + 4 data bytes, entry right after
        assert_eq!(layout.entry_addr, 20);
        assert_eq!(layout.data_segment.len(), 16);
        assert_eq!(layout.symbol_table.get("M"), Some(&28));
    }

    #[test]
    fn test_first_pass_str_reserve_layout() {
        let lines = parse_source("S .STR #3\njmp M\nM trp #0\n").unwrap();
        let layout = first_pass(&lines).unwrap();
        assert_eq!(layout.data_segment, vec![3, 0, 0, 0, 0]);
        assert_eq!(layout.entry_addr, 9);
    }

    #[test]
    fn test_first_pass_duplicate_label() {
        let lines = parse_source("X .INT #1\nX .INT #2\njmp M\nM trp #0\n").unwrap();
        let err = first_pass(&lines).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::DuplicateLabel {
                line: 2,
                name: "X".to_string(),
            }
        );
    }

    #[test]
    fn test_first_pass_missing_main() {
        let lines = parse_source("X .INT #5\nY .BYT #1\n").unwrap();
        let err = first_pass(&lines).unwrap_err();
        assert_eq!(err, AssemblyError::MissingMain { line: 2 });
    }

    #[test]
    fn test_first_pass_missing_jmp_main() {
        // a labeled or non-jmp first code line cannot end the data segment
        let lines = parse_source("V .INT #42\nMAIN movi r1, #10\n trp #0\n").unwrap();
        let err = first_pass(&lines).unwrap_err();
        assert_eq!(err, AssemblyError::MissingJmpMain { line: 2 });

        let lines = parse_source("V .INT #42\ncall MAIN\nMAIN trp #0\n").unwrap();
        let err = first_pass(&lines).unwrap_err();
        assert_eq!(err, AssemblyError::MissingJmpMain { line: 2 });
    }

    #[test]
    fn test_first_pass_directive_after_code() {
        let lines = parse_source("jmp M\nM trp #0\nV .INT #1\n").unwrap();
        let err = first_pass(&lines).unwrap_err();
        assert!(matches!(err, AssemblyError::InvalidDirective { line: 3, .. }));
    }

    #[test]
    fn test_second_pass_resolves_deferred_records() {
        let lines = parse_source("jmp MAIN\nMAIN bnz r3, END\nEND trp #0\n").unwrap();
        let layout = first_pass(&lines).unwrap();
        let code = second_pass(&layout.code_section, &layout.symbol_table).unwrap();
        assert_eq!(
            code,
            vec![
                1, 0, 0, 0, 12, 0, 0, 0, // jmp MAIN
                3, 3, 0, 0, 20, 0, 0, 0, // bnz r3, END
                31, 0, 0, 0, 0, 0, 0, 0, // trp #0
            ]
        );
    }

    #[test]
    fn test_second_pass_undefined_label() {
        let lines = parse_source("jmp MAIN\nMAIN jmp NOWHERE\n").unwrap();
        let layout = first_pass(&lines).unwrap();
        let err = second_pass(&layout.code_section, &layout.symbol_table).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::UndefinedLabel {
                line: 2,
                name: "NOWHERE".to_string(),
            }
        );
    }
}
