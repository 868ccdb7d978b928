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

use crate::errors::AssemblyError;
use std::collections::HashMap;

// The symbol table stores label names and their byte addresses within the
// output image. Insertion-only: once defined, an address never changes.
pub type SymbolTable = HashMap<String, u32>;

pub fn define_symbol(
    symbol_table: &mut SymbolTable,
    name: &str,
    address: u32,
    line_num: usize,
) -> Result<(), AssemblyError> {
    if symbol_table.contains_key(name) {
        return Err(AssemblyError::DuplicateLabel {
            line: line_num,
            name: name.to_string(),
        });
    }

    symbol_table.insert(name.to_string(), address);
    Ok(())
}

pub fn resolve_symbol(
    symbol_table: &SymbolTable,
    name: &str,
    line_num: usize,
) -> Result<u32, AssemblyError> {
    symbol_table
        .get(name)
        .copied()
        .ok_or_else(|| AssemblyError::UndefinedLabel {
            line: line_num,
            name: name.to_string(),
        })
}
