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

pub mod assembler;
pub mod ast;
pub mod errors;
pub mod file_reader;
pub mod parser;

use std::path::Path;

use anyhow::{Context, Result};
use file_reader::FileReader;

extern crate pest;
extern crate pest_derive;

/// Assemble the source file at `source_path` into an object-file image.
pub fn assemble<F: FileReader>(source_path: &Path, reader: &F) -> Result<Vec<u8>> {
    let source = reader.read_to_string(source_path)?;

    assemble_source(&source)
}

/// Run both passes over in-memory source text and produce the finished
/// image: entry-address header, data segment, code segment.
pub fn assemble_source(source: &str) -> Result<Vec<u8>> {
    let lines = parser::parse_source(source).context("Failed during parsing stage")?;

    let layout = assembler::first_pass(&lines).context("Failed during assembler pass 1")?;

    let code_segment = assembler::second_pass(&layout.code_section, &layout.symbol_table)
        .context("Failed during assembler pass 2")?;

    let mut image = Vec::with_capacity(
        assembler::HEADER_SIZE as usize + layout.data_segment.len() + code_segment.len(),
    );
    image.extend_from_slice(&layout.entry_addr.to_le_bytes());
    image.extend_from_slice(&layout.data_segment);
    image.extend_from_slice(&code_segment);

    Ok(image)
}
