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

use asm4380::assemble;
use asm4380::errors::AssemblyError;
use asm4380::file_reader::{AsmFileReader, write_object_file};
use clap::Parser as clap_parser;
use clap::error::ErrorKind;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "USAGE: asm4380 inputFile.asm";

#[derive(clap_parser)]
#[clap(version = "0.1.0", author = "Connor Nolan")]
struct Opts {
    /// Input assembly source file, must end in .asm
    input: PathBuf,
}

fn main() {
    process::exit(run());
}

// Exit codes: 0 success, 1 usage error, 2 assembly or output error.
fn run() -> i32 {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return 0;
        }
        Err(_) => {
            println!("{USAGE}");
            return 1;
        }
    };

    if opts.input.extension() != Some(OsStr::new("asm")) {
        println!("{USAGE}");
        return 1;
    }

    let reader = AsmFileReader;
    let image = match assemble(&opts.input, &reader) {
        Ok(image) => image,
        Err(err) => {
            return match err.downcast_ref::<AssemblyError>() {
                Some(asm_err) => {
                    println!("Assembler error occurred on line {}!", asm_err.line());
                    println!("{asm_err}");
                    2
                }
                // the input file could not be read
                None => {
                    println!("{USAGE}");
                    1
                }
            };
        }
    };

    let output_path = opts.input.with_extension("bin");
    if write_object_file(&output_path, &image).is_err() {
        println!("Assembler error occurred!");
        println!("Error writing to output file");
        return 2;
    }

    0
}
