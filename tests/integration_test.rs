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
use asm4380::file_reader::MockFileReader;
use std::path::Path;

// one encoded instruction: opcode, three operand bytes, 32-bit LE immediate
fn instr(op: u8, a: u8, b: u8, c: u8, imm: i32) -> Vec<u8> {
    let mut bytes = vec![op, a, b, c];
    bytes.extend_from_slice(&imm.to_le_bytes());
    bytes
}

fn assemble_str(source: &str) -> anyhow::Result<Vec<u8>> {
    let mut reader = MockFileReader::default();
    reader.add_file("test.asm", source);
    assemble(Path::new("test.asm"), &reader)
}

#[test]
fn test_degenerate_hello() {
    let image = assemble_str("trp #0\n").unwrap();

    assert_eq!(image.len(), 12);
    assert_eq!(&image[0..4], &[0x04, 0x00, 0x00, 0x00]); // entry = 4
    assert_eq!(&image[4..12], &[0x1F, 0, 0, 0, 0, 0, 0, 0]); // trp #0
}

#[test]
fn test_data_then_code() {
    let image = assemble_str("V .INT #42\njmp MAIN\nMAIN trp #0\n").unwrap();

    assert_eq!(image.len(), 24);
    assert_eq!(&image[0..4], &[0x08, 0x00, 0x00, 0x00]); // entry = 8
    assert_eq!(&image[4..8], &[0x2A, 0x00, 0x00, 0x00]); // V = 42
    assert_eq!(&image[8..16], &[0x01, 0, 0, 0, 0x10, 0, 0, 0]); // jmp MAIN (16)
    assert_eq!(&image[16..24], &[0x1F, 0, 0, 0, 0, 0, 0, 0]); // trp #0
}

#[test]
fn test_string_directive() {
    let image = assemble_str("S .STR \"Hi\"\njmp M\nM trp #0\n").unwrap();

    assert_eq!(image.len(), 24);
    assert_eq!(&image[0..4], &[0x08, 0x00, 0x00, 0x00]); // entry = 8
    assert_eq!(&image[4..8], &[0x02, 0x48, 0x69, 0x00]); // len, "Hi", NUL
    assert_eq!(&image[8..16], &[0x01, 0, 0, 0, 0x10, 0, 0, 0]); // jmp M (16)
}

#[test]
fn test_string_directive_with_escapes() {
    let image = assemble_str("S .STR \"a\\nb\"\njmp M\nM trp #0\n").unwrap();

    assert_eq!(image.len(), 25);
    assert_eq!(&image[0..4], &[0x09, 0x00, 0x00, 0x00]); // entry = 9
    assert_eq!(&image[4..9], &[0x03, 0x61, 0x0A, 0x62, 0x00]);
    assert_eq!(&image[9..17], &[0x01, 0, 0, 0, 0x11, 0, 0, 0]); // jmp M (17)
}

#[test]
fn test_string_reserve_form() {
    let image = assemble_str("S .STR #2\njmp M\nM trp #0\n").unwrap();

    // reserve form occupies the declared length plus the length byte and NUL
    assert_eq!(image.len(), 24);
    assert_eq!(&image[0..4], &[0x08, 0x00, 0x00, 0x00]);
    assert_eq!(&image[4..8], &[0x02, 0x00, 0x00, 0x00]);
    assert_eq!(&image[8..16], &[0x01, 0, 0, 0, 0x10, 0, 0, 0]); // jmp M (16)
}

#[test]
fn test_byt_and_bts_directives() {
    let image = assemble_str("A .BYT 'Z'\nB .BYT\nC .BTS #3\njmp M\nM trp #0\n").unwrap();

    assert_eq!(image.len(), 25);
    assert_eq!(&image[0..4], &[0x09, 0x00, 0x00, 0x00]); // entry = 9
    assert_eq!(&image[4..9], &[0x5A, 0x00, 0x00, 0x00, 0x00]); // 'Z', 0, 3 zeros
    assert_eq!(&image[9..17], &[0x01, 0, 0, 0, 0x11, 0, 0, 0]); // jmp M (17)
}

#[test]
fn test_forward_branch() {
    let image = assemble_str("jmp MAIN\nMAIN bnz r3, END\nEND trp #0\n").unwrap();

    assert_eq!(image.len(), 28);
    assert_eq!(&image[0..4], &[0x04, 0x00, 0x00, 0x00]); // entry = 4
    assert_eq!(image[4..12].to_vec(), instr(1, 0, 0, 0, 12)); // jmp MAIN
    assert_eq!(image[12..20].to_vec(), instr(3, 3, 0, 0, 20)); // bnz r3, END
    assert_eq!(image[20..28].to_vec(), instr(31, 0, 0, 0, 0)); // trp #0
}

#[test]
fn test_simple_program() {
    let source = "VALUE .INT #42\n\njmp MAIN\nMAIN movi r1, #10\nldr r2, VALUE\nadd r3, r1, r2\ntrp #0\n";
    let image = assemble_str(source).unwrap();

    assert_eq!(image.len(), 48);
    assert_eq!(&image[0..4], &[0x08, 0x00, 0x00, 0x00]); // entry = 8
    assert_eq!(&image[4..8], &[0x2A, 0x00, 0x00, 0x00]); // VALUE
    let mut code = Vec::new();
    code.extend(instr(1, 0, 0, 0, 16)); // jmp MAIN
    code.extend(instr(8, 1, 0, 0, 10)); // movi r1, #10
    code.extend(instr(11, 2, 0, 0, 4)); // ldr r2, VALUE
    code.extend(instr(18, 3, 1, 2, 0)); // add r3, r1, r2
    code.extend(instr(31, 0, 0, 0, 0)); // trp #0
    assert_eq!(&image[8..], &code[..]);
}

#[test]
fn test_every_instruction_shape() {
    let source = "\
DATA_VAL .INT #100
BYTE_VAL .BYT #50
HEAP_SZ .INT #64
jmp MAIN
MAIN mov r1, r2
movi r3, #42
lda r4, DATA_VAL
str r5, DATA_VAL
ldr r6, DATA_VAL
stb r7, BYTE_VAL
ldb r8, BYTE_VAL
istr r9, r10
ildr r11, r12
istb r13, r14
ildb r15, r0
add r9, r10, r11
addi r12, r13, #10
sub r14, r15, r0
subi r1, r2, #5
mul r3, r4, r5
muli r6, r7, #3
div r8, r9, r10
sdiv r11, r12, r13
divi r14, r15, #2
and r1, r2, r3
or r4, r5, r6
cmp r7, r8, r9
cmpi r10, r11, #1
alci r1, #16
allc r2, HEAP_SZ
iallc r3, r4
pshr r5
pshb r6
popr r7
popb r8
jmr r9
bnz r1, MAIN
bgt r2, MAIN
blt r3, MAIN
brz r4, MAIN
call FUNC
trp #0
FUNC ret
";
    let image = assemble_str(source).unwrap();

    // data: 4 + 1 + 4 bytes, entry right after the header and data
    let entry = 13;
    let main = entry + 8;
    let func = entry + 8 * 39;
    assert_eq!(image.len(), 4 + 9 + 8 * 40);
    assert_eq!(&image[0..4], &(entry as u32).to_le_bytes());
    assert_eq!(&image[4..8], &100i32.to_le_bytes());
    assert_eq!(image[8], 50);
    assert_eq!(&image[9..13], &64i32.to_le_bytes());

    let mut code = Vec::new();
    code.extend(instr(1, 0, 0, 0, main)); // jmp MAIN
    code.extend(instr(7, 1, 2, 0, 0)); // mov
    code.extend(instr(8, 3, 0, 0, 42)); // movi
    code.extend(instr(9, 4, 0, 0, 4)); // lda
    code.extend(instr(10, 5, 0, 0, 4)); // str
    code.extend(instr(11, 6, 0, 0, 4)); // ldr
    code.extend(instr(12, 7, 0, 0, 8)); // stb
    code.extend(instr(13, 8, 0, 0, 8)); // ldb
    code.extend(instr(14, 9, 10, 0, 0)); // istr
    code.extend(instr(15, 11, 12, 0, 0)); // ildr
    code.extend(instr(16, 13, 14, 0, 0)); // istb
    code.extend(instr(17, 15, 0, 0, 0)); // ildb
    code.extend(instr(18, 9, 10, 11, 0)); // add
    code.extend(instr(19, 12, 13, 0, 10)); // addi
    code.extend(instr(20, 14, 15, 0, 0)); // sub
    code.extend(instr(21, 1, 2, 0, 5)); // subi
    code.extend(instr(22, 3, 4, 5, 0)); // mul
    code.extend(instr(23, 6, 7, 0, 3)); // muli
    code.extend(instr(24, 8, 9, 10, 0)); // div
    code.extend(instr(25, 11, 12, 13, 0)); // sdiv
    code.extend(instr(26, 14, 15, 0, 2)); // divi
    code.extend(instr(27, 1, 2, 3, 0)); // and
    code.extend(instr(28, 4, 5, 6, 0)); // or
    code.extend(instr(29, 7, 8, 9, 0)); // cmp
    code.extend(instr(30, 10, 11, 0, 1)); // cmpi
    code.extend(instr(32, 1, 0, 0, 16)); // alci
    code.extend(instr(33, 2, 0, 0, 9)); // allc HEAP_SZ
    code.extend(instr(34, 3, 4, 0, 0)); // iallc
    code.extend(instr(35, 5, 0, 0, 0)); // pshr
    code.extend(instr(36, 6, 0, 0, 0)); // pshb
    code.extend(instr(37, 7, 0, 0, 0)); // popr
    code.extend(instr(38, 8, 0, 0, 0)); // popb
    code.extend(instr(2, 9, 0, 0, 0)); // jmr
    code.extend(instr(3, 1, 0, 0, main)); // bnz
    code.extend(instr(4, 2, 0, 0, main)); // bgt
    code.extend(instr(5, 3, 0, 0, main)); // blt
    code.extend(instr(6, 4, 0, 0, main)); // brz
    code.extend(instr(39, 0, 0, 0, func)); // call FUNC
    code.extend(instr(31, 0, 0, 0, 0)); // trp #0
    code.extend(instr(40, 0, 0, 0, 0)); // ret
    assert_eq!(&image[entry as usize..], &code[..]);
}

#[test]
fn test_case_insensitive_mnemonics_and_registers() {
    let image = assemble_str("JMP main\nmain MOVI R3, #42\nTrp #0\n").unwrap();

    assert_eq!(image.len(), 28);
    assert_eq!(image[4..12].to_vec(), instr(1, 0, 0, 0, 12)); // jmp main
    assert_eq!(image[12..20].to_vec(), instr(8, 3, 0, 0, 42)); // movi r3, #42
    assert_eq!(image[20..28].to_vec(), instr(31, 0, 0, 0, 0)); // trp #0
}

#[test]
fn test_case_sensitive_labels() {
    let image = assemble_str("jmp MAIN\nMain trp #0\nMAIN jmp Main\n").unwrap();

    assert_eq!(image.len(), 28);
    assert_eq!(image[4..12].to_vec(), instr(1, 0, 0, 0, 20)); // jmp MAIN
    assert_eq!(image[12..20].to_vec(), instr(31, 0, 0, 0, 0)); // Main trp #0
    assert_eq!(image[20..28].to_vec(), instr(1, 0, 0, 0, 12)); // jmp Main
}

#[test]
fn test_comments_and_blank_lines() {
    let source = "; header comment\n\nV .INT #7 ; the value\n\njmp MAIN ; enter\nMAIN trp #0\n";
    let image = assemble_str(source).unwrap();

    assert_eq!(image.len(), 24);
    assert_eq!(&image[0..4], &[0x08, 0x00, 0x00, 0x00]);
    assert_eq!(&image[4..8], &[0x07, 0x00, 0x00, 0x00]);
    assert_eq!(image[8..16].to_vec(), instr(1, 0, 0, 0, 16));
}

#[test]
fn test_negative_immediates_are_twos_complement() {
    let image = assemble_str("movi r2, #-1\ntrp #0\n").unwrap();

    assert_eq!(
        image[4..12].to_vec(),
        vec![8, 2, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn test_output_is_deterministic() {
    let source = "V .INT #42\njmp MAIN\nMAIN ldr r1, V\ntrp #0\n";
    let first = assemble_str(source).unwrap();
    let second = assemble_str(source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_label_reports_line() {
    let err = assemble_str("X .INT #1\nX .INT #2\njmp M\nM trp #0\n").unwrap_err();
    let asm_err = err.downcast_ref::<AssemblyError>().unwrap();
    assert_eq!(asm_err.line(), 2);
    assert!(matches!(asm_err, AssemblyError::DuplicateLabel { .. }));
}

#[test]
fn test_missing_main() {
    let err = assemble_str("X .INT #5\n").unwrap_err();
    let asm_err = err.downcast_ref::<AssemblyError>().unwrap();
    assert!(matches!(asm_err, AssemblyError::MissingMain { .. }));
}

#[test]
fn test_data_segment_without_jmp_transition() {
    let err = assemble_str("VALUE .INT #42\nMAIN movi r1, #10\ntrp #0\n").unwrap_err();
    let asm_err = err.downcast_ref::<AssemblyError>().unwrap();
    assert_eq!(asm_err.line(), 2);
    assert!(matches!(asm_err, AssemblyError::MissingJmpMain { .. }));
}

#[test]
fn test_undefined_label_reports_enqueue_line() {
    let err = assemble_str("jmp MAIN\nMAIN jmp UNDEFINED_LABEL\ntrp #0\n").unwrap_err();
    let asm_err = err.downcast_ref::<AssemblyError>().unwrap();
    assert_eq!(asm_err.line(), 2);
    assert!(matches!(asm_err, AssemblyError::UndefinedLabel { .. }));
}

#[test]
fn test_invalid_mnemonic_is_a_syntax_error() {
    let err = assemble_str("jmp MAIN\nMAIN INVALID_OP r1, r2\ntrp #0\n").unwrap_err();
    let asm_err = err.downcast_ref::<AssemblyError>().unwrap();
    assert_eq!(asm_err.line(), 2);
    assert!(matches!(asm_err, AssemblyError::Syntax(_)));
}

#[test]
fn test_wrong_operand_count() {
    let err = assemble_str("jmp MAIN\nMAIN mov r1\ntrp #0\n").unwrap_err();
    let asm_err = err.downcast_ref::<AssemblyError>().unwrap();
    assert_eq!(asm_err.line(), 2);
    assert!(matches!(asm_err, AssemblyError::InvalidOperands { .. }));
}

#[test]
fn test_byte_value_out_of_range() {
    let err = assemble_str("B .BYT #256\njmp M\nM trp #0\n").unwrap_err();
    let asm_err = err.downcast_ref::<AssemblyError>().unwrap();
    assert!(matches!(asm_err, AssemblyError::InvalidDirective { .. }));
}

#[test]
fn test_bts_rejects_negative_count() {
    let err = assemble_str("B .BTS #-1\njmp M\nM trp #0\n").unwrap_err();
    let asm_err = err.downcast_ref::<AssemblyError>().unwrap();
    assert!(matches!(asm_err, AssemblyError::InvalidDirective { .. }));
}

#[test]
fn test_directive_after_code_is_rejected() {
    let err = assemble_str("jmp M\nM trp #0\nLATE .INT #1\n").unwrap_err();
    let asm_err = err.downcast_ref::<AssemblyError>().unwrap();
    assert_eq!(asm_err.line(), 3);
    assert!(matches!(asm_err, AssemblyError::InvalidDirective { .. }));
}

#[test]
fn test_unreadable_input_is_not_an_assembly_error() {
    let reader = MockFileReader::default();
    let err = assemble(Path::new("missing.asm"), &reader).unwrap_err();
    assert!(err.downcast_ref::<AssemblyError>().is_none());
}
