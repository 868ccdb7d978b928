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
use crate::parser::Rule;
use anyhow::Result;
use pest::iterators::Pair;

// decode a #n decimal literal. Parsed wide so that range-checked contexts
// can validate the written value before it is truncated to 32 bits.
pub fn pair_to_number(pair: &Pair<Rule>) -> Result<i64> {
    let line = pair.as_span().start_pos().line_col().0;
    let digits = &pair.as_str()[1..];
    digits.parse::<i64>().map_err(|_| {
        AssemblyError::ParseImmediate {
            line,
            reason: format!("number value must be a valid integer: {}", pair.as_str()),
        }
        .into()
    })
}

// decode a single-quoted character literal to its code point
pub fn pair_to_char(pair: &Pair<Rule>) -> Result<i32> {
    let line = pair.as_span().start_pos().line_col().0;
    let text = pair.as_str();
    let body: Vec<char> = text[1..text.len() - 1].chars().collect();

    match body.as_slice() {
        ['\\', escape] => match escape_code(*escape) {
            Some(code) => Ok(code as i32),
            None => Err(AssemblyError::ParseImmediate {
                line,
                reason: format!("invalid escape sequence: \\{}", escape),
            }
            .into()),
        },
        [c] => Ok(*c as i32),
        _ => Err(AssemblyError::ParseImmediate {
            line,
            reason: format!("invalid character literal: {}", text),
        }
        .into()),
    }
}

// the escape set shared by character and string literals
pub fn escape_code(escape: char) -> Option<u8> {
    match escape {
        'n' => Some(b'\n'),
        't' => Some(b'\t'),
        'r' => Some(b'\r'),
        'b' => Some(0x08),
        '\\' => Some(b'\\'),
        '\'' => Some(b'\''),
        '"' => Some(b'"'),
        _ => None,
    }
}

// apply escape processing to a string literal body
pub fn unescape_string(body: &str, line_num: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            let escape = chars.next().ok_or_else(|| AssemblyError::ParseString {
                line: line_num,
                reason: "Invalid escape sequence".to_string(),
            })?;
            let code = escape_code(escape).ok_or_else(|| AssemblyError::ParseString {
                line: line_num,
                reason: format!("Invalid escape sequence: \\{}", escape),
            })?;
            bytes.push(code);
        } else {
            bytes.push(c as u8);
        }
    }

    Ok(bytes)
}

pub fn check_unsigned_byte(value: i64, line_num: usize) -> Result<()> {
    if (0..=255).contains(&value) {
        Ok(())
    } else {
        Err(AssemblyError::InvalidDirective {
            line: line_num,
            reason: format!("value must be an unsigned byte (max: 255, min: 0): {}", value),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_code() {
        assert_eq!(escape_code('n'), Some(10));
        assert_eq!(escape_code('t'), Some(9));
        assert_eq!(escape_code('r'), Some(13));
        assert_eq!(escape_code('b'), Some(8));
        assert_eq!(escape_code('\\'), Some(92));
        assert_eq!(escape_code('\''), Some(39));
        assert_eq!(escape_code('"'), Some(34));
        assert_eq!(escape_code('q'), None);
    }

    #[test]
    fn test_unescape_string() {
        assert_eq!(unescape_string("Hi", 1).unwrap(), b"Hi".to_vec());
        assert_eq!(
            unescape_string("a\\nb", 1).unwrap(),
            vec![b'a', b'\n', b'b']
        );
        assert_eq!(unescape_string("", 1).unwrap(), Vec::<u8>::new());
        assert!(unescape_string("bad\\q", 1).is_err());
    }

    #[test]
    fn test_check_unsigned_byte() {
        assert!(check_unsigned_byte(0, 1).is_ok());
        assert!(check_unsigned_byte(255, 1).is_ok());
        assert!(check_unsigned_byte(256, 1).is_err());
        assert!(check_unsigned_byte(-1, 1).is_err());
    }
}
