use crate::ast::{Operand, Register};
use crate::errors::AssemblyError;
use crate::parser::ast_builder::AstBuilder;
use crate::parser::ast_builder::operand_builders::build_operand;
use anyhow::Result;

impl<'a> AstBuilder<'a> {
    // Helper to get the next operand
    pub fn pop_operand(&mut self) -> Result<Operand> {
        let pair = self
            .pairs
            .next()
            .ok_or_else(|| AssemblyError::InvalidOperands {
                line: self.line_number,
                reason: "Expected an operand, but found none.".to_string(),
            })?;
        build_operand(pair)
    }

    // validation helper
    pub fn expect_register(&mut self) -> Result<Register> {
        let op = self.pop_operand()?;
        if let Operand::Register(r) = op {
            Ok(r)
        } else {
            Err(AssemblyError::InvalidOperands {
                line: self.line_number,
                reason: "Expected a register operand.".to_string(),
            }
            .into())
        }
    }

    // validate an immediate value (#n or 'c')
    pub fn expect_immediate(&mut self) -> Result<i32> {
        let op = self.pop_operand()?;
        if let Operand::Immediate(value) = op {
            Ok(value)
        } else {
            Err(AssemblyError::InvalidOperands {
                line: self.line_number,
                reason: "Expected an immediate value.".to_string(),
            }
            .into())
        }
    }

    // validate a label target
    pub fn expect_target(&mut self) -> Result<String> {
        let op = self.pop_operand()?;
        match op {
            Operand::Label(label) => Ok(label),
            _ => Err(AssemblyError::InvalidOperands {
                line: self.line_number,
                reason: "Expected a label target.".to_string(),
            }
            .into()),
        }
    }

    // every builder finishes here so extra operands are rejected
    pub fn expect_done(&mut self) -> Result<()> {
        if self.pairs.next().is_some() {
            Err(AssemblyError::InvalidOperands {
                line: self.line_number,
                reason: "Too many operands.".to_string(),
            }
            .into())
        } else {
            Ok(())
        }
    }
}
