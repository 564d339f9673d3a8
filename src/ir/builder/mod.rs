//! LogicBuilder: lowers a Mindcode AST into `Vec<Instruction>`.
//!
//! A single recursive pass. Every visit returns a [`Lowered`]: the
//! reference holding the node's value (if it has one) and the instructions
//! that compute it, in evaluation order. Parents concatenate their
//! children's instructions left to right and append their own.
//!
//! Each builder owns one [`Allocator`], so temp and label numbering starts
//! at zero for every program and independent programs can be generated on
//! separate threads without coordination.

mod call;
mod control;
mod expr;
mod helpers;
mod ops;

use std::fmt;

use crate::ast::Node;
use crate::ir::Instruction;

pub use self::helpers::Allocator;

// ─── Results ───────────────────────────────────────────────────────

/// Output of lowering one node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lowered {
    /// Value reference: a temp, variable, `@` built-in or literal token.
    /// `None` only for `Comment` and `NoOp`.
    pub value: Option<String>,
    pub instructions: Vec<Instruction>,
}

impl Lowered {
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn value(value: impl Into<String>, instructions: Vec<Instruction>) -> Self {
        Self {
            value: Some(value.into()),
            instructions,
        }
    }
}

/// A fatal code generation failure. Aborts the whole run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateError {
    pub message: String,
}

impl GenerateError {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for GenerateError {}

// ─── LogicBuilder ──────────────────────────────────────────────────

/// Builds Logic instructions from an AST.
#[derive(Debug, Default)]
pub struct LogicBuilder {
    pub(crate) alloc: Allocator,
}

impl LogicBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower one node. See the module docs for the composition rules.
    pub fn lower(&mut self, node: &Node) -> Result<Lowered, GenerateError> {
        match node {
            Node::Null => Ok(Lowered::value("null", Vec::new())),
            Node::Boolean(v) => Ok(Lowered::value(v.to_string(), Vec::new())),
            Node::Numeric(literal) => Ok(self.build_numeric(literal)),
            Node::Str(text) => Ok(self.build_string(text)),
            Node::VarRef(name) => Ok(Lowered::value(name.as_str(), Vec::new())),
            Node::UnitRef(name) => Ok(Lowered::value(format!("@{}", name), Vec::new())),

            Node::Seq { .. } => self.build_seq(node),
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => self.build_if(cond, then_branch, else_branch),
            Node::While { cond, body } => self.build_while(cond, body),
            Node::Case {
                cond,
                alternatives,
                else_branch,
            } => self.build_case(cond, alternatives, else_branch),

            Node::VarAssign { name, value } => self.build_var_assign(name, value),
            Node::UnitAssign { name, value } => self.build_unit_assign(name, value),

            Node::HeapRead { cell, address } => self.build_heap_read(cell, address),
            Node::HeapWrite {
                cell,
                address,
                value,
            } => self.build_heap_write(cell, address, value),

            Node::Control {
                property,
                target,
                value,
            } => self.build_control(property, target, value),
            Node::SensorReading { target, sensor } => Ok(self.build_sensor(target, sensor)),

            Node::UnaryOp { op, expr } => self.build_unary(op, expr),
            Node::BinaryOp { op, left, right } => self.build_binary(op, left, right),
            Node::FunctionCall { name, args } => self.build_call(name, args),

            Node::Comment(_) | Node::NoOp => Ok(Lowered::empty()),
        }
    }

    /// Lower a whole program and terminate it with `end`.
    pub fn build_program(mut self, program: &Node) -> Result<Vec<Instruction>, GenerateError> {
        let mut instructions = self.lower(program)?.instructions;
        instructions.push(Instruction::end());
        Ok(instructions)
    }
}

/// Generate a complete Logic program from an AST with a fresh builder.
pub fn generate(program: &Node) -> Result<Vec<Instruction>, GenerateError> {
    LogicBuilder::new().build_program(program)
}
