//! Temp/label allocation and the required-value helper.

use crate::ast::Node;
use crate::ir::Instruction;

use super::{GenerateError, LogicBuilder};

// ─── Allocator ─────────────────────────────────────────────────────

/// Monotonic temp and label counters for one generation run.
///
/// Names are never reused: `tmp0, tmp1, …` and `label0, label1, …`.
#[derive(Clone, Debug, Default)]
pub struct Allocator {
    tmp: u32,
    label: u32,
}

impl Allocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_temp(&mut self) -> String {
        let name = format!("tmp{}", self.tmp);
        self.tmp += 1;
        name
    }

    pub fn next_label(&mut self) -> String {
        let name = format!("label{}", self.label);
        self.label += 1;
        name
    }

    /// Number of temps handed out so far.
    pub fn temps_allocated(&self) -> u32 {
        self.tmp
    }

    /// Number of labels handed out so far.
    pub fn labels_allocated(&self) -> u32 {
        self.label
    }
}

// ─── LogicBuilder helpers ──────────────────────────────────────────

impl LogicBuilder {
    pub(crate) fn fresh_temp(&mut self) -> String {
        self.alloc.next_temp()
    }

    pub(crate) fn fresh_label(&mut self) -> String {
        self.alloc.next_label()
    }

    /// Lower `node` and insist that it yields a value.
    ///
    /// `role` names the consuming position for the error message, e.g.
    /// "right operand of `+`".
    pub(crate) fn lower_value(
        &mut self,
        node: &Node,
        role: &str,
    ) -> Result<(String, Vec<Instruction>), GenerateError> {
        let lowered = self.lower(node)?;
        match lowered.value {
            Some(value) => Ok((value, lowered.instructions)),
            None => Err(GenerateError::new(format!(
                "expected {} to produce a value, found none in `{}`",
                role, node
            ))),
        }
    }
}
