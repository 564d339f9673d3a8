//! Literals, operators, assignments, memory cells and block I/O.

use crate::ast::Node;
use crate::ir::{Instruction, Opcode};

use super::ops::{binary_opcode, unary_opcode};
use super::{GenerateError, LogicBuilder, Lowered};

impl LogicBuilder {
    // ── Literals ──────────────────────────────────────────────────

    pub(crate) fn build_numeric(&mut self, literal: &str) -> Lowered {
        let tmp = self.fresh_temp();
        let inst = Instruction::set(&tmp, literal);
        Lowered::value(tmp, vec![inst])
    }

    /// Only `"` is escaped; Logic strings have no other escape syntax.
    pub(crate) fn build_string(&mut self, text: &str) -> Lowered {
        let tmp = self.fresh_temp();
        let quoted = format!("\"{}\"", text.replace('"', "\\\""));
        let inst = Instruction::set(&tmp, &quoted);
        Lowered::value(tmp, vec![inst])
    }

    // ── Operators ─────────────────────────────────────────────────

    pub(crate) fn build_unary(&mut self, op: &str, expr: &Node) -> Result<Lowered, GenerateError> {
        let (operand, mut out) = self.lower_value(expr, &format!("operand of `{}`", op))?;
        let code = unary_opcode(op)?;
        let tmp = self.fresh_temp();
        out.push(Instruction::new(
            Opcode::Op,
            [code, tmp.as_str(), operand.as_str()],
        ));
        Ok(Lowered::value(tmp, out))
    }

    pub(crate) fn build_binary(
        &mut self,
        op: &str,
        left: &Node,
        right: &Node,
    ) -> Result<Lowered, GenerateError> {
        let (lhs, mut out) = self.lower_value(left, &format!("left operand of `{}`", op))?;
        let (rhs, rhs_insts) = self.lower_value(right, &format!("right operand of `{}`", op))?;
        out.extend(rhs_insts);
        let code = binary_opcode(op)?;
        let tmp = self.fresh_temp();
        out.push(Instruction::new(
            Opcode::Op,
            [code, tmp.as_str(), lhs.as_str(), rhs.as_str()],
        ));
        Ok(Lowered::value(tmp, out))
    }

    // ── Sequencing ────────────────────────────────────────────────

    /// The spine is as deep as the statement list is long, so it is
    /// flattened and lowered in a loop rather than by recursion.
    pub(crate) fn build_seq(&mut self, seq: &Node) -> Result<Lowered, GenerateError> {
        let mut out = Vec::new();
        let mut value = None;
        for stmt in seq.statements() {
            let lowered = self.lower(stmt)?;
            out.extend(lowered.instructions);
            value = lowered.value;
        }
        Ok(Lowered {
            value,
            instructions: out,
        })
    }

    // ── Assignment ────────────────────────────────────────────────

    pub(crate) fn build_var_assign(
        &mut self,
        name: &str,
        value: &Node,
    ) -> Result<Lowered, GenerateError> {
        let role = format!("right-hand side of assignment to `{}`", name);
        let (rvalue, mut out) = self.lower_value(value, &role)?;
        out.push(Instruction::set(name, &rvalue));
        Ok(Lowered::value(rvalue, out))
    }

    /// `@name` is an existing addressable built-in, so no `set` binds it;
    /// the value is evaluated for its side effects only.
    pub(crate) fn build_unit_assign(
        &mut self,
        name: &str,
        value: &Node,
    ) -> Result<Lowered, GenerateError> {
        let lowered = self.lower(value)?;
        Ok(Lowered::value(format!("@{}", name), lowered.instructions))
    }

    // ── Memory cells ──────────────────────────────────────────────

    pub(crate) fn build_heap_read(
        &mut self,
        cell: &str,
        address: &Node,
    ) -> Result<Lowered, GenerateError> {
        let role = format!("address of read from `{}`", cell);
        let (addr, mut out) = self.lower_value(address, &role)?;
        let tmp = self.fresh_temp();
        out.push(Instruction::new(
            Opcode::Read,
            [tmp.as_str(), cell, addr.as_str()],
        ));
        Ok(Lowered::value(tmp, out))
    }

    pub(crate) fn build_heap_write(
        &mut self,
        cell: &str,
        address: &Node,
        value: &Node,
    ) -> Result<Lowered, GenerateError> {
        let (addr, mut out) =
            self.lower_value(address, &format!("address of write to `{}`", cell))?;
        let (val, val_insts) = self.lower_value(value, &format!("value written to `{}`", cell))?;
        out.extend(val_insts);
        out.push(Instruction::new(
            Opcode::Write,
            [val.as_str(), cell, addr.as_str()],
        ));
        Ok(Lowered::value(val, out))
    }

    // ── Blocks ────────────────────────────────────────────────────

    pub(crate) fn build_control(
        &mut self,
        property: &str,
        target: &str,
        value: &Node,
    ) -> Result<Lowered, GenerateError> {
        let role = format!("value of `{}.{}`", target, property);
        let (val, mut out) = self.lower_value(value, &role)?;
        out.push(Instruction::new(
            Opcode::Control,
            [property, target, val.as_str()],
        ));
        Ok(Lowered::value(val, out))
    }

    pub(crate) fn build_sensor(&mut self, target: &str, sensor: &str) -> Lowered {
        let tmp = self.fresh_temp();
        let inst = Instruction::new(Opcode::Sensor, [tmp.as_str(), target, sensor]);
        Lowered::value(tmp, vec![inst])
    }
}
