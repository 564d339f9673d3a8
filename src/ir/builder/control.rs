//! Control flow: `if`, `while` and `case` lowered to jumps and labels.
//!
//! A condition is taken when it equals `true`; every branch jumps away on
//! `notEqual <cond> true`. Result temps and labels are allocated after all
//! sub-trees are visited, so inner constructs get the lower numbers.

use crate::ast::{CaseAlternative, Node};
use crate::ir::Instruction;

use super::{GenerateError, LogicBuilder, Lowered};

impl LogicBuilder {
    pub(crate) fn build_if(
        &mut self,
        cond: &Node,
        then_branch: &Node,
        else_branch: &Node,
    ) -> Result<Lowered, GenerateError> {
        let (cond_ref, cond_insts) = self.lower_value(cond, "condition of `if`")?;
        let (then_ref, then_insts) = self.lower_value(then_branch, "true branch of `if`")?;
        let else_lowered = self.lower(else_branch)?;

        let result = self.fresh_temp();
        let else_label = self.fresh_label();
        let end_label = self.fresh_label();

        let mut out = cond_insts;
        out.push(Instruction::jump_not_equal(&else_label, &cond_ref, "true"));
        out.extend(then_insts);
        out.push(Instruction::set(&result, &then_ref));
        out.push(Instruction::jump_always(&end_label));
        out.push(Instruction::label(&else_label));
        out.extend(else_lowered.instructions);
        let else_ref = else_lowered.value.as_deref().unwrap_or("null");
        out.push(Instruction::set(&result, else_ref));
        out.push(Instruction::label(&end_label));

        Ok(Lowered::value(result, out))
    }

    /// The returned value is the body's last-value reference as it stands
    /// after the final iteration; it is not a loop result.
    pub(crate) fn build_while(&mut self, cond: &Node, body: &Node) -> Result<Lowered, GenerateError> {
        let (cond_ref, cond_insts) = self.lower_value(cond, "condition of `while`")?;
        let body = self.lower(body)?;

        let cond_label = self.fresh_label();
        let done_label = self.fresh_label();

        let mut out = vec![Instruction::label(&cond_label)];
        out.extend(cond_insts);
        out.push(Instruction::jump_not_equal(&done_label, &cond_ref, "true"));
        out.extend(body.instructions);
        out.push(Instruction::jump_always(&cond_label));
        out.push(Instruction::label(&done_label));

        Ok(Lowered {
            value: body.value,
            instructions: out,
        })
    }

    /// `case` evaluates its subject once, then tests each `when` pattern in
    /// order with `notEqual` jumps, falling through to the else branch.
    pub(crate) fn build_case(
        &mut self,
        cond: &Node,
        alternatives: &[CaseAlternative],
        else_branch: &Node,
    ) -> Result<Lowered, GenerateError> {
        let (subject, subject_insts) = self.lower_value(cond, "subject of `case`")?;

        let mut arms = Vec::with_capacity(alternatives.len());
        for alt in alternatives {
            let (pattern, pattern_insts) =
                self.lower_value(&alt.pattern, "`when` pattern of `case`")?;
            let (body, body_insts) = self.lower_value(&alt.body, "`when` branch of `case`")?;
            arms.push((pattern, pattern_insts, body, body_insts));
        }
        let else_lowered = self.lower(else_branch)?;

        let result = self.fresh_temp();
        let next_labels: Vec<String> = (0..arms.len()).map(|_| self.fresh_label()).collect();
        let end_label = self.fresh_label();

        let mut out = subject_insts;
        for ((pattern, pattern_insts, body, body_insts), next) in arms.into_iter().zip(&next_labels)
        {
            out.extend(pattern_insts);
            out.push(Instruction::jump_not_equal(next, &subject, &pattern));
            out.extend(body_insts);
            out.push(Instruction::set(&result, &body));
            out.push(Instruction::jump_always(&end_label));
            out.push(Instruction::label(next));
        }
        out.extend(else_lowered.instructions);
        let else_ref = else_lowered.value.as_deref().unwrap_or("null");
        out.push(Instruction::set(&result, else_ref));
        out.push(Instruction::label(&end_label));

        Ok(Lowered::value(result, out))
    }
}
