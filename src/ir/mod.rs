//! Mindustry Logic instructions, the target of code generation.
//!
//! Logic has no structured control flow: a program is a flat list of
//! fixed-arity instructions, jumps and labels. `builder` lowers the AST
//! into `Vec<Instruction>`; `Display` and `print_program` serialize it.

pub mod builder;

use std::fmt;

// ─── Opcodes ──────────────────────────────────────────────────────

/// Instruction keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    // ── Variables ──
    /// `set dest value`
    Set,
    /// `op <operation> dest a [b]`
    Op,

    // ── Control flow ──
    /// `jump label <condition> [a b]`
    Jump,
    /// Jump target marker.
    Label,
    End,

    // ── Memory cells ──
    Read,
    Write,

    // ── Blocks ──
    Control,
    Sensor,
    GetLink,
    Print,
    PrintFlush,

    // ── Units ──
    UBind,
    UControl,
}

impl Opcode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::Set => "set",
            Opcode::Op => "op",
            Opcode::Jump => "jump",
            Opcode::Label => "label",
            Opcode::End => "end",
            Opcode::Read => "read",
            Opcode::Write => "write",
            Opcode::Control => "control",
            Opcode::Sensor => "sensor",
            Opcode::GetLink => "getlink",
            Opcode::Print => "print",
            Opcode::PrintFlush => "printflush",
            Opcode::UBind => "ubind",
            Opcode::UControl => "ucontrol",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Instructions ─────────────────────────────────────────────────

/// One line of a Logic program: an opcode plus its operand tokens.
///
/// Operands are already in target form: bare literals, quoted strings,
/// variable names, `@`-prefixed built-ins or label names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub opcode: Opcode,
    pub args: Vec<String>,
}

impl Instruction {
    pub fn new<I, S>(opcode: Opcode, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            opcode,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn end() -> Self {
        Self {
            opcode: Opcode::End,
            args: Vec::new(),
        }
    }

    pub fn label(name: &str) -> Self {
        Self::new(Opcode::Label, [name])
    }

    /// `jump <label> always`
    pub fn jump_always(label: &str) -> Self {
        Self::new(Opcode::Jump, [label, "always"])
    }

    /// `jump <label> notEqual <a> <b>`
    pub fn jump_not_equal(label: &str, a: &str, b: &str) -> Self {
        Self::new(Opcode::Jump, [label, "notEqual", a, b])
    }

    pub fn set(dest: &str, value: &str) -> Self {
        Self::new(Opcode::Set, [dest, value])
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Serialize a program, one instruction per line.
pub fn print_program(instructions: &[Instruction]) -> String {
    let mut out = String::new();
    for inst in instructions {
        out.push_str(&inst.to_string());
        out.push('\n');
    }
    out
}

// ─── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_display() {
        assert_eq!(Instruction::set("tmp0", "5").to_string(), "set tmp0 5");
        assert_eq!(
            Instruction::new(Opcode::Op, ["add", "tmp2", "tmp0", "tmp1"]).to_string(),
            "op add tmp2 tmp0 tmp1"
        );
        assert_eq!(Instruction::end().to_string(), "end");
        assert_eq!(Instruction::jump_always("label1").to_string(), "jump label1 always");
        assert_eq!(
            Instruction::jump_not_equal("label0", "a", "true").to_string(),
            "jump label0 notEqual a true"
        );
    }

    #[test]
    fn test_quoted_operand_is_printed_verbatim() {
        let inst = Instruction::set("tmp0", "\"hello world\"");
        assert_eq!(inst.to_string(), "set tmp0 \"hello world\"");
    }

    #[test]
    fn test_print_program() {
        let program = vec![
            Instruction::new(Opcode::UBind, ["@poly"]),
            Instruction::new(Opcode::UControl, ["move", "@thisx", "@thisy"]),
            Instruction::end(),
        ];
        assert_eq!(
            print_program(&program),
            "ubind @poly\nucontrol move @thisx @thisy\nend\n"
        );
    }

    #[test]
    fn test_print_empty_program() {
        assert_eq!(print_program(&[]), "");
    }
}
