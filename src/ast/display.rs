//! Compact source-like rendering of AST nodes.
//!
//! Used by generator error messages and by `mindcode check --ast`. The
//! output is single-line and meant for humans; it is not guaranteed to
//! parse back.

use std::fmt;

use super::{CaseAlternative, Node};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Boolean(v) => write!(f, "{}", v),
            Node::Numeric(lit) => write!(f, "{}", lit),
            Node::Str(text) => write!(f, "\"{}\"", text),
            Node::VarRef(name) => write!(f, "{}", name),
            Node::UnitRef(name) => write!(f, "@{}", name),
            Node::Seq { .. } => {
                for (i, stmt) in self.statements().into_iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}", stmt)?;
                }
                Ok(())
            }
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => {
                write!(f, "if {} {{ {} }}", cond, then_branch)?;
                if !matches!(else_branch.as_ref(), Node::NoOp) {
                    write!(f, " else {{ {} }}", else_branch)?;
                }
                Ok(())
            }
            Node::While { cond, body } => write!(f, "while {} {{ {} }}", cond, body),
            Node::Case {
                cond,
                alternatives,
                else_branch,
            } => {
                write!(f, "case {} {{", cond)?;
                for CaseAlternative { pattern, body } in alternatives {
                    write!(f, " when {} {{ {} }}", pattern, body)?;
                }
                if !matches!(else_branch.as_ref(), Node::NoOp) {
                    write!(f, " else {{ {} }}", else_branch)?;
                }
                write!(f, " }}")
            }
            Node::VarAssign { name, value } => write!(f, "{} = {}", name, value),
            Node::UnitAssign { name, value } => write!(f, "@{} = {}", name, value),
            Node::HeapRead { cell, address } => write!(f, "{}[{}]", cell, address),
            Node::HeapWrite {
                cell,
                address,
                value,
            } => write!(f, "{}[{}] = {}", cell, address, value),
            Node::Control {
                property,
                target,
                value,
            } => write!(f, "{}.{} = {}", target, property, value),
            Node::SensorReading { target, sensor } => write!(f, "{}.{}", target, sensor),
            Node::UnaryOp { op, expr } => {
                if op.chars().all(char::is_alphabetic) {
                    write!(f, "{} {}", op, expr)
                } else {
                    write!(f, "{}{}", op, expr)
                }
            }
            Node::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Node::FunctionCall { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Node::Comment(text) => write!(f, "// {}", text),
            Node::NoOp => write!(f, "<no-op>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{CaseAlternative, Node};

    #[test]
    fn test_display_expressions() {
        let n = Node::assign("x", Node::binary("+", Node::num("1"), Node::var("y")));
        assert_eq!(n.to_string(), "x = (1 + y)");

        let n = Node::unary("not", Node::var("done"));
        assert_eq!(n.to_string(), "not done");

        let n = Node::unary("!", Node::var("done"));
        assert_eq!(n.to_string(), "!done");
    }

    #[test]
    fn test_display_device_nodes() {
        let n = Node::HeapWrite {
            cell: "cell1".into(),
            address: Box::new(Node::num("0")),
            value: Box::new(Node::SensorReading {
                target: "@unit".into(),
                sensor: "@health".into(),
            }),
        };
        assert_eq!(n.to_string(), "cell1[0] = @unit.@health");

        let n = Node::Control {
            property: "enabled".into(),
            target: "conveyor1".into(),
            value: Box::new(Node::Boolean(false)),
        };
        assert_eq!(n.to_string(), "conveyor1.enabled = false");
    }

    #[test]
    fn test_display_control_flow() {
        let n = Node::if_else(Node::var("a"), Node::num("1"), Node::NoOp);
        assert_eq!(n.to_string(), "if a { 1 }");

        let n = Node::Case {
            cond: Box::new(Node::var("n")),
            alternatives: vec![CaseAlternative {
                pattern: Node::num("1"),
                body: Node::str("one"),
            }],
            else_branch: Box::new(Node::str("many")),
        };
        assert_eq!(n.to_string(), "case n { when 1 { \"one\" } else { \"many\" } }");

        let n = Node::call("print", vec![Node::var("a"), Node::unit("unit")]);
        assert_eq!(n.to_string(), "print(a, @unit)");
    }

    #[test]
    fn test_display_long_sequence() {
        let program = Node::seq((0..10_000).map(|i| Node::var(format!("v{}", i))).collect());
        let text = program.to_string();
        assert!(text.starts_with("v0; v1; v2"));
        assert!(text.ends_with("; v9999"));
    }
}
