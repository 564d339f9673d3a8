//! The Mindcode abstract syntax tree.
//!
//! Nodes are plain immutable values compared and hashed structurally. The
//! parser builds them once; the code generator visits each exactly once.

pub mod display;

/// A Mindcode AST node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    // ── Literals ──
    Null,
    Boolean(bool),
    /// Numeric literal, kept as its source text (`5`, `-1`, `0.25`).
    Numeric(String),
    /// String literal without the surrounding quotes.
    Str(String),

    // ── References ──
    VarRef(String),
    /// A Mindustry built-in such as `@unit` or `@copper`; stores the name
    /// without the `@` sigil.
    UnitRef(String),

    // ── Sequencing and control flow ──
    Seq {
        rest: Box<Node>,
        last: Box<Node>,
    },
    If {
        cond: Box<Node>,
        then_branch: Box<Node>,
        /// May be `NoOp`, in which case the `if` evaluates to `null`
        /// when the condition fails.
        else_branch: Box<Node>,
    },
    While {
        cond: Box<Node>,
        body: Box<Node>,
    },
    Case {
        cond: Box<Node>,
        alternatives: Vec<CaseAlternative>,
        else_branch: Box<Node>,
    },

    // ── Assignment ──
    VarAssign {
        name: String,
        value: Box<Node>,
    },
    UnitAssign {
        name: String,
        value: Box<Node>,
    },

    // ── Memory cells ──
    HeapRead {
        cell: String,
        address: Box<Node>,
    },
    HeapWrite {
        cell: String,
        address: Box<Node>,
        value: Box<Node>,
    },

    // ── Blocks and sensors ──
    Control {
        property: String,
        target: String,
        value: Box<Node>,
    },
    SensorReading {
        target: String,
        sensor: String,
    },

    // ── Operators and calls ──
    UnaryOp {
        op: String,
        expr: Box<Node>,
    },
    BinaryOp {
        op: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    FunctionCall {
        name: String,
        args: Vec<Node>,
    },

    // ── No-ops ──
    Comment(String),
    NoOp,
}

/// One `when` arm of a `case` expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaseAlternative {
    pub pattern: Node,
    pub body: Node,
}

impl Node {
    /// Fold a statement list into left-nested `Seq` nodes.
    ///
    /// `[a, b, c]` becomes `Seq(Seq(a, b), c)`. An empty list is `NoOp` and
    /// a single statement is returned as-is.
    pub fn seq(stmts: Vec<Node>) -> Node {
        let mut iter = stmts.into_iter();
        let Some(first) = iter.next() else {
            return Node::NoOp;
        };
        iter.fold(first, |rest, last| Node::Seq {
            rest: Box::new(rest),
            last: Box::new(last),
        })
    }

    /// Statements of a left-nested `Seq` spine, in source order.
    ///
    /// Walks `rest` links iteratively, so the spine may be as long as the
    /// program. A non-`Seq` node yields itself.
    pub fn statements(&self) -> Vec<&Node> {
        let mut tail = Vec::new();
        let mut cursor = self;
        while let Node::Seq { rest, last } = cursor {
            tail.push(last.as_ref());
            cursor = rest;
        }
        tail.push(cursor);
        tail.reverse();
        tail
    }

    pub fn num(literal: impl Into<String>) -> Node {
        Node::Numeric(literal.into())
    }

    pub fn str(text: impl Into<String>) -> Node {
        Node::Str(text.into())
    }

    pub fn var(name: impl Into<String>) -> Node {
        Node::VarRef(name.into())
    }

    pub fn unit(name: impl Into<String>) -> Node {
        Node::UnitRef(name.into())
    }

    pub fn assign(name: impl Into<String>, value: Node) -> Node {
        Node::VarAssign {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn binary(op: impl Into<String>, left: Node, right: Node) -> Node {
        Node::BinaryOp {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: impl Into<String>, expr: Node) -> Node {
        Node::UnaryOp {
            op: op.into(),
            expr: Box::new(expr),
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Node>) -> Node {
        Node::FunctionCall {
            name: name.into(),
            args,
        }
    }

    pub fn if_else(cond: Node, then_branch: Node, else_branch: Node) -> Node {
        Node::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn while_loop(cond: Node, body: Node) -> Node {
        Node::While {
            cond: Box::new(cond),
            body: Box::new(body),
        }
    }
}
