use crate::ast::{CaseAlternative, Node};
use crate::lexeme::Lexeme;
use crate::span::Span;

use super::Parser;

/// Binding powers, loosest first. `**` is the only right-associative
/// operator.
fn binding_power(op: &Lexeme) -> Option<(u8, u8)> {
    let bp = match op {
        Lexeme::Or | Lexeme::PipePipe => (2, 3),
        Lexeme::And | Lexeme::AmpAmp => (4, 5),
        Lexeme::EqEq | Lexeme::BangEq | Lexeme::EqEqEq => (6, 7),
        Lexeme::Lt | Lexeme::LtEq | Lexeme::Gt | Lexeme::GtEq => (8, 9),
        Lexeme::Plus | Lexeme::Minus => (10, 11),
        Lexeme::Star | Lexeme::Slash | Lexeme::Percent => (12, 13),
        Lexeme::StarStar => (15, 14),
        _ => return None,
    };
    Some(bp)
}

impl Parser {
    pub(super) fn parse_expr(&mut self) -> Node {
        if !self.enter_nesting() {
            self.exit_nesting();
            return Node::NoOp;
        }
        let expr = self.parse_assign();
        self.exit_nesting();
        expr
    }

    /// `a = b = c` binds right to left.
    fn parse_assign(&mut self) -> Node {
        let mut targets = Vec::new();
        let mut value = loop {
            let start = self.current_span();
            let lhs = self.parse_expr_bp(0);
            if self.at(&Lexeme::Eq) {
                let span = start.merge(self.current_span());
                self.advance();
                targets.push((lhs, span));
            } else {
                break lhs;
            }
        };
        while let Some((target, span)) = targets.pop() {
            value = self.make_assignment(target, value, span);
        }
        value
    }

    fn make_assignment(&mut self, target: Node, value: Node, span: Span) -> Node {
        let value = Box::new(value);
        match target {
            Node::VarRef(name) => Node::VarAssign { name, value },
            Node::UnitRef(name) => Node::UnitAssign { name, value },
            Node::HeapRead { cell, address } => Node::HeapWrite {
                cell,
                address,
                value,
            },
            Node::SensorReading { target, sensor } => Node::Control {
                property: sensor.trim_start_matches('@').to_string(),
                target,
                value,
            },
            other => {
                self.error_at(
                    span,
                    &format!("invalid assignment target `{}`", other),
                    "assign to a variable, `@name`, `cell[index]` or `block.property`",
                );
                *value
            }
        }
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Node {
        let mut lhs = self.parse_unary();

        loop {
            let Some((l_bp, r_bp)) = binding_power(self.peek()) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let Some(op) = self.peek().binary_op_token() else {
                break;
            };

            self.advance(); // consume operator
            if !self.enter_nesting() {
                self.exit_nesting();
                return lhs;
            }
            let rhs = self.parse_expr_bp(r_bp);
            self.exit_nesting();
            lhs = Node::binary(op, lhs, rhs);
        }

        lhs
    }

    fn parse_unary(&mut self) -> Node {
        match self.peek() {
            Lexeme::Not | Lexeme::Bang => {
                let op = if self.at(&Lexeme::Not) { "not" } else { "!" };
                self.advance();
                if !self.enter_nesting() {
                    self.exit_nesting();
                    return Node::NoOp;
                }
                let operand = self.parse_unary();
                self.exit_nesting();
                Node::unary(op, operand)
            }
            Lexeme::Minus => {
                let start = self.current_span();
                self.advance();
                if let Lexeme::Number(n) = self.peek() {
                    let literal = format!("-{}", n);
                    self.advance();
                    Node::num(literal)
                } else {
                    self.error_at(
                        start,
                        "unary '-' applies only to number literals",
                        "write `0 - x` to negate an expression",
                    );
                    // A run of `-` is one error; recovery must not recurse per sign.
                    while self.eat(&Lexeme::Minus) {}
                    self.parse_unary()
                }
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Node {
        match self.peek().clone() {
            Lexeme::Number(n) => {
                self.advance();
                Node::Numeric(n)
            }
            Lexeme::Str(s) => {
                self.advance();
                Node::Str(s)
            }
            Lexeme::True => {
                self.advance();
                Node::Boolean(true)
            }
            Lexeme::False => {
                self.advance();
                Node::Boolean(false)
            }
            Lexeme::Null => {
                self.advance();
                Node::Null
            }
            Lexeme::At => {
                self.advance();
                let name = self.expect_ident();
                if self.eat(&Lexeme::Dot) {
                    let sensor = self.parse_sensor_name();
                    Node::SensorReading {
                        target: format!("@{}", name),
                        sensor,
                    }
                } else {
                    Node::UnitRef(name)
                }
            }
            Lexeme::Ident(name) => {
                self.advance();
                self.parse_ident_suffix(name)
            }
            Lexeme::If => self.parse_if(),
            Lexeme::Case => self.parse_case(),
            Lexeme::LParen => {
                self.advance();
                let inner = self.parse_expr();
                self.expect(&Lexeme::RParen);
                inner
            }
            Lexeme::While => {
                self.error_with_help(
                    "expected expression, found 'while'",
                    "`while` loops are statements and produce no value here",
                );
                Node::Null
            }
            other => {
                self.error_at_current(&format!(
                    "expected expression, found {}",
                    other.description()
                ));
                // a closing brace still belongs to the enclosing block
                if other != Lexeme::RBrace {
                    self.advance();
                }
                Node::Null
            }
        }
    }

    /// What follows an identifier: a call, a memory cell index, a block
    /// property, or nothing.
    fn parse_ident_suffix(&mut self, name: String) -> Node {
        match self.peek() {
            Lexeme::LParen => {
                self.advance();
                let args = self.parse_args();
                Node::call(name, args)
            }
            Lexeme::LBracket => {
                self.advance();
                let address = self.parse_expr();
                self.expect(&Lexeme::RBracket);
                Node::HeapRead {
                    cell: name,
                    address: Box::new(address),
                }
            }
            Lexeme::Dot => {
                self.advance();
                let sensor = self.parse_sensor_name();
                Node::SensorReading {
                    target: name,
                    sensor,
                }
            }
            _ => Node::VarRef(name),
        }
    }

    /// `prop` or `@prop`, both read as the sensor `@prop`.
    fn parse_sensor_name(&mut self) -> String {
        self.eat(&Lexeme::At);
        format!("@{}", self.expect_ident())
    }

    fn parse_args(&mut self) -> Vec<Node> {
        let mut args = Vec::new();
        if self.eat(&Lexeme::RParen) {
            return args;
        }
        loop {
            args.push(self.parse_expr());
            if !self.eat(&Lexeme::Comma) {
                break;
            }
        }
        self.expect(&Lexeme::RParen);
        args
    }

    fn parse_if(&mut self) -> Node {
        self.expect(&Lexeme::If);
        let cond = self.parse_expr();
        let then_branch = self.parse_block();
        let else_branch = if self.eat(&Lexeme::Else) {
            if self.at(&Lexeme::If) {
                if !self.enter_nesting() {
                    self.exit_nesting();
                    return Node::NoOp;
                }
                let nested = self.parse_if();
                self.exit_nesting();
                nested
            } else {
                self.parse_block()
            }
        } else {
            Node::NoOp
        };
        Node::if_else(cond, then_branch, else_branch)
    }

    fn parse_case(&mut self) -> Node {
        self.expect(&Lexeme::Case);
        let cond = self.parse_expr();
        self.expect(&Lexeme::LBrace);

        let mut alternatives = Vec::new();
        loop {
            self.skip_comments();
            if !self.eat(&Lexeme::When) {
                break;
            }
            let pattern = self.parse_expr();
            let body = self.parse_block();
            alternatives.push(CaseAlternative { pattern, body });
        }
        let else_branch = if self.eat(&Lexeme::Else) {
            self.parse_block()
        } else {
            Node::NoOp
        };
        self.skip_comments();
        if !self.eat(&Lexeme::RBrace) {
            self.error_with_help(
                &format!(
                    "expected 'when', 'else' or '}}' in case, found {}",
                    self.peek().description()
                ),
                "each alternative is written `when value { ... }`",
            );
        }

        Node::Case {
            cond: Box::new(cond),
            alternatives,
            else_branch: Box::new(else_branch),
        }
    }
}
