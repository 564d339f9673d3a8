use crate::ast::Node;
use crate::lexeme::Lexeme;

use super::Parser;

impl Parser {
    /// Statements up to (not including) `end`. Comments that precede a
    /// statement become `Comment` nodes; comments after the last statement
    /// are dropped so a block's value stays that of its last statement.
    pub(super) fn parse_stmts_until(&mut self, end: &Lexeme) -> Vec<Node> {
        let mut stmts = Vec::new();
        loop {
            if self.at(end) || self.at(&Lexeme::Eof) {
                self.skip_comments();
                break;
            }
            self.flush_comments(&mut stmts);
            let before = self.pos;
            stmts.push(self.parse_stmt());
            if self.pos == before {
                self.advance(); // error recovery
            }
        }
        stmts
    }

    fn parse_stmt(&mut self) -> Node {
        let stmt = if self.at(&Lexeme::While) {
            self.parse_while()
        } else {
            self.parse_expr()
        };
        self.eat(&Lexeme::Semicolon);
        stmt
    }

    fn parse_while(&mut self) -> Node {
        self.expect(&Lexeme::While);
        let cond = self.parse_expr();
        let body = self.parse_block();
        Node::while_loop(cond, body)
    }

    /// `{ stmt* }` as a single node; an empty block is `NoOp`.
    pub(super) fn parse_block(&mut self) -> Node {
        self.expect(&Lexeme::LBrace);
        if !self.enter_nesting() {
            self.exit_nesting();
            return Node::NoOp;
        }
        let stmts = self.parse_stmts_until(&Lexeme::RBrace);
        self.exit_nesting();
        self.expect(&Lexeme::RBrace);
        Node::seq(stmts)
    }
}
