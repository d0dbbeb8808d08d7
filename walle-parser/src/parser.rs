use crate::ast::{BinaryOp, Expr, Literal, Stmt, StmtKind, UnaryOp};
use crate::grammar::{self, Builtin, Command, Param};
use crate::lexer::{Token, TokenKind};
use crate::typeck::{self, Context};
use std::mem;
use walle_source::{Error, StaticTypeError, SyntaxError};

mod expr;
mod stmt;

pub type ParseResult<T> = Result<T, Error>;

/// Parses a token stream into the statement sequence of a program.
pub fn parse(tokens: Vec<Token>) -> ParseResult<Vec<Stmt>> {
    Parser::new(tokens).parse_program()
}

pub struct Parser {
    tokens: Vec<Token>,
    /// Index of the current token in `tokens`.
    position: usize,
}

impl Parser {
    /// Create a new `Parser`. A missing [`TokenKind::EndOfInput`] is appended.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        match tokens.last() {
            Some(Token {
                kind: TokenKind::EndOfInput,
                ..
            }) => {}
            last => {
                let line = last.map_or(1, |token| token.line);
                tokens.push(Token::new(TokenKind::EndOfInput, "", line));
            }
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses every statement until the end of input.
    /// Each statement must be followed by a newline or the end of input.
    pub fn parse_program(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut program = Vec::new();

        self.skip_newlines();
        while !self.at_end() {
            let stmt = self.parse_stmt()?;
            tracing::trace!(line = stmt.line, kind = ?stmt.kind, "parsed statement");
            program.push(stmt);

            self.expect_end_of_stmt()?;
            self.skip_newlines();
        }

        Ok(program)
    }
}

/// Parse utilities
impl Parser {
    fn current(&self) -> &Token {
        // `new` guarantees a trailing `EndOfInput`, which is never consumed.
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn lookahead(&self, offset: usize) -> &Token {
        let index = (self.position + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    fn at_end(&self) -> bool {
        self.current().kind == TokenKind::EndOfInput
    }

    /// Returns the current token and moves to the next one.
    fn next(&mut self) -> Token {
        let token = self.current().clone();
        if !self.at_end() {
            self.position += 1;
        }
        token
    }

    /// Predicate that tests whether the current token has the same discriminant and eats it if yes as a side effect.
    fn eat(&mut self, tok: TokenKind) -> bool {
        if self.check(&tok) {
            self.next(); // eat token
            true
        } else {
            false
        }
    }

    fn check(&self, tok: &TokenKind) -> bool {
        mem::discriminant(&self.current().kind) == mem::discriminant(tok)
    }

    fn expect(&mut self, tok: TokenKind, expected: &str) -> ParseResult<Token> {
        if self.check(&tok) {
            Ok(self.next())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Raises an unexpected token error.
    fn unexpected(&self, expected: &str) -> Error {
        let token = self.current();
        Error::from(SyntaxError::UnexpectedToken {
            expected: expected.to_string(),
            found: token.describe(),
            line: token.line,
        })
    }

    fn skip_newlines(&mut self) {
        while self.eat(TokenKind::NewLine) {}
    }

    fn expect_end_of_stmt(&mut self) -> ParseResult<()> {
        if self.at_end() || self.eat(TokenKind::NewLine) {
            Ok(())
        } else {
            Err(self.unexpected("a newline after the statement"))
        }
    }
}
