//! Recursive-descent parser for expression text.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! sum     := term (("+" | "-") term)*
//! term    := unary (("*" | "/") unary | power)*     implicit product
//! unary   := ("-" | "+") unary | power
//! power   := primary ("^" unary)?                   right-associative
//! primary := number | name | name "(" sum ")" | "(" sum ")"
//! ```
//!
//! An implicit product only starts at a name or `(`, so `2x` and `x(y + 1)`
//! are products while `2 3` is an error.
//!
//! Parentheses, signs and exponents may nest at most 256 levels.

mod error;
mod lexer;

use std::str::FromStr;

pub use error::ParseError;

use crate::{Expr, Function};

use lexer::{Token, TokenKind, tokenize};

/// Deepest nesting of `unary` the parser accepts.
const MAX_DEPTH: usize = 256;

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(text)?;
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut parser = Parser {
            tokens,
            next: 0,
            depth: 0,
        };
        let expr = parser.sum()?;
        match parser.peek() {
            None => Ok(expr),
            Some(token) => Err(unexpected(token)),
        }
    }
}

struct Parser {
    tokens: Vec<Token>,
    next: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.next)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .get(self.next)
            .cloned()
            .ok_or(ParseError::UnexpectedEnd)?;
        self.next += 1;
        Ok(token)
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.next += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        let token = self.advance()?;
        if &token.kind == kind {
            Ok(())
        } else {
            Err(unexpected(&token))
        }
    }

    fn sum(&mut self) -> Result<Expr, ParseError> {
        let mut acc = self.term()?;
        loop {
            if self.eat(&TokenKind::Plus) {
                acc = Expr::sum(acc, self.term()?);
            } else if self.eat(&TokenKind::Minus) {
                acc = Expr::difference(acc, self.term()?);
            } else {
                return Ok(acc);
            }
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut acc = self.unary()?;
        loop {
            if self.eat(&TokenKind::Star) {
                acc = Expr::product(acc, self.unary()?);
            } else if self.eat(&TokenKind::Slash) {
                acc = Expr::quotient(acc, self.unary()?);
            } else if matches!(
                self.peek_kind(),
                Some(TokenKind::Ident(_) | TokenKind::LParen)
            ) {
                acc = Expr::product(acc, self.power()?);
            } else {
                return Ok(acc);
            }
        }
    }

    /// Bounds nesting depth. Every recursive path passes through here.
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.depth == MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                position: self.peek().map_or(0, |token| token.position),
            });
        }
        self.depth += 1;
        let result = self.signed();
        self.depth -= 1;
        result
    }

    fn signed(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&TokenKind::Minus) {
            Ok(Expr::negate(self.unary()?))
        } else if self.eat(&TokenKind::Plus) {
            self.unary()
        } else {
            self.power()
        }
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Caret) {
            Ok(Expr::power(base, self.unary()?))
        } else {
            Ok(base)
        }
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let Token { kind, position } = self.advance()?;
        match kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::LParen => {
                let inner = self.sum()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Ident(name) => self.name(name, position),
            kind => Err(unexpected(&Token { kind, position })),
        }
    }

    /// Resolves a name to a function call, a constant, or a variable.
    fn name(&mut self, name: String, position: usize) -> Result<Expr, ParseError> {
        if let Some(function) = Function::from_name(&name) {
            if !self.eat(&TokenKind::LParen) {
                return Err(ParseError::BareFunction { name, position });
            }
            let argument = self.sum()?;
            self.expect(&TokenKind::RParen)?;
            return Ok(Expr::call(function, argument));
        }

        Ok(match name.as_str() {
            "pi" => Expr::Number(std::f64::consts::PI),
            "E" => Expr::Number(std::f64::consts::E),
            _ => Expr::Variable(name),
        })
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.to_string(),
        position: token.position,
    }
}
