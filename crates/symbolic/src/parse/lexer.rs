use std::fmt;

use super::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Token {
    pub(super) kind: TokenKind,
    pub(super) position: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Ident(name) => f.write_str(name),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Splits `input` into tokens.
///
/// `**` is read as `^`.
pub(super) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(ch) = input[pos..].chars().next() {
        let start = pos;
        let kind = match ch {
            c if c.is_whitespace() => {
                pos += c.len_utf8();
                continue;
            }
            '0'..='9' | '.' => {
                pos = scan_number(bytes, pos);
                let text = &input[start..pos];
                match text.parse::<f64>() {
                    Ok(value) if value.is_finite() => TokenKind::Number(value),
                    _ => {
                        return Err(ParseError::InvalidNumber {
                            text: text.to_string(),
                            position: start,
                        });
                    }
                }
            }
            c if c.is_alphabetic() || c == '_' => {
                pos += input[pos..]
                    .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                    .unwrap_or(input.len() - pos);
                TokenKind::Ident(input[start..pos].to_string())
            }
            '*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 2;
                TokenKind::Caret
            }
            _ => {
                let kind = match ch {
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '*' => TokenKind::Star,
                    '/' => TokenKind::Slash,
                    '^' => TokenKind::Caret,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ch => {
                        return Err(ParseError::UnexpectedChar {
                            ch,
                            position: start,
                        });
                    }
                };
                pos += 1;
                kind
            }
        };
        tokens.push(Token {
            kind,
            position: start,
        });
    }

    Ok(tokens)
}

/// Returns the end of the number literal starting at `start`.
///
/// An exponent is only consumed when digits follow it, so `2e` stays a
/// number followed by the name `e`.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let digits = |mut pos: usize| {
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        pos
    };

    let mut pos = digits(start);
    if bytes.get(pos) == Some(&b'.') {
        pos = digits(pos + 1);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            pos = digits(exp);
        }
    }

    pos
}
