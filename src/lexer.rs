//! C1: scan source text into a token stream.
//!
//! Role
//! - Recognise the five punctuation glyphs (`&`, `|`, `!`, `(`, `)`), the two constants (`0`,
//!   `1`), and `[A-Za-z_][A-Za-z0-9_]*` identifiers.
//! - Track parenthesis-nesting depth against [`Limits::max_nesting_depth`] eagerly, since that
//!   is the one validator bound that is cheaper to catch while scanning than after a full parse.

use crate::config::Limits;
use crate::error::{LogicError, LogicResult};

/// The kind of a scanned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Identifier(String),
    Const0,
    Const1,
    And,
    Or,
    Not,
    LParen,
    RParen,
    End,
}

impl TokenKind {
    /// Human-readable name used in `UnexpectedToken` messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Identifier(name) => format!("identifier '{name}'"),
            TokenKind::Const0 => "'0'".to_string(),
            TokenKind::Const1 => "'1'".to_string(),
            TokenKind::And => "'&'".to_string(),
            TokenKind::Or => "'|'".to_string(),
            TokenKind::Not => "'!'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::End => "end of input".to_string(),
        }
    }
}

/// A token together with the byte offset of its first character in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan `source` into a sequence of tokens ending with `End`.
///
/// Empty input yields a single `End` token. `limits.max_nesting_depth` bounds how many
/// unmatched `(` may be open at once; a breach raises `NestingTooDeep` at the offending `(`.
pub fn tokenize(source: &str, limits: &Limits) -> LogicResult<Vec<Token>> {
    let chars: Vec<(usize, char)> = source.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0usize;
    let mut open_depth = 0usize;

    while i < chars.len() {
        let (offset, c) = chars[i];

        if c == ' ' || c == '\t' || c == '\r' || c == '\n' {
            i += 1;
            continue;
        }

        match c {
            '&' => {
                tokens.push(Token {
                    kind: TokenKind::And,
                    offset,
                });
                i += 1;
            }
            '|' => {
                tokens.push(Token {
                    kind: TokenKind::Or,
                    offset,
                });
                i += 1;
            }
            '!' => {
                tokens.push(Token {
                    kind: TokenKind::Not,
                    offset,
                });
                i += 1;
            }
            '(' => {
                open_depth += 1;
                if open_depth > limits.max_nesting_depth {
                    return Err(LogicError::NestingTooDeep {
                        offset,
                        depth: open_depth,
                        max: limits.max_nesting_depth,
                    });
                }
                tokens.push(Token {
                    kind: TokenKind::LParen,
                    offset,
                });
                i += 1;
            }
            ')' => {
                open_depth = open_depth.saturating_sub(1);
                tokens.push(Token {
                    kind: TokenKind::RParen,
                    offset,
                });
                i += 1;
            }
            c if c.is_ascii_digit() => {
                let start = i;
                let mut j = i + 1;
                while j < chars.len() && is_ident_continue(chars[j].1) {
                    j += 1;
                }
                let run_len = j - start;
                if run_len == 1 && (c == '0' || c == '1') {
                    tokens.push(Token {
                        kind: if c == '0' {
                            TokenKind::Const0
                        } else {
                            TokenKind::Const1
                        },
                        offset,
                    });
                } else {
                    return Err(LogicError::InvalidCharacter { offset, ch: c });
                }
                i = j;
            }
            c if is_ident_start(c) => {
                let start = i;
                let mut j = i + 1;
                while j < chars.len() && is_ident_continue(chars[j].1) {
                    j += 1;
                }
                let name: String = chars[start..j].iter().map(|(_, ch)| *ch).collect();
                tokens.push(Token {
                    kind: TokenKind::Identifier(name),
                    offset,
                });
                i = j;
            }
            other => {
                return Err(LogicError::InvalidCharacter { offset, ch: other });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::End,
        offset: source.len(),
    });
    Ok(tokens)
}
