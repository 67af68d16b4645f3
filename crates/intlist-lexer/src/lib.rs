//! Lexical analysis for the intlist op script
//!
//! Tokenizes the line-oriented list-operation language using logos.

use intlist_ast::Span;
use logos::Logos;

/// Op-script tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    // Operation keywords
    /// push keyword (prepend at head)
    #[token("push")]
    Push,

    /// append keyword (append at tail)
    #[token("append")]
    Append,

    /// insert keyword (insert at position)
    #[token("insert")]
    Insert,

    /// delete keyword (remove first node by value)
    #[token("delete")]
    Delete,

    /// remove keyword (remove node by position)
    #[token("remove")]
    Remove,

    /// reverse keyword
    #[token("reverse")]
    Reverse,

    /// clear keyword
    #[token("clear")]
    Clear,

    /// print keyword
    #[token("print")]
    Print,

    /// size keyword
    #[token("size")]
    Size,

    /// avg keyword
    #[token("avg")]
    Avg,

    /// Integer literal, optionally negative
    #[regex(r"-?[0-9]+")]
    Int,

    /// Statement separator (;)
    #[token(";")]
    Semicolon,

    /// Newline (also a statement separator)
    #[token("\n")]
    Newline,

    /// Comment from # to end of line (ignored)
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,

    /// Whitespace (ignored)
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,

    /// End of input
    Eof,

    /// Lexer error
    Error,
}

/// Token with location information
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        match self.lexer.next() {
            Some(Ok(token)) => {
                let span = self.lexer.span();
                let text = self.input[span.clone()].to_string();
                SpannedToken {
                    token,
                    span: Span::new(span.start, span.end),
                    text,
                }
            }
            Some(Err(())) => {
                let span = self.lexer.span();
                let text = self.input[span.clone()].to_string();
                SpannedToken {
                    token: Token::Error,
                    span: Span::new(span.start, span.end),
                    text,
                }
            }
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: String::new(),
            },
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
