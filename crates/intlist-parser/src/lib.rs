//! Parser for the intlist op script
//!
//! The grammar is a flat list of statements separated by newlines or
//! semicolons, so parsing is a direct walk over the logos token stream.

use intlist_ast::{IntlistError, Op, Program, SourceMap, Spanned};
use intlist_lexer::{Lexer, SpannedToken, Token};

#[derive(Debug)]
pub struct Parser {
    input: String,
    source_map: SourceMap,
    filename: String,
    tokens: Vec<SpannedToken>,
}

impl Parser {
    /// Create a new parser for the given input
    ///
    /// # Errors
    ///
    /// Returns `IntlistError` if there are lexical errors in the input
    pub fn new(input: &str) -> Result<Self, IntlistError> {
        Self::new_with_filename(input, "<input>")
    }

    /// Create a new parser for the given input with a filename
    ///
    /// # Errors
    ///
    /// Returns `IntlistError` if there are lexical errors in the input
    pub fn new_with_filename(input: &str, filename: &str) -> Result<Self, IntlistError> {
        let source_map = SourceMap::new(input);

        // Tokenize input using logos
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize();

        // Check for lexer errors
        for token in &tokens {
            if token.token == Token::Error {
                return Err(IntlistError::syntax(
                    format!("Unexpected input: {}", token.text),
                    token.span,
                    &source_map,
                    filename,
                ));
            }
        }

        Ok(Self {
            input: input.to_string(),
            source_map,
            filename: filename.to_string(),
            tokens,
        })
    }

    /// Parse the input into an op-script program
    ///
    /// # Errors
    ///
    /// Returns `IntlistError` if there are syntax errors during parsing
    pub fn parse(&self) -> Result<Program, IntlistError> {
        let mut ops = Vec::new();
        let mut pos = 0;

        loop {
            while matches!(
                self.tokens[pos].token,
                Token::Newline | Token::Semicolon
            ) {
                pos += 1;
            }
            if self.tokens[pos].token == Token::Eof {
                break;
            }

            let (op, next) = self.parse_statement(pos)?;
            ops.push(op);
            pos = next;

            // A statement ends at a separator or end of input
            match self.tokens[pos].token {
                Token::Newline | Token::Semicolon | Token::Eof => {}
                _ => {
                    return Err(self.syntax_error(
                        format!(
                            "expected end of statement, found '{}'",
                            self.tokens[pos].text
                        ),
                        pos,
                    ));
                }
            }
        }

        Ok(Program { ops })
    }

    /// Parse one statement starting at `pos`; returns the op and the
    /// position of the first token after it
    fn parse_statement(&self, pos: usize) -> Result<(Spanned<Op>, usize), IntlistError> {
        let keyword = &self.tokens[pos];
        match keyword.token {
            Token::Push => {
                let (value, span, next) = self.parse_int(pos + 1)?;
                Ok((Spanned::new(Op::PushHead(value), keyword.span.merge(span)), next))
            }
            Token::Append => {
                let (value, span, next) = self.parse_int(pos + 1)?;
                Ok((Spanned::new(Op::PushTail(value), keyword.span.merge(span)), next))
            }
            Token::Insert => {
                let (value, _, next) = self.parse_int(pos + 1)?;
                let (index, span, next) = self.parse_int(next)?;
                Ok((
                    Spanned::new(Op::InsertAt { value, index }, keyword.span.merge(span)),
                    next,
                ))
            }
            Token::Delete => {
                let (value, span, next) = self.parse_int(pos + 1)?;
                Ok((
                    Spanned::new(Op::DeleteValue(value), keyword.span.merge(span)),
                    next,
                ))
            }
            Token::Remove => {
                let (index, span, next) = self.parse_int(pos + 1)?;
                Ok((Spanned::new(Op::DeleteAt(index), keyword.span.merge(span)), next))
            }
            Token::Reverse => Ok((Spanned::new(Op::Reverse, keyword.span), pos + 1)),
            Token::Clear => Ok((Spanned::new(Op::Clear, keyword.span), pos + 1)),
            Token::Print => Ok((Spanned::new(Op::Print, keyword.span), pos + 1)),
            Token::Size => Ok((Spanned::new(Op::Size, keyword.span), pos + 1)),
            Token::Avg => Ok((Spanned::new(Op::Average, keyword.span), pos + 1)),
            _ => Err(self.syntax_error(
                format!("expected an operation, found '{}'", keyword.text),
                pos,
            )),
        }
    }

    /// Parse an integer literal at `pos`
    fn parse_int(&self, pos: usize) -> Result<(i64, intlist_ast::Span, usize), IntlistError> {
        let token = &self.tokens[pos];
        if token.token != Token::Int {
            let found = if token.token == Token::Eof {
                "end of input".to_string()
            } else {
                format!("'{}'", token.text)
            };
            return Err(self.syntax_error(format!("expected an integer, found {found}"), pos));
        }
        let value: i64 = token.text.parse().map_err(|_| {
            self.syntax_error(format!("integer literal '{}' out of range", token.text), pos)
        })?;
        Ok((value, token.span, pos + 1))
    }

    fn syntax_error(&self, message: String, pos: usize) -> IntlistError {
        IntlistError::syntax(message, self.tokens[pos].span, &self.source_map, &self.filename)
    }

    /// Get access to the source map for error reporting
    #[must_use]
    pub const fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    /// Get access to the filename
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get access to the original input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get access to the tokens (useful for debugging)
    #[must_use]
    pub fn tokens(&self) -> &[SpannedToken] {
        &self.tokens
    }
}
