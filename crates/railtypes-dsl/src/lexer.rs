use logos::Logos;

use crate::error::Span;
use crate::token::Token;

/// A token paired with its span and text within a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken<'a> {
    pub token: Token,
    pub span: Span,
    pub text: &'a str,
}

/// Tokenizes the leading part of a line.
///
/// The stream ends at the first byte the lexer cannot match. Trailing
/// options such as `, null: false` or `do |t|` are never lexed.
pub fn leading_tokens(line: &str) -> impl Iterator<Item = SpannedToken<'_>> {
    Token::lexer(line)
        .spanned()
        .map_while(move |(result, range)| {
            result.ok().map(|token| SpannedToken {
                token,
                span: Span::new(range.start, range.end),
                text: &line[range],
            })
        })
}
