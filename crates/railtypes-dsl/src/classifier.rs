use crate::lexer::{leading_tokens, SpannedToken};
use crate::token::Token;

/// What a single trimmed schema line declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `create_table "<name>"`
    TableDecl { name: &'a str },
    /// `t.<type> "<name>"`
    ColumnDecl { column_type: &'a str, name: &'a str },
    /// Anything else: blank lines, `end`, indexes, foreign keys, comments.
    Unrecognized,
}

/// Classifies one line with surrounding whitespace already removed.
///
/// A declaration must start at the first byte of the line, with exactly one
/// space between its head and the quoted name. Whatever follows the name is
/// ignored. Table declarations are checked before column declarations.
pub fn classify(line: &str) -> LineKind<'_> {
    let mut tokens = leading_tokens(line);
    let (Some(head), Some(separator), Some(ident)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return LineKind::Unrecognized;
    };

    if separator.token != Token::Space || ident.token != Token::QuotedIdent {
        return LineKind::Unrecognized;
    }

    table_decl(&head, &ident)
        .or_else(|| column_decl(&head, &ident))
        .unwrap_or(LineKind::Unrecognized)
}

fn table_decl<'a>(head: &SpannedToken<'a>, ident: &SpannedToken<'a>) -> Option<LineKind<'a>> {
    (head.token == Token::CreateTable).then(|| LineKind::TableDecl {
        name: unquote(ident.text),
    })
}

fn column_decl<'a>(head: &SpannedToken<'a>, ident: &SpannedToken<'a>) -> Option<LineKind<'a>> {
    if head.token != Token::ColumnHead {
        return None;
    }
    let column_type = head.text.strip_prefix("t.")?;
    Some(LineKind::ColumnDecl {
        column_type,
        name: unquote(ident.text),
    })
}

fn unquote(text: &str) -> &str {
    text.trim_matches('"')
}
