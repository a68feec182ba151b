use logos::Logos;

/// Tokens that can open a declaration line in `db/schema.rb`.
///
/// Only the leading tokens of a line matter: anything the lexer cannot match
/// ends the token stream for that line.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token("create_table")]
    CreateTable,

    /// A column declaration head, e.g. `t.string`.
    #[regex(r"t\.[a-z]+")]
    ColumnHead,

    /// A double-quoted snake_case identifier, e.g. `"user_accounts"`.
    #[regex(r#""[a-z_]+""#)]
    QuotedIdent,

    /// The single space separating a declaration head from its name.
    #[token(" ")]
    Space,
}

impl Token {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::CreateTable => "'create_table'",
            Self::ColumnHead => "column type",
            Self::QuotedIdent => "quoted identifier",
            Self::Space => "' '",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
