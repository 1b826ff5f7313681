use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Identifier tokens; binding or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens, such as `42`.
    ///
    /// The raw digits are kept as text; the parser converts them so that an
    /// out-of-range literal becomes a parse error rather than a lexer error.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens, such as `"hello world"`. Quotes are stripped.
    #[regex(r#""[^"]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    LessThan,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Line breaks; skipped, but they advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,
    /// Any character no other rule recognizes.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
}

impl Token {
    /// Returns the fixed display name of this token's kind, as used in
    /// parser error messages such as
    /// `expected next token to be =, got INT instead`.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::NewLine | Self::Whitespace => "",
            Self::Illegal(_) => "ILLEGAL",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes an entire source string into `(token, line)` pairs.
///
/// Whitespace never appears in the output, and unrecognized characters come
/// through as [`Token::Illegal`] so that the parser can report them in
/// context instead of the lexer aborting the run.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The tokens of `source` paired with their one-based line numbers.
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line));
        }
    }

    tokens
}
