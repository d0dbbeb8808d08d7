use logos::Logos;
use walle_source::LexError;

#[derive(Debug, Logos, Clone, PartialEq)]
pub enum TokenKind {
    // literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    NumberLit(i64),
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    BoolLit(bool),
    #[regex(r#""[^"\n]*""#, |lex| lex.slice()[1..lex.slice().len() - 1].to_string())]
    StringLit(String),

    // identifiers (variables and labels)
    #[regex("[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // unary operators
    #[token("!")]
    LogicalNot,

    // binary operators
    // - arithmetics
    #[token("+")]
    Plus,
    #[token("-")]
    Minus, // NOTE: can also be unary
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("**")]
    AsteriskAsterisk,
    // - logic
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    // - equality
    #[token("==")]
    EqualsEquals,
    #[token("!=")]
    NotEquals,
    // - ordering
    #[token(">")]
    GreaterThan,
    #[token(">=")]
    GreaterThanEquals,
    #[token("<")]
    LessThan,
    #[token("<=")]
    LessThanEquals,
    // - assignment
    #[token("<-")]
    Arrow,

    // punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(",")]
    Comma,
    /// Statement terminator.
    #[token("\n")]
    NewLine,

    // keywords: commands
    #[token("Spawn")]
    Spawn,
    #[token("Color")]
    Color,
    #[token("Size")]
    Size,
    #[token("DrawLine")]
    DrawLine,
    #[token("DrawCircle")]
    DrawCircle,
    #[token("DrawRectangle")]
    DrawRectangle,
    #[token("Fill")]
    Fill,
    #[token("GoTo")]
    GoTo,
    // keywords: queries
    #[token("GetActualX")]
    GetActualX,
    #[token("GetActualY")]
    GetActualY,
    #[token("GetCanvasSize")]
    GetCanvasSize,
    #[token("GetColorCount")]
    GetColorCount,
    #[token("IsBrushColor")]
    IsBrushColor,
    #[token("IsBrushSize")]
    IsBrushSize,
    #[token("IsCanvasColor")]
    IsCanvasColor,

    // misc
    #[regex(r"[ \t\r\f]+", logos::skip)]
    #[error]
    Error,

    /// Only generated by [`scan`] after the last token.
    EndOfInput,
}

/// A scanned token. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl ToString, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.to_string(),
            line,
        }
    }

    /// A printable form of the token for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::NewLine => "newline".to_string(),
            TokenKind::EndOfInput => "end of input".to_string(),
            _ => self.lexeme.clone(),
        }
    }
}

/// Scans `source` into tokens, terminated by exactly one [`TokenKind::EndOfInput`].
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    let mut line = 1;

    while let Some(kind) = lexer.next() {
        let lexeme = lexer.slice();
        match kind {
            TokenKind::Error => return Err(lex_error(lexeme, line)),
            TokenKind::NewLine => {
                tokens.push(Token::new(kind, lexeme, line));
                line += 1;
            }
            _ => tokens.push(Token::new(kind, lexeme, line)),
        }
    }
    tokens.push(Token::new(TokenKind::EndOfInput, "", line));

    tracing::debug!(tokens = tokens.len(), lines = line, "scanned source");
    Ok(tokens)
}

/// Classifies the slice logos could not match.
fn lex_error(lexeme: &str, line: usize) -> LexError {
    match lexeme.chars().next() {
        Some('"') => LexError::UnterminatedString { line },
        Some(c) if c.is_ascii_digit() => LexError::NumberOutOfRange {
            lexeme: lexeme.to_string(),
            line,
        },
        Some(character) => LexError::UnrecognizedCharacter { character, line },
        None => LexError::UnrecognizedCharacter {
            character: '\0',
            line,
        },
    }
}
