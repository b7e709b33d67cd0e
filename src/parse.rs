use std::{ops::Range, str::FromStr};

use logos::{Lexer, Logos};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::{ReadingError, StevensonReading};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[token("Reading:")]
    Header,

    #[token("T")]
    Temperature,
    #[token("D")]
    DewPoint,
    #[token("v")]
    WindSpeed,
    #[token("rain")]
    Rain,

    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("=")]
    Equal,
    #[token(",")]
    Comma,
}

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("Unexpected token, expected {expected}")]
    #[diagnostic(code(meteo_reading::parse::unexpected_token))]
    UnexpectedToken {
        expected: &'static str,
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
    },
    #[error("Unexpected end of input, expected {expected}")]
    #[diagnostic(code(meteo_reading::parse::unexpected_end))]
    UnexpectedEnd {
        expected: &'static str,
        #[source_code]
        src: String,
        #[label("input stops here")]
        span: SourceSpan,
    },
    #[error("Bad number for {field}")]
    #[diagnostic(code(meteo_reading::parse::bad_number), help("rain is a whole number of mm"))]
    BadNumber {
        field: &'static str,
        #[source_code]
        src: String,
        #[label("this")]
        span: SourceSpan,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidReading(#[from] ReadingError),
}

struct Parser<'a> {
    src: &'a str,
    lexer: Lexer<'a, Token>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            lexer: Token::lexer(src),
        }
    }

    fn span(range: Range<usize>) -> SourceSpan {
        (range.start, range.len()).into()
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), ParseError> {
        match self.lexer.next() {
            Some(Ok(t)) if t == token => Ok(()),
            Some(_) => Err(ParseError::UnexpectedToken {
                expected,
                src: self.src.to_string(),
                span: Self::span(self.lexer.span()),
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected,
                src: self.src.to_string(),
                span: (self.src.len(), 0).into(),
            }),
        }
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        self.expect(Token::Number, field)?;
        self.lexer
            .slice()
            .parse()
            .map_err(|_| ParseError::BadNumber {
                field,
                src: self.src.to_string(),
                span: Self::span(self.lexer.span()),
            })
    }

    fn field<T: FromStr>(
        &mut self,
        token: Token,
        field: &'static str,
    ) -> Result<T, ParseError> {
        self.expect(token, field)?;
        self.expect(Token::Equal, "`=`")?;
        self.number(field)
    }

    fn end(&mut self) -> Result<(), ParseError> {
        match self.lexer.next() {
            None => Ok(()),
            Some(_) => Err(ParseError::UnexpectedToken {
                expected: "end of input",
                src: self.src.to_string(),
                span: Self::span(self.lexer.span()),
            }),
        }
    }
}

impl FromStr for StevensonReading {
    type Err = ParseError;

    /// Parses the canonical form written by `Display`, e.g.
    /// `Reading: T = 9, D = 2, v = 9, rain = 4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);

        parser.expect(Token::Header, "`Reading:`")?;
        let temperature: f64 = parser.field(Token::Temperature, "temperature")?;
        parser.expect(Token::Comma, "`,`")?;
        let dew_point: f64 = parser.field(Token::DewPoint, "dew point")?;
        parser.expect(Token::Comma, "`,`")?;
        let wind_speed: f64 = parser.field(Token::WindSpeed, "wind speed")?;
        parser.expect(Token::Comma, "`,`")?;
        let total_rain: i32 = parser.field(Token::Rain, "rain")?;
        parser.end()?;

        tracing::trace!(temperature, dew_point, wind_speed, total_rain, "parsed reading");

        Ok(StevensonReading::new(
            temperature,
            dew_point,
            wind_speed,
            total_rain,
        )?)
    }
}
