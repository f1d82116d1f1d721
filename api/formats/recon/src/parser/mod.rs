// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Incremental Recon parsers.
//!
//! Each construct of the grammar has its own resumable parser. A parser consumes as many code
//! points from its [`Input`] as it can and then either completes, fails or reports that it needs
//! more input. Parsers for compound constructs hold the state of the parser for the construct
//! they are currently within and resume it when they are next fed.

use crate::input::{Closed, Input};
use recon_model::identifier::is_identifier_start;

mod attr;
mod block;
mod data;
mod error;
mod ident;
mod markup;
mod number;
mod reader;
mod record;
mod string;
mod value;


pub use attr::AttrParser;
pub use block::BlockParser;
pub use data::DataParser;
pub use error::{Expected, ParseError};
pub use ident::IdentParser;
pub use markup::MarkupParser;
pub use number::NumberParser;
pub use reader::ReconReader;
pub use record::RecordParser;
pub use string::StringParser;
pub use value::ValueParser;

use recon_model::Value;

/// The outcome of feeding input to a parser that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The input was exhausted before the construct was complete.
    Cont,
    /// The construct is complete.
    Done(T),
}

pub type ParseResult<T> = Result<Step<T>, ParseError>;

/// A resumable parser for a single construct.
pub trait Parser {
    type Output;

    /// Consume as much of the input as possible. This will only return [`Step::Cont`] if the input
    /// is empty and not done. A parser must not be fed again after it has completed or failed.
    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<Self::Output>;
}

/// Run a parser over the entirety of an input, treating the end of the input as the end of the
/// source.
pub fn run<P, I>(mut parser: P, input: &mut I) -> Result<P::Output, ParseError>
where
    P: Parser,
    I: Input + ?Sized,
{
    if let Step::Done(output) = parser.feed(input)? {
        return Ok(output);
    }
    if input.is_done() {
        return Err(ParseError::UnexpectedEndOfInput);
    }
    match parser.feed(&mut Closed::at(input.location()))? {
        Step::Done(output) => Ok(output),
        Step::Cont => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses an entire Recon document: a block that must be followed by nothing at all.
#[derive(Debug, Default)]
pub struct DocumentParser {
    block: BlockParser,
    value: Option<Value>,
}

impl DocumentParser {
    pub fn new() -> Self {
        DocumentParser::default()
    }
}

impl Parser for DocumentParser {
    type Output = Value;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<Value> {
        if self.value.is_none() {
            match self.block.feed(input)? {
                Step::Cont => return Ok(Step::Cont),
                Step::Done(value) => self.value = Some(value),
            }
        }
        match input.peek() {
            Some(c) => Err(ParseError::TrailingInput {
                found: c,
                location: input.location(),
            }),
            None if input.is_done() => Ok(Step::Done(self.value.take().unwrap_or_default())),
            None => Ok(Step::Cont),
        }
    }
}

pub(crate) fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub(crate) fn is_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub(crate) fn is_whitespace(c: char) -> bool {
    is_space(c) || is_newline(c)
}

pub(crate) fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || is_newline(c)
}

/// Whether a character can begin a value in a block or record.
pub(crate) fn is_value_start(c: char) -> bool {
    matches!(c, '@' | '{' | '[' | '"' | '%' | '-')
        || c.is_ascii_digit()
        || is_identifier_start(c)
}

pub(crate) fn skip_spaces<I: Input + ?Sized>(input: &mut I) {
    while input.peek().map_or(false, is_space) {
        input.step();
    }
}

pub(crate) fn skip_whitespace<I: Input + ?Sized>(input: &mut I) {
    while input.peek().map_or(false, is_whitespace) {
        input.step();
    }
}

/// Skip whitespace along with any separators that are not preceded by an item.
pub(crate) fn skip_empty_items<I: Input + ?Sized>(input: &mut I) {
    while input
        .peek()
        .map_or(false, |c| is_whitespace(c) || c == ',' || c == ';')
    {
        input.step();
    }
}

/// The result when a parser has consumed all available input and requires more.
pub(crate) fn pause<T, I: Input + ?Sized>(input: &I) -> ParseResult<T> {
    if input.is_done() {
        Err(ParseError::UnexpectedEndOfInput)
    } else {
        Ok(Step::Cont)
    }
}

/// Fail at the current position of the input.
pub(crate) fn fault<I: Input + ?Sized>(input: &I, expected: Expected) -> ParseError {
    match input.peek() {
        Some(c) => ParseError::syntax(expected, c, input.location()),
        None => ParseError::UnexpectedEndOfInput,
    }
}

/// Whether a parser that could complete at this point should do so, rather than wait to see
/// whether more input extends the construct.
pub(crate) fn can_complete<I: Input + ?Sized>(input: &I) -> bool {
    !input.is_empty() || input.is_done()
}

/// Map the characters that may follow a `\` in strings and markup to the characters they denote.
pub(crate) fn unescape(c: char) -> Option<char> {
    match c {
        '"' | '\\' | '/' | '@' | '{' | '}' | '[' | ']' => Some(c),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}
