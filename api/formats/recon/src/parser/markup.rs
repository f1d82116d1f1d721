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

use super::{
    pause, unescape, Expected, ParseError, ParseResult, Parser, RecordParser, Step, ValueParser,
};
use crate::input::Input;
use either::Either;
use recon_model::{Builder, RecordBuilder, Value};

#[derive(Debug)]
enum MarkupState<B> {
    Open,
    Text,
    Escape,
    Inline(ValueParser),
    Embedded(Box<RecordParser<B>>),
    Nested(Box<MarkupParser<RecordBuilder>>),
}

/// Parses bracketed markup: text interleaved with embedded values.
///
/// Within the brackets, `@` introduces an attributed value, `{` introduces a record whose items
/// become items of the markup and `[` introduces nested markup that becomes a single item. If
/// the markup contains nothing but text, the result is that text. Otherwise the items are added to
/// a builder which is the result.
#[derive(Debug)]
pub struct MarkupParser<B = RecordBuilder> {
    builder: Option<B>,
    text: String,
    state: MarkupState<B>,
}

impl<B: Builder + Default> Default for MarkupParser<B> {
    fn default() -> Self {
        MarkupParser {
            builder: None,
            text: String::new(),
            state: MarkupState::Open,
        }
    }
}

fn is_markup_char(c: char) -> bool {
    !matches!(c, '@' | '[' | '\\' | ']' | '{' | '}')
}

impl<B: Builder + Default> MarkupParser<B> {
    pub fn new() -> Self {
        MarkupParser::default()
    }

    /// Markup that will add its content to an existing builder.
    pub fn with_builder(builder: B) -> Self {
        MarkupParser {
            builder: Some(builder),
            ..Default::default()
        }
    }

    /// Move any pending text into the builder, creating it if necessary.
    fn flush(&mut self) -> &mut B {
        let builder = self.builder.get_or_insert_with(B::default);
        if !self.text.is_empty() {
            builder.append_value(Value::Text(std::mem::take(&mut self.text)));
        }
        builder
    }

    fn finish(&mut self) -> Either<String, B> {
        match self.builder.take() {
            Some(mut builder) => {
                if !self.text.is_empty() {
                    builder.append_value(Value::Text(std::mem::take(&mut self.text)));
                }
                Either::Right(builder)
            }
            None => Either::Left(std::mem::take(&mut self.text)),
        }
    }

    fn append(&mut self, value: Value) {
        self.flush().append_value(value);
        self.state = MarkupState::Text;
    }
}

impl<B: Builder + Default> Parser for MarkupParser<B> {
    type Output = Either<String, B>;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<Either<String, B>> {
        loop {
            match &mut self.state {
                MarkupState::Open => match input.peek() {
                    Some('[') => {
                        input.step();
                        self.state = MarkupState::Text;
                    }
                    Some(c) => {
                        return Err(ParseError::syntax(
                            Expected::Char('['),
                            c,
                            input.location(),
                        ))
                    }
                    None => return pause(input),
                },
                MarkupState::Text => {
                    while let Some(c) = input.peek().filter(|c| is_markup_char(*c)) {
                        self.text.push(c);
                        input.step();
                    }
                    match input.peek() {
                        Some(']') => {
                            input.step();
                            return Ok(Step::Done(self.finish()));
                        }
                        Some('@') => {
                            self.flush();
                            self.state = MarkupState::Inline(ValueParser::inline());
                        }
                        Some('{') => {
                            self.flush();
                            let builder = self.builder.take().unwrap_or_default();
                            self.state =
                                MarkupState::Embedded(Box::new(RecordParser::with_builder(builder)));
                        }
                        Some('[') => {
                            self.flush();
                            self.state = MarkupState::Nested(Box::new(MarkupParser::new()));
                        }
                        Some('\\') => {
                            input.step();
                            self.state = MarkupState::Escape;
                        }
                        Some(c) => {
                            return Err(ParseError::syntax(
                                Expected::MarkupText,
                                c,
                                input.location(),
                            ))
                        }
                        None => return pause(input),
                    }
                }
                MarkupState::Escape => match input.peek() {
                    Some(c) => match unescape(c) {
                        Some(unescaped) => {
                            input.step();
                            self.text.push(unescaped);
                            self.state = MarkupState::Text;
                        }
                        None => {
                            return Err(ParseError::syntax(
                                Expected::EscapeChar,
                                c,
                                input.location(),
                            ))
                        }
                    },
                    None => return pause(input),
                },
                MarkupState::Inline(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(value) => self.append(value),
                },
                MarkupState::Embedded(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(builder) => {
                        self.builder = Some(builder);
                        self.state = MarkupState::Text;
                    }
                },
                MarkupState::Nested(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(Either::Left(text)) => self.append(Value::Text(text)),
                    Step::Done(Either::Right(builder)) => {
                        self.append(Value::Record(builder.state()))
                    }
                },
            }
        }
    }
}
