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
    is_separator, is_value_start, pause, skip_empty_items, skip_spaces, Expected, ParseError,
    ParseResult, Parser, Step, ValueParser,
};
use crate::input::Input;
use recon_model::{Builder, Field, RecordBuilder, Value};

#[derive(Debug, Default)]
enum RecordState {
    #[default]
    Open,
    ItemStart,
    Key(ValueParser),
    AfterKey(Value),
    SlotStart(Value),
    SlotValue(Value, ValueParser),
    AfterItem,
}

/// Parses a brace delimited record, adding its items to a builder. The builder is returned once
/// the closing brace is consumed. Starting from a builder that already has items allows a record
/// to be spliced into an enclosing construct.
#[derive(Debug)]
pub struct RecordParser<B = RecordBuilder> {
    builder: B,
    state: RecordState,
}

impl<B: Builder + Default> Default for RecordParser<B> {
    fn default() -> Self {
        RecordParser::with_builder(B::default())
    }
}

impl<B: Builder + Default> RecordParser<B> {
    pub fn new() -> Self {
        RecordParser::default()
    }

    pub fn with_builder(builder: B) -> Self {
        RecordParser {
            builder,
            state: RecordState::Open,
        }
    }
}

/// A slot with no value is equivalent to one with an extant value.
pub(crate) fn slot_value(value: Value) -> Value {
    if value.is_absent() {
        Value::Extant
    } else {
        value
    }
}

impl<B: Builder + Default> Parser for RecordParser<B> {
    type Output = B;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<B> {
        loop {
            match &mut self.state {
                RecordState::Open => match input.peek() {
                    Some('{') => {
                        input.step();
                        self.state = RecordState::ItemStart;
                    }
                    Some(c) => {
                        return Err(ParseError::syntax(
                            Expected::Char('{'),
                            c,
                            input.location(),
                        ))
                    }
                    None => return pause(input),
                },
                RecordState::ItemStart => {
                    skip_empty_items(input);
                    match input.peek() {
                        Some('}') => {
                            input.step();
                            return Ok(Step::Done(std::mem::take(&mut self.builder)));
                        }
                        Some(c) if is_value_start(c) => {
                            self.state = RecordState::Key(ValueParser::block())
                        }
                        Some(c) => {
                            return Err(ParseError::syntax(
                                Expected::RecordItem,
                                c,
                                input.location(),
                            ))
                        }
                        None => return pause(input),
                    }
                }
                RecordState::Key(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(key) => self.state = RecordState::AfterKey(key),
                },
                RecordState::AfterKey(key) => {
                    skip_spaces(input);
                    match input.peek() {
                        Some(':') => {
                            input.step();
                            self.state = RecordState::SlotStart(std::mem::take(key));
                        }
                        Some(_) => {
                            let key = std::mem::take(key);
                            self.builder.append_value(key);
                            self.state = RecordState::AfterItem;
                        }
                        None => return pause(input),
                    }
                }
                RecordState::SlotStart(key) => {
                    skip_spaces(input);
                    if input.is_empty() {
                        return pause(input);
                    }
                    let key = std::mem::take(key);
                    self.state = RecordState::SlotValue(key, ValueParser::block());
                }
                RecordState::SlotValue(key, parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(value) => {
                        let key = std::mem::take(key);
                        self.builder.append_field(Field::Slot(key, slot_value(value)));
                        self.state = RecordState::AfterItem;
                    }
                },
                RecordState::AfterItem => {
                    skip_spaces(input);
                    match input.peek() {
                        Some('}') => {
                            input.step();
                            return Ok(Step::Done(std::mem::take(&mut self.builder)));
                        }
                        Some(c) if is_separator(c) => {
                            input.step();
                            self.state = RecordState::ItemStart;
                        }
                        Some(c) => {
                            return Err(ParseError::syntax(
                                Expected::RecordEnd,
                                c,
                                input.location(),
                            ))
                        }
                        None => return pause(input),
                    }
                }
            }
        }
    }
}
