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
    can_complete, skip_spaces, AttrParser, DataParser, IdentParser, MarkupParser, NumberParser,
    ParseResult, Parser, RecordParser, Step, StringParser,
};
use crate::input::Input;
use either::Either;
use recon_model::identifier::is_identifier_start;
use recon_model::{Builder, RecordBuilder, Value, ValueBuilder};

/// Which constructs a ['ValueParser'] will recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Any value (in blocks, records and attribute parameters).
    Block,
    /// Only attributes, records and markup (within markup, where anything else is text).
    Inline,
}

#[derive(Debug, Default)]
enum ValueState {
    #[default]
    Start,
    Attr(AttrParser),
    AfterAttr,
    Record(Box<RecordParser<RecordBuilder>>),
    SplicedRecord(Box<RecordParser<ValueBuilder>>),
    Markup(Box<MarkupParser<RecordBuilder>>),
    SplicedMarkup(Box<MarkupParser<ValueBuilder>>),
    Text(StringParser),
    Data(DataParser),
    Number(NumberParser),
    Ident(IdentParser),
    Postfix,
    PostfixAttr(AttrParser),
}

/// Parses a single value, along with any attributes that precede or follow it.
///
/// Leading attributes are gathered into a record with the value that follows them. When that
/// value is a record or markup, its items are added directly to the same record (so `@a{1,2}` has
/// three items rather than two). In a block, attributes that directly follow the value are
/// appended after it. A value with no attributes is produced as it is.
#[derive(Debug)]
pub struct ValueParser {
    mode: Mode,
    builder: Option<ValueBuilder>,
    state: ValueState,
}

impl ValueParser {
    /// A parser for any value.
    pub fn block() -> Self {
        ValueParser {
            mode: Mode::Block,
            builder: None,
            state: ValueState::Start,
        }
    }

    /// A parser for the attributed values that are embedded in markup. These end with their
    /// record or markup body and never take trailing attributes.
    pub fn inline() -> Self {
        ValueParser {
            mode: Mode::Inline,
            builder: None,
            state: ValueState::Start,
        }
    }

    fn finish(&mut self) -> ParseResult<Value> {
        let value = self
            .builder
            .take()
            .map_or(Value::Absent, ValueBuilder::state);
        Ok(Step::Done(value))
    }

    fn builder(&mut self) -> &mut ValueBuilder {
        self.builder.get_or_insert_with(ValueBuilder::new)
    }

    fn push_value(&mut self, value: Value) {
        self.builder().append_value(value);
        self.state = ValueState::Postfix;
    }

    /// Choose the parser for the value that starts with the given character.
    fn dispatch(&mut self, c: char) -> Option<ValueState> {
        let state = match c {
            '@' => ValueState::Attr(AttrParser::new()),
            '{' => match self.builder.take() {
                Some(builder) => {
                    ValueState::SplicedRecord(Box::new(RecordParser::with_builder(builder)))
                }
                None => ValueState::Record(Box::new(RecordParser::new())),
            },
            '[' => match self.builder.take() {
                Some(builder) => {
                    ValueState::SplicedMarkup(Box::new(MarkupParser::with_builder(builder)))
                }
                None => ValueState::Markup(Box::new(MarkupParser::new())),
            },
            _ if self.mode == Mode::Inline => return None,
            '"' => ValueState::Text(StringParser::new()),
            '%' => ValueState::Data(DataParser::new()),
            '-' | '0'..='9' => ValueState::Number(NumberParser::new()),
            _ if is_identifier_start(c) => ValueState::Ident(IdentParser::new()),
            _ => return None,
        };
        Some(state)
    }
}

impl Parser for ValueParser {
    type Output = Value;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<Value> {
        loop {
            match &mut self.state {
                ValueState::Start => match input.peek() {
                    Some(c) => match self.dispatch(c) {
                        Some(state) => self.state = state,
                        None => return self.finish(),
                    },
                    None if input.is_done() => return self.finish(),
                    None => return Ok(Step::Cont),
                },
                ValueState::Attr(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(field) => {
                        self.builder().append_field(field);
                        self.state = ValueState::AfterAttr;
                    }
                },
                ValueState::AfterAttr => {
                    skip_spaces(input);
                    if !input.is_empty() {
                        self.state = ValueState::Start;
                    } else if input.is_done() {
                        return self.finish();
                    } else {
                        return Ok(Step::Cont);
                    }
                }
                ValueState::Record(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(builder) => self.push_value(Value::Record(builder.state())),
                },
                ValueState::SplicedRecord(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(builder) => {
                        self.builder = Some(builder);
                        self.state = ValueState::Postfix;
                    }
                },
                ValueState::Markup(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(Either::Left(text)) => self.push_value(Value::Text(text)),
                    Step::Done(Either::Right(builder)) => {
                        self.push_value(Value::Record(builder.state()))
                    }
                },
                ValueState::SplicedMarkup(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(Either::Left(text)) => self.push_value(Value::Text(text)),
                    Step::Done(Either::Right(builder)) => {
                        self.builder = Some(builder);
                        self.state = ValueState::Postfix;
                    }
                },
                ValueState::Text(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(text) => self.push_value(Value::Text(text)),
                },
                ValueState::Data(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(blob) => self.push_value(Value::Data(blob)),
                },
                ValueState::Number(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(n) => self.push_value(Value::NumberValue(n)),
                },
                ValueState::Ident(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(ident) => {
                        let value = match ident.as_str() {
                            "true" => Value::BooleanValue(true),
                            "false" => Value::BooleanValue(false),
                            _ => Value::Text(ident),
                        };
                        self.push_value(value);
                    }
                },
                ValueState::Postfix => {
                    if self.mode == Mode::Inline {
                        return self.finish();
                    }
                    skip_spaces(input);
                    match input.peek() {
                        Some('@') => self.state = ValueState::PostfixAttr(AttrParser::new()),
                        _ if can_complete(input) => return self.finish(),
                        _ => return Ok(Step::Cont),
                    }
                }
                ValueState::PostfixAttr(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(field) => {
                        self.builder().append_field(field);
                        self.state = ValueState::Postfix;
                    }
                },
            }
        }
    }
}
