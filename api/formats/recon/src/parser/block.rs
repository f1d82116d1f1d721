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

use super::record::slot_value;
use super::{
    can_complete, is_separator, is_value_start, skip_empty_items, skip_spaces, ParseResult,
    Parser, Step, ValueParser,
};
use crate::input::Input;
use recon_model::{Builder, Field, Value, ValueBuilder};

#[derive(Debug, Default)]
enum BlockState {
    #[default]
    ItemStart,
    Key(ValueParser),
    AfterKey(Value),
    SlotStart(Value),
    SlotValue(Value, ValueParser),
    AfterItem,
}

/// Parses a sequence of items separated by commas, semicolons or new lines with no enclosing
/// delimiters. This is the top level of a document and the content of attribute parameters. A
/// single value, on its own, is produced as that value rather than as a record.
#[derive(Debug, Default)]
pub struct BlockParser {
    builder: ValueBuilder,
    state: BlockState,
}

impl BlockParser {
    pub fn new() -> Self {
        BlockParser::default()
    }

    fn finish(&mut self) -> ParseResult<Value> {
        Ok(Step::Done(std::mem::take(&mut self.builder).state()))
    }
}

impl Parser for BlockParser {
    type Output = Value;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<Value> {
        loop {
            match &mut self.state {
                BlockState::ItemStart => {
                    skip_empty_items(input);
                    match input.peek() {
                        Some(c) if is_value_start(c) => {
                            self.state = BlockState::Key(ValueParser::block())
                        }
                        _ if can_complete(input) => return self.finish(),
                        _ => return Ok(Step::Cont),
                    }
                }
                BlockState::Key(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(key) => self.state = BlockState::AfterKey(key),
                },
                BlockState::AfterKey(key) => {
                    skip_spaces(input);
                    match input.peek() {
                        Some(':') => {
                            input.step();
                            self.state = BlockState::SlotStart(std::mem::take(key));
                        }
                        _ if can_complete(input) => {
                            let key = std::mem::take(key);
                            self.builder.append_value(key);
                            self.state = BlockState::AfterItem;
                        }
                        _ => return Ok(Step::Cont),
                    }
                }
                BlockState::SlotStart(key) => {
                    skip_spaces(input);
                    if !input.is_empty() {
                        let key = std::mem::take(key);
                        self.state = BlockState::SlotValue(key, ValueParser::block());
                    } else if input.is_done() {
                        let key = std::mem::take(key);
                        self.builder.append_field(Field::of_slot(key));
                        return self.finish();
                    } else {
                        return Ok(Step::Cont);
                    }
                }
                BlockState::SlotValue(key, parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(value) => {
                        let key = std::mem::take(key);
                        self.builder.append_field(Field::Slot(key, slot_value(value)));
                        self.state = BlockState::AfterItem;
                    }
                },
                BlockState::AfterItem => {
                    skip_spaces(input);
                    match input.peek() {
                        Some(c) if is_separator(c) => {
                            input.step();
                            self.state = BlockState::ItemStart;
                        }
                        _ if can_complete(input) => return self.finish(),
                        _ => return Ok(Step::Cont),
                    }
                }
            }
        }
    }
}
