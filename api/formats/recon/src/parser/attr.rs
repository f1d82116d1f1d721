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
    can_complete, pause, skip_whitespace, BlockParser, Expected, IdentParser, ParseError,
    ParseResult, Parser, Step, StringParser,
};
use crate::input::Input;
use recon_model::{Field, Value};

#[derive(Debug, Default)]
enum AttrState {
    #[default]
    At,
    NameStart,
    Name(IdentParser),
    QuotedName(StringParser),
    AfterName(String),
    ParamsStart(String),
    Params(String, Box<BlockParser>),
    ParamsEnd(String, Value),
}

/// Parses an attribute: `@name` with an optional parenthesized block of parameters. The name may
/// also be a quoted string.
#[derive(Debug, Default)]
pub struct AttrParser {
    state: AttrState,
}

impl AttrParser {
    pub fn new() -> Self {
        AttrParser::default()
    }
}

impl Parser for AttrParser {
    type Output = Field;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<Field> {
        loop {
            match &mut self.state {
                AttrState::At => match input.peek() {
                    Some('@') => {
                        input.step();
                        self.state = AttrState::NameStart;
                    }
                    Some(c) => {
                        return Err(ParseError::syntax(
                            Expected::Char('@'),
                            c,
                            input.location(),
                        ))
                    }
                    None => return pause(input),
                },
                AttrState::NameStart => match input.peek() {
                    Some('"') => self.state = AttrState::QuotedName(StringParser::new()),
                    Some(_) => self.state = AttrState::Name(IdentParser::new()),
                    None => return pause(input),
                },
                AttrState::Name(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(name) => self.state = AttrState::AfterName(name),
                },
                AttrState::QuotedName(parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(name) => self.state = AttrState::AfterName(name),
                },
                AttrState::AfterName(name) => match input.peek() {
                    Some('(') => {
                        input.step();
                        self.state = AttrState::ParamsStart(std::mem::take(name));
                    }
                    _ if can_complete(input) => {
                        return Ok(Step::Done(Field::of_attr(std::mem::take(name))))
                    }
                    _ => return Ok(Step::Cont),
                },
                AttrState::ParamsStart(name) => {
                    skip_whitespace(input);
                    match input.peek() {
                        Some(')') => {
                            input.step();
                            return Ok(Step::Done(Field::of_attr(std::mem::take(name))));
                        }
                        Some(_) => {
                            let name = std::mem::take(name);
                            self.state = AttrState::Params(name, Box::new(BlockParser::new()));
                        }
                        None => return pause(input),
                    }
                }
                AttrState::Params(name, parser) => match parser.feed(input)? {
                    Step::Cont => return Ok(Step::Cont),
                    Step::Done(value) => {
                        self.state = AttrState::ParamsEnd(std::mem::take(name), value)
                    }
                },
                AttrState::ParamsEnd(name, value) => {
                    skip_whitespace(input);
                    match input.peek() {
                        Some(')') => {
                            input.step();
                            let field = Field::attr(std::mem::take(name), std::mem::take(value));
                            return Ok(Step::Done(field));
                        }
                        Some(c) => {
                            return Err(ParseError::syntax(
                                Expected::Char(')'),
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
