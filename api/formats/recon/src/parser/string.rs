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

use super::{pause, unescape, Expected, ParseError, ParseResult, Parser, Step};
use crate::input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum StringState {
    #[default]
    Open,
    Body,
    Escape,
}

/// Parses a quoted string literal.
#[derive(Debug, Default)]
pub struct StringParser {
    text: String,
    state: StringState,
}

impl StringParser {
    pub fn new() -> Self {
        StringParser::default()
    }
}

impl Parser for StringParser {
    type Output = String;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<String> {
        loop {
            let c = match input.peek() {
                Some(c) => c,
                None => return pause(input),
            };
            match self.state {
                StringState::Open => {
                    if c != '"' {
                        return Err(ParseError::syntax(
                            Expected::Char('"'),
                            c,
                            input.location(),
                        ));
                    }
                    input.step();
                    self.state = StringState::Body;
                }
                StringState::Body => {
                    input.step();
                    match c {
                        '"' => return Ok(Step::Done(std::mem::take(&mut self.text))),
                        '\\' => self.state = StringState::Escape,
                        _ => self.text.push(c),
                    }
                }
                StringState::Escape => match unescape(c) {
                    Some(unescaped) => {
                        input.step();
                        self.text.push(unescaped);
                        self.state = StringState::Body;
                    }
                    None => {
                        return Err(ParseError::syntax(
                            Expected::EscapeChar,
                            c,
                            input.location(),
                        ))
                    }
                },
            }
        }
    }
}
