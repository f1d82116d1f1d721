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

use super::{can_complete, pause, Expected, ParseError, ParseResult, Parser, Step};
use crate::input::Input;
use recon_model::builder::is_base64_digit;
use recon_model::{Blob, BlobBuilder};

/// Position within a base64 quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DataState {
    #[default]
    Percent,
    First,
    Second,
    Third,
    Fourth,
    Padding,
}

/// Parses a `%` prefixed base64 data literal, decoding it as it is consumed.
#[derive(Debug, Default)]
pub struct DataParser {
    builder: BlobBuilder,
    state: DataState,
}

impl DataParser {
    pub fn new() -> Self {
        DataParser::default()
    }

    fn append<I: Input + ?Sized>(&mut self, input: &mut I, c: char) -> Result<(), ParseError> {
        let location = input.location();
        self.builder
            .append_base64_digit(c)
            .map_err(|_| ParseError::syntax(Expected::Base64Digit, c, location))?;
        input.step();
        Ok(())
    }

    fn done(&mut self) -> ParseResult<Blob> {
        Ok(Step::Done(std::mem::take(&mut self.builder).state()))
    }
}

impl Parser for DataParser {
    type Output = Blob;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<Blob> {
        loop {
            let c = match input.peek() {
                Some(c) => c,
                None if self.state == DataState::First && can_complete(input) => {
                    return self.done()
                }
                None => return pause(input),
            };
            let location = input.location();
            match self.state {
                DataState::Percent => {
                    if c != '%' {
                        return Err(ParseError::syntax(Expected::Char('%'), c, location));
                    }
                    input.step();
                    self.state = DataState::First;
                }
                DataState::First => {
                    if !is_base64_digit(c) {
                        return self.done();
                    }
                    self.append(input, c)?;
                    self.state = DataState::Second;
                }
                DataState::Second => {
                    if !is_base64_digit(c) {
                        return Err(ParseError::syntax(Expected::Base64Digit, c, location));
                    }
                    self.append(input, c)?;
                    self.state = DataState::Third;
                }
                DataState::Third => {
                    if c == '=' {
                        self.append(input, c)?;
                        self.state = DataState::Padding;
                    } else if is_base64_digit(c) {
                        self.append(input, c)?;
                        self.state = DataState::Fourth;
                    } else {
                        return Err(ParseError::syntax(Expected::Base64Digit, c, location));
                    }
                }
                DataState::Fourth => {
                    if c == '=' {
                        self.append(input, c)?;
                        return self.done();
                    } else if is_base64_digit(c) {
                        self.append(input, c)?;
                        self.state = DataState::First;
                    } else {
                        return Err(ParseError::syntax(Expected::Base64Digit, c, location));
                    }
                }
                DataState::Padding => {
                    if c != '=' {
                        return Err(ParseError::syntax(Expected::Char('='), c, location));
                    }
                    self.append(input, c)?;
                    return self.done();
                }
            }
        }
    }
}
