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

use super::{can_complete, pause, ParseError, ParseResult, Parser, Step};
use crate::input::Input;
use crate::parser::Expected;
use recon_model::identifier::{is_identifier_char, is_identifier_start};

/// Parses an identifier.
#[derive(Debug, Default)]
pub struct IdentParser {
    ident: Option<String>,
}

impl IdentParser {
    pub fn new() -> Self {
        IdentParser::default()
    }
}

impl Parser for IdentParser {
    type Output = String;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<String> {
        if self.ident.is_none() {
            match input.peek() {
                Some(c) if is_identifier_start(c) => {
                    input.step();
                    self.ident = Some(c.to_string());
                }
                Some(c) => {
                    return Err(ParseError::syntax(
                        Expected::Identifier,
                        c,
                        input.location(),
                    ))
                }
                None => return pause(input),
            }
        }
        if let Some(ident) = self.ident.as_mut() {
            while let Some(c) = input.peek().filter(|c| is_identifier_char(*c)) {
                ident.push(c);
                input.step();
            }
        }
        if can_complete(input) {
            Ok(Step::Done(self.ident.take().unwrap_or_default()))
        } else {
            Ok(Step::Cont)
        }
    }
}
