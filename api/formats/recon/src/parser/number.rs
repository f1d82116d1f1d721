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

use super::{can_complete, fault, pause, Expected, ParseResult, Parser, Step};
use crate::input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum NumberState {
    #[default]
    Sign,
    LeadingDigit,
    IntegerDigits,
    Point,
    FractionStart,
    FractionDigits,
    Exponent,
    ExponentSign,
    ExponentStart,
    ExponentDigits,
}

/// Parses a numeric literal: an optional minus sign, an integer part with no redundant leading
/// zeros, an optional fraction and an optional exponent.
#[derive(Debug, Default)]
pub struct NumberParser {
    literal: String,
    state: NumberState,
}

impl NumberParser {
    pub fn new() -> Self {
        NumberParser::default()
    }

    fn take_digits<I: Input + ?Sized>(&mut self, input: &mut I) {
        while let Some(c) = input.peek().filter(char::is_ascii_digit) {
            self.literal.push(c);
            input.step();
        }
    }

    fn accept<I: Input + ?Sized>(&mut self, input: &mut I, c: char, next: NumberState) {
        self.literal.push(c);
        input.step();
        self.state = next;
    }

    fn finish<I: Input + ?Sized>(&mut self, input: &I) -> ParseResult<f64> {
        match self.literal.parse::<f64>() {
            Ok(n) => Ok(Step::Done(n)),
            Err(_) => Err(fault(input, Expected::Digit)),
        }
    }
}

impl Parser for NumberParser {
    type Output = f64;

    fn feed<I: Input + ?Sized>(&mut self, input: &mut I) -> ParseResult<f64> {
        loop {
            match self.state {
                NumberState::Sign => match input.peek() {
                    Some('-') => self.accept(input, '-', NumberState::LeadingDigit),
                    Some(_) => self.state = NumberState::LeadingDigit,
                    None => return pause(input),
                },
                NumberState::LeadingDigit => match input.peek() {
                    Some('0') => self.accept(input, '0', NumberState::Point),
                    Some(c) if c.is_ascii_digit() => {
                        self.accept(input, c, NumberState::IntegerDigits)
                    }
                    Some(_) => return Err(fault(input, Expected::Digit)),
                    None => return pause(input),
                },
                NumberState::IntegerDigits => {
                    self.take_digits(input);
                    if !can_complete(input) {
                        return Ok(Step::Cont);
                    }
                    self.state = NumberState::Point;
                }
                NumberState::Point => match input.peek() {
                    Some('.') => self.accept(input, '.', NumberState::FractionStart),
                    Some(_) => self.state = NumberState::Exponent,
                    None if input.is_done() => return self.finish(input),
                    None => return Ok(Step::Cont),
                },
                NumberState::FractionStart => match input.peek() {
                    Some(c) if c.is_ascii_digit() => {
                        self.accept(input, c, NumberState::FractionDigits)
                    }
                    Some(_) => return Err(fault(input, Expected::Digit)),
                    None => return pause(input),
                },
                NumberState::FractionDigits => {
                    self.take_digits(input);
                    if !can_complete(input) {
                        return Ok(Step::Cont);
                    }
                    self.state = NumberState::Exponent;
                }
                NumberState::Exponent => match input.peek() {
                    Some(c @ ('e' | 'E')) => self.accept(input, c, NumberState::ExponentSign),
                    Some(_) => return self.finish(input),
                    None if input.is_done() => return self.finish(input),
                    None => return Ok(Step::Cont),
                },
                NumberState::ExponentSign => match input.peek() {
                    Some(c @ ('+' | '-')) => self.accept(input, c, NumberState::ExponentStart),
                    Some(_) => self.state = NumberState::ExponentStart,
                    None => return pause(input),
                },
                NumberState::ExponentStart => match input.peek() {
                    Some(c) if c.is_ascii_digit() => {
                        self.accept(input, c, NumberState::ExponentDigits)
                    }
                    Some(_) => return Err(fault(input, Expected::Digit)),
                    None => return pause(input),
                },
                NumberState::ExponentDigits => {
                    self.take_digits(input);
                    return if can_complete(input) {
                        self.finish(input)
                    } else {
                        Ok(Step::Cont)
                    };
                }
            }
        }
    }
}
