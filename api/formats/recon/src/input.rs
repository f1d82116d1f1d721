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

//! Cursors over the code points of a Recon source.

use std::fmt::{Display, Formatter};

#[cfg(test)]
mod tests;

/// A position in a source, counted in code points. Lines and columns start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Location {
    fn default() -> Self {
        Location {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Location {
    fn advance(&mut self, c: char) {
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A view over a sequence of code points that is consumed by the parsers.
///
/// An input that is empty is not necessarily finished: more may become available later. Only an
/// input that is both empty and done will never produce more code points.
pub trait Input {
    /// No code point is available at the moment.
    fn is_empty(&self) -> bool;

    /// No more input will ever be available.
    fn is_done(&self) -> bool;

    /// The current code point, if there is one.
    fn peek(&self) -> Option<char>;

    /// Move past the current code point.
    ///
    /// # Panics
    /// If the input is empty.
    fn step(&mut self);

    /// The position of the current code point.
    fn location(&self) -> Location;

    /// The current code point.
    ///
    /// # Panics
    /// If the input is empty.
    fn head(&self) -> char {
        match self.peek() {
            Some(c) => c,
            None => panic!("Head of empty input."),
        }
    }
}

/// Input from a string slice. The string may be a fragment of a larger source, in which case it
/// will report that it is empty, but never that it is done.
#[derive(Debug, Clone)]
pub struct StrInput<'a> {
    remaining: &'a str,
    location: Location,
}

impl<'a> StrInput<'a> {
    pub fn new(source: &'a str) -> Self {
        StrInput::at(source, Location::default())
    }

    /// Input from a fragment of a source, the start of which is at the given location.
    pub fn at(source: &'a str, location: Location) -> Self {
        StrInput {
            remaining: source,
            location,
        }
    }

    /// The part of the source that has not been consumed.
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }
}

impl<'a> Input for StrInput<'a> {
    fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    fn is_done(&self) -> bool {
        false
    }

    fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    fn step(&mut self) {
        let mut chars = self.remaining.chars();
        match chars.next() {
            Some(c) => {
                self.location.advance(c);
                self.remaining = chars.as_str();
            }
            None => panic!("Step past the end of input."),
        }
    }

    fn location(&self) -> Location {
        self.location
    }
}

const REPLACEMENT: char = '\u{fffd}';

pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xd800..=0xdbff).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xdc00..=0xdfff).contains(&unit)
}

/// Input from UTF-16 code units. Surrogate pairs are combined into a single code point and
/// any unpaired surrogate is replaced with U+FFFD.
#[derive(Debug, Clone)]
pub struct Utf16Input<'a> {
    units: &'a [u16],
    index: usize,
    location: Location,
}

impl<'a> Utf16Input<'a> {
    pub fn new(units: &'a [u16]) -> Self {
        Utf16Input::at(units, Location::default())
    }

    pub fn at(units: &'a [u16], location: Location) -> Self {
        Utf16Input {
            units,
            index: 0,
            location,
        }
    }

    /// The code point at the current index and the number of units it occupies.
    fn decode(&self) -> Option<(char, usize)> {
        let first = *self.units.get(self.index)?;
        if is_high_surrogate(first) {
            match self.units.get(self.index + 1) {
                Some(second) if is_low_surrogate(*second) => {
                    let code = 0x10000
                        + ((u32::from(first) - 0xd800) << 10)
                        + (u32::from(*second) - 0xdc00);
                    Some((char::from_u32(code).unwrap_or(REPLACEMENT), 2))
                }
                _ => Some((REPLACEMENT, 1)),
            }
        } else if is_low_surrogate(first) {
            Some((REPLACEMENT, 1))
        } else {
            Some((char::from_u32(u32::from(first)).unwrap_or(REPLACEMENT), 1))
        }
    }
}

impl<'a> Input for Utf16Input<'a> {
    fn is_empty(&self) -> bool {
        self.index >= self.units.len()
    }

    fn is_done(&self) -> bool {
        false
    }

    fn peek(&self) -> Option<char> {
        self.decode().map(|(c, _)| c)
    }

    fn step(&mut self) {
        match self.decode() {
            Some((c, width)) => {
                self.location.advance(c);
                self.index += width;
            }
            None => panic!("Step past the end of input."),
        }
    }

    fn location(&self) -> Location {
        self.location
    }
}

/// An input that is empty and will never produce any more code points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Closed {
    location: Location,
}

impl Closed {
    pub fn at(location: Location) -> Self {
        Closed { location }
    }
}

impl Input for Closed {
    fn is_empty(&self) -> bool {
        true
    }

    fn is_done(&self) -> bool {
        true
    }

    fn peek(&self) -> Option<char> {
        None
    }

    fn step(&mut self) {
        panic!("Step past the end of input.")
    }

    fn location(&self) -> Location {
        self.location
    }
}
