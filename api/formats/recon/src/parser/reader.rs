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

use super::{DocumentParser, ParseError, Parser, Step};
use crate::input::{is_high_surrogate, Closed, Input, Location, StrInput, Utf16Input};
use recon_model::Value;
use tracing::trace;

/// Parses a Recon document that arrives in fragments.
///
/// #Examples
///
/// ```
/// use recon::ReconReader;
///
/// let mut reader = ReconReader::new();
/// reader.feed_str("@greeting(to: wor").unwrap();
/// reader.feed_str("ld) \"Hello\"").unwrap();
/// let value = reader.finish().unwrap();
/// assert!(value.is_record());
/// ```
#[derive(Debug, Default)]
pub struct ReconReader {
    parser: DocumentParser,
    location: Location,
    high_surrogate: Option<u16>,
    failure: Option<ParseError>,
}

impl ReconReader {
    pub fn new() -> Self {
        ReconReader::default()
    }

    /// The location of the next code point that will be consumed.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Consume a fragment of text. If the document is invalid, the error is returned from this
    /// and all subsequent calls.
    pub fn feed_str(&mut self, fragment: &str) -> Result<(), ParseError> {
        self.flush_surrogate()?;
        trace!(len = fragment.len(), "Consuming Recon text fragment.");
        self.consume(StrInput::at(fragment, self.location))
    }

    /// Consume a fragment of UTF-16 code units. A surrogate pair may be split between two
    /// fragments.
    pub fn feed_utf16(&mut self, fragment: &[u16]) -> Result<(), ParseError> {
        trace!(len = fragment.len(), "Consuming Recon UTF-16 fragment.");
        let joined: Vec<u16>;
        let mut units = fragment;
        if let Some(high) = self.high_surrogate.take() {
            joined = [&[high][..], fragment].concat();
            units = joined.as_slice();
        }
        if let Some((last, init)) = units.split_last() {
            if is_high_surrogate(*last) {
                self.high_surrogate = Some(*last);
                units = init;
            }
        }
        self.consume(Utf16Input::at(units, self.location))
    }

    /// Signal the end of the document and get the result.
    pub fn finish(mut self) -> Result<Value, ParseError> {
        self.flush_surrogate()?;
        if let Some(err) = self.failure {
            return Err(err);
        }
        match self.parser.feed(&mut Closed::at(self.location))? {
            Step::Done(value) => Ok(value),
            Step::Cont => Err(ParseError::UnexpectedEndOfInput),
        }
    }

    /// An unpaired high surrogate at the end of the previous fragment.
    fn flush_surrogate(&mut self) -> Result<(), ParseError> {
        match self.high_surrogate.take() {
            Some(high) => self.consume(Utf16Input::at(&[high], self.location)),
            None => Ok(()),
        }
    }

    fn consume<I: Input>(&mut self, mut input: I) -> Result<(), ParseError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let result = self.parser.feed(&mut input);
        self.location = input.location();
        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }
}
