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

use crate::input::Location;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A description of what a parser required when it encountered an unexpected code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A specific character.
    Char(char),
    /// A separator or the end of a record.
    RecordEnd,
    /// The start of a record item or the end of the record.
    RecordItem,
    EscapeChar,
    Base64Digit,
    Digit,
    Identifier,
    MarkupText,
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Char(c) => write!(f, "'{}'", c),
            Expected::RecordEnd => write!(f, "'}}', ';', ',', or newline"),
            Expected::RecordItem => write!(f, "value or '}}'"),
            Expected::EscapeChar => write!(f, "escape character"),
            Expected::Base64Digit => write!(f, "base64 digit"),
            Expected::Digit => write!(f, "digit"),
            Expected::Identifier => write!(f, "identifier"),
            Expected::MarkupText => write!(f, "markup text"),
        }
    }
}

/// Failure to parse a Recon document. A failure is always fatal to the parse in which it occurs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An unexpected code point was encountered.
    #[error("Expected {expected} but found {found:?} at {location}.")]
    Syntax {
        expected: Expected,
        found: char,
        location: Location,
    },
    /// The input ended in the middle of a construct.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A complete document was followed by more input.
    #[error("Unconsumed input {found:?} at {location}.")]
    TrailingInput { found: char, location: Location },
}

impl ParseError {
    pub(crate) fn syntax(expected: Expected, found: char, location: Location) -> Self {
        ParseError::Syntax {
            expected,
            found,
            location,
        }
    }

    /// The location in the input at which the failure occurred, if it is known.
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::Syntax { location, .. } | ParseError::TrailingInput { location, .. } => {
                Some(*location)
            }
            ParseError::UnexpectedEndOfInput => None,
        }
    }
}
