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

//! Reading and writing the Recon notation.
//!
//! Recon is a structured data notation that combines the object model of JSON with the
//! attributes of XML. A document is parsed into a ['Value'] with [`parse`] and written back as text
//! with [`stringify`].
//!
//! #Examples
//!
//! ```
//! use recon::model::Value;
//!
//! let value = recon::parse("@event(id: 4) { x: 1.5, y: -2 }").unwrap();
//! let rec = value.as_record().unwrap();
//! assert_eq!(rec.get("x"), Some(&Value::from(1.5)));
//! assert_eq!(recon::stringify(&value), "@event(id:4){x:1.5,y:-2}");
//! ```

pub use recon_model as model;

mod buffers;
#[cfg(feature = "json")]
pub mod coercion;
pub mod input;
pub mod parser;
pub mod writer;


pub use buffers::write_recon;
pub use parser::{ParseError, ReconReader};
pub use writer::{print_recon, stringify, ReconWriter};

use input::{StrInput, Utf16Input};
use parser::{run, DocumentParser};
use recon_model::Value;
use tracing::{debug, trace};

/// Parse a complete Recon document. An empty document is ['Value::Absent'].
pub fn parse(source: &str) -> Result<Value, ParseError> {
    trace!(len = source.len(), "Parsing Recon document.");
    run(DocumentParser::new(), &mut StrInput::new(source)).map_err(|err| {
        debug!(error = %err, "Failed to parse Recon document.");
        err
    })
}

/// Parse a complete Recon document from UTF-16 code units. Unpaired surrogates are read as U+FFFD.
pub fn parse_utf16(source: &[u16]) -> Result<Value, ParseError> {
    trace!(len = source.len(), "Parsing UTF-16 Recon document.");
    run(DocumentParser::new(), &mut Utf16Input::new(source)).map_err(|err| {
        debug!(error = %err, "Failed to parse UTF-16 Recon document.");
        err
    })
}

/// Structural equality of two values.
pub fn compare(left: &Value, right: &Value) -> bool {
    left == right
}
