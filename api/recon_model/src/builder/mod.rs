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

use crate::{Blob, Field, Item, Record, Value};
use bytes::{BufMut, BytesMut};
use thiserror::Error;


/// Incremental assembly of the items of a record.
pub trait Builder {
    /// The result of the builder.
    type State;

    fn append_value(&mut self, value: Value);

    fn append_field(&mut self, field: Field);

    fn append_item(&mut self, item: Item) {
        match item {
            Item::ValueItem(value) => self.append_value(value),
            Item::Field(field) => self.append_field(field),
        }
    }

    /// Consume the builder, producing its result.
    fn state(self) -> Self::State;
}

/// Builds a ['Record'], regardless of how many items are appended.
///
/// #Examples
///
/// ```
/// use recon_model::{Builder, Field, Item, Record, RecordBuilder, Value};
///
/// let rec = RecordBuilder::new()
///     .tag("point")
///     .slot("x", 1)
///     .slot("y", 2)
///     .state();
///
/// assert_eq!(rec, Record::from_items(vec![
///     Item::of(Field::of_attr("point")),
///     Item::slot("x", 1),
///     Item::slot("y", 2),
/// ]));
/// ```
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        RecordBuilder::default()
    }

    pub fn attr<K: Into<Value>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.record.push(Item::attr(key, value));
        self
    }

    /// Append an attribute with no value.
    pub fn tag<K: Into<Value>>(mut self, key: K) -> Self {
        self.record.push(Item::Field(Field::of_attr(key)));
        self
    }

    pub fn slot<K: Into<Value>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.record.push(Item::slot(key, value));
        self
    }

    pub fn item<I: Into<Item>>(mut self, item: I) -> Self {
        self.record.push(item.into());
        self
    }

    /// Append all of the items of another record.
    pub fn append_record(mut self, other: Record) -> Self {
        self.record.reserve(other.len());
        for item in other {
            self.record.push(item);
        }
        self
    }
}

impl Builder for RecordBuilder {
    type State = Record;

    fn append_value(&mut self, value: Value) {
        self.record.push(Item::ValueItem(value));
    }

    fn append_field(&mut self, field: Field) {
        self.record.push(Item::Field(field));
    }

    fn state(self) -> Record {
        self.record
    }
}

/// Builds a ['Value'] from a sequence of items. A single value, with nothing else appended, is
/// produced as is. Anything else (including a single field) produces a record. If nothing is
/// appended at all, the result is ['Value::Absent'].
///
/// #Examples
///
/// ```
/// use recon_model::{Builder, Field, Value, ValueBuilder};
///
/// let mut single = ValueBuilder::default();
/// single.append_value(Value::from(1));
/// assert_eq!(single.state(), Value::from(1));
///
/// let mut field = ValueBuilder::default();
/// field.append_field(Field::of_slot("blank"));
/// assert!(field.state().is_record());
///
/// assert_eq!(ValueBuilder::default().state(), Value::Absent);
/// ```
#[derive(Debug, Default)]
pub struct ValueBuilder {
    record: Option<Record>,
    value: Option<Value>,
}

impl ValueBuilder {
    pub fn new() -> Self {
        ValueBuilder::default()
    }

    fn promote(&mut self) -> &mut Record {
        let ValueBuilder { record, value } = self;
        record.get_or_insert_with(|| {
            let mut rec = Record::empty();
            if let Some(v) = value.take() {
                rec.push(Item::ValueItem(v));
            }
            rec
        })
    }
}

impl Builder for ValueBuilder {
    type State = Value;

    fn append_value(&mut self, value: Value) {
        if self.record.is_none() && self.value.is_none() {
            self.value = Some(value);
        } else {
            self.promote().push(Item::ValueItem(value));
        }
    }

    fn append_field(&mut self, field: Field) {
        self.promote().push(Item::Field(field));
    }

    fn state(self) -> Value {
        match self {
            ValueBuilder {
                record: Some(rec), ..
            } => Value::Record(rec),
            ValueBuilder {
                value: Some(value),
                ..
            } => value,
            _ => Value::Absent,
        }
    }
}

const RESERVE_INIT: usize = 256;
const PADDING: char = '=';

/// Errors that can occur when decoding base64 digits into a ['BlobBuilder'].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    #[error("{0:?} is not a base64 digit.")]
    InvalidDigit(char),
    #[error("Padding is only permitted at the end of a base64 quantum.")]
    UnexpectedPadding,
}

/// Decodes a stream of base64 digits directly into a byte buffer, one quantum at a time. The
/// buffer capacity grows in powers of two, starting from 256 bytes.
///
/// #Examples
///
/// ```
/// use recon_model::BlobBuilder;
///
/// let mut builder = BlobBuilder::new();
/// for c in "AAA=".chars() {
///     builder.append_base64_digit(c).unwrap();
/// }
/// assert_eq!(builder.state().as_slice(), &[0, 0]);
/// ```
#[derive(Debug, Default)]
pub struct BlobBuilder {
    data: BytesMut,
    quantum: [char; 4],
    pending: usize,
}

/// Decode a single base64 digit. Both the standard and URL safe alphabets are accepted.
pub fn decode_base64_digit(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a' + 26),
        '0'..='9' => Some(c as u8 - b'0' + 52),
        '+' | '-' => Some(62),
        '/' | '_' => Some(63),
        _ => None,
    }
}

pub fn is_base64_digit(c: char) -> bool {
    decode_base64_digit(c).is_some()
}

impl BlobBuilder {
    pub fn new() -> Self {
        BlobBuilder::default()
    }

    fn prepare(&mut self, size: usize) {
        if size > self.data.capacity() {
            let target = RESERVE_INIT.max(size).next_power_of_two();
            self.data.reserve(target - self.data.len());
        }
    }

    pub fn append_byte(&mut self, byte: u8) {
        self.prepare(self.data.len() + 1);
        self.data.put_u8(byte);
    }

    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.prepare(self.data.len() + bytes.len());
        self.data.put_slice(bytes);
    }

    /// Append a base64 digit (or padding character). A complete quantum of four is decoded
    /// immediately; an incomplete quantum is held until more digits arrive.
    pub fn append_base64_digit(&mut self, c: char) -> Result<(), Base64Error> {
        if c == PADDING {
            if self.pending < 2 {
                return Err(Base64Error::UnexpectedPadding);
            }
        } else if !is_base64_digit(c) {
            return Err(Base64Error::InvalidDigit(c));
        } else if self.pending == 3 && self.quantum[2] == PADDING {
            return Err(Base64Error::UnexpectedPadding);
        }
        self.quantum[self.pending] = c;
        self.pending += 1;
        if self.pending == 4 {
            self.decode_quantum(4);
            self.pending = 0;
        }
        Ok(())
    }

    fn decode_quantum(&mut self, len: usize) {
        let digit = |i: usize| {
            if i < len {
                decode_base64_digit(self.quantum[i])
            } else {
                None
            }
        };
        if let (Some(x), Some(y)) = (digit(0), digit(1)) {
            let third = digit(2);
            let fourth = third.and(digit(3));
            let mut out = [0u8; 3];
            out[0] = (x << 2) | (y >> 4);
            let mut n = 1;
            if let Some(z) = third {
                out[1] = (y << 4) | (z >> 2);
                n = 2;
                if let Some(w) = fourth {
                    out[2] = (z << 6) | w;
                    n = 3;
                }
            }
            self.append_bytes(&out[..n]);
        }
    }

    /// Consume the builder. A trailing incomplete quantum of at least two digits is decoded as
    /// if it had been padded.
    pub fn state(mut self) -> Blob {
        if self.pending >= 2 {
            self.decode_quantum(self.pending);
        }
        Blob::from_vec(self.data.to_vec())
    }
}
