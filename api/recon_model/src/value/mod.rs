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

use crate::{Blob, Field, Item, Record};
use std::hash::{Hash, Hasher};

#[cfg(test)]
mod tests;

/// The generic representation of a Recon value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// A defined value carrying no data (a key present without any associated value).
    Extant,

    /// The absence of any value. This is the result of parsing empty input.
    #[default]
    Absent,

    /// A textual value.
    Text(String),

    /// A numeric value. All Recon numbers, integral or not, are represented as 64bit floats.
    NumberValue(f64),

    /// A boolean value.
    BooleanValue(bool),

    /// A binary blob.
    Data(Blob),

    /// An ordered sequence of values and fields.
    Record(Record),
}

/// Discriminant of a ['Value'].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Extant,
    Absent,
    Text,
    Number,
    Boolean,
    Data,
    Record,
}

impl Value {
    /// Create a text value from anything that can be converted to a ['String'].
    pub fn text<T: Into<String>>(text: T) -> Value {
        Value::Text(text.into())
    }

    /// An empty record.
    ///
    /// #Examples
    ///
    /// ```
    /// use recon_model::{Record, Value};
    ///
    /// assert_eq!(Value::empty_record(), Value::Record(Record::empty()));
    /// assert_ne!(Value::empty_record(), Value::Absent);
    /// ```
    pub fn empty_record() -> Value {
        Value::Record(Record::empty())
    }

    /// Create a record consisting only of value items.
    pub fn from_vec<I: Into<Item>>(items: Vec<I>) -> Value {
        Value::Record(items.into_iter().map(Into::into).collect())
    }

    /// Create a record containing a single attribute with no value.
    ///
    /// #Examples
    ///
    /// ```
    /// use recon_model::{Field, Item, Value};
    ///
    /// let tag = Value::of_attr("tag");
    /// let rec = tag.as_record().unwrap();
    /// assert_eq!(rec.get_item(0), Some(&Item::Field(Field::of_attr("tag"))));
    /// ```
    pub fn of_attr<K: Into<Value>>(key: K) -> Value {
        Value::Record(Record::of_fields(vec![Field::of_attr(key)]))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Extant => ValueKind::Extant,
            Value::Absent => ValueKind::Absent,
            Value::Text(_) => ValueKind::Text,
            Value::NumberValue(_) => ValueKind::Number,
            Value::BooleanValue(_) => ValueKind::Boolean,
            Value::Data(_) => ValueKind::Data,
            Value::Record(_) => ValueKind::Record,
        }
    }

    pub fn is_extant(&self) -> bool {
        matches!(self, Value::Extant)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Everything other than ['Value::Absent'] is defined.
    pub fn is_defined(&self) -> bool {
        !self.is_absent()
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::NumberValue(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::BooleanValue(_))
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Value::Data(_))
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::NumberValue(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::BooleanValue(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&Blob> {
        match self {
            Value::Data(blob) => Some(blob),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(rec) => Some(rec),
            _ => None,
        }
    }

    /// Interpret a number as an index. Only non-negative integral numbers qualify.
    pub(crate) fn as_index(&self) -> Option<usize> {
        match self {
            Value::NumberValue(n) if *n >= 0.0 && n.fract() == 0.0 && *n <= usize::MAX as f64 => {
                Some(*n as usize)
            }
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Extant, Value::Extant) => true,
            (Value::Absent, Value::Absent) => true,
            (Value::Text(s), Value::Text(t)) => s == t,
            (Value::NumberValue(x), Value::NumberValue(y)) => {
                if x.is_nan() {
                    y.is_nan()
                } else {
                    x == y
                }
            }
            (Value::BooleanValue(p), Value::BooleanValue(q)) => p == q,
            (Value::Data(b1), Value::Data(b2)) => b1 == b2,
            (Value::Record(r1), Value::Record(r2)) => r1 == r2,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Extant => {
                state.write_u8(0);
            }
            Value::Absent => {
                state.write_u8(1);
            }
            Value::Text(s) => {
                state.write_u8(2);
                s.hash(state);
            }
            Value::NumberValue(x) => {
                state.write_u8(3);
                if x.is_nan() {
                    state.write_u64(0);
                } else if *x == 0.0 {
                    // Positive and negative zero are equal so must hash identically.
                    state.write_u64(0.0f64.to_bits());
                } else {
                    state.write_u64(x.to_bits());
                }
            }
            Value::BooleanValue(p) => {
                state.write_u8(4);
                state.write_u8(u8::from(*p));
            }
            Value::Data(blob) => {
                state.write_u8(5);
                blob.hash(state);
            }
            Value::Record(rec) => {
                state.write_u8(6);
                rec.hash(state);
            }
        }
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::NumberValue(n as f64)
                }
            }
        )*
    };
}

number_from!(i32, u32, i64, u64, f32, f64);

impl From<bool> for Value {
    fn from(p: bool) -> Self {
        Value::BooleanValue(p)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(data: Vec<u8>) -> Self {
        Value::Data(Blob::from_vec(data))
    }
}

impl From<Blob> for Value {
    fn from(blob: Blob) -> Self {
        Value::Data(blob)
    }
}

impl From<Record> for Value {
    fn from(rec: Record) -> Self {
        Value::Record(rec)
    }
}
