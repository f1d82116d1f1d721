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

use crate::Value;

/// A keyed entry in the body of a ['crate::Record'].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// An attribute, written `@key(value)`, carrying metadata about the record it occurs in.
    Attr(Value, Value),

    /// A slot, written `key:value`, carrying data.
    Slot(Value, Value),
}

impl Field {
    /// #Examples
    ///
    /// ```
    /// use recon_model::{Field, Value};
    ///
    /// let attr = Field::attr("answer", 42);
    /// assert!(attr.is_attr());
    /// assert_eq!(attr.key(), &Value::text("answer"));
    /// assert_eq!(attr.value(), &Value::NumberValue(42.0));
    /// ```
    pub fn attr<K: Into<Value>, V: Into<Value>>(key: K, value: V) -> Field {
        Field::Attr(key.into(), value.into())
    }

    pub fn slot<K: Into<Value>, V: Into<Value>>(key: K, value: V) -> Field {
        Field::Slot(key.into(), value.into())
    }

    /// An attribute with no value, equivalent to the Recon `@key`.
    pub fn of_attr<K: Into<Value>>(key: K) -> Field {
        Field::Attr(key.into(), Value::Extant)
    }

    /// A slot with no value, equivalent to the Recon `key:`.
    pub fn of_slot<K: Into<Value>>(key: K) -> Field {
        Field::Slot(key.into(), Value::Extant)
    }

    pub fn key(&self) -> &Value {
        match self {
            Field::Attr(key, _) | Field::Slot(key, _) => key,
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            Field::Attr(_, value) | Field::Slot(_, value) => value,
        }
    }

    pub fn into_parts(self) -> (Value, Value) {
        match self {
            Field::Attr(key, value) | Field::Slot(key, value) => (key, value),
        }
    }

    pub fn is_attr(&self) -> bool {
        matches!(self, Field::Attr(..))
    }

    pub fn is_slot(&self) -> bool {
        matches!(self, Field::Slot(..))
    }
}

/// An item that may occur in the body of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// An item consisting of a single ['Value'].
    ValueItem(Value),

    /// An attribute or slot.
    Field(Field),
}

impl Item {
    /// Create an ['Item'] from anything that can be converted to one.
    ///
    /// #Examples
    ///
    /// ```
    /// use recon_model::{Field, Item, Value};
    ///
    /// assert_eq!(Item::of("name"), Item::ValueItem(Value::text("name")));
    /// assert_eq!(Item::of(("key", 1)), Item::Field(Field::slot("key", 1)));
    /// assert_eq!(Item::of(Field::of_attr("tag")), Item::Field(Field::of_attr("tag")));
    /// ```
    pub fn of<I: Into<Item>>(item: I) -> Item {
        item.into()
    }

    /// Create a slot ['Item'] from a pair of things that can be converted to ['Value']s.
    pub fn slot<K: Into<Value>, V: Into<Value>>(key: K, value: V) -> Item {
        Item::Field(Field::slot(key, value))
    }

    /// Create an attribute ['Item'] from a pair of things that can be converted to ['Value']s.
    pub fn attr<K: Into<Value>, V: Into<Value>>(key: K, value: V) -> Item {
        Item::Field(Field::attr(key, value))
    }

    pub fn is_attr(&self) -> bool {
        matches!(self, Item::Field(Field::Attr(..)))
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Item::Field(_))
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Item::Field(field) => Some(field),
            Item::ValueItem(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Item::ValueItem(value) => Some(value),
            Item::Field(_) => None,
        }
    }

    /// Text items are the only items that are not considered structural in markup.
    pub fn is_text(&self) -> bool {
        matches!(self, Item::ValueItem(Value::Text(_)))
    }
}

impl<V: Into<Value>> From<V> for Item {
    fn from(v: V) -> Self {
        Item::ValueItem(v.into())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<(K, V)> for Item {
    fn from(pair: (K, V)) -> Self {
        let (key, value) = pair;
        Item::slot(key, value)
    }
}

impl From<Field> for Item {
    fn from(field: Field) -> Self {
        Item::Field(field)
    }
}

/// Conversion into an attribute ['Field'], used by the `record!` macro.
pub trait IntoAttr {
    fn into_attr(self) -> Field;
}

impl IntoAttr for Field {
    fn into_attr(self) -> Field {
        match self {
            Field::Slot(key, value) => Field::Attr(key, value),
            attr => attr,
        }
    }
}

impl IntoAttr for &str {
    fn into_attr(self) -> Field {
        Field::of_attr(self)
    }
}

impl IntoAttr for String {
    fn into_attr(self) -> Field {
        Field::of_attr(self)
    }
}

impl<K: Into<Value>, V: Into<Value>> IntoAttr for (K, V) {
    fn into_attr(self) -> Field {
        let (key, value) = self;
        Field::attr(key, value)
    }
}
