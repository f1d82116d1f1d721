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

//! The generic value model of the Recon notation.
//!
//! A ['Value'] is one of a small, closed set of kinds. The only compound kind is the
//! ['Record'], an ordered sequence of ['Item']s, each of which is either a bare value or a
//! ['Field'] (an attribute or a slot).

pub mod builder;
pub mod identifier;
#[macro_use]
pub mod macros;

mod blob;
mod item;
mod record;
mod value;

pub use blob::Blob;
pub use builder::{BlobBuilder, Builder, RecordBuilder, ValueBuilder};
pub use item::{Field, IntoAttr, Item};
pub use record::{Lookup, Record};
pub use value::{Value, ValueKind};

/// Create an attribute field. Omitting the value is achieved with ['Field::of_attr'].
pub fn attr<K: Into<Value>, V: Into<Value>>(key: K, value: V) -> Field {
    Field::attr(key, value)
}

/// Create a slot field. Omitting the value is achieved with ['Field::of_slot'].
pub fn slot<K: Into<Value>, V: Into<Value>>(key: K, value: V) -> Field {
    Field::slot(key, value)
}

/// An empty record.
pub fn empty() -> Record {
    Record::empty()
}
