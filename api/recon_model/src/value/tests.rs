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

use crate::{Blob, Record, Value, ValueKind};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn kinds() {
    assert_eq!(Value::Extant.kind(), ValueKind::Extant);
    assert_eq!(Value::Absent.kind(), ValueKind::Absent);
    assert_eq!(Value::text("a").kind(), ValueKind::Text);
    assert_eq!(Value::from(1.5).kind(), ValueKind::Number);
    assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
    assert_eq!(Value::from(vec![1u8]).kind(), ValueKind::Data);
    assert_eq!(Value::empty_record().kind(), ValueKind::Record);

    assert!(Value::Extant.is_defined());
    assert!(!Value::Absent.is_defined());
    assert_eq!(Value::default(), Value::Absent);
}

#[test]
fn numbers_are_floats() {
    assert_eq!(Value::from(3), Value::from(3.0));
    assert_eq!(Value::from(3u64), Value::NumberValue(3.0));
    assert_eq!(Value::from(-7i64).as_number(), Some(-7.0));
}

#[test]
fn nan_equality() {
    let nan = Value::NumberValue(f64::NAN);
    assert_eq!(nan, Value::NumberValue(f64::NAN));
    assert_eq!(hash_of(&nan), hash_of(&Value::NumberValue(f64::NAN)));
    assert_ne!(nan, Value::NumberValue(0.0));
}

#[test]
fn signed_zero() {
    let pos = Value::NumberValue(0.0);
    let neg = Value::NumberValue(-0.0);
    assert_eq!(pos, neg);
    assert_eq!(hash_of(&pos), hash_of(&neg));
}

#[test]
fn cross_kind_inequality() {
    assert_ne!(Value::Extant, Value::Absent);
    assert_ne!(Value::text("true"), Value::from(true));
    assert_ne!(Value::text("1"), Value::from(1));
    assert_ne!(Value::empty_record(), Value::Absent);
    assert_ne!(Value::Data(Blob::empty()), Value::text(""));
}

#[test]
fn data_equality() {
    assert_eq!(Value::from(vec![1u8, 2, 3]), Value::Data(Blob::from(&[1u8, 2, 3][..])));
    assert_ne!(Value::from(vec![1u8, 2, 3]), Value::from(vec![1u8, 2]));
}

#[test]
fn accessors() {
    let rec = Value::from_vec(vec![1, 2]);
    assert_eq!(rec.as_record().map(Record::len), Some(2));
    assert_eq!(Value::text("a").as_text(), Some("a"));
    assert_eq!(Value::from(false).as_bool(), Some(false));
    assert_eq!(Value::from(1).as_text(), None);
    assert_eq!(
        Value::from(vec![9u8]).as_data().map(Blob::as_slice),
        Some(&[9u8][..])
    );
}
