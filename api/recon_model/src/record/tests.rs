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

use crate::{Builder, Field, Item, Lookup, Record, RecordBuilder, Value};

fn text(s: &str) -> Item {
    Item::of(s)
}

fn tag(name: &str) -> Item {
    Item::Field(Field::of_attr(name))
}

fn nested() -> Item {
    Item::of(Value::Record(Record::from_items(vec![tag("em"), text("world")])))
}

#[test]
fn duplicate_keys() {
    let rec = Record::from_items(vec![Item::slot("a", 1), Item::slot("b", 2), Item::slot("a", 3)]);
    assert_eq!(rec.len(), 3);
    assert_eq!(rec.get("a"), Some(&Value::from(3)));
    assert_eq!(rec.get("b"), Some(&Value::from(2)));
    assert_eq!(rec.get_item(0), Some(&Item::slot("a", 1)));
}

#[test]
fn attrs_and_slots_share_the_index() {
    let rec = Record::from_items(vec![Item::attr("a", 1), Item::slot("a", 2)]);
    assert_eq!(rec.get("a"), Some(&Value::from(2)));
    assert_eq!(rec.get_field(&Value::text("a")), Some(&Field::slot("a", 2)));
}

#[test]
fn lookup_prefers_keys() {
    let rec = Record::from_items(vec![text("zero"), Item::slot(0, "key")]);
    assert_eq!(
        rec.lookup(&Value::from(0)),
        Some(Lookup::Value(&Value::text("key")))
    );
    assert_eq!(rec.lookup(&Value::from(1)), Some(Lookup::Item(&Item::slot(0, "key"))));
    assert_eq!(rec.lookup(&Value::from(0.5)), None);
    assert_eq!(rec.lookup(&Value::from(-1)), None);
    assert_eq!(rec.lookup(&Value::text("missing")), None);
}

#[test]
fn array_like() {
    assert!(Record::empty().is_array());
    assert!(Record::from_items(vec![Item::of(1), Item::of("a")]).is_array());
    assert!(!Record::from_items(vec![Item::of(1), Item::slot("a", 2)]).is_array());
    assert!(!Record::from_items(vec![tag("a")]).is_array());
}

#[test]
fn equality_ignores_index_construction() {
    let built = RecordBuilder::new().slot("a", 1).item(2).state();
    let direct: Record = vec![Item::slot("a", 1), Item::of(2)].into_iter().collect();
    assert_eq!(built, direct);
    assert_ne!(
        built,
        Record::from_items(vec![Item::of(2), Item::slot("a", 1)])
    );
}

#[test]
fn attr_split() {
    let rec = Record::from_items(vec![tag("a"), tag("b"), Item::of(6), tag("x"), tag("y")]);
    let (prefix, body, postfix) = rec.split_attrs();
    assert_eq!(prefix, &[tag("a"), tag("b")]);
    assert_eq!(body, &[Item::of(6)]);
    assert_eq!(postfix, &[tag("x"), tag("y")]);
    assert!(rec.has_attrs());
    assert_eq!(rec.attrs().count(), 4);
}

#[test]
fn attr_split_only_attrs() {
    let rec = Record::from_items(vec![tag("a"), tag("b")]);
    let (prefix, body, postfix) = rec.split_attrs();
    assert_eq!(prefix.len(), 2);
    assert!(body.is_empty());
    assert!(postfix.is_empty());
}

#[test]
fn attr_split_interior_attrs() {
    let rec = Record::from_items(vec![Item::of(1), tag("a"), Item::of(2)]);
    let (prefix, body, postfix) = rec.split_attrs();
    assert!(prefix.is_empty());
    assert_eq!(body.len(), 3);
    assert!(postfix.is_empty());
    assert!(!rec.has_attrs());
}

#[test]
fn markup_detection() {
    let markup = Record::from_items(vec![text("Hello, "), nested(), text("!")]);
    assert!(markup.is_markup());

    let leading = Record::from_items(vec![nested(), text("Hello")]);
    assert!(!leading.is_markup());

    let attributed = Record::from_items(vec![tag("em"), text("world")]);
    assert!(!attributed.is_markup());

    let only_text = Record::from_items(vec![text("a"), text("b")]);
    assert!(!only_text.is_markup());

    let circumfix = Record::from_items(vec![tag("a"), text("x "), nested(), text(" y"), tag("b")]);
    assert!(circumfix.is_markup());
}

#[test]
fn markup_blank_sections() {
    let blank_between = Record::from_items(vec![text("a"), nested(), text(" \t"), nested(), text("b")]);
    assert!(!blank_between.is_markup());

    let adjacent = Record::from_items(vec![text("a"), nested(), nested(), text("b")]);
    assert!(!adjacent.is_markup());

    let trailing = Record::from_items(vec![text("a"), nested()]);
    assert!(!trailing.is_markup());

    let interleaved = Record::from_items(vec![text("a"), nested(), text("b"), nested(), text("c")]);
    assert!(interleaved.is_markup());
}
