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

use crate::{Field, Item, Value};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

#[cfg(test)]
mod tests;

/// An ordered sequence of ['Item']s with an index from the keys of its fields to their values.
///
/// The order of the items is significant. If more than one field has the same key, the field
/// that occurs last is the one that is visible through the index, however all of the items remain
/// present in the sequence.
#[derive(Clone, Default)]
pub struct Record {
    items: Vec<Item>,
    index: HashMap<Value, usize>,
}

/// The result of a combined keyed or positional lookup on a ['Record'].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The value of the field with the requested key.
    Value(&'a Value),
    /// The item at the requested position.
    Item(&'a Item),
}

impl Record {
    pub fn empty() -> Record {
        Record::default()
    }

    /// #Examples
    ///
    /// ```
    /// use recon_model::{Field, Item, Record, Value};
    ///
    /// let rec = Record::from_items(vec![
    ///     Item::of(Field::of_attr("point")),
    ///     Item::slot("x", 1),
    ///     Item::slot("y", 2),
    /// ]);
    /// assert_eq!(rec.len(), 3);
    /// assert_eq!(rec.get("y"), Some(&Value::NumberValue(2.0)));
    /// assert_eq!(rec.get("point"), Some(&Value::Extant));
    /// assert_eq!(rec.get("z"), None);
    /// ```
    pub fn from_items(items: Vec<Item>) -> Record {
        let mut rec = Record {
            items: Vec::with_capacity(items.len()),
            index: HashMap::new(),
        };
        for item in items {
            rec.push(item);
        }
        rec
    }

    pub fn of_fields(fields: Vec<Field>) -> Record {
        fields.into_iter().map(Item::Field).collect()
    }

    pub(crate) fn push(&mut self, item: Item) {
        if let Item::Field(field) = &item {
            self.index.insert(field.key().clone(), self.items.len());
        }
        self.items.push(item);
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        self.items.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Get the item at a position in the record.
    pub fn get_item(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    /// Get the value of the last field in the record with the given key.
    pub fn get<K: Into<Value>>(&self, key: K) -> Option<&Value> {
        self.get_field(&key.into()).map(Field::value)
    }

    /// Get the last field in the record with the given key.
    pub fn get_field(&self, key: &Value) -> Option<&Field> {
        self.index
            .get(key)
            .and_then(|i| self.items.get(*i))
            .and_then(Item::as_field)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.index.contains_key(key)
    }

    /// Look up a key in the index, falling back to treating a non-negative integral number as
    /// a position in the record if no field has that key.
    ///
    /// #Examples
    ///
    /// ```
    /// use recon_model::{Item, Lookup, Record, Value};
    ///
    /// let rec = Record::from_items(vec![Item::of("a"), Item::slot(1, "one"), Item::of("c")]);
    /// assert_eq!(rec.lookup(&Value::from(1)), Some(Lookup::Value(&Value::text("one"))));
    /// assert_eq!(rec.lookup(&Value::from(2)), Some(Lookup::Item(&Item::of("c"))));
    /// assert_eq!(rec.lookup(&Value::from(3)), None);
    /// ```
    pub fn lookup(&self, key: &Value) -> Option<Lookup<'_>> {
        if let Some(field) = self.get_field(key) {
            Some(Lookup::Value(field.value()))
        } else {
            key.as_index()
                .and_then(|i| self.get_item(i))
                .map(Lookup::Item)
        }
    }

    /// A record is array-like if it contains no fields.
    pub fn is_array(&self) -> bool {
        self.index.is_empty()
    }

    /// Determine whether the record has the shape of markup: at least one structural (non-text)
    /// item and at least two sections of non-blank text separated by structural items. Blank
    /// text between two structural items does not start a new section.
    pub fn is_markup(&self) -> bool {
        let mut after_non_text = false;
        let mut has_non_text = false;
        let mut sections = 0usize;
        for item in &self.items {
            match item {
                Item::ValueItem(Value::Text(text)) => {
                    if after_non_text && !is_blank(text) {
                        after_non_text = false;
                        sections += 1;
                    } else if sections == 0 {
                        sections = 1;
                    }
                }
                _ => {
                    if after_non_text {
                        return false;
                    }
                    after_non_text = true;
                    has_non_text = true;
                }
            }
        }
        has_non_text && sections >= 2
    }

    fn prefix_len(&self) -> usize {
        self.items.iter().take_while(|item| item.is_attr()).count()
    }

    fn postfix_len(&self, prefix_len: usize) -> usize {
        self.items[prefix_len..]
            .iter()
            .rev()
            .take_while(|item| item.is_attr())
            .count()
    }

    /// Split the items into leading attributes, body and trailing attributes. If every item is
    /// an attribute, they are all treated as leading.
    ///
    /// #Examples
    ///
    /// ```
    /// use recon_model::{Field, Item, Record};
    ///
    /// let rec = Record::from_items(vec![
    ///     Item::of(Field::of_attr("a")),
    ///     Item::of(6),
    ///     Item::of(Field::of_attr("x")),
    ///     Item::of(Field::of_attr("y")),
    /// ]);
    /// let (prefix, body, postfix) = rec.split_attrs();
    /// assert_eq!((prefix.len(), body.len(), postfix.len()), (1, 1, 2));
    /// ```
    pub fn split_attrs(&self) -> (&[Item], &[Item], &[Item]) {
        let prefix = self.prefix_len();
        let postfix = self.postfix_len(prefix);
        let (head, rest) = self.items.split_at(prefix);
        let (body, tail) = rest.split_at(rest.len() - postfix);
        (head, body, tail)
    }

    pub fn prefix_attrs(&self) -> &[Item] {
        self.split_attrs().0
    }

    pub fn postfix_attrs(&self) -> &[Item] {
        self.split_attrs().2
    }

    pub fn has_attrs(&self) -> bool {
        let (prefix, _, postfix) = self.split_attrs();
        !prefix.is_empty() || !postfix.is_empty()
    }

    /// The attributes of the record (those at the start and end of the item sequence).
    pub fn attrs(&self) -> impl Iterator<Item = &Field> + '_ {
        let (prefix, _, postfix) = self.split_attrs();
        prefix.iter().chain(postfix.iter()).filter_map(Item::as_field)
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c == ' ' || c == '\t')
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state)
    }
}

impl Debug for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Record").field(&self.items).finish()
    }
}

impl FromIterator<Item> for Record {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut rec = Record::empty();
        for item in iter {
            rec.push(item);
        }
        rec
    }
}

impl IntoIterator for Record {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
