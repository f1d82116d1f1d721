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

//! Conversions between Recon values and JSON.
//!
//! JSON objects map to records of slots. The attributes of a record are held in an object under
//! the `"@"` member.


use base64::display::Base64Display;
use base64::engine::general_purpose::STANDARD;
use recon_model::{Builder, Field, Item, Record, RecordBuilder, Value};
use serde_json::{Map, Number, Value as Json};

use crate::stringify;

const ATTRS_KEY: &str = "@";

/// Convert JSON into a Recon value.
///
/// #Examples
///
/// ```
/// use recon::coercion::coerce;
/// use serde_json::json;
///
/// let value = coerce(&json!({"@": {"point": null}, "x": 1, "y": 2}));
/// assert_eq!(recon::stringify(&value), "@point{x:1,y:2}");
/// ```
pub fn coerce(json: &Json) -> Value {
    match json {
        Json::Null => Value::Extant,
        Json::Bool(p) => Value::BooleanValue(*p),
        Json::Number(n) => n.as_f64().map_or(Value::Absent, Value::NumberValue),
        Json::String(s) => Value::text(s.as_str()),
        Json::Array(elements) => {
            Value::Record(elements.iter().map(|e| Item::of(coerce(e))).collect())
        }
        Json::Object(members) => Value::Record(coerce_object(members)),
    }
}

fn coerce_object(members: &Map<String, Json>) -> Record {
    let mut builder = RecordBuilder::new();
    if let Some(Json::Object(attrs)) = members.get(ATTRS_KEY) {
        for (key, value) in attrs {
            builder.append_field(Field::attr(key.as_str(), coerce(value)));
        }
    }
    for (key, value) in members {
        match value {
            Json::Object(_) if key == ATTRS_KEY => {}
            _ => builder.append_field(Field::slot(key.as_str(), coerce(value))),
        }
    }
    builder.state()
}

/// Convert a Recon value into JSON. Records with no fields become arrays and any other record
/// becomes an object.
///
/// #Examples
///
/// ```
/// use recon::coercion::objectify;
/// use serde_json::json;
///
/// let value = recon::parse("@point { x: 1, y: 2 }").unwrap();
/// assert_eq!(objectify(&value), json!({"@": {"point": null}, "x": 1, "y": 2}));
/// ```
pub fn objectify(value: &Value) -> Json {
    match value {
        Value::Extant | Value::Absent => Json::Null,
        Value::Text(text) => Json::String(text.clone()),
        Value::NumberValue(n) => objectify_number(*n),
        Value::BooleanValue(p) => Json::Bool(*p),
        Value::Data(blob) => {
            Json::String(Base64Display::new(blob.as_slice(), &STANDARD).to_string())
        }
        Value::Record(rec) if rec.is_array() => {
            Json::Array(rec.iter().filter_map(Item::as_value).map(objectify).collect())
        }
        Value::Record(rec) => Json::Object(objectify_record(rec)),
    }
}

fn objectify_number(n: f64) -> Json {
    if n.fract() == 0.0 && n.abs() < 9007199254740992.0 {
        Json::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map_or(Json::Null, Json::Number)
    }
}

fn objectify_record(rec: &Record) -> Map<String, Json> {
    let mut attrs = Map::new();
    let mut members = Map::new();
    for (i, item) in rec.iter().enumerate() {
        match item {
            Item::Field(Field::Attr(key, value)) => {
                attrs.insert(member_name(key), objectify(value));
            }
            Item::Field(Field::Slot(key, value)) => {
                members.insert(member_name(key), objectify(value));
            }
            Item::ValueItem(value) => {
                members.insert(i.to_string(), objectify(value));
            }
        }
    }
    if attrs.is_empty() {
        members
    } else {
        let mut object = Map::new();
        object.insert(ATTRS_KEY.to_string(), Json::Object(attrs));
        object.extend(members);
        object
    }
}

fn member_name(key: &Value) -> String {
    match key {
        Value::Text(name) => name.clone(),
        _ => stringify(key),
    }
}
