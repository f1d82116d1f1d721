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

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use proptest::collection::vec;
use proptest::prelude::*;
use recon::model::{Blob, Field, Item, Record, Value};
use recon::{parse, parse_utf16, stringify, ReconReader};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_-]{0,8}",
        "[ -~]{0,12}",
        any::<String>(),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("-1".to_string()),
    ]
}

fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<i32>().prop_map(f64::from),
        any::<f64>().prop_filter("Finite numbers only.", |n| n.is_finite()),
    ]
}

/// Values that are not text.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_number().prop_map(Value::NumberValue),
        any::<bool>().prop_map(Value::BooleanValue),
        vec(any::<u8>(), 0..20).prop_map(|bytes| Value::Data(Blob::from_vec(bytes))),
    ]
}

/// Values with the forms that can be produced by parsing a document. Text never appears as a bare
/// item in a record as a sequence of text items would be read back as markup.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![arb_text().prop_map(Value::Text), arb_scalar()];
    leaf.prop_recursive(3, 48, 5, |inner| {
        let slot_value = prop_oneof![1 => Just(Value::Extant), 4 => inner.clone()];
        let item = prop_oneof![
            (arb_text(), slot_value).prop_map(|(key, value)| Item::slot(key, value)),
            inner
                .clone()
                .prop_filter("Bare text items.", |value| !value.is_text())
                .prop_map(Item::ValueItem),
        ];
        let attr_value = prop_oneof![1 => Just(Value::Extant), 3 => inner];
        let attr = ("[a-z]{1,6}", attr_value).prop_map(|(key, value)| Field::attr(key, value));
        (vec(attr, 0..3), vec(item, 0..5)).prop_map(|(attrs, items)| {
            let rec: Record = attrs.into_iter().map(Item::Field).chain(items).collect();
            Value::Record(rec)
        })
    })
}

const EMBEDDED_ITEMS: &[&str] = &[
    "1",
    "\"b\"",
    "\"\"",
    "k:2",
    "{1,2}",
    "@x",
    "@a 1@b",
    "true",
    "%AA==",
    "[t]",
    "[t@e[u]v]",
];

const INLINE_BODIES: &[&str] = &["", "()", "(1)", "{}", "{1}", "{2,3}", "[t]", " [t]", "(k:1)[t]"];

const ESCAPES: &[&str] = &[r"\@", r"\{", r"\}", r"\[", r"\]", r"\\"];

const ATTR_PARAMS: &[&str] = &["", "()", "(1)", "(k:1,2)", "([t])"];

const ATTRIBUTED_BODIES: &[&str] = &["", "1", "x", "\"s\"", "{1,2}", "{}", "%AA==", "true", "{k:1,@z}"];

/// Pieces of markup source: runs of text, escapes, embedded records, attributed inline values
/// and nested markup.
fn arb_markup_part() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z ,.!:]{1,6}",
        prop::sample::select(ESCAPES).prop_map(str::to_string),
        vec(prop::sample::select(EMBEDDED_ITEMS), 0..3)
            .prop_map(|items| format!("{{{}}}", items.join(","))),
        ("[a-z]{1,4}", prop::sample::select(INLINE_BODIES))
            .prop_map(|(tag, body)| format!("@{}{}", tag, body)),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..6).prop_map(|parts| format!("[{}]", parts.concat())),
            ("[a-z]{1,4}", vec(inner, 0..4))
                .prop_map(|(tag, parts)| format!("@{}[{}]", tag, parts.concat())),
        ]
    })
}

fn arb_markup() -> impl Strategy<Value = String> {
    vec(arb_markup_part(), 0..8).prop_map(|parts| format!("[{}]", parts.concat()))
}

/// Documents with attributes before, after and around their bodies.
fn arb_attributed() -> impl Strategy<Value = String> {
    let attr = ("[a-z]{1,4}", prop::sample::select(ATTR_PARAMS))
        .prop_map(|(name, params)| format!("@{}{}", name, params));
    let body = prop_oneof![
        prop::sample::select(ATTRIBUTED_BODIES).prop_map(str::to_string),
        arb_markup(),
    ];
    (vec(attr.clone(), 0..3), body, vec(attr, 0..3)).prop_map(|(prefix, body, postfix)| {
        format!("{} {} {}", prefix.concat(), body, postfix.concat())
    })
}

proptest! {
    #[test]
    fn write_then_parse(value in arb_value()) {
        init_tracing();
        let written = stringify(&value);
        prop_assert_eq!(parse(&written), Ok(value), "Written as {:?}", written);
    }

    #[test]
    fn markup_survives_writing(source in arb_markup()) {
        let value = parse(&source);
        prop_assert!(value.is_ok(), "Failed to parse {:?}", source);
        let value = value.unwrap();
        let written = stringify(&value);
        prop_assert_eq!(parse(&written), Ok(value), "{:?} was written as {:?}", source, written);
    }

    #[test]
    fn attributes_survive_writing(source in arb_attributed()) {
        let value = parse(&source);
        prop_assert!(value.is_ok(), "Failed to parse {:?}", source);
        let value = value.unwrap();
        let written = stringify(&value);
        prop_assert_eq!(parse(&written), Ok(value), "{:?} was written as {:?}", source, written);
    }

    #[test]
    fn parse_utf16_documents(value in arb_value()) {
        let units: Vec<u16> = stringify(&value).encode_utf16().collect();
        prop_assert_eq!(parse_utf16(&units), Ok(value));
    }

    #[test]
    fn parse_in_fragments(value in arb_value(), cuts in vec(any::<prop::sample::Index>(), 0..4)) {
        let written = stringify(&value);
        let boundaries: Vec<usize> = written.char_indices().map(|(i, _)| i).collect();
        let mut splits: Vec<usize> = cuts
            .iter()
            .filter(|_| !boundaries.is_empty())
            .map(|cut| boundaries[cut.index(boundaries.len())])
            .collect();
        splits.sort_unstable();
        splits.dedup();

        let mut reader = ReconReader::new();
        let mut start = 0;
        for split in splits {
            reader.feed_str(&written[start..split]).unwrap();
            start = split;
        }
        reader.feed_str(&written[start..]).unwrap();
        prop_assert_eq!(reader.finish(), Ok(value));
    }

    #[test]
    fn base64_data(bytes in vec(any::<u8>(), 0..64)) {
        let source = format!("%{}", STANDARD.encode(&bytes));
        let expected = Value::Data(Blob::from_vec(bytes));
        prop_assert_eq!(parse(&source), Ok(expected.clone()));
        prop_assert_eq!(stringify(&expected), source);
    }

    #[test]
    fn numbers(n in arb_number()) {
        let written = stringify(&Value::NumberValue(n));
        prop_assert_eq!(parse(&written), Ok(Value::NumberValue(n)));
    }
}
