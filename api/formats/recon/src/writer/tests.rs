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

use super::{print_recon, stringify};
use crate::parse;
use recon_model::{Blob, Builder, Record, RecordBuilder, Value};

fn record(builder: RecordBuilder) -> Value {
    Value::Record(builder.state())
}

#[test]
fn write_integers() {
    assert_eq!(stringify(&Value::from(0)), "0");
    assert_eq!(stringify(&Value::from(42)), "42");
    assert_eq!(stringify(&Value::from(-15)), "-15");
    assert_eq!(stringify(&Value::from(100)), "100");
    assert_eq!(stringify(&Value::from(-0.0)), "-0");
}

#[test]
fn write_decimals() {
    assert_eq!(stringify(&Value::from(0.5)), "0.5");
    assert_eq!(stringify(&Value::from(-1.5)), "-1.5");
    assert_eq!(stringify(&Value::from(123456.789)), "123456.789");
    assert_eq!(stringify(&Value::from(0.1 + 0.2)), "0.30000000000000004");
    assert_eq!(stringify(&Value::from(1.5e-6)), "0.0000015");
}

#[test]
fn write_exponents() {
    assert_eq!(stringify(&Value::from(6.02e23)), "6.02e+23");
    assert_eq!(stringify(&Value::from(1e21)), "1e+21");
    assert_eq!(stringify(&Value::from(1e20)), "100000000000000000000");
    assert_eq!(stringify(&Value::from(1e-7)), "1e-7");
    assert_eq!(stringify(&Value::from(-2.5e-10)), "-2.5e-10");
}

#[test]
fn write_non_finite() {
    assert_eq!(stringify(&Value::from(f64::NAN)), "NaN");
    assert_eq!(stringify(&Value::from(f64::INFINITY)), "Infinity");
    assert_eq!(stringify(&Value::from(f64::NEG_INFINITY)), "\"-Infinity\"");
}

#[test]
fn write_text() {
    assert_eq!(stringify(&Value::text("hello")), "hello");
    assert_eq!(stringify(&Value::text("hello world")), "\"hello world\"");
    assert_eq!(stringify(&Value::text("")), "\"\"");
    assert_eq!(stringify(&Value::text("true")), "\"true\"");
    assert_eq!(stringify(&Value::text("1st")), "\"1st\"");
    assert_eq!(
        stringify(&Value::text("a\"b\\c\n\t")),
        r#""a\"b\\c\n\t""#
    );
}

#[test]
fn write_simple_values() {
    assert_eq!(stringify(&Value::from(true)), "true");
    assert_eq!(stringify(&Value::from(false)), "false");
    assert_eq!(stringify(&Value::Extant), "");
    assert_eq!(stringify(&Value::Absent), "");
}

#[test]
fn write_data() {
    assert_eq!(stringify(&Value::Data(Blob::empty())), "%");
    assert_eq!(stringify(&Value::from(vec![0u8])), "%AA==");
    assert_eq!(stringify(&Value::from(vec![0u8, 0])), "%AAA=");
    assert_eq!(stringify(&Value::from(vec![0u8, 0, 0])), "%AAAA");
}

#[test]
fn write_blocks() {
    assert_eq!(stringify(&Value::empty_record()), "{}");
    assert_eq!(stringify(&Value::from_vec(vec![1])), "{1}");
    assert_eq!(stringify(&Value::from_vec(vec![1, 2, 3])), "1,2,3");
    assert_eq!(
        stringify(&record(RecordBuilder::new().slot("a", 1))),
        "a:1"
    );
    assert_eq!(
        stringify(&record(
            RecordBuilder::new()
                .slot("a", 1)
                .slot("b", Value::Extant)
                .slot("c d", "e f")
        )),
        "a:1,b:,\"c d\":\"e f\""
    );
    assert_eq!(
        stringify(&record(
            RecordBuilder::new()
                .item(Value::from_vec(vec![1, 2]))
                .item(3)
        )),
        "{1,2},3"
    );
}

#[test]
fn write_attributes() {
    assert_eq!(stringify(&Value::of_attr("test")), "@test");
    assert_eq!(
        stringify(&record(RecordBuilder::new().attr("hello", "world"))),
        "@hello(world)"
    );
    assert_eq!(
        stringify(&record(RecordBuilder::new().attr("a", Value::Absent))),
        "@a()"
    );
    assert_eq!(
        stringify(&record(RecordBuilder::new().attr("a", Value::empty_record()))),
        "@a({})"
    );
    assert_eq!(
        stringify(&record(
            RecordBuilder::new().attr("a", Value::from_vec(vec![1, 2]))
        )),
        "@a(1,2)"
    );
    assert_eq!(
        stringify(&record(RecordBuilder::new().tag("two words"))),
        "@\"two words\""
    );
}

#[test]
fn attribute_placement() {
    let circumfix = record(
        RecordBuilder::new()
            .tag("a")
            .tag("b")
            .item(6)
            .tag("x")
            .tag("y"),
    );
    assert_eq!(stringify(&circumfix), "@a@b 6@x@y");
    assert_eq!(
        stringify(&record(RecordBuilder::new().item(6).tag("x"))),
        "6@x"
    );
    assert_eq!(
        stringify(&record(RecordBuilder::new().tag("a").item("two words"))),
        "@a \"two words\""
    );
    assert_eq!(
        stringify(&record(
            RecordBuilder::new()
                .tag("a")
                .item(Value::from_vec(vec![1, 2]))
        )),
        "@a{{1,2}}"
    );
    assert_eq!(
        stringify(&record(RecordBuilder::new().tag("a").item(1).item(2))),
        "@a{1,2}"
    );
    assert_eq!(
        stringify(&record(RecordBuilder::new().tag("hello").slot("name", "world"))),
        "@hello{name:world}"
    );
}

#[test]
fn write_attribute_parameters() {
    let value = parse("@hello(name: \"world\", data: %AA==, number: 42, false)").unwrap();
    assert_eq!(
        stringify(&value),
        "@hello(name:world,data:%AA==,number:42,false)"
    );
}

#[test]
fn write_markup() {
    let value = record(
        RecordBuilder::new()
            .item("Hello, ")
            .item(record(RecordBuilder::new().tag("em").item("world")))
            .item("!"),
    );
    assert_eq!(stringify(&value), "[Hello, @em[world]!]");

    let value = record(RecordBuilder::new().item("A: ").item(42).item("."));
    assert_eq!(stringify(&value), "[A: {42}.]");

    let value = record(
        RecordBuilder::new()
            .item("a")
            .item(Value::from_vec(vec![1, 2]))
            .item("b"),
    );
    assert_eq!(stringify(&value), "[a{{1,2}}b]");

    let value = record(RecordBuilder::new().item("x").slot("k", 1).item("y"));
    assert_eq!(stringify(&value), "[x{k:1}y]");
}

#[test]
fn write_markup_escapes() {
    let value = record(
        RecordBuilder::new()
            .item("a@b")
            .item(Value::of_attr("c"))
            .item("d]"),
    );
    assert_eq!(stringify(&value), r"[a\@b@c{}d\]]");
}

#[test]
fn write_markup_separators() {
    let answer = |next: &str| {
        record(
            RecordBuilder::new()
                .item("A: ")
                .item(Value::of_attr("answer"))
                .item(next),
        )
    };
    assert_eq!(stringify(&answer(".")), "[A: @answer.]");
    assert_eq!(stringify(&answer(" is")), "[A: @answer{} is]");
    assert_eq!(stringify(&answer("(x)")), "[A: @answer{}(x)]");
    assert_eq!(stringify(&answer("x")), "[A: @answer{}x]");

    let empty = record(
        RecordBuilder::new()
            .item("x")
            .item(Value::of_attr("a"))
            .item("")
            .item("y"),
    );
    assert_eq!(stringify(&empty), r#"[x@a{}{""}{y}]"#);
    assert_eq!(parse(r#"[x@a{}{""}y]"#), Ok(empty));

    let postfix = record(
        RecordBuilder::new()
            .item("A: ")
            .item(record(RecordBuilder::new().tag("a").item(1).tag("b")))
            .item("c"),
    );
    assert_eq!(stringify(&postfix), "[A: {@a 1@b}c]");
}

#[test]
fn write_adjacent_markup_text() {
    let value = record(
        RecordBuilder::new()
            .item("a")
            .item("b")
            .item(1)
            .item("c"),
    );
    assert_eq!(stringify(&value), "[a{b}{1}c]");

    let value = record(
        RecordBuilder::new()
            .item("@")
            .item("t")
            .item(record(RecordBuilder::new().item("u").item(3).item("v")))
            .item("x y"),
    );
    assert_eq!(stringify(&value), r"[\@{t}[u{3}v]x y]");

    for source in [r#"[a{"b"}{1}c]"#, "[a[b]{1}c]", r"[\@[t][u{3}v]x y]"] {
        let value = parse(source).unwrap();
        assert_eq!(parse(&stringify(&value)), Ok(value));
    }
}

#[test]
fn write_adjacent_inline_records() {
    let value = record(
        RecordBuilder::new()
            .item(record(RecordBuilder::new().tag("em").item("a")))
            .item(record(RecordBuilder::new().tag("strong").item("b"))),
    );
    let written = stringify(&value);
    assert_eq!(parse(&written), Ok(value));

    for source in ["[@em[a]@strong[b]]", r"[a@d[e]@d[e]\@]"] {
        let value = parse(source).unwrap();
        assert_eq!(parse(&stringify(&value)), Ok(value));
    }
}

#[test]
fn write_markup_in_record() {
    let markup = record(
        RecordBuilder::new()
            .item("a")
            .item(Value::of_attr("b"))
            .item("c"),
    );
    let value = record(RecordBuilder::new().slot("k", markup));
    assert_eq!(print_recon(&value).to_string(), "k:[a@b{}c]");
}

#[test]
fn plain_text_records_are_not_markup() {
    let value = Value::from_vec(vec!["Hello", "world"]);
    assert_eq!(stringify(&value), "Hello,world");
}

#[test]
fn round_trip_documents() {
    let sources = [
        "",
        "{}",
        "[]",
        "%AA==",
        "-0",
        "6.02e23",
        "  1, 2,3 ,4  ",
        "{ 1\n 2\n3 \n4 }",
        "{1}",
        "{{}}",
        "record: {}\nmarkup: []\n\"\"\n%AA==\ninteger: 0\ndecimal: 0.0\ntrue\nfalse",
        "@test",
        "@test()",
        "@hello([world])",
        "@hello(\"world\", 42) @test(name: \"parse\", pending: false)",
        "@hello { {}, [] }",
        "@hello(name: \"world\") { number: 42, true }",
        "@hello %",
        "@hello \"test\"",
        "@a@b 6@x@y",
        "{1,2}@x",
        "@a {x: 1} @b",
        "{a:, b: 1}",
        "[Hello, [good] world!]",
        "[Hello{}world]",
        "[A: {answer:0.0}.]",
        "[A: @answer.]",
        "[A: @answer{} is]",
        "[A: @answer(number: 42, \"secret\") {true}.]",
        "[Hello, @em(class:\"subject\",style:\"italic\")[world]!]",
        "[{{1,2,3}}.]",
        r#"[\"\\\/\@\{\}\[\]\b\f\n\r\t]"#,
        "k: [a @b{} c] @d",
        "{\"two words\": @x(1)}",
    ];
    for source in sources {
        let value = parse(source).unwrap();
        let written = stringify(&value);
        assert_eq!(parse(&written), Ok(value), "{:?} was written as {:?}", source, written);
    }
}

#[test]
fn empty_record_is_not_absent() {
    assert_eq!(stringify(&Value::Record(Record::empty())), "{}");
    assert_eq!(parse("{}"), Ok(Value::Record(Record::empty())));
}
