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

use super::{Closed, Input, Location, StrInput, Utf16Input};

fn drain<I: Input>(mut input: I) -> Vec<char> {
    let mut chars = vec![];
    while let Some(c) = input.peek() {
        chars.push(c);
        input.step();
    }
    chars
}

#[test]
fn str_input_locations() {
    let mut input = StrInput::new("a\nbc");
    assert_eq!(input.location(), Location::default());
    input.step();
    input.step();
    assert_eq!(
        input.location(),
        Location {
            offset: 2,
            line: 2,
            column: 1
        }
    );
    input.step();
    assert_eq!(input.location().column, 2);
    assert_eq!(input.remaining(), "c");
    input.step();
    assert!(input.is_empty());
    assert!(!input.is_done());
}

#[test]
fn str_input_multibyte() {
    let mut input = StrInput::new("é😀x");
    assert_eq!(input.head(), 'é');
    input.step();
    assert_eq!(input.head(), '😀');
    input.step();
    assert_eq!(input.location().offset, 2);
    assert_eq!(input.remaining(), "x");
}

#[test]
fn utf16_surrogate_pair() {
    let units: Vec<u16> = "a😀b".encode_utf16().collect();
    assert_eq!(units.len(), 4);
    let input = Utf16Input::new(&units);
    assert_eq!(drain(input), vec!['a', '😀', 'b']);
}

#[test]
fn utf16_unpaired_surrogates() {
    let units = [0xd800, 0x61, 0xdc00, 0xd83d];
    let input = Utf16Input::new(&units);
    assert_eq!(drain(input), vec!['\u{fffd}', 'a', '\u{fffd}', '\u{fffd}']);
}

#[test]
fn utf16_locations() {
    let units: Vec<u16> = "😀\nx".encode_utf16().collect();
    let mut input = Utf16Input::new(&units);
    input.step();
    assert_eq!(input.location().offset, 1);
    input.step();
    assert_eq!(input.location().line, 2);
    assert_eq!(input.head(), 'x');
}

#[test]
fn closed_input() {
    let location = Location {
        offset: 3,
        line: 1,
        column: 4,
    };
    let input = Closed::at(location);
    assert!(input.is_empty());
    assert!(input.is_done());
    assert_eq!(input.peek(), None);
    assert_eq!(input.location(), location);
}

#[test]
fn display_location() {
    let location = Location {
        offset: 10,
        line: 2,
        column: 5,
    };
    assert_eq!(location.to_string(), "2:5");
}
