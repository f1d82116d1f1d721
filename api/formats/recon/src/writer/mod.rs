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

//! Writes ['Value']s as Recon text.
//!
//! Records are written in one of three contexts. At the top level of a document (and within the
//! parameters of an attribute) a record is written as a block, with its items separated by commas
//! and no enclosing braces. Nested records are written in braces. Records that have the shape of
//! markup are written in square brackets, with their text content inline.

#[cfg(test)]
mod tests;

use recon_model::identifier::{is_identifier, is_identifier_char};
use recon_model::{Blob, Field, Item, Record, Value};
use std::fmt::{Display, Formatter, Write};
use tracing::warn;

/// Print the Recon representation of a ['Value'].
///
/// #Examples
///
/// ```
/// use recon::print_recon;
/// use recon::model::{Builder, RecordBuilder, Value};
///
/// let rec = RecordBuilder::new()
///     .attr("hello", "world")
///     .slot("number", 42)
///     .state();
/// let value = Value::Record(rec);
/// assert_eq!(print_recon(&value).to_string(), "@hello(world){number:42}");
/// ```
pub fn print_recon(value: &Value) -> impl Display + '_ {
    ReconPrint(value)
}

/// Write a ['Value'] as a Recon document.
pub fn stringify(value: &Value) -> String {
    print_recon(value).to_string()
}

struct ReconPrint<'a>(&'a Value);

impl<'a> Display for ReconPrint<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ReconPrint(value) = self;
        ReconWriter::new(f).write_block(value)
    }
}

/// How the text written for an attributed record ends. This determines whether the text that
/// follows it in markup could be mistaken for a continuation of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    /// The record ends with its leading attributes (it has no body).
    PrefixAttr,
    Body,
}

/// Writes Recon text to a [`std::fmt::Write`] sink.
pub struct ReconWriter<'a, W> {
    dst: &'a mut W,
}

impl<'a, W: Write> ReconWriter<'a, W> {
    pub fn new(dst: &'a mut W) -> Self {
        ReconWriter { dst }
    }

    /// Write a value at the top level of a document.
    pub fn write_block(&mut self, value: &Value) -> std::fmt::Result {
        match value {
            Value::Record(rec) if rec.is_markup() => self.write_markup(rec),
            Value::Record(rec) if rec.has_attrs() => self.write_attributed(rec, false).map(|_| ()),
            Value::Record(rec) => match rec.items() {
                [] => self.dst.write_str("{}"),
                [item @ Item::ValueItem(_)] => {
                    self.dst.write_char('{')?;
                    self.write_item(item)?;
                    self.dst.write_char('}')
                }
                items => self.write_items(items),
            },
            _ => self.write_value(value),
        }
    }

    /// Write a value in the position of an item in a record.
    pub fn write_value(&mut self, value: &Value) -> std::fmt::Result {
        match value {
            Value::Extant | Value::Absent => Ok(()),
            Value::Text(text) => self.write_text(text),
            Value::NumberValue(n) => self.write_number(*n),
            Value::BooleanValue(p) => write!(self.dst, "{}", p),
            Value::Data(blob) => self.write_data(blob),
            Value::Record(rec) => self.write_record(rec),
        }
    }

    fn write_record(&mut self, rec: &Record) -> std::fmt::Result {
        if rec.is_markup() {
            self.write_markup(rec)
        } else if rec.has_attrs() {
            self.write_attributed(rec, false).map(|_| ())
        } else {
            self.write_braced(rec.items())
        }
    }

    fn write_braced(&mut self, items: &[Item]) -> std::fmt::Result {
        self.dst.write_char('{')?;
        self.write_items(items)?;
        self.dst.write_char('}')
    }

    fn write_items(&mut self, items: &[Item]) -> std::fmt::Result {
        let mut first = true;
        for item in items {
            if !first {
                self.dst.write_char(',')?;
            }
            first = false;
            self.write_item(item)?;
        }
        Ok(())
    }

    fn write_item(&mut self, item: &Item) -> std::fmt::Result {
        match item {
            Item::ValueItem(value) => self.write_value(value),
            Item::Field(Field::Attr(key, value)) => self.write_attr(key, value),
            Item::Field(Field::Slot(key, value)) => {
                self.write_value(key)?;
                self.dst.write_char(':')?;
                if value.is_defined() {
                    self.write_value(value)?;
                }
                Ok(())
            }
        }
    }

    fn write_attrs(&mut self, attrs: &[Item]) -> std::fmt::Result {
        for item in attrs {
            if let Item::Field(Field::Attr(key, value)) = item {
                self.write_attr(key, value)?;
            }
        }
        Ok(())
    }

    fn write_attr(&mut self, key: &Value, value: &Value) -> std::fmt::Result {
        self.dst.write_char('@')?;
        match key {
            Value::Text(name) if is_identifier(name) => self.dst.write_str(name)?,
            Value::Text(name) => self.write_string(name)?,
            _ => self.write_string(&stringify(key))?,
        }
        match value {
            Value::Extant => Ok(()),
            Value::Absent => self.dst.write_str("()"),
            _ => {
                self.dst.write_char('(')?;
                self.write_block(value)?;
                self.dst.write_char(')')
            }
        }
    }

    /// Write a record that has attributes at its start or end, with its body between them.
    fn write_attributed(
        &mut self,
        rec: &Record,
        in_markup: bool,
    ) -> Result<Ending, std::fmt::Error> {
        let (prefix, body, postfix) = rec.split_attrs();
        self.write_attrs(prefix)?;
        match body {
            [] => {}
            [Item::ValueItem(value)] if !prefix.is_empty() => match value {
                Value::Text(text) if in_markup && !text.is_empty() => {
                    self.write_markup_text(text)?
                }
                Value::Text(_) | Value::NumberValue(_) | Value::BooleanValue(_) | Value::Data(_)
                    if !in_markup =>
                {
                    self.dst.write_char(' ')?;
                    self.write_value(value)?;
                }
                _ => {
                    self.dst.write_char('{')?;
                    self.write_value(value)?;
                    self.dst.write_char('}')?;
                }
            },
            [Item::ValueItem(value)] => self.write_value(value)?,
            items => self.write_braced(items)?,
        }
        self.write_attrs(postfix)?;
        Ok(if body.is_empty() && postfix.is_empty() {
            Ending::PrefixAttr
        } else {
            Ending::Body
        })
    }

    fn write_markup(&mut self, rec: &Record) -> std::fmt::Result {
        let (prefix, body, postfix) = rec.split_attrs();
        self.write_attrs(prefix)?;
        self.dst.write_char('[')?;
        let mut after_text = false;
        for (i, item) in body.iter().enumerate() {
            let is_text = matches!(item, Item::ValueItem(Value::Text(_)));
            match item {
                Item::ValueItem(Value::Text(text)) if !text.is_empty() && !after_text => {
                    self.write_markup_body(text)?
                }
                Item::ValueItem(Value::Record(inner)) if is_inline(inner) => {
                    let ending = self.write_inline(inner)?;
                    self.separate(ending, body.get(i + 1))?;
                }
                _ => {
                    self.dst.write_char('{')?;
                    self.write_item(item)?;
                    self.dst.write_char('}')?;
                }
            }
            after_text = is_text;
        }
        self.dst.write_char(']')?;
        self.write_attrs(postfix)
    }

    fn write_inline(&mut self, rec: &Record) -> Result<Ending, std::fmt::Error> {
        if rec.is_markup() {
            self.write_markup(rec)?;
            Ok(Ending::Body)
        } else {
            self.write_attributed(rec, true)
        }
    }

    /// Ensure that the text that follows an inline record in markup is not read as part of it.
    /// In markup, the item after a non-text item is always text.
    fn separate(&mut self, ending: Ending, next: Option<&Item>) -> std::fmt::Result {
        if ending == Ending::Body {
            return Ok(());
        }
        match next {
            Some(Item::ValueItem(Value::Text(text)))
                if text.is_empty()
                    || text.starts_with(|c: char| {
                        c == ' ' || c == '\t' || c == '(' || is_identifier_char(c)
                    }) =>
            {
                self.dst.write_str("{}")
            }
            _ => Ok(()),
        }
    }

    /// Write text, unquoted if it is an identifier.
    pub fn write_text(&mut self, text: &str) -> std::fmt::Result {
        if is_identifier(text) {
            self.dst.write_str(text)
        } else {
            self.write_string(text)
        }
    }

    /// Write text as a quoted string literal.
    pub fn write_string(&mut self, text: &str) -> std::fmt::Result {
        self.dst.write_char('"')?;
        for c in text.chars() {
            match c {
                '"' | '\\' => {
                    self.dst.write_char('\\')?;
                    self.dst.write_char(c)?;
                }
                '\u{8}' => self.dst.write_str("\\b")?,
                '\u{c}' => self.dst.write_str("\\f")?,
                '\n' => self.dst.write_str("\\n")?,
                '\r' => self.dst.write_str("\\r")?,
                '\t' => self.dst.write_str("\\t")?,
                _ => self.dst.write_char(c)?,
            }
        }
        self.dst.write_char('"')
    }

    /// Write text as a complete markup literal.
    pub fn write_markup_text(&mut self, text: &str) -> std::fmt::Result {
        self.dst.write_char('[')?;
        self.write_markup_body(text)?;
        self.dst.write_char(']')
    }

    fn write_markup_body(&mut self, text: &str) -> std::fmt::Result {
        for c in text.chars() {
            if matches!(c, '@' | '[' | '\\' | ']' | '{' | '}') {
                self.dst.write_char('\\')?;
            }
            self.dst.write_char(c)?;
        }
        Ok(())
    }

    /// Write a number with the shortest representation that reads back as the same value.
    ///
    /// Numbers that have no Recon literal are written as identifiers or strings (and so will be
    /// read back as text).
    pub fn write_number(&mut self, n: f64) -> std::fmt::Result {
        if n.is_nan() {
            warn!("Writing NaN as text.");
            self.dst.write_str("NaN")
        } else if n.is_infinite() {
            warn!(value = n, "Writing an infinite number as text.");
            if n > 0.0 {
                self.dst.write_str("Infinity")
            } else {
                self.dst.write_str("\"-Infinity\"")
            }
        } else if n == 0.0 {
            if n.is_sign_negative() {
                self.dst.write_str("-0")
            } else {
                self.dst.write_char('0')
            }
        } else {
            if n < 0.0 {
                self.dst.write_char('-')?;
            }
            let mut buffer = ryu::Buffer::new();
            let (digits, point) = decimal_digits(buffer.format_finite(n.abs()));
            self.write_decimal(&digits, point)
        }
    }

    /// Lay out significant digits, where the decimal point falls after `point` of them, in the
    /// way that ECMAScript renders numbers.
    fn write_decimal(&mut self, digits: &str, point: i32) -> std::fmt::Result {
        let len = digits.len() as i32;
        if len <= point && point <= 21 {
            self.dst.write_str(digits)?;
            for _ in len..point {
                self.dst.write_char('0')?;
            }
            Ok(())
        } else if 0 < point && point <= 21 {
            let (int_part, frac_part) = digits.split_at(point as usize);
            write!(self.dst, "{}.{}", int_part, frac_part)
        } else if -6 < point && point <= 0 {
            self.dst.write_str("0.")?;
            for _ in point..0 {
                self.dst.write_char('0')?;
            }
            self.dst.write_str(digits)
        } else {
            let (first, rest) = digits.split_at(1);
            self.dst.write_str(first)?;
            if !rest.is_empty() {
                write!(self.dst, ".{}", rest)?;
            }
            let exponent = point - 1;
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(self.dst, "e{}{}", sign, exponent.abs())
        }
    }

    pub fn write_data(&mut self, blob: &Blob) -> std::fmt::Result {
        write!(self.dst, "%{}", blob)
    }
}

/// Whether a record in markup is written inline, rather than in braces. Inline values in markup
/// cannot carry trailing attributes.
fn is_inline(rec: &Record) -> bool {
    rec.postfix_attrs().is_empty() && (rec.is_markup() || !rec.prefix_attrs().is_empty())
}

/// Extract the significant digits of a positive decimal literal (as written by `ryu`) and the
/// position of the decimal point relative to them.
fn decimal_digits(literal: &str) -> (String, i32) {
    let (mantissa, exponent) = match literal.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (literal, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mut point = int_part.len() as i32 + exponent;
    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    for c in int_part.chars().chain(frac_part.chars()) {
        if c == '0' && digits.is_empty() {
            point -= 1;
        } else {
            digits.push(c);
        }
    }
    let significant = digits.trim_end_matches('0').len();
    digits.truncate(significant);
    (digits, point)
}
