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

/// Creates a value from the provided items.
///
/// For example:
/// ```
/// use recon_model::Value;
/// use recon_model::value;
///
/// let value = value!(1);
/// assert_eq!(value, Value::NumberValue(1.0));
/// ```
///
/// ## Extant value:
/// ```
/// use recon_model::{Value, value};
///
/// let value = value!();
/// assert_eq!(value, Value::Extant);
/// ```
///
/// For multiple values the `record!` macro is used internally and uses the same syntax, see the
/// documentation for the syntax.
#[macro_export]
macro_rules! value {
    () => {
        $crate::Value::Extant
    };
    ($x:expr) => {
        $crate::Value::from($x)
    };
    ($($items:expr),+ $(,)?) => (
        $crate::record!($($items),*)
    );
    (items => [$($items:expr),+ $(,)?]) => (
        $crate::record!(items => [$($items),*])
    );
    (attrs => [$($attrs:expr),+ $(,)?]) => (
        $crate::record!(attrs => [$($attrs),*])
    );
    (attrs => [$($attrs:expr),+ $(,)?], items => [$($items:expr),+ $(,)?]) => (
        $crate::record!(attrs => [$($attrs),*], items => [$($items),*])
    );
}

/// Creates a record value from the provided items. Items are anything that can be converted into
/// an ['crate::Item'] (pairs become slots). Attributes are anything implementing
/// ['crate::IntoAttr'] (a name alone or a pair of name and value).
///
/// ## An empty record:
/// ```
/// use recon_model::{Value, record};
///
/// let value = record!();
/// assert_eq!(value, Value::empty_record());
/// ```
/// ## From multiple items:
///
/// ```
/// use recon_model::{Value, record};
///
/// let value = record!(1, 2, 3);
/// assert_eq!(value, Value::from_vec(vec![1, 2, 3]));
/// ```
///
/// ## From attributes and items
/// ```
/// use recon_model::{Field, Item, Record, Value, record};
///
/// let value = record! {
///     attrs => [("first", 1), "second"],
///     items => [("x", 1), 2]
/// };
/// assert_eq!(value, Value::Record(Record::from_items(vec![
///     Item::attr("first", 1),
///     Item::Field(Field::of_attr("second")),
///     Item::slot("x", 1),
///     Item::of(2),
/// ])));
/// ```
///
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::empty_record()
    };
    ($($items:expr),+ $(,)?) => (
        $crate::Value::Record($crate::Record::from_items(vec![$($crate::Item::from($items)),+]))
    );
    (items => [$($items:expr),+ $(,)?]) => (
        $crate::Value::Record($crate::Record::from_items(vec![$($crate::Item::from($items)),+]))
    );
    (attrs => [$($attrs:expr),+ $(,)?]) => (
        $crate::Value::Record($crate::Record::of_fields(vec![$($crate::IntoAttr::into_attr($attrs)),+]))
    );
    (attrs => [$($attrs:expr),+ $(,)?], items => [$($items:expr),+ $(,)?]) => (
        $crate::Value::Record($crate::Record::from_items(vec![
            $($crate::Item::Field($crate::IntoAttr::into_attr($attrs)),)+
            $($crate::Item::from($items)),+
        ]))
    );
}
