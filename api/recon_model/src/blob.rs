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

use base64::display::Base64Display;
use base64::engine::general_purpose::STANDARD;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

/// An owned sequence of bytes, the payload of a ['Value::Data'](crate::Value::Data).
///
/// The display representation is the standard base64 encoding (with padding) of the content.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Blob {
    data: Vec<u8>,
}

impl Blob {
    /// An empty blob.
    pub fn empty() -> Blob {
        Blob::default()
    }

    /// #Examples
    ///
    /// ```
    /// use recon_model::Blob;
    ///
    /// let blob = Blob::from_vec(vec![0xde, 0xad]);
    /// assert_eq!(blob.len(), 2);
    /// assert_eq!(blob.to_string(), "3q0=");
    /// ```
    pub fn from_vec(data: Vec<u8>) -> Blob {
        Blob { data }
    }

    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Deref for Blob {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Blob::from_vec(data)
    }
}

impl From<&[u8]> for Blob {
    fn from(data: &[u8]) -> Self {
        Blob::from_vec(data.to_vec())
    }
}

impl Display for Blob {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Base64Display::new(self.as_slice(), &STANDARD))
    }
}

impl Debug for Blob {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Blob(%{})", self)
    }
}
