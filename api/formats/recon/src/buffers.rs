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

use bytes::{Buf, BufMut, BytesMut};
use recon_model::Value;
use std::fmt::Write;

use crate::print_recon;

const RESERVE_INIT: usize = 256;
const RESERVE_MULT: usize = 2;

/// Append the Recon representation of a value to a buffer, returning the number of bytes that
/// were written.
///
/// #Examples
///
/// ```
/// use bytes::BytesMut;
/// use recon::model::Value;
/// use recon::write_recon;
///
/// let mut buffer = BytesMut::new();
/// let len = write_recon(&mut buffer, &Value::from_vec(vec![1, 2, 3]));
/// assert_eq!(len, 5);
/// assert_eq!(buffer.as_ref(), b"1,2,3");
/// ```
pub fn write_recon(dst: &mut BytesMut, value: &Value) -> usize {
    let mut next_res = RESERVE_INIT.max(dst.remaining_mut().saturating_mul(RESERVE_MULT));
    let offset = dst.remaining();
    while write!(dst, "{}", print_recon(value)).is_err() {
        dst.truncate(offset);
        dst.reserve(next_res);
        next_res = next_res.saturating_mul(RESERVE_MULT);
    }
    dst.remaining() - offset
}
