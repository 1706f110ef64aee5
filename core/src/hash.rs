// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Encoding related utils.

use crate::Error;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;

/// Base64url encode without padding, as used by JWS compact serialization.
pub fn base64url_encode(content: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(content)
}

/// Base64url decode without padding.
///
/// Padded input and the standard alphabet are rejected so that a segment has
/// exactly one accepted spelling.
pub fn base64url_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_URL_SAFE_NO_PAD
        .decode(content)
        .map_err(|e| Error::malformed_signature("base64url decode failed").with_source(e))
}
