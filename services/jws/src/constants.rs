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

/// The only signature algorithm: ECDSA over P-521 with SHA-512.
pub const ALGORITHM: &str = "ES512";
/// Protocol version written to and required from the protected header.
pub const SIGNATURE_VERSION: &str = "2";
/// Separator between covered header names in `tl_headers`.
pub const HEADER_NAME_SEPARATOR: char = ',';
/// Method used by the signer when none is set.
pub const DEFAULT_SIGNING_METHOD: &str = "POST";

/// Environment variables for signer and verifier configuration.
pub const REQSEAL_KID: &str = "REQSEAL_KID";
pub const REQSEAL_PRIVATE_KEY: &str = "REQSEAL_PRIVATE_KEY";
pub const REQSEAL_PRIVATE_KEY_PATH: &str = "REQSEAL_PRIVATE_KEY_PATH";
pub const REQSEAL_PUBLIC_KEY: &str = "REQSEAL_PUBLIC_KEY";
pub const REQSEAL_REQUIRED_HEADERS: &str = "REQSEAL_REQUIRED_HEADERS";
