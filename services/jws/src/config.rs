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

use crate::constants::*;
use crate::key::{PrivateKey, PublicKey};
use crate::signer::Signer;
use crate::verifier::Verifier;
use log::debug;
use reqseal_core::utils::Redact;
use reqseal_core::Env;
use reqseal_core::{Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for building signers and verifiers.
#[derive(Clone, Default)]
pub struct Config {
    /// Key identifier written to every signature.
    pub kid: Option<String>,
    /// PEM encoded P-521 private key.
    pub private_key: Option<String>,
    /// Path to a PEM encoded P-521 private key, used when `private_key` is unset.
    pub private_key_path: Option<String>,
    /// PEM encoded P-521 public key.
    pub public_key: Option<String>,
    /// Headers every verified signature must cover.
    pub required_headers: Vec<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("kid", &self.kid)
            .field("private_key", &Redact::from(&self.private_key))
            .field("private_key_path", &self.private_key_path)
            .field("public_key", &Redact::from(&self.public_key))
            .field("required_headers", &self.required_headers)
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    ///
    /// `REQSEAL_REQUIRED_HEADERS` is a comma separated list of header names.
    pub fn from_env(env: &impl Env) -> Self {
        Self {
            kid: env.var(REQSEAL_KID),
            private_key: env.var(REQSEAL_PRIVATE_KEY),
            private_key_path: env.var(REQSEAL_PRIVATE_KEY_PATH),
            public_key: env.var(REQSEAL_PUBLIC_KEY),
            required_headers: env
                .var(REQSEAL_REQUIRED_HEADERS)
                .map(|v| {
                    v.split(HEADER_NAME_SEPARATOR)
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Set the key identifier.
    pub fn with_kid(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Set the PEM encoded private key.
    pub fn with_private_key(mut self, pem: impl Into<String>) -> Self {
        self.private_key = Some(pem.into());
        self
    }

    /// Set the path of the PEM encoded private key.
    pub fn with_private_key_path(mut self, path: impl Into<String>) -> Self {
        self.private_key_path = Some(path.into());
        self
    }

    /// Set the PEM encoded public key.
    pub fn with_public_key(mut self, pem: impl Into<String>) -> Self {
        self.public_key = Some(pem.into());
        self
    }

    /// Add a header every verified signature must cover.
    pub fn with_required_header(mut self, name: impl Into<String>) -> Self {
        self.required_headers.push(name.into());
        self
    }

    /// Build a signer from `kid` and the private key.
    ///
    /// The inline key wins over `private_key_path`.
    pub fn signer(&self) -> Result<Signer> {
        let kid = self
            .kid
            .as_deref()
            .ok_or_else(|| Error::config_invalid("kid is required to sign"))?;

        let pem = match (&self.private_key, &self.private_key_path) {
            (Some(pem), _) => pem.clone(),
            (None, Some(path)) => {
                debug!("loading private key from {path}");
                std::fs::read_to_string(path).map_err(|e| {
                    Error::config_invalid(format!("failed to read private key from {path}"))
                        .with_source(e)
                })?
            }
            (None, None) => {
                return Err(Error::config_invalid(
                    "private_key or private_key_path is required to sign",
                ))
            }
        };

        Ok(Signer::new(kid, Ok(PrivateKey::from_pem(&pem)?)))
    }

    /// Build a verifier from the public key and the required headers.
    pub fn verifier(&self) -> Result<Verifier> {
        let pem = self
            .public_key
            .as_deref()
            .ok_or_else(|| Error::config_invalid("public_key is required to verify"))?;

        Ok(Verifier::new(Ok(PublicKey::from_pem(pem)?))
            .require_headers(self.required_headers.iter().cloned()))
    }
}
