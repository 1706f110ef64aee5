use crate::canonical::build_payload;
use crate::envelope::DetachedJws;
use crate::key::PublicKey;
use http::HeaderMap;
use log::warn;
use reqseal_core::{Error, Result};
use std::collections::HashMap;
use std::fmt::{self, Debug};

/// Builder checking a detached signature against a received request.
///
/// Header values are looked up by name ignoring ASCII case, so the sender is
/// free to reorder headers or change their case in transit. Headers that are
/// supplied but not listed in the signature are ignored.
///
/// ```
/// # fn main() -> reqseal_core::Result<()> {
/// # let private = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/ec512-private.pem"));
/// # let public = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/ec512-public.pem"));
/// # let signature = reqseal_jws::sign_with_pem("my-kid", private)
/// #     .path("/payouts")
/// #     .header("Idempotency-Key", "idemp-1")
/// #     .body("{}")
/// #     .sign()?;
/// reqseal_jws::verify_with_pem(public)
///     .method("post")
///     .path("/payouts")
///     .header("idempotency-key", "idemp-1")
///     .header("X-Not-Signed", "ignored")
///     .require_header("Idempotency-Key")
///     .body("{}")
///     .verify(&signature)?;
/// # Ok(())
/// # }
/// ```
pub struct Verifier {
    key: Result<PublicKey>,
    method: Option<String>,
    path: Option<String>,
    headers: HashMap<String, Vec<u8>>,
    required_headers: Vec<String>,
    body: Vec<u8>,
}

impl Verifier {
    pub(crate) fn new(key: Result<PublicKey>) -> Self {
        Self {
            key,
            method: None,
            path: None,
            headers: HashMap::new(),
            required_headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the method the request was received with.
    ///
    /// There is no default: a verifier without a method never accepts a
    /// signature.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set the path the request was received on.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Supply a received header value. A later value for the same name,
    /// in any case, replaces an earlier one.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<[u8]>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.as_ref().to_vec());
        self
    }

    /// Supply several received header values.
    pub fn headers<K, V>(self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<[u8]>,
    {
        headers
            .into_iter()
            .fold(self, |this, (name, value)| this.header(name, value))
    }

    /// Supply every header of an [`http::HeaderMap`].
    ///
    /// For names with several values the last one is used.
    pub fn header_map(self, headers: &HeaderMap) -> Self {
        headers
            .iter()
            .fold(self, |this, (name, value)| this.header(name, value.as_bytes()))
    }

    /// Require `name` to be covered by the signature.
    pub fn require_header(mut self, name: impl Into<String>) -> Self {
        self.required_headers.push(name.into());
        self
    }

    /// Require every one of `names` to be covered by the signature.
    pub fn require_headers<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.required_headers.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the received body. Defaults to empty.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Verify `signature` against the supplied request data.
    ///
    /// Every failure carries an [`ErrorKind`](reqseal_core::ErrorKind)
    /// naming the reason. The checks run in this order:
    ///
    /// 1. the signature is a detached ES512 version 2 envelope
    /// 2. every required header is covered
    /// 3. every covered header has a value
    /// 4. the signature matches the rebuilt payload
    pub fn verify(self, signature: &str) -> Result<()> {
        let result = self.verify_inner(signature);
        if let Err(err) = &result {
            warn!("request signature rejected: {err}");
        }
        result
    }

    fn verify_inner(self, signature: &str) -> Result<()> {
        let key = self.key?;

        let jws = DetachedJws::parse(signature)?;
        jws.header.ensure_supported()?;

        if let Some(name) = self
            .required_headers
            .iter()
            .find(|name| !jws.header.covers(name))
        {
            return Err(Error::required_header_not_covered(format!(
                "header `{name}` is required but not covered by the signature"
            )));
        }

        let mut headers = Vec::new();
        for name in jws.header.header_names() {
            let value = self
                .headers
                .get(&name.to_ascii_lowercase())
                .ok_or_else(|| {
                    Error::missing_header_value(format!(
                        "header `{name}` is covered by the signature but has no value"
                    ))
                })?;
            headers.push((name, value.as_slice()));
        }

        let payload = build_payload(
            self.method.as_deref().unwrap_or_default(),
            self.path.as_deref().unwrap_or_default(),
            &headers,
            &self.body,
        );

        jws.verify(&key, &payload)
    }
}

impl Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("required_headers", &self.required_headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}
