use crate::canonical::build_payload;
use crate::constants::DEFAULT_SIGNING_METHOD;
use crate::envelope::sign_detached;
use crate::header::JwsHeader;
use crate::key::PrivateKey;
use http::HeaderName;
use reqseal_core::{Error, Result};
use std::fmt::{self, Debug};

/// Builder producing a detached signature for one request.
///
/// Created by [`sign_with_key`](crate::sign_with_key) or
/// [`sign_with_pem`](crate::sign_with_pem) and consumed by [`Signer::sign`].
///
/// ```
/// # fn main() -> reqseal_core::Result<()> {
/// # let pem = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/ec512-private.pem"));
/// let signature = reqseal_jws::sign_with_pem("my-kid", pem)
///     .method("POST")
///     .path("/merchant_accounts/a61acaef-ee05-4077-92f3-25543a11bd8d/sweeping")
///     .header("Idempotency-Key", "idemp-2076717c-9005-4811-a321-9e0787fa0382")
///     .body(r#"{"currency":"GBP","max_amount_in_minor":5000000}"#)
///     .sign()?;
///
/// assert_eq!(reqseal_jws::extract_kid(&signature)?, "my-kid");
/// # Ok(())
/// # }
/// ```
pub struct Signer {
    kid: String,
    key: Result<PrivateKey>,
    method: String,
    path: Option<String>,
    headers: Vec<(String, Vec<u8>)>,
    body: Vec<u8>,
}

impl Signer {
    pub(crate) fn new(kid: impl Into<String>, key: Result<PrivateKey>) -> Self {
        Self {
            kid: kid.into(),
            key,
            method: DEFAULT_SIGNING_METHOD.to_string(),
            path: None,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the request method, e.g. `POST`. Defaults to `POST`.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the request path, e.g. `/payouts`. Required.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a header to sign.
    ///
    /// Headers are signed in the order they are added. Adding the same name
    /// twice signs it twice. `name` must be a valid HTTP header name, so it
    /// can't be empty or contain `,`; [`Signer::sign`] rejects it otherwise.
    pub fn header(mut self, name: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        self.headers.push((name.into(), value.as_ref().to_vec()));
        self
    }

    /// Add several headers to sign, in iteration order.
    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: AsRef<[u8]>,
    {
        self.headers.extend(
            headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.as_ref().to_vec())),
        );
        self
    }

    /// Set the request body. Defaults to empty.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Produce the signature string `header..signature`.
    pub fn sign(self) -> Result<String> {
        let key = self.key?;
        let path = self
            .path
            .ok_or_else(|| Error::missing_path("path must be set before signing"))?;

        if let Some((name, _)) = self
            .headers
            .iter()
            .find(|(name, _)| HeaderName::from_bytes(name.as_bytes()).is_err())
        {
            return Err(Error::invalid_header_name(format!(
                "`{name}` can't be listed in a signature"
            )));
        }

        let header = JwsHeader::new(
            self.kid,
            self.headers.iter().map(|(name, _)| name.as_str()),
        );
        let headers: Vec<(&str, &[u8])> = self
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_slice()))
            .collect();
        let payload = build_payload(&self.method, &path, &headers, &self.body);

        sign_detached(&header, &key, &payload)
    }
}

impl Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("kid", &self.kid)
            .field("method", &self.method)
            .field("path", &self.path)
            .field(
                "headers",
                &self.headers.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .field("body_len", &self.body.len())
            .finish()
    }
}
