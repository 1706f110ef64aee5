use crate::constants::{ALGORITHM, HEADER_NAME_SEPARATOR, SIGNATURE_VERSION};
use reqseal_core::hash::{base64url_decode, base64url_encode};
use reqseal_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// The protected header of a request signature.
///
/// Serialized as JSON with the fields in declaration order, then base64url
/// encoded as the first segment of the signature string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsHeader {
    /// Signature algorithm, always `ES512` for signatures produced here.
    pub alg: String,
    /// Key identifier chosen by the signer.
    pub kid: String,
    /// Protocol version. Absent on v1 signatures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tl_version: Option<String>,
    /// Covered header names joined by `,`, in signing order.
    #[serde(default)]
    pub tl_headers: String,
}

impl JwsHeader {
    /// Build the header for a new signature over the given header names.
    pub fn new<'a>(kid: impl Into<String>, header_names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tl_headers = String::new();
        for (idx, name) in header_names.into_iter().enumerate() {
            if idx != 0 {
                tl_headers.push(HEADER_NAME_SEPARATOR);
            }
            tl_headers.push_str(name);
        }

        Self {
            alg: ALGORITHM.to_string(),
            kid: kid.into(),
            tl_version: Some(SIGNATURE_VERSION.to_string()),
            tl_headers,
        }
    }

    /// Covered header names in the order they were signed.
    ///
    /// Empty entries are skipped, so `""` yields no names.
    pub fn header_names(&self) -> impl Iterator<Item = &str> {
        self.tl_headers
            .split(HEADER_NAME_SEPARATOR)
            .filter(|name| !name.is_empty())
    }

    /// Check whether `name` is covered, ignoring ASCII case.
    pub fn covers(&self, name: &str) -> bool {
        self.header_names()
            .any(|covered| covered.eq_ignore_ascii_case(name))
    }

    /// Reject headers this implementation can't verify.
    pub(crate) fn ensure_supported(&self) -> Result<()> {
        if self.alg != ALGORITHM {
            return Err(Error::unsupported_algorithm(format!(
                "expected `{ALGORITHM}`, got `{}`",
                self.alg
            )));
        }

        match self.tl_version.as_deref() {
            Some(SIGNATURE_VERSION) => Ok(()),
            Some(v) => Err(Error::unsupported_version(format!(
                "expected version `{SIGNATURE_VERSION}`, got `{v}`"
            ))),
            None => Err(Error::unsupported_version(
                "signature carries no `tl_version`",
            )),
        }
    }

    /// Serialize and base64url encode the header.
    pub(crate) fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self)
            .map_err(|e| Error::unexpected("failed to serialize signature header").with_source(e))?;
        Ok(base64url_encode(&json))
    }

    /// Decode a base64url encoded header segment.
    pub(crate) fn decode(segment: &str) -> Result<Self> {
        let json = base64url_decode(segment)?;
        serde_json::from_slice(&json).map_err(|e| {
            Error::malformed_signature("signature header is not a valid JSON object").with_source(e)
        })
    }
}
