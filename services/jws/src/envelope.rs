use crate::header::JwsHeader;
use crate::key::{PrivateKey, PublicKey};
use log::debug;
use reqseal_core::hash::{base64url_decode, base64url_encode};
use reqseal_core::utils::Redact;
use reqseal_core::{Error, Result};

/// A signature string split into its segments, with the protected header
/// decoded.
///
/// The middle segment is always empty: the payload is never transmitted and
/// has to be rebuilt from the request by the receiver.
#[derive(Debug)]
pub(crate) struct DetachedJws<'a> {
    pub header: JwsHeader,
    encoded_header: &'a str,
    encoded_signature: &'a str,
}

impl<'a> DetachedJws<'a> {
    /// Parse `header..signature`.
    pub fn parse(signature: &'a str) -> Result<Self> {
        let mut segments = signature.split('.');
        let (Some(encoded_header), Some(payload), Some(encoded_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(Error::malformed_signature(
                "signature must have exactly three `.` separated segments",
            ));
        };

        if !payload.is_empty() {
            return Err(Error::malformed_signature(
                "signature payload segment must be empty",
            ));
        }

        Ok(Self {
            header: JwsHeader::decode(encoded_header)?,
            encoded_header,
            encoded_signature,
        })
    }

    /// Verify the signature against a rebuilt canonical payload.
    pub fn verify(&self, key: &PublicKey, payload: &[u8]) -> Result<()> {
        let signature = base64url_decode(self.encoded_signature)?;
        let signing_input = signing_input(self.encoded_header, payload);

        debug!(
            "verifying signature for kid {:?} over {} covered headers and {} payload bytes",
            Redact::from(&self.header.kid),
            self.header.header_names().count(),
            payload.len()
        );

        key.verify(signing_input.as_bytes(), &signature)
    }
}

/// Sign `payload` detached, returning `header..signature`.
pub(crate) fn sign_detached(header: &JwsHeader, key: &PrivateKey, payload: &[u8]) -> Result<String> {
    let encoded_header = header.encode()?;
    let signing_input = signing_input(&encoded_header, payload);

    debug!(
        "signing for kid {:?} over headers [{}] and {} payload bytes",
        Redact::from(&header.kid),
        header.tl_headers,
        payload.len()
    );

    let signature = key.sign(signing_input.as_bytes())?;

    let mut s = encoded_header;
    s.push_str("..");
    s.push_str(&base64url_encode(&signature));
    Ok(s)
}

/// `BASE64URL(header) + "." + BASE64URL(payload)`
fn signing_input(encoded_header: &str, payload: &[u8]) -> String {
    let mut s = String::with_capacity(encoded_header.len() + 1 + payload.len() * 4 / 3 + 4);
    s.push_str(encoded_header);
    s.push('.');
    s.push_str(&base64url_encode(payload));
    s
}
