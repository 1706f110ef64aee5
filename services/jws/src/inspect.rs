use crate::envelope::DetachedJws;
use crate::header::JwsHeader;
use reqseal_core::Result;

/// Read the key identifier from a signature without verifying it.
///
/// Use it to pick the public key to verify with. Only the structure is
/// checked: the algorithm and version are left to
/// [`Verifier::verify`](crate::Verifier::verify).
pub fn extract_kid(signature: &str) -> Result<String> {
    extract_jws_header(signature).map(|header| header.kid)
}

/// Read the whole protected header from a signature without verifying it.
pub fn extract_jws_header(signature: &str) -> Result<JwsHeader> {
    DetachedJws::parse(signature).map(|jws| jws.header)
}
