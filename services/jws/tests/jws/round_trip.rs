//! Sign then verify, and tamper with every signed part of the request.

use crate::*;
use anyhow::Result;
use http::{HeaderMap, HeaderValue};
use pretty_assertions::assert_eq;
use reqseal_core::ErrorKind;
use reqseal_jws::{sign_with_key, sign_with_pem, verify_with_key, Verifier};
use test_case::test_case;

// Signed outside this crate with the fixture private key, to check that
// independently produced ES512 signatures verify.

/// Headers `Idempotency-Key,X-Custom`, `X-Custom: 123`.
const TWO_HEADER_SIGNATURE: &str = "eyJhbGciOiJFUzUxMiIsImtpZCI6IjQ1ZmM3NWNmLTU2NDktNDEzNC04NGIzLTE5MmMyYzc4ZTk5MCIsInRsX3ZlcnNpb24iOiIyIiwidGxfaGVhZGVycyI6IklkZW1wb3RlbmN5LUtleSxYLUN1c3RvbSJ9..AH1OZGtD37WdFADswrro6u5a3cIZwiDu-cAojfVkYEY5GaXG7FF_VaYUUxLbqVtdAjmBSfp30cL-RmogLpsBDGjUACVMqjXQbMNDNiUagu_Q6Ns1E5krR9F_pCKPXSwl0xKa4W5Pn5f1uXDabWXk1qCUH_yp-w7FJKw8T4AJ6SBXvHMZ";

/// `DELETE /foo`, no headers, empty body.
const NO_HEADER_SIGNATURE: &str = "eyJhbGciOiJFUzUxMiIsImtpZCI6IjQ1ZmM3NWNmLTU2NDktNDEzNC04NGIzLTE5MmMyYzc4ZTk5MCIsInRsX3ZlcnNpb24iOiIyIiwidGxfaGVhZGVycyI6IiJ9..AFmoIC94wdXeC5o_l_AwVo_ZcLNv3ZBv3yyd5C0eLj4Ue9P7Q7ouisXPP5IgqPGxygtYQSEMkSR3lQoJvrDz7Y8xAGPxcw7u5eZXNesC5OSKqrC87hqh5uN_E1LzLA0yG3Y5pag3R3d2s-4-yk-uvnSymtSzoCMarJ2uVEShcX0GHZlQ";

fn sign_request() -> Result<String> {
    let signature = sign_with_key(KID, private_key())
        .method("POST")
        .path(PATH)
        .header("Idempotency-Key", IDEMPOTENCY_KEY)
        .header("X-Custom", "123")
        .body(BODY)
        .sign()?;
    Ok(signature)
}

fn verifier() -> Verifier {
    verify_with_key(public_key())
        .method("POST")
        .path(PATH)
        .header("Idempotency-Key", IDEMPOTENCY_KEY)
        .header("X-Custom", "123")
        .body(BODY)
}

#[test]
fn test_round_trip() -> Result<()> {
    init_logger();

    let signature = sign_request()?;
    verifier().verify(&signature)?;
    Ok(())
}

#[test]
fn test_round_trip_with_private_key_pkcs8() -> Result<()> {
    init_logger();

    let pem = include_str!("../../testdata/ec512-private-pkcs8.pem");
    let signature = sign_with_pem(KID, pem)
        .method("PUT")
        .path("/payouts")
        .sign()?;

    verify_with_key(public_key())
        .method("put")
        .path("/payouts")
        .verify(&signature)?;
    Ok(())
}

#[test]
fn test_round_trip_with_derived_public_key() -> Result<()> {
    init_logger();

    let private = private_key();
    let public = private.public_key();
    let signature = sign_with_key(KID, private).path("/").sign()?;

    verify_with_key(public)
        .method("POST")
        .path("/")
        .verify(&signature)?;
    Ok(())
}

#[test_case(|v: Verifier| v.method("DELETE"); "method")]
#[test_case(|v: Verifier| v.path("/merchant_accounts/a61acaef-ee05-4077-92f3-25543a11bd8e/sweeping"); "path")]
#[test_case(|v: Verifier| v.header("Idempotency-Key", "idemp-2076717c-9005-4811-a321-9e0787fa0383"); "header value")]
#[test_case(|v: Verifier| v.header("x-custom", "1234"); "header value with other case")]
#[test_case(|v: Verifier| v.body(r#"{"currency":"GBP","max_amount_in_minor":5000001}"#); "body")]
#[test_case(|v: Verifier| v.body(""); "empty body")]
fn test_tampered_request(tamper: fn(Verifier) -> Verifier) {
    init_logger();

    let signature = sign_request().expect("signing must succeed");
    let err = tamper(verifier()).verify(&signature).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);
    assert!(err.is_verification_error());
}

#[test]
fn test_tampered_signature() -> Result<()> {
    init_logger();

    let signature = sign_request()?;
    let (header, sig) = signature
        .split_once("..")
        .expect("signature must be detached");

    // Swap the first signature character for another base64url one.
    let first = if sig.starts_with('A') { "B" } else { "A" };
    let tampered = format!("{header}..{first}{}", &sig[1..]);

    let err = verifier().verify(&tampered).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);

    let truncated = format!("{header}..{}", &sig[..sig.len() - 4]);
    let err = verifier().verify(&truncated).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedSignature);
    Ok(())
}

#[test]
fn test_header_order_and_case_do_not_matter() -> Result<()> {
    init_logger();

    let signature = sign_request()?;

    let mut headers = HeaderMap::new();
    headers.insert("x-extra", HeaderValue::from_static("not signed"));
    headers.insert("x-custom", HeaderValue::from_static("123"));
    headers.insert("idempotency-key", HeaderValue::from_static(IDEMPOTENCY_KEY));

    verify_with_key(public_key())
        .method("post")
        .path(PATH)
        .header_map(&headers)
        .require_header("IDEMPOTENCY-KEY")
        .body(BODY)
        .verify(&signature)?;
    Ok(())
}

#[test]
fn test_required_header_not_covered() -> Result<()> {
    init_logger();

    let signature = sign_with_key(KID, private_key())
        .path(PATH)
        .header("X-Custom", "123")
        .body(BODY)
        .sign()?;

    let err = verifier()
        .require_header("Idempotency-Key")
        .verify(&signature)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequiredHeaderNotCovered);
    Ok(())
}

#[test]
fn test_missing_header_value() -> Result<()> {
    init_logger();

    let signature = sign_request()?;
    let err = verify_with_key(public_key())
        .method("POST")
        .path(PATH)
        .header("Idempotency-Key", IDEMPOTENCY_KEY)
        .body(BODY)
        .verify(&signature)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingHeaderValue);
    Ok(())
}

#[test]
fn test_sign_and_verify_without_method() -> Result<()> {
    init_logger();

    let signature = sign_with_key(KID, private_key()).path(PATH).sign()?;
    let err = verify_with_key(public_key())
        .path(PATH)
        .verify(&signature)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignature);
    Ok(())
}

#[test]
fn test_sign_without_path() {
    init_logger();

    let err = sign_with_key(KID, private_key())
        .method("POST")
        .body(BODY)
        .sign()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingPath);
    assert!(!err.is_verification_error());
}

#[test]
fn test_verify_two_header_signature() -> Result<()> {
    init_logger();

    verify_with_key(public_key())
        .method("post")
        .path(PATH)
        .header("x-custom", "123")
        .header("IDEMPOTENCY-KEY", IDEMPOTENCY_KEY)
        .require_headers(["Idempotency-Key", "X-Custom"])
        .body(BODY)
        .verify(TWO_HEADER_SIGNATURE)?;
    Ok(())
}

#[test]
fn test_verify_no_header_signature() -> Result<()> {
    init_logger();

    verify_with_key(public_key())
        .method("DELETE")
        .path("/foo")
        .verify(NO_HEADER_SIGNATURE)?;
    Ok(())
}
