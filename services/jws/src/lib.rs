//! Detached ES512 request signatures.
//!
//! A signature commits to the request method, path, a chosen list of headers
//! and the body. It travels as `header..signature`: the protected header and
//! the ECDSA P-521 signature, base64url encoded, with the payload segment
//! left empty. The receiver rebuilds the payload from the request it got.
//!
//! ## Signing
//!
//! ```
//! # fn main() -> reqseal_core::Result<()> {
//! # let pem = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/ec512-private.pem"));
//! let signature = reqseal_jws::sign_with_pem("my-kid", pem)
//!     .method("DELETE")
//!     .path("/payouts/42")
//!     .header("Idempotency-Key", "idemp-1")
//!     .sign()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Verifying
//!
//! ```
//! # fn main() -> reqseal_core::Result<()> {
//! # let private = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/ec512-private.pem"));
//! # let pem = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/ec512-public.pem"));
//! # let signature = reqseal_jws::sign_with_pem("my-kid", private)
//! #     .method("DELETE")
//! #     .path("/payouts/42")
//! #     .header("Idempotency-Key", "idemp-1")
//! #     .sign()?;
//! // Pick the key by its id, then verify.
//! assert_eq!(reqseal_jws::extract_kid(&signature)?, "my-kid");
//!
//! reqseal_jws::verify_with_pem(pem)
//!     .method("DELETE")
//!     .path("/payouts/42")
//!     .header("idempotency-key", "idemp-1")
//!     .require_header("Idempotency-Key")
//!     .verify(&signature)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

mod canonical;
pub use canonical::build_payload;

mod header;
pub use header::JwsHeader;

mod envelope;

mod key;
pub use key::{PrivateKey, PublicKey};

mod signer;
pub use signer::Signer;

mod verifier;
pub use verifier::Verifier;

mod inspect;
pub use inspect::{extract_jws_header, extract_kid};

mod config;
pub use config::Config;

/// Start signing a request with `kid` and a decoded private key.
pub fn sign_with_key(kid: impl Into<String>, key: PrivateKey) -> Signer {
    Signer::new(kid, Ok(key))
}

/// Start signing a request with `kid` and a PEM encoded private key.
///
/// A key that fails to parse is reported by [`Signer::sign`].
pub fn sign_with_pem(kid: impl Into<String>, pem: &str) -> Signer {
    Signer::new(kid, PrivateKey::from_pem(pem))
}

/// Start verifying a request with a decoded public key.
pub fn verify_with_key(key: PublicKey) -> Verifier {
    Verifier::new(Ok(key))
}

/// Start verifying a request with a PEM encoded public key.
///
/// A key that fails to parse is reported by [`Verifier::verify`].
pub fn verify_with_pem(pem: &str) -> Verifier {
    Verifier::new(PublicKey::from_pem(pem))
}
