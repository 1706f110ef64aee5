#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use reqseal_core::*;

#[cfg(feature = "jws")]
pub mod jws {
    pub use reqseal_jws::*;
}
