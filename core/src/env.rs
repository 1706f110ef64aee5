use std::collections::HashMap;
use std::fmt::Debug;

/// Permits parameterizing environment lookups so configuration can be
/// loaded from the process or from a fixed map.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS context.
#[derive(Debug, Copy, Clone, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// StaticEnv serves variables from an in-memory map.
///
/// Useful in tests, or when configuration is sourced from somewhere other
/// than the process environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The variables to serve.
    pub envs: HashMap<String, String>,
}

impl StaticEnv {
    /// Create a StaticEnv from key/value pairs.
    pub fn new<K, V>(envs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            envs: envs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}
