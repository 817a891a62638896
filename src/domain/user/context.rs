//! Request-scoped context

use std::collections::HashMap;

use crate::domain::MlError;

/// Transient key holding the security plugin's user info string
pub const OPENSEARCH_SECURITY_USER_INFO_THREAD_CONTEXT: &str = "_opendistro_security_user_info";

/// Values attached to a single request while it is being handled
#[derive(Debug, Clone, Default)]
pub struct ThreadContext {
    transients: HashMap<String, String>,
}

impl ThreadContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a transient value; each key can be set once per request
    pub fn put_transient(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), MlError> {
        let key = key.into();

        if self.transients.contains_key(&key) {
            return Err(MlError::internal(format!(
                "value for key [{}] already present",
                key
            )));
        }

        self.transients.insert(key, value.into());
        Ok(())
    }

    pub fn get_transient(&self, key: &str) -> Option<&str> {
        self.transients.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get_transient() {
        let mut ctx = ThreadContext::new();
        ctx.put_transient(OPENSEARCH_SECURITY_USER_INFO_THREAD_CONTEXT, "myuser||myrole")
            .unwrap();

        assert_eq!(
            ctx.get_transient(OPENSEARCH_SECURITY_USER_INFO_THREAD_CONTEXT),
            Some("myuser||myrole")
        );
        assert!(ctx.get_transient("missing").is_none());
    }

    #[test]
    fn test_transient_is_write_once() {
        let mut ctx = ThreadContext::new();
        ctx.put_transient("k", "v1").unwrap();
        let err = ctx.put_transient("k", "v2").unwrap_err();
        assert!(err.to_string().contains("already present"));
        assert_eq!(ctx.get_transient("k"), Some("v1"));
    }
}
