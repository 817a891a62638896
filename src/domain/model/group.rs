//! Model group registration input

use serde::{Deserialize, Serialize};

/// Visibility of a model group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    Public,
    Private,
    Restricted,
}

/// Input of a model group registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterModelGroupInput {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backend_roles: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_mode: Option<AccessMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_all_backend_roles: Option<bool>,
}

impl RegisterModelGroupInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            backend_roles: Vec::new(),
            access_mode: None,
            add_all_backend_roles: None,
        }
    }

    pub fn with_access_mode(mut self, access_mode: AccessMode) -> Self {
        self.access_mode = Some(access_mode);
        self
    }

    pub fn with_backend_roles(mut self, roles: Vec<String>) -> Self {
        self.backend_roles = roles;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_serialization() {
        let input = RegisterModelGroupInput::new("embeddings")
            .with_access_mode(AccessMode::Restricted)
            .with_backend_roles(vec!["ml_team".to_string()]);

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["access_mode"], "restricted");
        assert_eq!(value["backend_roles"][0], "ml_team");
        assert!(value.get("description").is_none());
    }
}
