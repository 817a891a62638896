//! Resolved user identity

use serde::{Deserialize, Serialize};

/// User resolved by the security layer before the request reached us
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub backend_roles: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_tenant: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend_roles: Vec::new(),
            roles: Vec::new(),
            requested_tenant: None,
        }
    }

    /// Parse `name|backend_roles|roles|requested_tenant`.
    ///
    /// Role segments are comma separated and every segment after the name is
    /// optional. Returns `None` when the string or the name is empty.
    pub fn parse(user_info: &str) -> Option<Self> {
        let mut segments = user_info.split('|');

        let name = segments.next().map(str::trim).filter(|s| !s.is_empty())?;

        let backend_roles = segments.next().map(split_roles).unwrap_or_default();
        let roles = segments.next().map(split_roles).unwrap_or_default();
        let requested_tenant = segments
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Some(Self {
            name: name.to_string(),
            backend_roles,
            roles,
            requested_tenant,
        })
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

fn split_roles(segment: &str) -> Vec<String> {
    segment
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(String::from)
        .collect()
}
