//! Client configuration structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AUTH_URL, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Every recognized client option in one place
///
/// Optional context headers (`school_id`, `user_role`, `edu_product_id`,
/// `edu_org_unit_id`) are only sent when set to a non-empty value. `Debug`
/// never prints the password.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_url: String,
    pub login: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub school_id: Option<String>,
    pub user_role: Option<String>,
    pub edu_product_id: Option<String>,
    pub edu_org_unit_id: Option<String>,
    pub timeout_secs: u64,
    /// Emit request/response bodies at debug level
    pub debug_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            login: None,
            password: None,
            school_id: None,
            user_role: None,
            edu_product_id: None,
            edu_org_unit_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug_tracing: false,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("auth_url", &self.auth_url)
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("school_id", &self.school_id)
            .field("user_role", &self.user_role)
            .field("edu_product_id", &self.edu_product_id)
            .field("edu_org_unit_id", &self.edu_org_unit_id)
            .field("timeout_secs", &self.timeout_secs)
            .field("debug_tracing", &self.debug_tracing)
            .finish()
    }
}

impl ClientConfig {
    /// Context headers that are configured, as `(name, value)` pairs
    pub fn context_headers(&self) -> Vec<(&'static str, &str)> {
        use crate::constants::{
            HEADER_EDU_ORG_UNIT_ID, HEADER_EDU_PRODUCT_ID, HEADER_SCHOOL_ID, HEADER_USER_ROLE,
        };

        [
            (HEADER_SCHOOL_ID, self.school_id.as_deref()),
            (HEADER_USER_ROLE, self.user_role.as_deref()),
            (HEADER_EDU_PRODUCT_ID, self.edu_product_id.as_deref()),
            (HEADER_EDU_ORG_UNIT_ID, self.edu_org_unit_id.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_endpoints() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://platform.21-school.ru");
        assert_eq!(config.auth_url, "https://auth.21-school.ru");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.context_headers().is_empty());
    }

    #[test]
    fn only_non_empty_headers_are_reported() {
        let config = ClientConfig {
            school_id: Some("school-1".to_string()),
            user_role: Some(String::new()),
            edu_org_unit_id: Some("unit-9".to_string()),
            ..Default::default()
        };

        assert_eq!(
            config.context_headers(),
            vec![("schoolid", "school-1"), ("x-edu-org-unit-id", "unit-9")]
        );
    }

    #[test]
    fn debug_redacts_password() {
        let config = ClientConfig {
            login: Some("jdoe".to_string()),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };

        let rendered = format!("{config:?}");
        assert!(rendered.contains("jdoe"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn partial_toml_style_input_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "login": "jdoe", "debug_tracing": true }"#).unwrap();
        assert_eq!(config.login.as_deref(), Some("jdoe"));
        assert!(config.debug_tracing);
        assert_eq!(config.base_url, "https://platform.21-school.ru");
    }
}
