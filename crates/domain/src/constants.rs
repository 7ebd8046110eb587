//! Platform constants
//!
//! Centralized location for endpoint paths, wire discriminators and defaults
//! shared by every crate in the workspace.

// Endpoints
pub const DEFAULT_BASE_URL: &str = "https://platform.21-school.ru";
pub const DEFAULT_AUTH_URL: &str = "https://auth.21-school.ru";
pub const GRAPHQL_PATH: &str = "/services/graphql";
pub const AUTH_TOKEN_PATH: &str = "/auth/realms/EduPowerKeycloak/protocol/openid-connect/token";

// Credential exchange
pub const AUTH_CLIENT_ID: &str = "s21-open-api";

/// Tokens are refreshed once they are within this many seconds of expiry.
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Context headers, sent only when configured
pub const HEADER_SCHOOL_ID: &str = "schoolid";
pub const HEADER_USER_ROLE: &str = "userrole";
pub const HEADER_EDU_PRODUCT_ID: &str = "x-edu-product-id";
pub const HEADER_EDU_ORG_UNIT_ID: &str = "x-edu-org-unit-id";

// Calendar discriminators
pub const REVIEW_EVENT_CODE: &str = "student_check";
pub const FREE_TIME_SLOT_TYPE: &str = "FREE_TIME";
pub const BOOKED_TIME_SLOT_TYPE: &str = "BOOKED_TIME";
