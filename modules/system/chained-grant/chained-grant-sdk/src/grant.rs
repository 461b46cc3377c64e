//! Wire-level names for the redelegation grant.
//!
//! The grant-type URI is matched verbatim by token endpoints; changing it
//! breaks protocol compatibility with existing clients.

/// Grant type identifier dispatched to the chained grant evaluator.
pub const REDELEGATE_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant_type:redelegate";

/// Request parameter carrying the grant type.
pub const GRANT_TYPE_PARAM: &str = "grant_type";

/// Request parameter carrying the presented access token value.
pub const TOKEN_PARAM: &str = "token";

/// Request parameter carrying the space-delimited requested scope list.
pub const SCOPE_PARAM: &str = "scope";
