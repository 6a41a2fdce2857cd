//! Gatepass core — account identities, badge windows, issuance grants, and
//! registry configuration.

pub mod config;
pub mod error;
pub mod grant;
pub mod types;

pub use config::RegistryConfig;
pub use error::CoreError;
pub use grant::{GrantBuilder, IssuanceGrant};
pub use types::{AccountId, BadgeId, ValidityWindow, DAY_SECS};
