//! Authentication module
//!
//! Supports: Bearer token, or no authentication at all.
//!
//! The `Authenticator` applies the configured credentials to outgoing
//! requests. The token is shared by every user of a run.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
