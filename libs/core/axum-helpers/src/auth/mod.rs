//! Stateless JWT authentication.
//!
//! Tokens are signed with a process-wide secret loaded through [`JwtConfig`]
//! and verified without any storage lookup. There is no refresh or rotation
//! mechanism; a token is valid until its fixed expiry.

pub mod config;
pub mod jwt;

pub use config::JwtConfig;
pub use jwt::{TokenClaims, TokenIssuer, TOKEN_TTL_SECS};
