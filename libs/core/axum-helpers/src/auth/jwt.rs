use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Session token time-to-live: fixed 24 hours, no refresh mechanism
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

/// Stateless JWT issuer and verifier.
///
/// Signs tokens with HS256 using a process-wide secret. Verification needs no
/// storage lookup; the signature and expiry are the whole story.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    /// Create a new token issuer from configuration.
    ///
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtConfig, TokenIssuer};
    /// use core_config::FromEnv;
    ///
    /// let config = JwtConfig::from_env()?;
    /// let issuer = TokenIssuer::new(&config);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Issue a session token (24h) carrying the given subject id.
    pub fn issue(&self, subject: &str) -> eyre::Result<String> {
        self.issue_with_ttl(subject, TOKEN_TTL_SECS)
    }

    fn issue_with_ttl(&self, subject: &str, ttl_seconds: i64) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify a token signature and decode its claims.
    ///
    /// Fails on bad signature, malformed token, or expired `exp`.
    pub fn verify(&self, token: &str) -> eyre::Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(jsonwebtoken::Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}
