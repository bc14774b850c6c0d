//! Admin session tokens.
//!
//! A successful login yields an HS256-signed JWT stored in an `HttpOnly`
//! cookie. Every admin request validates the token on its own, so no session
//! state lives in the server process and any instance can serve any request.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject and role embedded in every admin token.
pub const ADMIN_SUBJECT: &str = "admin";
pub const ROLE_ADMIN: &str = "admin";

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- always [`ADMIN_SUBJECT`]; there is one shared admin identity.
    pub sub: String,
    /// Role name, checked by the admin gate.
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit logs.
    pub jti: String,
}

/// Admin credentials and session token settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The shared admin password.
    pub admin_password: String,
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session lifetime in minutes (default: 480).
    pub expiry_mins: i64,
    /// Mark cookies `Secure` (default: false, enable behind HTTPS).
    pub secure_cookies: bool,
}

/// Default session lifetime in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 480;

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                     | Required | Default |
    /// |-----------------------------|----------|---------|
    /// | `ADMIN_PASSWORD`            | **yes**  | --      |
    /// | `JWT_SECRET`                | **yes**  | --      |
    /// | `ADMIN_SESSION_EXPIRY_MINS` | no       | `480`   |
    /// | `COOKIE_SECURE`             | no       | `false` |
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_PASSWORD` or `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let admin_password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set in the environment");
        assert!(!admin_password.is_empty(), "ADMIN_PASSWORD must not be empty");

        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_mins: i64 = std::env::var("ADMIN_SESSION_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_MINS.to_string())
            .parse()
            .expect("ADMIN_SESSION_EXPIRY_MINS must be a valid i64");

        let secure_cookies: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("COOKIE_SECURE must be true or false");

        Self {
            admin_password,
            secret,
            expiry_mins,
            secure_cookies,
        }
    }

    /// Session lifetime in seconds, for the cookie `Max-Age`.
    pub fn max_age_secs(&self) -> i64 {
        self.expiry_mins * 60
    }
}

/// Issue an HS256 admin session token.
pub fn issue_session_token(config: &SessionConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: ADMIN_SUBJECT.to_string(),
        role: ROLE_ADMIN.to_string(),
        exp: now + config.max_age_secs(),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_session_token(
    token: &str,
    config: &SessionConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
