//! Bearer token generation and validation.
//!
//! Access tokens are HS256-signed JWTs carrying the user's email as the
//! subject claim. The signing secret always comes from the environment and is
//! never embedded in source.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every access token.
///
/// A token without a `sub` claim fails deserialization and is therefore
/// rejected the same way as a bad signature.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's email address.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Default access token lifetime in minutes (default: 15).
    pub token_expiry_mins: i64,
    /// Lifetime used by the login endpoint in minutes (default: 30).
    pub login_token_expiry_mins: i64,
}

/// Default token expiry in minutes.
const DEFAULT_TOKEN_EXPIRY_MINS: i64 = 15;
/// Default login token expiry in minutes.
const DEFAULT_LOGIN_TOKEN_EXPIRY_MINS: i64 = 30;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `JWT_SECRET`              | **yes**  | --      |
    /// | `TOKEN_EXPIRY_MINS`       | no       | `15`    |
    /// | `LOGIN_TOKEN_EXPIRY_MINS` | no       | `30`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let token_expiry_mins: i64 = std::env::var("TOKEN_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRY_MINS.to_string())
            .parse()
            .expect("TOKEN_EXPIRY_MINS must be a valid i64");

        let login_token_expiry_mins: i64 = std::env::var("LOGIN_TOKEN_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_LOGIN_TOKEN_EXPIRY_MINS.to_string())
            .parse()
            .expect("LOGIN_TOKEN_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            token_expiry_mins,
            login_token_expiry_mins,
        }
    }
}

/// Generate an HS256 access token bound to the given email.
///
/// `expiry_mins` overrides the configured default; the login handler passes
/// the 30-minute login expiry, everything else can pass `None`.
pub fn generate_access_token(
    email: &str,
    expiry_mins: Option<i64>,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + expiry_mins.unwrap_or(config.token_expiry_mins) * 60;

    let claims = Claims {
        sub: email.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically; malformed tokens
/// and tokens missing the subject claim fail decoding.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_mins: 15,
            login_token_expiry_mins: 30,
        }
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config();
        let token = generate_access_token("test@example.com", None, &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, "test@example.com");
        assert!(claims.exp > claims.iat);
        // Default expiry is 15 minutes.
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_explicit_expiry_overrides_default() {
        let config = test_config();
        let token = generate_access_token("test@example.com", Some(30), &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "test@example.com".to_string(),
            exp: now - 300, // expired 5 minutes ago (well past leeway)
            iat: now - 600,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = validate_token(&token, &config);
        assert!(result.is_err(), "expired token must fail validation");
    }

    #[test]
    fn test_token_without_subject_fails() {
        let config = test_config();

        // A structurally valid token whose payload lacks `sub`.
        #[derive(Serialize)]
        struct NoSubject {
            exp: i64,
            iat: i64,
        }
        let now = chrono::Utc::now().timestamp();
        let token = encode(
            &Header::default(),
            &NoSubject {
                exp: now + 600,
                iat: now,
            },
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = validate_token(&token, &config);
        assert!(result.is_err(), "token without a subject must fail");
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            token_expiry_mins: 15,
            login_token_expiry_mins: 30,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            token_expiry_mins: 15,
            login_token_expiry_mins: 30,
        };

        let token = generate_access_token("test@example.com", None, &config_a)
            .expect("token generation should succeed");

        let result = validate_token(&token, &config_b);
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_garbage_token_fails() {
        let config = test_config();
        assert!(validate_token("not-a-jwt", &config).is_err());
        assert!(validate_token("", &config).is_err());
    }
}
