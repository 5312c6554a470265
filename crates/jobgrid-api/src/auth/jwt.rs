//! JWT issuing and verification.

use crate::auth::models::JwtClaims;
use chrono::Utc;
use jobgrid_core::models::AccountType;
use jobgrid_core::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

/// Issue a token for a freshly authenticated user.
pub fn create_token(
    user_id: i64,
    account_type: AccountType,
    secret: &str,
    expiry_hours: i64,
) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: user_id,
        account_type,
        exp: (now + chrono::Duration::hours(expiry_hours)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
}

/// Verify a token's signature and expiry, returning its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<JwtClaims, AppError> {
    decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
        AppError::Unauthorized("Invalid or expired token".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-that-is-long-enough";

    #[test]
    fn token_round_trip() {
        let token = create_token(42, AccountType::Employer, SECRET, 24).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.account_type, AccountType::Employer);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = create_token(42, AccountType::User, SECRET, -2).unwrap();
        let err = decode_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(42, AccountType::User, SECRET, 24).unwrap();
        assert!(decode_token(&token, "another-secret").is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_token("not-a-jwt", SECRET).is_err());
    }
}
