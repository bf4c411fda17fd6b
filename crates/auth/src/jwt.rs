//! JWT signing, validation and token extraction helpers

use axum::http::HeaderValue;
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Sign a session token for `sub`, expiring after the configured TTL
pub(crate) fn sign_jwt_token(
    sub: &str,
    config: &AuthConfig,
) -> Result<(String, SessionClaims), AuthError> {
    let now = Utc::now();
    let expires_at = now.checked_add_signed(config.token_ttl).ok_or_else(|| {
        tracing::error!(ttl = %config.token_ttl, "Token lifetime out of range");
        AuthError::TokenIssueFailed
    })?;

    let claims = SessionClaims {
        sub: sub.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
        iss: config.issuer.clone(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "JWT signing failed");
        AuthError::TokenIssueFailed
    })?;

    Ok((token, claims))
}

/// Validate a session token signed with the shared secret
pub(crate) fn validate_jwt_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data =
        decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "JWT validation failed");
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            }
        })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    match header_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AuthError::InvalidAuthorizationFormat),
    }
}
