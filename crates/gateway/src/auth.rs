//! Caller identity resolution.
//!
//! Identity comes from a signed session token issued by the external auth
//! provider. The token is read from the `Authorization: Bearer` header, or
//! from the session cookie when no header is sent, and its `sub` claim is the
//! caller's user id.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use common::AuthConfig;
use domain::BEARER_TOKEN_PREFIX;

/// Resolves the caller identity of an inbound request.
pub trait AuthProvider: Send + Sync {
    /// Return the caller's user id, or `None` when the request is anonymous
    /// or carries an invalid token.
    fn user_id(&self, headers: &HeaderMap) -> Option<String>;
}

/// Claims read from the session token.
#[derive(Debug, Deserialize)]
struct SessionClaims {
    sub: String,
}

/// AuthProvider verifying JWT session tokens.
pub struct JwtAuthProvider {
    decoding_key: DecodingKey,
    validation: Validation,
    session_cookie: String,
}

impl JwtAuthProvider {
    /// Build a provider from configuration.
    ///
    /// Uses RS256 when a PEM public key is configured, HS256 with the shared
    /// secret otherwise. Fails when neither is set.
    pub fn from_config(config: &AuthConfig) -> Result<Self, jsonwebtoken::errors::Error> {
        let (decoding_key, algorithm) = match (&config.jwt_public_key, &config.jwt_secret) {
            (Some(pem), _) => (DecodingKey::from_rsa_pem(pem.as_bytes())?, Algorithm::RS256),
            (None, Some(secret)) => (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256),
            (None, None) => return Err(ErrorKind::InvalidKeyFormat.into()),
        };

        let mut validation = Validation::new(algorithm);
        validation.leeway = config.leeway_seconds;
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
            validation.set_required_spec_claims(&["exp", "iss"]);
        }

        Ok(Self {
            decoding_key,
            validation,
            session_cookie: config.session_cookie.clone(),
        })
    }

    /// Extract the raw session token from the request.
    fn session_token(&self, headers: &HeaderMap) -> Option<String> {
        let bearer = headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
            .map(str::trim)
            .filter(|t| !t.is_empty());

        if let Some(token) = bearer {
            return Some(token.to_string());
        }

        CookieJar::from_headers(headers)
            .get(&self.session_cookie)
            .map(|cookie| cookie.value().to_string())
            .filter(|t| !t.is_empty())
    }
}

impl AuthProvider for JwtAuthProvider {
    fn user_id(&self, headers: &HeaderMap) -> Option<String> {
        let token = self.session_token(headers)?;

        match decode::<SessionClaims>(&token, &self.decoding_key, &self.validation) {
            Ok(data) if !data.claims.sub.is_empty() => Some(data.claims.sub),
            Ok(_) => {
                tracing::debug!("Session token has an empty subject");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected session token");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header::COOKIE, HeaderValue};
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn provider() -> JwtAuthProvider {
        let config = AuthConfig {
            jwt_secret: Some(SECRET.to_string()),
            ..AuthConfig::default()
        };
        JwtAuthProvider::from_config(&config).unwrap()
    }

    fn token(sub: &str, expires_in: i64, secret: &str) -> String {
        let claims = json!({
            "sub": sub,
            "iat": Utc::now().timestamp(),
            "exp": Utc::now().timestamp() + expires_in,
        });
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn resolves_subject_from_bearer_token() {
        let headers = bearer(&token("user_1", 3600, SECRET));
        assert_eq!(provider().user_id(&headers), Some("user_1".to_string()));
    }

    #[test]
    fn resolves_subject_from_session_cookie() {
        let mut headers = HeaderMap::new();
        let cookie = format!("theme=dark; __session={}", token("user_2", 3600, SECRET));
        headers.insert(COOKIE, HeaderValue::from_str(&cookie).unwrap());

        assert_eq!(provider().user_id(&headers), Some("user_2".to_string()));
    }

    #[test]
    fn anonymous_request_has_no_identity() {
        assert_eq!(provider().user_id(&HeaderMap::new()), None);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let headers = bearer(&token("user_1", 3600, "another-secret-key-that-is-long-enough"));
        assert_eq!(provider().user_id(&headers), None);
    }

    #[test]
    fn rejects_expired_token() {
        let headers = bearer(&token("user_1", -3600, SECRET));
        assert_eq!(provider().user_id(&headers), None);
    }

    #[test]
    fn rejects_empty_subject() {
        let headers = bearer(&token("", 3600, SECRET));
        assert_eq!(provider().user_id(&headers), None);
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(provider().user_id(&headers), None);
    }

    #[test]
    fn enforces_configured_issuer() {
        let config = AuthConfig {
            jwt_secret: Some(SECRET.to_string()),
            issuer: Some("https://clerk.example.com".to_string()),
            ..AuthConfig::default()
        };
        let provider = JwtAuthProvider::from_config(&config).unwrap();

        // Token without an `iss` claim
        let headers = bearer(&token("user_1", 3600, SECRET));
        assert_eq!(provider.user_id(&headers), None);

        let signed = |iss: &str| {
            let claims = json!({
                "sub": "user_1",
                "iss": iss,
                "exp": Utc::now().timestamp() + 3600,
            });
            encode(
                &Header::default(),
                &claims,
                &EncodingKey::from_secret(SECRET.as_bytes()),
            )
            .unwrap()
        };

        let headers = bearer(&signed("https://evil.example.com"));
        assert_eq!(provider.user_id(&headers), None);

        let headers = bearer(&signed("https://clerk.example.com"));
        assert_eq!(provider.user_id(&headers), Some("user_1".to_string()));
    }

    #[test]
    fn from_config_requires_a_key() {
        assert!(JwtAuthProvider::from_config(&AuthConfig::default()).is_err());
    }
}
