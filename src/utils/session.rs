use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Nom du cookie qui porte la session
pub const SESSION_COOKIE: &str = "POSEIDON_SESSION";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,        // user_id
    pub username: String,
    pub authority: String, // ex: ROLE_ADMIN
    pub sid: String,     // identifiant de session, pour les logs
    pub exp: i64,        // expiration timestamp
}

/// Génère le token de session signé pour un utilisateur authentifié
pub fn generate_token(
    secret: &str,
    lifetime_hours: i64,
    user_id: i32,
    username: &str,
    authority: &str,
) -> Result<(String, Claims), AppError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(lifetime_hours))
        .ok_or_else(|| AppError::Session("Failed to calculate expiration".to_string()))?
        .timestamp();

    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        authority: authority.to_string(),
        sid: Uuid::new_v4().to_string(),
        exp: expiration,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
        .map_err(|e| AppError::Session(format!("Failed to generate token: {}", e)))?;

    Ok((token, claims))
}

/// Vérifie et décode un token de session
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    )
        .map(|data| data.claims)
        .map_err(|e| AppError::Session(format!("Invalid token: {}", e)))
}

/// Sessions ouvertes côté serveur (sid -> expiration)
/// Un token valide dont le sid n'est plus ici est refusé: c'est ce qui rend le logout effectif
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, i64>>,
}

impl SessionRegistry {
    pub fn open(&self, claims: &Claims) {
        let now = Utc::now().timestamp();
        let mut sessions = self.sessions();
        sessions.retain(|_, exp| *exp > now);
        sessions.insert(claims.sid.clone(), claims.exp);
    }

    pub fn is_open(&self, sid: &str) -> bool {
        let now = Utc::now().timestamp();
        self.sessions().get(sid).is_some_and(|exp| *exp > now)
    }

    /// Retourne false si la session était déjà fermée
    pub fn close(&self, sid: &str) -> bool {
        self.sessions().remove(sid).is_some()
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, i64>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_generate_and_verify_token() {
        let (token, issued) = generate_token(SECRET, 8, 123, "testuser", "ROLE_USER").unwrap();
        let claims = verify_token(SECRET, &token).unwrap();

        assert_eq!(claims.sub, 123);
        assert_eq!(claims.username, "testuser");
        assert_eq!(claims.authority, "ROLE_USER");
        assert_eq!(claims.sid, issued.sid);
    }

    #[test]
    fn test_invalid_token() {
        assert!(verify_token(SECRET, "invalid.token.here").is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret() {
        let (token, _) = generate_token("other-secret", 8, 1, "joe", "ROLE_ADMIN").unwrap();

        assert!(verify_token(SECRET, &token).is_err());
    }

    #[test]
    fn test_expired_token() {
        let (token, _) = generate_token(SECRET, -2, 1, "joe", "ROLE_USER").unwrap();

        assert!(verify_token(SECRET, &token).is_err());
    }

    #[test]
    fn test_registry_open_and_close() {
        let registry = SessionRegistry::default();
        let (_, claims) = generate_token(SECRET, 8, 1, "joe", "ROLE_USER").unwrap();

        assert!(!registry.is_open(&claims.sid));
        registry.open(&claims);
        assert!(registry.is_open(&claims.sid));

        assert!(registry.close(&claims.sid));
        assert!(!registry.is_open(&claims.sid));
        assert!(!registry.close(&claims.sid));
    }

    #[test]
    fn test_registry_ignores_expired_sessions() {
        let registry = SessionRegistry::default();
        let (_, expired) = generate_token(SECRET, -1, 1, "joe", "ROLE_USER").unwrap();

        registry.open(&expired);
        assert!(!registry.is_open(&expired.sid));
    }
}
