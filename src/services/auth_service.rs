use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::services::user_service::UserService;
use crate::utils::password::PasswordEncoder;

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";

/// Autorité de sécurité associée à un rôle stocké: "ADMIN" -> "ROLE_ADMIN"
pub fn authority_for(role: &str) -> String {
    format!("ROLE_{}", role)
}

/// Utilisateur dont le mot de passe a été vérifié
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
    pub authority: String,
}

pub struct AuthService<'a> {
    users: UserService<'a>,
    encoder: PasswordEncoder,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, encoder: PasswordEncoder) -> Self {
        Self {
            users: UserService::new(db, encoder),
            encoder,
        }
    }

    /// Ok(None) pour des identifiants invalides: utilisateur inconnu et mauvais mot de passe
    /// ne sont pas distingués pour l'appelant
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthenticatedUser>, AppError> {
        // 1. Trouver l'utilisateur
        let Some(user) = self.users.find_by_username(username).await? else {
            tracing::warn!("User not found with username : {}", username);
            // Un hash est calculé quand même: même durée qu'un mauvais mot de passe
            let _ = self.encoder.encode(password);
            return Ok(None);
        };

        // 2. Vérifier le mot de passe
        match self.encoder.matches(password, &user.password) {
            Ok(true) => Ok(Some(AuthenticatedUser {
                user_id: user.id,
                authority: authority_for(&user.role),
                username: user.username,
            })),
            Ok(false) => {
                tracing::warn!("Bad credentials for username : {}", username);
                Ok(None)
            }
            Err(e) => {
                tracing::warn!("Unreadable password hash for username {}: {}", username, e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_for_role() {
        assert_eq!(authority_for(ROLE_ADMIN), "ROLE_ADMIN");
        assert_eq!(authority_for(ROLE_USER), "ROLE_USER");
    }
}
