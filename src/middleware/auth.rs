use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::middleware::access;
use crate::models::users;
use crate::services::auth_service::{ROLE_ADMIN, authority_for};
use crate::utils::session::{self, SESSION_COOKIE, SessionRegistry};

/// Structure qui contient les infos de l'utilisateur authentifié
/// Utilisée comme extracteur dans les routes protégées
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i32,
    pub username: String,
    pub authority: String,
    pub session_id: String,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.authority == authority_for(ROLE_ADMIN)
    }
}

/// Implémentation de FromRequest pour SessionUser
/// Sans session ouverte: redirection vers /app/login
/// Session ouverte mais rôle insuffisant pour la route: 403
impl FromRequest for SessionUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { extract(&req).await })
    }
}

fn app_data<T: 'static>(req: &HttpRequest) -> Result<web::Data<T>, AppError> {
    req.app_data::<web::Data<T>>().cloned().ok_or_else(|| {
        tracing::error!("{} missing from app data", std::any::type_name::<T>());
        AppError::Session("missing application state".to_string())
    })
}

async fn extract(req: &HttpRequest) -> Result<SessionUser, AppError> {
    let config = app_data::<AppConfig>(req)?;
    let sessions = app_data::<SessionRegistry>(req)?;
    let db = app_data::<DatabaseConnection>(req)?;

    // 1. Extraire le cookie de session
    let cookie = req.cookie(SESSION_COOKIE).ok_or(AppError::Unauthenticated)?;

    // 2. Vérifier le token
    let claims = session::verify_token(&config.security.session_secret, cookie.value())
        .map_err(|e| {
            tracing::debug!("Rejected session cookie: {}", e);
            AppError::Unauthenticated
        })?;

    // 3. La session doit être encore ouverte (pas de logout)
    if !sessions.is_open(&claims.sid) {
        tracing::debug!("Session {} is closed", claims.sid);
        return Err(AppError::Unauthenticated);
    }

    // 4. Recharger l'utilisateur: rôle courant, compte supprimé = session fermée
    let Some(account) = users::Entity::find_by_id(claims.sub).one(db.get_ref()).await? else {
        tracing::warn!("Session {} belongs to a deleted user {}", claims.sid, claims.sub);
        sessions.close(&claims.sid);
        return Err(AppError::Unauthenticated);
    };

    let user = SessionUser {
        user_id: account.id,
        authority: authority_for(&account.role),
        username: account.username,
        session_id: claims.sid,
    };

    // 5. Règles d'accès sur la route résolue par le routeur (chemin décodé)
    let route = req.match_pattern().unwrap_or_else(|| req.path().to_string());
    let required = access::required_access(&route);
    if !access::is_granted(required, Some(user.authority.as_str())) {
        tracing::warn!("Access denied to {} for {}", route, user.username);
        return Err(AppError::Forbidden { username: user.username });
    }

    Ok(user)
}
