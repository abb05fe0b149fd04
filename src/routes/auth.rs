use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpResponse, get, post, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::middleware::SessionUser;
use crate::models::dto::LoginForm;
use crate::routes::{html, redirect};
use crate::services::auth_service::AuthService;
use crate::utils::session::{self, SESSION_COOKIE, SessionRegistry};
use crate::views;

/// Drapeaux sans valeur: /app/login?error, /app/login?logout
#[derive(Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
    pub logout: Option<String>,
}

pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login_page)
        .service(login)
        .service(access_denied)
        .service(logout);
}

/// GET /app/login - Formulaire de connexion (PUBLIC)
#[get("/app/login")]
pub async fn login_page(query: web::Query<LoginQuery>) -> HttpResponse {
    html(views::pages::login(query.error.is_some(), query.logout.is_some()))
}

/// POST /app/login - Se connecter (PUBLIC)
#[post("/app/login")]
pub async fn login(
    db: web::Data<DatabaseConnection>,
    config: web::Data<AppConfig>,
    sessions: web::Data<SessionRegistry>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    // 1. Vérifier les identifiants
    let auth = AuthService::new(&db, config.password_encoder());
    let Some(user) = auth.authenticate(&form.username, &form.password).await? else {
        return Ok(redirect("/app/login?error"));
    };

    // 2. Générer le token de session
    let (token, claims) = session::generate_token(
        &config.security.session_secret,
        config.security.session_hours,
        user.user_id,
        &user.username,
        &user.authority,
    )?;

    // 3. Ouvrir la session côté serveur
    sessions.open(&claims);

    // 4. Poser le cookie et rediriger
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(config.security.cookie_secure);

    tracing::info!("User {} logged in (session {})", user.username, claims.sid);

    let mut response = redirect("/bidList/list");
    response
        .add_cookie(&cookie)
        .map_err(|e| AppError::Session(format!("Failed to set session cookie: {}", e)))?;
    Ok(response)
}

/// GET /app/error - Page 403 (connecté)
#[get("/app/error")]
pub async fn access_denied(user: SessionUser) -> HttpResponse {
    HttpResponse::Forbidden()
        .content_type("text/html; charset=utf-8")
        .body(views::pages::forbidden(&user.username))
}

/// POST /app-logout - Fin de session: fermée côté serveur, cookie supprimé côté navigateur
#[post("/app-logout")]
pub async fn logout(
    sessions: web::Data<SessionRegistry>,
    user: Option<SessionUser>,
) -> Result<HttpResponse, AppError> {
    if let Some(user) = user {
        sessions.close(&user.session_id);
        tracing::info!("User {} logged out (session {})", user.username, user.session_id);
    }

    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();

    let mut response = redirect("/app/login?logout");
    response
        .add_cookie(&cookie)
        .map_err(|e| AppError::Session(format!("Failed to clear session cookie: {}", e)))?;
    Ok(response)
}
