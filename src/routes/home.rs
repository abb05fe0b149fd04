use actix_web::{HttpResponse, get, web};

use crate::middleware::SessionUser;
use crate::routes::{html, redirect};
use crate::views;

pub fn home_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(admin_home).service(stylesheet);
}

/// GET / - Accueil (PUBLIC)
#[get("/")]
pub async fn home(user: Option<SessionUser>) -> HttpResponse {
    html(views::pages::home(user.as_ref()))
}

/// GET /admin/home
#[get("/admin/home")]
pub async fn admin_home(_user: SessionUser) -> HttpResponse {
    redirect("/bidList/list")
}

#[get("/css/style.css")]
pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(views::STYLESHEET)
}
