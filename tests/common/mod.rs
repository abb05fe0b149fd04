#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use sea_orm::DatabaseConnection;

use poseidon::config::AppConfig;
use poseidon::models::dto::UserForm;
use poseidon::models::users;
use poseidon::services::user_service::UserService;
use poseidon::utils::session::{SESSION_COOKIE, SessionRegistry};
use poseidon::{db, routes};

pub struct TestContext {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub sessions: web::Data<SessionRegistry>,
}

/// Base SQLite en mémoire, neuve pour chaque test
pub async fn setup() -> TestContext {
    let config = AppConfig::for_tests();
    let db = db::establish_connection(&config.database)
        .await
        .expect("failed to open in-memory database");
    db::init_schema(&db).await.expect("failed to create tables");

    TestContext { db, config, sessions: web::Data::new(SessionRegistry::default()) }
}

impl TestContext {
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.db.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .app_data(self.sessions.clone())
            .configure(routes::configure_routes)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(&self.db, self.config.password_encoder())
    }

    pub async fn create_user(&self, username: &str, password: &str, role: &str) -> users::Model {
        let form = UserForm {
            username: username.to_string(),
            password: password.to_string(),
            fullname: format!("{} Test", username),
            role: role.to_string(),
        };
        self.users().save(&form).await.expect("failed to create user")
    }
}

pub fn login_request(username: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/app/login")
        .set_form([("username", username), ("password", password)])
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text(resp: ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}
