// Les six routes CRUD, enregistrées une fois par table: /{path}/list, /add, /validate, ...

use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::middleware::SessionUser;
use crate::routes::{html, redirect};
use crate::services::crud_service::{CrudRecord, CrudService};
use crate::views::crud::{self as view, CrudView, FormMode};

pub fn crud_routes<R: CrudView>(cfg: &mut web::ServiceConfig) {
    let path = R::PATH;

    cfg.route(&format!("/{}/list", path), web::get().to(list::<R>))
        .route(&format!("/{}/add", path), web::get().to(add_form::<R>))
        .route(&format!("/{}/validate", path), web::post().to(validate::<R>))
        .service(
            web::resource(format!("/{}/update/{{id}}", path))
                .route(web::get().to(update_form::<R>))
                .route(web::post().to(update::<R>)),
        )
        .route(&format!("/{}/delete/{{id}}", path), web::get().to(delete::<R>));
}

fn service<'a, R: CrudRecord>(db: &'a DatabaseConnection, config: &AppConfig) -> CrudService<'a, R> {
    CrudService::new(db, config.password_encoder())
}

/// GET /{path}/list
pub async fn list<R: CrudView>(
    db: web::Data<DatabaseConnection>,
    config: web::Data<AppConfig>,
    user: SessionUser,
) -> Result<HttpResponse, AppError> {
    let records = service::<R>(&db, &config).get_all().await?;

    Ok(html(view::list_page::<R>(&user, &records)))
}

/// GET /{path}/add
pub async fn add_form<R: CrudView>(user: SessionUser) -> Result<HttpResponse, AppError> {
    Ok(html(view::form_page::<R>(&user, FormMode::Add, &<R::Form as Default>::default(), None)))
}

/// POST /{path}/validate
/// Formulaire invalide: ré-affiché avec les erreurs, rien n'est écrit
pub async fn validate<R: CrudView>(
    db: web::Data<DatabaseConnection>,
    config: web::Data<AppConfig>,
    user: SessionUser,
    form: web::Form<R::Form>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match service::<R>(&db, &config).save(&form).await {
        Ok(model) => {
            tracing::info!("{} {} created by {}", R::LABEL, R::id(&model), user.username);
            Ok(redirect(&view::list_url::<R>()))
        }
        Err(AppError::Validation(errors)) => {
            tracing::debug!("Invalid {} submitted: {:?}", R::LABEL, form);
            Ok(html(view::form_page::<R>(&user, FormMode::Add, &form, Some(&errors))))
        }
        Err(e) => Err(e),
    }
}

/// GET /{path}/update/{id}
pub async fn update_form<R: CrudView>(
    db: web::Data<DatabaseConnection>,
    config: web::Data<AppConfig>,
    user: SessionUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let model = service::<R>(&db, &config).get_by_id(id).await?;

    Ok(html(view::form_page::<R>(&user, FormMode::Update(id), &R::to_form(&model), None)))
}

/// POST /{path}/update/{id}
pub async fn update<R: CrudView>(
    db: web::Data<DatabaseConnection>,
    config: web::Data<AppConfig>,
    user: SessionUser,
    path: web::Path<i32>,
    form: web::Form<R::Form>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let form = form.into_inner();

    match service::<R>(&db, &config).update(id, &form).await {
        Ok(_) => {
            tracing::info!("{} {} updated by {}", R::LABEL, id, user.username);
            Ok(redirect(&view::list_url::<R>()))
        }
        Err(AppError::Validation(errors)) => {
            tracing::debug!("Invalid {} update for {}: {:?}", R::LABEL, id, form);
            Ok(html(view::form_page::<R>(&user, FormMode::Update(id), &form, Some(&errors))))
        }
        Err(e) => Err(e),
    }
}

/// GET /{path}/delete/{id}
pub async fn delete<R: CrudView>(
    db: web::Data<DatabaseConnection>,
    config: web::Data<AppConfig>,
    user: SessionUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service::<R>(&db, &config).delete(id).await?;

    tracing::info!("{} {} deleted by {}", R::LABEL, id, user.username);
    Ok(redirect(&view::list_url::<R>()))
}
