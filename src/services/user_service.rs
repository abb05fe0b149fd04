use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::config::AdminSeed;
use crate::error::AppError;
use crate::models::dto::UserForm;
use crate::models::users;
use crate::services::auth_service::ROLE_ADMIN;
use crate::services::crud_service::{CrudRecord, CrudService};
use crate::utils::password::PasswordEncoder;

pub struct UserRecord;

pub type UserService<'a> = CrudService<'a, UserRecord>;

impl CrudRecord for UserRecord {
    type Entity = users::Entity;
    type Model = users::Model;
    type ActiveModel = users::ActiveModel;
    type PrimaryKey = users::PrimaryKey;
    type Form = UserForm;

    const LABEL: &'static str = "user";
    const UNIQUE_FIELD: Option<(&'static str, &'static str)> =
        Some(("username", "Username is already taken"));

    fn id(model: &users::Model) -> i32 {
        model.id
    }

    /// Le mot de passe n'est jamais pré-rempli dans le formulaire d'édition
    fn to_form(model: &users::Model) -> UserForm {
        UserForm {
            username: model.username.clone(),
            password: String::new(),
            fullname: model.fullname.clone(),
            role: model.role.clone(),
        }
    }

    fn new_active_model(form: &UserForm, encoder: &PasswordEncoder) -> Result<users::ActiveModel, AppError> {
        Ok(users::ActiveModel {
            username: Set(form.username.trim().to_string()),
            password: Set(encoder.encode(&form.password)?),
            fullname: Set(form.fullname.clone()),
            role: Set(form.role.clone()),
            ..Default::default()
        })
    }

    // Les quatre champs sont remplacés, le nouveau mot de passe est hashé
    fn apply_update(
        active: &mut users::ActiveModel,
        form: &UserForm,
        encoder: &PasswordEncoder,
    ) -> Result<(), AppError> {
        active.username = Set(form.username.trim().to_string());
        active.password = Set(encoder.encode(&form.password)?);
        active.fullname = Set(form.fullname.clone());
        active.role = Set(form.role.clone());
        Ok(())
    }
}

impl<'a> CrudService<'a, UserRecord> {
    pub async fn find_by_username(&self, username: &str) -> Result<Option<users::Model>, AppError> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username.trim()))
            .one(self.db)
            .await?;

        Ok(user)
    }

    /// Crée le compte administrateur par défaut s'il n'existe pas encore
    pub async fn ensure_default_admin(&self, seed: &AdminSeed) -> Result<(), AppError> {
        // 1. Sans mot de passe configuré, pas de compte par défaut
        let Some(password) = seed.password.as_deref() else {
            tracing::warn!("ADMIN_PASSWORD not set, default admin '{}' not created", seed.username);
            return Ok(());
        };

        // 2. Vérifier si l'utilisateur par défaut existe
        if self.find_by_username(&seed.username).await?.is_some() {
            tracing::debug!("Default admin '{}' already exists", seed.username);
            return Ok(());
        }

        // 3. Créer l'admin via le chemin normal (validation + hash)
        let form = UserForm {
            username: seed.username.clone(),
            password: password.to_string(),
            fullname: seed.fullname.clone(),
            role: ROLE_ADMIN.to_string(),
        };
        let admin = self.save(&form).await?;
        tracing::info!("Default admin user created: {} (id {})", admin.username, admin.id);

        Ok(())
    }
}
