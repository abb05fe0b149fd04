use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    IntoActiveModel, ModelTrait, PrimaryKeyTrait, SqlErr,
};
use validator::{Validate, ValidationErrors};

use crate::error::AppError;
use crate::models::dto::field_error;
use crate::utils::password::PasswordEncoder;

/// Décrit une table gérée en CRUD: entité SeaORM, formulaire, et champs copiés par update
pub trait CrudRecord: Sized + 'static {
    type Entity: EntityTrait<
            Model = Self::Model,
            ActiveModel = Self::ActiveModel,
            PrimaryKey = Self::PrimaryKey,
        >;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Clone
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;
    type PrimaryKey: PrimaryKeyTrait<ValueType = i32>;
    type Form: Validate + Clone + Default + std::fmt::Debug + serde::de::DeserializeOwned + Send + 'static;

    /// Nom utilisé dans les messages et les logs ("bid", "trade", ...)
    const LABEL: &'static str;

    /// (champ, message) d'une contrainte d'unicité en BD, remontée comme erreur de formulaire
    const UNIQUE_FIELD: Option<(&'static str, &'static str)> = None;

    fn id(model: &Self::Model) -> i32;

    /// Pré-remplit le formulaire d'édition
    fn to_form(model: &Self::Model) -> Self::Form;

    /// Construit la nouvelle ligne à partir d'un formulaire déjà validé
    fn new_active_model(form: &Self::Form, encoder: &PasswordEncoder) -> Result<Self::ActiveModel, AppError>;

    /// Copie uniquement les champs métier sur la ligne existante
    fn apply_update(
        active: &mut Self::ActiveModel,
        form: &Self::Form,
        encoder: &PasswordEncoder,
    ) -> Result<(), AppError>;
}

/// Opérations CRUD communes aux six tables
pub struct CrudService<'a, R> {
    pub(super) db: &'a DatabaseConnection,
    pub(super) encoder: PasswordEncoder,
    _record: PhantomData<R>,
}

impl<'a, R: CrudRecord> CrudService<'a, R> {
    pub fn new(db: &'a DatabaseConnection, encoder: PasswordEncoder) -> Self {
        Self { db, encoder, _record: PhantomData }
    }

    /// Retourne toutes les lignes, dans l'ordre natif de la BD
    pub async fn get_all(&self) -> Result<Vec<R::Model>, AppError> {
        Ok(R::Entity::find().all(self.db).await?)
    }

    /// Valide puis insère; l'id est attribué par la BD
    pub async fn save(&self, form: &R::Form) -> Result<R::Model, AppError> {
        form.validate()?;

        let active = R::new_active_model(form, &self.encoder)?;
        let model = active.insert(self.db).await.map_err(map_write_error::<R>)?;

        tracing::debug!("{} {} created", R::LABEL, R::id(&model));
        Ok(model)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<R::Model, AppError> {
        R::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Specified {} not found : {}", R::LABEL, id);
                not_found::<R>()
            })
    }

    /// Fetch, copie des champs métier, save. Pas de verrou: la dernière écriture gagne
    pub async fn update(&self, id: i32, form: &R::Form) -> Result<R::Model, AppError> {
        form.validate()?;

        let existing = self.get_by_id(id).await?;
        let mut active = existing.into_active_model();
        R::apply_update(&mut active, form, &self.encoder)?;

        let model = active.update(self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                tracing::warn!("{} {} disappeared before update", R::LABEL, id);
                not_found::<R>()
            }
            other => map_write_error::<R>(other),
        })?;

        tracing::debug!("{} {} updated", R::LABEL, id);
        Ok(model)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = R::Entity::delete_by_id(id).exec(self.db).await?;

        if result.rows_affected == 0 {
            tracing::warn!("{} with id {} not found for deletion", R::LABEL, id);
            return Err(not_found::<R>());
        }

        tracing::debug!("{} {} deleted", R::LABEL, id);
        Ok(())
    }
}

/// Valeur d'un champ obligatoire; `validate()` a déjà garanti sa présence
pub fn required<T: Copy>(value: Option<T>, field: &'static str) -> Result<T, AppError> {
    value.ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add(field, field_error("required", "This field is mandatory"));
        AppError::Validation(errors)
    })
}

fn not_found<R: CrudRecord>() -> AppError {
    AppError::not_found(format!("Specified {} not found", R::LABEL))
}

fn map_write_error<R: CrudRecord>(error: DbErr) -> AppError {
    match (R::UNIQUE_FIELD, error.sql_err()) {
        (Some((field, message)), Some(SqlErr::UniqueConstraintViolation(_))) => {
            let mut errors = ValidationErrors::new();
            errors.add(field, field_error("unique", message));
            AppError::Validation(errors)
        }
        _ => AppError::Database(error),
    }
}
