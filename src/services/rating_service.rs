use sea_orm::Set;

use crate::error::AppError;
use crate::models::dto::RatingForm;
use crate::models::rating;
use crate::services::crud_service::{CrudRecord, CrudService, required};
use crate::utils::password::PasswordEncoder;

pub struct RatingRecord;

pub type RatingService<'a> = CrudService<'a, RatingRecord>;

impl CrudRecord for RatingRecord {
    type Entity = rating::Entity;
    type Model = rating::Model;
    type ActiveModel = rating::ActiveModel;
    type PrimaryKey = rating::PrimaryKey;
    type Form = RatingForm;

    const LABEL: &'static str = "rating";

    fn id(model: &rating::Model) -> i32 {
        model.id
    }

    fn to_form(model: &rating::Model) -> RatingForm {
        RatingForm {
            moodys_rating: model.moodys_rating.clone(),
            sand_p_rating: model.sand_p_rating.clone(),
            fitch_rating: model.fitch_rating.clone(),
            order_number: Some(model.order_number),
        }
    }

    fn new_active_model(form: &RatingForm, _encoder: &PasswordEncoder) -> Result<rating::ActiveModel, AppError> {
        Ok(rating::ActiveModel {
            moodys_rating: Set(form.moodys_rating.clone()),
            sand_p_rating: Set(form.sand_p_rating.clone()),
            fitch_rating: Set(form.fitch_rating.clone()),
            order_number: Set(required(form.order_number, "order_number")?),
            ..Default::default()
        })
    }

    // Toujours persisté, même si les valeurs copiées sont identiques
    fn apply_update(
        active: &mut rating::ActiveModel,
        form: &RatingForm,
        _encoder: &PasswordEncoder,
    ) -> Result<(), AppError> {
        active.moodys_rating = Set(form.moodys_rating.clone());
        active.sand_p_rating = Set(form.sand_p_rating.clone());
        active.fitch_rating = Set(form.fitch_rating.clone());
        active.order_number = Set(required(form.order_number, "order_number")?);
        Ok(())
    }
}
