use chrono::Utc;
use sea_orm::Set;

use crate::error::AppError;
use crate::models::curve_point;
use crate::models::dto::CurvePointForm;
use crate::services::crud_service::{CrudRecord, CrudService, required};
use crate::utils::password::PasswordEncoder;

pub struct CurvePointRecord;

pub type CurvePointService<'a> = CrudService<'a, CurvePointRecord>;

impl CrudRecord for CurvePointRecord {
    type Entity = curve_point::Entity;
    type Model = curve_point::Model;
    type ActiveModel = curve_point::ActiveModel;
    type PrimaryKey = curve_point::PrimaryKey;
    type Form = CurvePointForm;

    const LABEL: &'static str = "curve point";

    fn id(model: &curve_point::Model) -> i32 {
        model.id
    }

    fn to_form(model: &curve_point::Model) -> CurvePointForm {
        CurvePointForm {
            curve_id: Some(model.curve_id),
            term: Some(model.term),
            curve_value: Some(model.curve_value),
        }
    }

    fn new_active_model(form: &CurvePointForm, _encoder: &PasswordEncoder) -> Result<curve_point::ActiveModel, AppError> {
        Ok(curve_point::ActiveModel {
            curve_id: Set(required(form.curve_id, "curve_id")?),
            term: Set(required(form.term, "term")?),
            curve_value: Set(required(form.curve_value, "curve_value")?),
            creation_date: Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        })
    }

    fn apply_update(
        active: &mut curve_point::ActiveModel,
        form: &CurvePointForm,
        _encoder: &PasswordEncoder,
    ) -> Result<(), AppError> {
        active.curve_id = Set(required(form.curve_id, "curve_id")?);
        active.term = Set(required(form.term, "term")?);
        active.curve_value = Set(required(form.curve_value, "curve_value")?);
        Ok(())
    }
}
