use chrono::Utc;
use sea_orm::Set;

use crate::error::AppError;
use crate::models::dto::TradeForm;
use crate::models::trade;
use crate::services::crud_service::{CrudRecord, CrudService, required};
use crate::utils::password::PasswordEncoder;

pub struct TradeRecord;

pub type TradeService<'a> = CrudService<'a, TradeRecord>;

impl CrudRecord for TradeRecord {
    type Entity = trade::Entity;
    type Model = trade::Model;
    type ActiveModel = trade::ActiveModel;
    type PrimaryKey = trade::PrimaryKey;
    type Form = TradeForm;

    const LABEL: &'static str = "trade";

    fn id(model: &trade::Model) -> i32 {
        model.id
    }

    fn to_form(model: &trade::Model) -> TradeForm {
        TradeForm {
            account: model.account.clone(),
            trade_type: model.trade_type.clone(),
            buy_quantity: Some(model.buy_quantity),
        }
    }

    fn new_active_model(form: &TradeForm, _encoder: &PasswordEncoder) -> Result<trade::ActiveModel, AppError> {
        Ok(trade::ActiveModel {
            account: Set(form.account.clone()),
            trade_type: Set(form.trade_type.clone()),
            buy_quantity: Set(required(form.buy_quantity, "buy_quantity")?),
            creation_date: Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        })
    }

    /// Met à jour les champs modifiables; prix et champs d'audit restent inchangés
    fn apply_update(
        active: &mut trade::ActiveModel,
        form: &TradeForm,
        _encoder: &PasswordEncoder,
    ) -> Result<(), AppError> {
        active.account = Set(form.account.clone());
        active.trade_type = Set(form.trade_type.clone());
        active.buy_quantity = Set(required(form.buy_quantity, "buy_quantity")?);
        Ok(())
    }
}
