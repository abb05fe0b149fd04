use chrono::Utc;
use sea_orm::Set;

use crate::error::AppError;
use crate::models::bid_list;
use crate::models::dto::BidListForm;
use crate::services::crud_service::{CrudRecord, CrudService, required};
use crate::utils::password::PasswordEncoder;

pub struct BidListRecord;

pub type BidListService<'a> = CrudService<'a, BidListRecord>;

impl CrudRecord for BidListRecord {
    type Entity = bid_list::Entity;
    type Model = bid_list::Model;
    type ActiveModel = bid_list::ActiveModel;
    type PrimaryKey = bid_list::PrimaryKey;
    type Form = BidListForm;

    const LABEL: &'static str = "bid";

    fn id(model: &bid_list::Model) -> i32 {
        model.id
    }

    fn to_form(model: &bid_list::Model) -> BidListForm {
        BidListForm {
            account: model.account.clone(),
            bid_type: model.bid_type.clone(),
            bid_quantity: Some(model.bid_quantity),
        }
    }

    fn new_active_model(form: &BidListForm, _encoder: &PasswordEncoder) -> Result<bid_list::ActiveModel, AppError> {
        Ok(bid_list::ActiveModel {
            account: Set(form.account.clone()),
            bid_type: Set(form.bid_type.clone()),
            bid_quantity: Set(required(form.bid_quantity, "bid_quantity")?),
            creation_date: Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        })
    }

    // Seuls account, type et bid_quantity sont modifiables
    fn apply_update(
        active: &mut bid_list::ActiveModel,
        form: &BidListForm,
        _encoder: &PasswordEncoder,
    ) -> Result<(), AppError> {
        active.account = Set(form.account.clone());
        active.bid_type = Set(form.bid_type.clone());
        active.bid_quantity = Set(required(form.bid_quantity, "bid_quantity")?);
        Ok(())
    }
}
