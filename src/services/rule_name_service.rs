use sea_orm::Set;

use crate::error::AppError;
use crate::models::dto::RuleNameForm;
use crate::models::rule_name;
use crate::services::crud_service::{CrudRecord, CrudService};
use crate::utils::password::PasswordEncoder;

pub struct RuleNameRecord;

pub type RuleNameService<'a> = CrudService<'a, RuleNameRecord>;

impl CrudRecord for RuleNameRecord {
    type Entity = rule_name::Entity;
    type Model = rule_name::Model;
    type ActiveModel = rule_name::ActiveModel;
    type PrimaryKey = rule_name::PrimaryKey;
    type Form = RuleNameForm;

    const LABEL: &'static str = "rule";

    fn id(model: &rule_name::Model) -> i32 {
        model.id
    }

    fn to_form(model: &rule_name::Model) -> RuleNameForm {
        RuleNameForm {
            name: model.name.clone(),
            description: model.description.clone(),
            json: model.json.clone(),
            template: model.template.clone(),
            sql_str: model.sql_str.clone(),
            sql_part: model.sql_part.clone(),
        }
    }

    fn new_active_model(form: &RuleNameForm, _encoder: &PasswordEncoder) -> Result<rule_name::ActiveModel, AppError> {
        Ok(rule_name::ActiveModel {
            name: Set(form.name.clone()),
            description: Set(form.description.clone()),
            json: Set(form.json.clone()),
            template: Set(form.template.clone()),
            sql_str: Set(form.sql_str.clone()),
            sql_part: Set(form.sql_part.clone()),
            ..Default::default()
        })
    }

    fn apply_update(
        active: &mut rule_name::ActiveModel,
        form: &RuleNameForm,
        _encoder: &PasswordEncoder,
    ) -> Result<(), AppError> {
        active.name = Set(form.name.clone());
        active.description = Set(form.description.clone());
        active.json = Set(form.json.clone());
        active.template = Set(form.template.clone());
        active.sql_str = Set(form.sql_str.clone());
        active.sql_part = Set(form.sql_part.clone());
        Ok(())
    }
}
