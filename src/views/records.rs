// Colonnes et champs affichés pour chaque table

use crate::models::{bid_list, curve_point, rating, rule_name, trade, users};
use crate::models::dto::{BidListForm, CurvePointForm, RatingForm, RuleNameForm, TradeForm, UserForm};
use crate::services::auth_service::{ROLE_ADMIN, ROLE_USER};
use crate::services::bid_list_service::BidListRecord;
use crate::services::curve_point_service::CurvePointRecord;
use crate::services::rating_service::RatingRecord;
use crate::services::rule_name_service::RuleNameRecord;
use crate::services::trade_service::TradeRecord;
use crate::services::user_service::UserRecord;
use crate::utils::form::display_number;
use crate::views::crud::{CrudView, FormField, InputKind};

const ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

impl CrudView for BidListRecord {
    const PATH: &'static str = "bidList";
    const TITLE: &'static str = "Bid List";
    const COLUMNS: &'static [&'static str] = &["Bid Id", "Account", "Type", "Bid Quantity"];

    fn row(model: &bid_list::Model) -> Vec<String> {
        vec![
            model.id.to_string(),
            model.account.clone(),
            model.bid_type.clone(),
            model.bid_quantity.to_string(),
        ]
    }

    fn fields(form: &BidListForm) -> Vec<FormField> {
        vec![
            FormField::new("account", "Account", form.account.as_str(), InputKind::Text),
            FormField::new("bid_type", "Type", form.bid_type.as_str(), InputKind::Text),
            FormField::new("bid_quantity", "Bid Quantity", display_number(form.bid_quantity), InputKind::Number),
        ]
    }
}

impl CrudView for CurvePointRecord {
    const PATH: &'static str = "curvePoint";
    const TITLE: &'static str = "Curve Point";
    const COLUMNS: &'static [&'static str] = &["Id", "Curve Point Id", "Term", "Value"];

    fn row(model: &curve_point::Model) -> Vec<String> {
        vec![
            model.id.to_string(),
            model.curve_id.to_string(),
            model.term.to_string(),
            model.curve_value.to_string(),
        ]
    }

    fn fields(form: &CurvePointForm) -> Vec<FormField> {
        vec![
            FormField::new("curve_id", "Curve Id", display_number(form.curve_id), InputKind::Number),
            FormField::new("term", "Term", display_number(form.term), InputKind::Number),
            FormField::new("curve_value", "Value", display_number(form.curve_value), InputKind::Number),
        ]
    }
}

impl CrudView for RatingRecord {
    const PATH: &'static str = "rating";
    const TITLE: &'static str = "Rating";
    const COLUMNS: &'static [&'static str] = &["Id", "Moody's Rating", "S&P Rating", "Fitch Rating", "Order"];

    fn row(model: &rating::Model) -> Vec<String> {
        vec![
            model.id.to_string(),
            model.moodys_rating.clone(),
            model.sand_p_rating.clone(),
            model.fitch_rating.clone(),
            model.order_number.to_string(),
        ]
    }

    fn fields(form: &RatingForm) -> Vec<FormField> {
        vec![
            FormField::new("moodys_rating", "Moody's Rating", form.moodys_rating.as_str(), InputKind::Text),
            FormField::new("sand_p_rating", "S&P Rating", form.sand_p_rating.as_str(), InputKind::Text),
            FormField::new("fitch_rating", "Fitch Rating", form.fitch_rating.as_str(), InputKind::Text),
            FormField::new("order_number", "Order Number", display_number(form.order_number), InputKind::Number),
        ]
    }
}

impl CrudView for RuleNameRecord {
    const PATH: &'static str = "ruleName";
    const TITLE: &'static str = "Rule";
    const COLUMNS: &'static [&'static str] =
        &["Id", "Name", "Description", "Json", "Template", "SQL", "SQL Part"];

    fn row(model: &rule_name::Model) -> Vec<String> {
        vec![
            model.id.to_string(),
            model.name.clone(),
            model.description.clone(),
            model.json.clone(),
            model.template.clone(),
            model.sql_str.clone(),
            model.sql_part.clone(),
        ]
    }

    fn fields(form: &RuleNameForm) -> Vec<FormField> {
        vec![
            FormField::new("name", "Name", form.name.as_str(), InputKind::Text),
            FormField::new("description", "Description", form.description.as_str(), InputKind::Text),
            FormField::new("json", "Json", form.json.as_str(), InputKind::TextArea),
            FormField::new("template", "Template", form.template.as_str(), InputKind::TextArea),
            FormField::new("sql_str", "SQL", form.sql_str.as_str(), InputKind::TextArea),
            FormField::new("sql_part", "SQL Part", form.sql_part.as_str(), InputKind::TextArea),
        ]
    }
}

impl CrudView for TradeRecord {
    const PATH: &'static str = "trade";
    const TITLE: &'static str = "Trade";
    const COLUMNS: &'static [&'static str] = &["Id", "Account", "Type", "Buy Quantity"];

    fn row(model: &trade::Model) -> Vec<String> {
        vec![
            model.id.to_string(),
            model.account.clone(),
            model.trade_type.clone(),
            model.buy_quantity.to_string(),
        ]
    }

    fn fields(form: &TradeForm) -> Vec<FormField> {
        vec![
            FormField::new("account", "Account", form.account.as_str(), InputKind::Text),
            FormField::new("trade_type", "Type", form.trade_type.as_str(), InputKind::Text),
            FormField::new("buy_quantity", "Buy Quantity", display_number(form.buy_quantity), InputKind::Number),
        ]
    }
}

impl CrudView for UserRecord {
    const PATH: &'static str = "user";
    const TITLE: &'static str = "User";
    const COLUMNS: &'static [&'static str] = &["Id", "Full Name", "User Name", "Role"];

    fn row(model: &users::Model) -> Vec<String> {
        vec![
            model.id.to_string(),
            model.fullname.clone(),
            model.username.clone(),
            model.role.clone(),
        ]
    }

    fn fields(form: &UserForm) -> Vec<FormField> {
        vec![
            FormField::new("username", "User Name", form.username.as_str(), InputKind::Text),
            FormField::new("password", "Password", "", InputKind::Password),
            FormField::new("fullname", "Full Name", form.fullname.as_str(), InputKind::Text),
            FormField::new("role", "Role", form.role.as_str(), InputKind::Select(ROLES)),
        ]
    }
}
