// Formulaires soumis par les vues HTML (application/x-www-form-urlencoded)
// La validation est déclarative: rien n'est écrit tant que validate() échoue

use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::utils::form::{lenient_float, lenient_number};

pub const PASSWORD_SPECIAL_CHARS: &str = "@#$!?%^&+=";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BidListForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Account must be between 1 and 50 characters"))]
    pub account: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Type must be between 1 and 50 characters"))]
    pub bid_type: String,
    #[serde(default, deserialize_with = "lenient_float")]
    #[validate(
        required(message = "Bid quantity is mandatory"),
        range(min = 0.0, message = "Bid quantity must be greater than or equal to zero")
    )]
    pub bid_quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CurvePointForm {
    #[serde(default, deserialize_with = "lenient_number")]
    #[validate(
        required(message = "Curve ID is mandatory"),
        range(min = 1, message = "Curve ID must be greater than or equal to 1")
    )]
    pub curve_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient_float")]
    #[validate(
        required(message = "Term is mandatory"),
        range(exclusive_min = 0.0, message = "Term must be greater than 0")
    )]
    pub term: Option<f64>,
    #[serde(default, deserialize_with = "lenient_float")]
    #[validate(required(message = "Value is mandatory"))]
    pub curve_value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RatingForm {
    #[serde(default)]
    #[validate(length(max = 125, message = "Moody's rating must be at most 125 characters."))]
    pub moodys_rating: String,
    #[serde(default)]
    #[validate(length(max = 125, message = "S&P rating must be at most 125 characters."))]
    pub sand_p_rating: String,
    #[serde(default)]
    #[validate(length(max = 125, message = "Fitch rating must be at most 125 characters."))]
    pub fitch_rating: String,
    #[serde(default, deserialize_with = "lenient_number")]
    #[validate(
        required(message = "Order number is mandatory."),
        range(min = 1, max = 255, message = "Order number must be between 1 and 255.")
    )]
    pub order_number: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RuleNameForm {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is mandatory"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Description is mandatory"))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Json is mandatory"))]
    pub json: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Template is mandatory"))]
    pub template: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "SQL string is mandatory"))]
    pub sql_str: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "SQL part is mandatory"))]
    pub sql_part: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TradeForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 30, message = "Account must be between 1 and 30 characters"))]
    pub account: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 30, message = "Type must be between 1 and 30 characters"))]
    pub trade_type: String,
    #[serde(default, deserialize_with = "lenient_float")]
    #[validate(
        required(message = "Buy quantity is mandatory"),
        range(min = 1.0, message = "Buy quantity must be greater than zero")
    )]
    pub buy_quantity: Option<f64>,
}

/// Le mot de passe est en clair ici: il est hashé avant d'atteindre la BD
#[derive(Clone, Default, Deserialize, Validate)]
pub struct UserForm {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Username is mandatory"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(
        function = "password_complexity",
        message = "Password must contain at least 8 characters, one uppercase letter, one lowercase letter, one digit and one special character (@#$!?%^&+=)"
    ))]
    pub password: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Full name is mandatory"))]
    pub fullname: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Role is mandatory"))]
    pub role: String,
}

// Debug manuel pour ne jamais logger le mot de passe
impl std::fmt::Debug for UserForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserForm")
            .field("username", &self.username)
            .field("fullname", &self.fullname)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Au moins 8 caractères, une minuscule, une majuscule, un chiffre et un caractère spécial
pub fn password_complexity(value: &str) -> Result<(), ValidationError> {
    let long_enough = value.chars().count() >= 8;
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if long_enough && has_lower && has_upper && has_digit && has_special {
        Ok(())
    } else {
        Err(ValidationError::new("password_complexity"))
    }
}

/// Erreur de champ ajoutée après coup (ex: contrainte d'unicité en BD)
pub fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(result: Result<(), validator::ValidationErrors>, field: &str) -> bool {
        match result {
            Ok(()) => false,
            Err(errors) => errors.field_errors().contains_key(field),
        }
    }

    #[test]
    fn test_bid_list_form() {
        let valid = BidListForm {
            account: "Account Test".to_string(),
            bid_type: "Type Test".to_string(),
            bid_quantity: Some(10.0),
        };
        assert!(valid.validate().is_ok());

        let blank = BidListForm { account: String::new(), ..valid.clone() };
        assert!(has_error(blank.validate(), "account"));

        let too_long = BidListForm { bid_type: "x".repeat(51), ..valid.clone() };
        assert!(has_error(too_long.validate(), "bid_type"));

        let negative = BidListForm { bid_quantity: Some(-1.0), ..valid.clone() };
        assert!(has_error(negative.validate(), "bid_quantity"));

        let missing = BidListForm { bid_quantity: None, ..valid };
        assert!(has_error(missing.validate(), "bid_quantity"));
    }

    #[test]
    fn test_curve_point_form() {
        let valid = CurvePointForm { curve_id: Some(1), term: Some(10.0), curve_value: Some(30.0) };
        assert!(valid.validate().is_ok());

        let zero_curve = CurvePointForm { curve_id: Some(0), ..valid.clone() };
        assert!(has_error(zero_curve.validate(), "curve_id"));

        let zero_term = CurvePointForm { term: Some(0.0), ..valid.clone() };
        assert!(has_error(zero_term.validate(), "term"));

        let no_value = CurvePointForm { curve_value: None, ..valid };
        assert!(has_error(no_value.validate(), "curve_value"));
    }

    #[test]
    fn test_rating_form() {
        let valid = RatingForm {
            moodys_rating: "Aaa".to_string(),
            sand_p_rating: "AAA".to_string(),
            fitch_rating: "AAA".to_string(),
            order_number: Some(10),
        };
        assert!(valid.validate().is_ok());

        let long_rating = RatingForm { fitch_rating: "A".repeat(126), ..valid.clone() };
        assert!(has_error(long_rating.validate(), "fitch_rating"));

        let order_low = RatingForm { order_number: Some(0), ..valid.clone() };
        assert!(has_error(order_low.validate(), "order_number"));

        let order_high = RatingForm { order_number: Some(256), ..valid };
        assert!(has_error(order_high.validate(), "order_number"));
    }

    #[test]
    fn test_rule_name_form_rejects_blank_fields() {
        let valid = RuleNameForm {
            name: "Rule".to_string(),
            description: "Description".to_string(),
            json: "{}".to_string(),
            template: "Template".to_string(),
            sql_str: "SELECT 1".to_string(),
            sql_part: "WHERE 1 = 1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let blank = RuleNameForm { sql_part: "   ".to_string(), ..valid };
        assert!(has_error(blank.validate(), "sql_part"));
    }

    #[test]
    fn test_trade_form() {
        let valid = TradeForm {
            account: "Trade Account".to_string(),
            trade_type: "Type".to_string(),
            buy_quantity: Some(1.0),
        };
        assert!(valid.validate().is_ok());

        let too_long = TradeForm { account: "x".repeat(31), ..valid.clone() };
        assert!(has_error(too_long.validate(), "account"));

        let zero = TradeForm { buy_quantity: Some(0.5), ..valid };
        assert!(has_error(zero.validate(), "buy_quantity"));
    }

    #[test]
    fn test_non_finite_quantities_are_missing() {
        let bid = actix_web::web::Query::<BidListForm>::from_query("account=A&bid_type=T&bid_quantity=NaN")
            .unwrap()
            .into_inner();
        assert_eq!(bid.bid_quantity, None);
        assert!(has_error(bid.validate(), "bid_quantity"));

        let trade = actix_web::web::Query::<TradeForm>::from_query("account=A&trade_type=T&buy_quantity=inf")
            .unwrap()
            .into_inner();
        assert_eq!(trade.buy_quantity, None);
        assert!(has_error(trade.validate(), "buy_quantity"));
    }

    #[test]
    fn test_password_complexity() {
        assert!(password_complexity("Abc123@!").is_ok());
        assert!(password_complexity("P@ssw0rd").is_ok());

        assert!(password_complexity("Ab1@").is_err()); // trop court
        assert!(password_complexity("abc123@!").is_err()); // pas de majuscule
        assert!(password_complexity("ABC123@!").is_err()); // pas de minuscule
        assert!(password_complexity("Abcdef@!").is_err()); // pas de chiffre
        assert!(password_complexity("Abc12345").is_err()); // pas de caractère spécial
        assert!(password_complexity("").is_err());
    }

    #[test]
    fn test_user_form_messages() {
        let form = UserForm {
            username: " ".to_string(),
            password: "weak".to_string(),
            fullname: "Joe Doe".to_string(),
            role: "USER".to_string(),
        };

        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("fullname"));

        let message = fields["username"][0].message.as_deref();
        assert_eq!(message, Some("Username is mandatory"));
    }

    #[test]
    fn test_user_form_debug_hides_password() {
        let form = UserForm {
            username: "Joe".to_string(),
            password: "Abc123@!".to_string(),
            fullname: "Joe Doe".to_string(),
            role: "USER".to_string(),
        };

        assert!(!format!("{:?}", form).contains("Abc123@!"));
    }
}
