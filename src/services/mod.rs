pub mod auth_service;
pub mod bid_list_service;
pub mod crud_service;
pub mod curve_point_service;
pub mod rating_service;
pub mod rule_name_service;
pub mod trade_service;
pub mod user_service;
