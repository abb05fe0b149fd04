pub mod auth;
pub mod crud;
pub mod home;

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use crate::services::bid_list_service::BidListRecord;
use crate::services::curve_point_service::CurvePointRecord;
use crate::services::rating_service::RatingRecord;
use crate::services::rule_name_service::RuleNameRecord;
use crate::services::trade_service::TradeRecord;
use crate::services::user_service::UserRecord;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(home::home_routes)
        .configure(auth::auth_routes)
        .configure(crud::crud_routes::<BidListRecord>)
        .configure(crud::crud_routes::<CurvePointRecord>)
        .configure(crud::crud_routes::<RatingRecord>)
        .configure(crud::crud_routes::<RuleNameRecord>)
        .configure(crud::crud_routes::<TradeRecord>)
        .configure(crud::crud_routes::<UserRecord>);
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
