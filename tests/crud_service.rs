mod common;

use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};

use poseidon::error::AppError;
use poseidon::models::dto::{
    BidListForm, CurvePointForm, RatingForm, RuleNameForm, TradeForm, UserForm,
};
use poseidon::models::{bid_list, users};
use poseidon::services::bid_list_service::BidListService;
use poseidon::services::crud_service::{CrudRecord, CrudService};
use poseidon::services::curve_point_service::CurvePointService;
use poseidon::services::rating_service::RatingService;
use poseidon::services::rule_name_service::RuleNameService;
use poseidon::services::trade_service::TradeService;

fn bid_form() -> BidListForm {
    BidListForm {
        account: "Account Test".to_string(),
        bid_type: "Type Test".to_string(),
        bid_quantity: Some(10.0),
    }
}

fn rule_form() -> RuleNameForm {
    RuleNameForm {
        name: "Rule Name".to_string(),
        description: "Description".to_string(),
        json: "Json".to_string(),
        template: "Template".to_string(),
        sql_str: "SQL".to_string(),
        sql_part: "SQL Part".to_string(),
    }
}

#[tokio::test]
async fn bid_list_crud_lifecycle() -> Result<()> {
    let ctx = common::setup().await;
    let service = BidListService::new(&ctx.db, ctx.config.password_encoder());

    let created = service.save(&bid_form()).await?;
    assert!(created.id > 0);
    assert!(created.creation_date.is_some());

    let fetched = service.get_by_id(created.id).await?;
    assert_eq!(fetched.account, "Account Test");
    assert_eq!(fetched.bid_quantity, 10.0);

    let updated = service
        .update(created.id, &BidListForm { bid_quantity: Some(20.0), ..bid_form() })
        .await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.bid_quantity, 20.0);

    service.delete(created.id).await?;
    assert!(service.get_all().await?.is_empty());
    assert!(matches!(service.get_by_id(created.id).await, Err(AppError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn update_keeps_audit_fields() -> Result<()> {
    let ctx = common::setup().await;
    let service = BidListService::new(&ctx.db, ctx.config.password_encoder());

    let created = service.save(&bid_form()).await?;

    // champs hors formulaire, renseignés directement en BD
    let mut active = created.clone().into_active_model();
    active.creation_name = Set(Some("importer".to_string()));
    active.commentary = Set(Some("first import".to_string()));
    active.update(&ctx.db).await?;

    let form = BidListForm { account: "Other Account".to_string(), ..bid_form() };
    service.update(created.id, &form).await?;

    let stored = bid_list::Entity::find_by_id(created.id)
        .one(&ctx.db)
        .await?
        .expect("bid should still exist");
    assert_eq!(stored.account, "Other Account");
    assert_eq!(stored.creation_name.as_deref(), Some("importer"));
    assert_eq!(stored.commentary.as_deref(), Some("first import"));
    assert_eq!(stored.creation_date, created.creation_date);
    Ok(())
}

#[tokio::test]
async fn invalid_form_writes_nothing() -> Result<()> {
    let ctx = common::setup().await;
    let service = BidListService::new(&ctx.db, ctx.config.password_encoder());

    let result = service.save(&BidListForm { bid_quantity: None, ..bid_form() }).await;
    match result {
        Err(AppError::Validation(errors)) => {
            assert!(errors.field_errors().contains_key("bid_quantity"))
        }
        other => panic!("expected a validation error, got {:?}", other.map(|m| m.id)),
    }

    assert!(service.get_all().await?.is_empty());
    Ok(())
}

/// Update et delete d'un id absent: NotFound, et aucune ligne ajoutée ou supprimée
async fn assert_missing_id<R: CrudRecord>(service: &CrudService<'_, R>, form: &R::Form) -> Result<()> {
    let before = service.get_all().await?.len();
    assert!(before > 0, "{} table should be seeded", R::LABEL);

    assert!(matches!(service.get_by_id(999).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.update(999, form).await, Err(AppError::NotFound(_))), "{} update", R::LABEL);
    assert!(matches!(service.delete(999).await, Err(AppError::NotFound(_))), "{} delete", R::LABEL);

    assert_eq!(service.get_all().await?.len(), before, "{} rows changed", R::LABEL);
    Ok(())
}

#[tokio::test]
async fn missing_ids_are_not_found_for_every_table() -> Result<()> {
    let ctx = common::setup().await;
    let encoder = ctx.config.password_encoder();

    let bids = BidListService::new(&ctx.db, encoder);
    bids.save(&bid_form()).await?;
    assert_missing_id(&bids, &bid_form()).await?;

    let curve_form = CurvePointForm { curve_id: Some(10), term: Some(10.0), curve_value: Some(30.0) };
    let curves = CurvePointService::new(&ctx.db, encoder);
    curves.save(&curve_form).await?;
    assert_missing_id(&curves, &curve_form).await?;

    let rating_form = RatingForm {
        moodys_rating: "Aaa".to_string(),
        sand_p_rating: "AAA".to_string(),
        fitch_rating: "AAA".to_string(),
        order_number: Some(1),
    };
    let ratings = RatingService::new(&ctx.db, encoder);
    ratings.save(&rating_form).await?;
    assert_missing_id(&ratings, &rating_form).await?;

    let rules = RuleNameService::new(&ctx.db, encoder);
    rules.save(&rule_form()).await?;
    assert_missing_id(&rules, &rule_form()).await?;

    let trade_form = TradeForm {
        account: "Trade Account".to_string(),
        trade_type: "Type".to_string(),
        buy_quantity: Some(10.0),
    };
    let trades = TradeService::new(&ctx.db, encoder);
    trades.save(&trade_form).await?;
    assert_missing_id(&trades, &trade_form).await?;

    ctx.create_user("Joe", "Abc123@!", "USER").await;
    let user_form = UserForm {
        username: "Jane".to_string(),
        password: "Abc123@!".to_string(),
        fullname: "Jane Doe".to_string(),
        role: "USER".to_string(),
    };
    assert_missing_id(&ctx.users(), &user_form).await?;
    Ok(())
}

#[tokio::test]
async fn curve_point_rating_trade_and_rule_lifecycle() -> Result<()> {
    let ctx = common::setup().await;
    let encoder = ctx.config.password_encoder();

    let curves = CurvePointService::new(&ctx.db, encoder);
    let curve = curves
        .save(&CurvePointForm { curve_id: Some(10), term: Some(10.0), curve_value: Some(30.0) })
        .await?;
    assert!(curve.creation_date.is_some());
    let curve = curves
        .update(curve.id, &CurvePointForm { curve_id: Some(20), term: Some(10.0), curve_value: Some(30.0) })
        .await?;
    assert_eq!(curve.curve_id, 20);

    let ratings = RatingService::new(&ctx.db, encoder);
    let rating_form = RatingForm {
        moodys_rating: "Moodys Rating".to_string(),
        sand_p_rating: "Sand PRating".to_string(),
        fitch_rating: "Fitch Rating".to_string(),
        order_number: Some(10),
    };
    let rating = ratings.save(&rating_form).await?;
    let rating = ratings
        .update(rating.id, &RatingForm { order_number: Some(20), ..rating_form })
        .await?;
    assert_eq!(rating.order_number, 20);
    assert_eq!(ratings.get_by_id(rating.id).await?.order_number, 20);

    let trades = TradeService::new(&ctx.db, encoder);
    let trade = trades
        .save(&TradeForm {
            account: "Trade Account".to_string(),
            trade_type: "Type".to_string(),
            buy_quantity: Some(10.0),
        })
        .await?;
    assert!(trade.creation_date.is_some());
    let trade = trades
        .update(trade.id, &TradeForm {
            account: "Trade Account Update".to_string(),
            trade_type: "Type".to_string(),
            buy_quantity: Some(10.0),
        })
        .await?;
    assert_eq!(trade.account, "Trade Account Update");

    let rules = RuleNameService::new(&ctx.db, encoder);
    let rule = rules.save(&rule_form()).await?;
    let rule = rules
        .update(rule.id, &RuleNameForm { name: "Rule Name Update".to_string(), ..rule_form() })
        .await?;
    assert_eq!(rule.name, "Rule Name Update");

    curves.delete(curve.id).await?;
    ratings.delete(rating.id).await?;
    trades.delete(trade.id).await?;
    rules.delete(rule.id).await?;
    assert!(curves.get_all().await?.is_empty());
    assert!(ratings.get_all().await?.is_empty());
    assert!(trades.get_all().await?.is_empty());
    assert!(rules.get_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn user_password_is_hashed() -> Result<()> {
    let ctx = common::setup().await;

    let user = ctx.create_user("Joe", "Abc123@!", "USER").await;
    assert_ne!(user.password, "Abc123@!");
    assert!(user.password.starts_with("pbkdf2:sha256:"));
    assert!(ctx.config.password_encoder().matches("Abc123@!", &user.password)?);

    let form = UserForm {
        username: "Joe".to_string(),
        password: "Xyz789#?".to_string(),
        fullname: "Joe Renamed".to_string(),
        role: "ADMIN".to_string(),
    };
    let updated = ctx.users().update(user.id, &form).await?;
    assert_eq!(updated.fullname, "Joe Renamed");
    assert_eq!(updated.role, "ADMIN");
    assert!(ctx.config.password_encoder().matches("Xyz789#?", &updated.password)?);
    Ok(())
}

#[tokio::test]
async fn duplicate_username_is_a_field_error() -> Result<()> {
    let ctx = common::setup().await;
    ctx.create_user("Joe", "Abc123@!", "USER").await;

    let form = UserForm {
        username: "Joe".to_string(),
        password: "Abc123@!".to_string(),
        fullname: "Another Joe".to_string(),
        role: "USER".to_string(),
    };
    match ctx.users().save(&form).await {
        Err(AppError::Validation(errors)) => assert!(errors.field_errors().contains_key("username")),
        other => panic!("expected a username error, got {:?}", other.map(|m| m.id)),
    }

    assert_eq!(users::Entity::find().all(&ctx.db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn default_admin_is_seeded_once() -> Result<()> {
    let ctx = common::setup().await;
    let mut seed = ctx.config.admin.clone();

    ctx.users().ensure_default_admin(&seed).await?;
    assert!(ctx.users().find_by_username("admin").await?.is_none());

    seed.password = Some("Admin123!".to_string());
    ctx.users().ensure_default_admin(&seed).await?;
    ctx.users().ensure_default_admin(&seed).await?;

    let admins = users::Entity::find().all(&ctx.db).await?;
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].role, "ADMIN");
    Ok(())
}
