use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bidlist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account: String,
    #[sea_orm(column_name = "type")]
    pub bid_type: String,
    pub bid_quantity: f64,
    pub ask_quantity: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub benchmark: Option<String>,
    pub bid_list_date: Option<DateTime>,
    pub commentary: Option<String>,
    pub security: Option<String>,
    pub status: Option<String>,
    pub trader: Option<String>,
    pub book: Option<String>,

    // Champs d'audit: jamais modifiés par update
    pub creation_name: Option<String>,
    pub creation_date: Option<DateTime>,
    pub revision_name: Option<String>,
    pub revision_date: Option<DateTime>,

    pub deal_name: Option<String>,
    pub deal_type: Option<String>,
    pub source_list_id: Option<String>,
    pub side: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
