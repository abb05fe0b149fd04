use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "curvepoint")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub curve_id: i32,
    pub as_of_date: Option<DateTime>,
    pub term: f64,
    #[sea_orm(column_name = "value")]
    pub curve_value: f64,
    pub creation_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
