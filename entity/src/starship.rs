use sea_orm::entity::prelude::*;

/// A starship class from the imported catalog.
///
/// Rows are written only by the starship import job. `starship_class` is not unique: the
/// import upserts on the full attribute tuple, so two rows may share a class name.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub starship_class: String,
    pub manufacturer: String,
    #[sea_orm(column_type = "Double")]
    pub length: f64,
    #[sea_orm(column_type = "Double")]
    pub hyperdrive_rating: f64,
    pub cargo_capacity: i64,
    pub crew: i32,
    pub passengers: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
