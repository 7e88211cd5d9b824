use sea_orm::entity::prelude::*;

/// A sale listing for a starship.
///
/// `listing_time` doubles as the activation flag: a listing is active while it is above zero.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "listing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub ship_type: i32,
    pub price: i64,
    pub listing_time: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::starship::Entity",
        from = "Column::ShipType",
        to = "super::starship::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Starship,
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
