use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_starship::Starship;

static IDX_LISTING_SHIP_TYPE: &str = "idx-listing-ship_type";
static IDX_LISTING_LISTING_TIME: &str = "idx-listing-listing_time";
static FK_LISTING_SHIP_TYPE: &str = "fk-listing-ship_type";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(pk_auto(Listing::Id))
                    .col(string(Listing::Name))
                    .col(integer(Listing::ShipType))
                    .col(big_integer(Listing::Price))
                    .col(integer(Listing::ListingTime).default(1))
                    .col(timestamp(Listing::CreatedAt))
                    .col(timestamp(Listing::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LISTING_SHIP_TYPE)
                            .from(Listing::Table, Listing::ShipType)
                            .to(Starship::Table, Starship::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LISTING_SHIP_TYPE)
                    .table(Listing::Table)
                    .col(Listing::ShipType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LISTING_LISTING_TIME)
                    .table(Listing::Table)
                    .col(Listing::ListingTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LISTING_LISTING_TIME)
                    .table(Listing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LISTING_SHIP_TYPE)
                    .table(Listing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Listing {
    Table,
    Id,
    Name,
    ShipType,
    Price,
    ListingTime,
    CreatedAt,
    UpdatedAt,
}
