use sea_orm_migration::{prelude::*, schema::*};

static IDX_STARSHIP_STARSHIP_CLASS: &str = "idx-starship-starship_class";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string(Starship::StarshipClass))
                    .col(string(Starship::Manufacturer))
                    .col(double(Starship::Length))
                    .col(double(Starship::HyperdriveRating))
                    .col(big_integer(Starship::CargoCapacity))
                    .col(integer(Starship::Crew))
                    .col(integer(Starship::Passengers))
                    .col(timestamp(Starship::CreatedAt))
                    .col(timestamp(Starship::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Listing creation and the listing filter both look starships up by class name
        manager
            .create_index(
                Index::create()
                    .name(IDX_STARSHIP_STARSHIP_CLASS)
                    .table(Starship::Table)
                    .col(Starship::StarshipClass)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STARSHIP_STARSHIP_CLASS)
                    .table(Starship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Starship {
    Table,
    Id,
    StarshipClass,
    Manufacturer,
    Length,
    HyperdriveRating,
    CargoCapacity,
    Crew,
    Passengers,
    CreatedAt,
    UpdatedAt,
}
