use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Staff filter and count reservations by status
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_status")
                    .table(Reservations::Table)
                    .col(Reservations::Status)
                    .to_owned(),
            )
            .await?;

        // Newest reservations are listed first
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_date")
                    .table(Reservations::Table)
                    .col((Reservations::Date, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apartment_types_name")
                    .table(ApartmentTypes::Table)
                    .col(ApartmentTypes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_apartment_types_name").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_reservations_date").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_reservations_status").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    Status,
    Date,
}

#[derive(Iden)]
enum ApartmentTypes {
    Table,
    Name,
}
