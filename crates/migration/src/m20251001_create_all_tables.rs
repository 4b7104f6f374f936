use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create reservations table
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Reservations::Number).string_len(20).not_null())
                    .col(ColumnDef::new(Reservations::Message).text().not_null())
                    .col(
                        ColumnDef::new(Reservations::ApartmentType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string_len(16)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create apartment_types table
        manager
            .create_table(
                Table::create()
                    .table(ApartmentTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApartmentTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ApartmentTypes::Name).string_len(50).not_null())
                    .col(ColumnDef::new(ApartmentTypes::Description).text())
                    .col(
                        ColumnDef::new(ApartmentTypes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ApartmentTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApartmentTypes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApartmentTypes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    Id,
    Name,
    Number,
    Message,
    ApartmentType,
    Date,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ApartmentTypes {
    Table,
    Id,
    Name,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
