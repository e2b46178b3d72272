use sea_orm_migration::{prelude::*, schema::*};

// Must stay in sync with `FilmType::ALL` in the main crate.
const FILM_TYPES: [&str; 3] = ["FEATURE", "SHORT", "DOCUMENTARY"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(string(Film::Title).primary_key())
                    .col(string(Film::Type).check(Expr::col(Film::Type).is_in(FILM_TYPES)))
                    .col(string_null(Film::ReleaseDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_release_date")
                    .table(Film::Table)
                    .col(Film::ReleaseDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Film::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Film {
    Table,
    Title,
    Type,
    ReleaseDate,
}
