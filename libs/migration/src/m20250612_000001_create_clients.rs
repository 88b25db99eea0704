use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create clients table
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(pk_uuid(Clients::Id))
                    .col(string(Clients::Name))
                    .col(string(Clients::Email))
                    .col(string_len(Clients::Cpf, 11))
                    .col(date(Clients::BirthDate))
                    .col(
                        timestamp_with_time_zone(Clients::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Clients::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique indexes back the duplicate-registration business errors:
        // a conflict here surfaces as the same error as the pre-flight
        // existence check.
        manager
            .create_index(
                Index::create()
                    .name("uq_clients_email")
                    .table(Clients::Table)
                    .col(Clients::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_clients_cpf")
                    .table(Clients::Table)
                    .col(Clients::Cpf)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clients_name")
                    .table(Clients::Table)
                    .col(Clients::Name)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER clients_touch_updated_at
                    BEFORE UPDATE ON clients
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS clients_touch_updated_at ON clients")
            .await?;

        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    Name,
    Email,
    Cpf,
    BirthDate,
    CreatedAt,
    UpdatedAt,
}
