use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create order_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(OrderStatus::Enum)
                    .values([
                        OrderStatus::Pending,
                        OrderStatus::Completed,
                        OrderStatus::Cancelled,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create orders table
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_uuid(Orders::Id))
                    .col(uuid(Orders::ClientId))
                    .col(
                        timestamp_with_time_zone(Orders::OrderDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Orders::Status)
                            .enumeration(
                                OrderStatus::Enum,
                                [
                                    OrderStatus::Pending,
                                    OrderStatus::Completed,
                                    OrderStatus::Cancelled,
                                ],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        timestamp_with_time_zone(Orders::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Orders::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_client_id")
                            .from(Orders::Table, Orders::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_client_id")
                    .table(Orders::Table)
                    .col(Orders::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_status")
                    .table(Orders::Table)
                    .col(Orders::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_order_date")
                    .table(Orders::Table)
                    .col(Orders::OrderDate)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER orders_touch_updated_at
                    BEFORE UPDATE ON orders
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
            .execute_unprepared("DROP TRIGGER IF EXISTS orders_touch_updated_at ON orders")
            .await?;

        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(OrderStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    ClientId,
    OrderDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
}

#[derive(DeriveIden)]
pub enum OrderStatus {
    #[sea_orm(iden = "order_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "completed")]
    Completed,
    #[sea_orm(iden = "cancelled")]
    Cancelled,
}
