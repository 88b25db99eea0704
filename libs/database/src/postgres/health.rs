use sea_orm::{DatabaseConnection, DbErr};

/// Check that the database connection is alive.
///
/// Issues a ping on the pool; suitable for readiness probes.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}
