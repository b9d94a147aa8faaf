use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

/// Handle to the relational credential store.
#[derive(Clone)]
pub struct DbService {
    pub(crate) db: DatabaseConnection,
}

impl DbService {
    /// Connect and bring the schema up to date before serving requests.
    pub async fn connect(url: &str) -> Result<Self, DbErr> {
        info!("connecting to database");
        let db = Database::connect(url).await?;
        info!("running migrations");
        Migrator::up(&db, None).await?;
        info!("database ready");
        Ok(Self { db })
    }
}
