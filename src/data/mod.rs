use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::sync::Arc;
use tracing::debug;
use tracing::instrument;

pub mod read;
pub mod tables;
pub mod write;

//The submission counter is a singleton row, same fixed id the sensor firmware
//was written against
pub const COUNTER_ID: i64 = 1;

pub struct DbManager {
    db: Arc<Pool<SqliteConnectionManager>>,
}

impl DbManager {
    pub fn new(path: std::path::PathBuf) -> Result<Self> {
        let db = Arc::new(Self::build_db(path)?);

        Ok(DbManager { db })
    }

    pub fn get_db(&self) -> Arc<Pool<SqliteConnectionManager>> {
        self.db.clone()
    }

    #[instrument]
    fn build_db(path: std::path::PathBuf) -> Result<Pool<SqliteConnectionManager>> {
        //A concurrent writer waits for the counter transaction instead of
        //failing with SQLITE_BUSY
        let db = SqliteConnectionManager::file(path)
            .with_init(|conn| conn.busy_timeout(std::time::Duration::from_secs(5)));

        let db_pool = Pool::new(db)?;

        let conn = db_pool.get()?;

        conn.execute(tables::MEASUREMENT_TABLE, [])?;
        debug!("Built measurement table");

        conn.execute(tables::COUNTER_TABLE, [])?;
        debug!("Built submission counter table");

        Ok(db_pool)
    }
}
