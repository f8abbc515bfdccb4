#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::{config::db_settings::DbSettings, db::client::DbClient};

    /**
     * Settings pointing at a fresh temporary directory
     *
     * Keep the directory alive for as long as the database is used
     */
    pub fn create_test_settings() -> (TempDir, DbSettings) {
        let test_dir = TempDir::new().unwrap();

        let settings = DbSettings::new("db", &test_dir.path().display().to_string());

        (test_dir, settings)
    }

    pub fn create_test_db() -> (TempDir, Arc<DbClient>) {
        let (test_dir, settings) = create_test_settings();

        let db_client = DbClient::connect(&settings).unwrap();

        (test_dir, db_client)
    }
}
