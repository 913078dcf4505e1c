//! Ordered statement lists consumed by the external ETL driver
//!
//! The driver runs the four lists sequentially, each statement to completion
//! before the next: drop, create, copy, insert. Within the copy and insert
//! lists the statements are mutually independent, but every insert depends
//! on both copies having completed.

use crate::config::WarehouseConfig;
use crate::load;
use crate::schema::{
    ARTIST_TABLE_CREATE, ARTIST_TABLE_DROP, SONG_TABLE_CREATE, SONG_TABLE_DROP,
    SONGPLAY_TABLE_CREATE, SONGPLAY_TABLE_DROP, STAGING_EVENTS_TABLE_CREATE,
    STAGING_EVENTS_TABLE_DROP, STAGING_SONGS_TABLE_CREATE, STAGING_SONGS_TABLE_DROP,
    TIME_TABLE_CREATE, TIME_TABLE_DROP, USER_TABLE_CREATE, USER_TABLE_DROP,
};
use crate::transform::{
    ARTIST_TABLE_INSERT, SONG_TABLE_INSERT, SONGPLAY_TABLE_INSERT, TIME_TABLE_INSERT,
    USER_TABLE_INSERT,
};

/// Drop statements for all seven tables. Order-independent (no foreign
/// keys), idempotent.
pub const DROP_TABLE_QUERIES: [&str; 7] = [
    STAGING_EVENTS_TABLE_DROP,
    STAGING_SONGS_TABLE_DROP,
    SONGPLAY_TABLE_DROP,
    USER_TABLE_DROP,
    SONG_TABLE_DROP,
    ARTIST_TABLE_DROP,
    TIME_TABLE_DROP,
];

/// Create statements for all seven tables. Idempotent; run after drops for
/// a clean rebuild.
pub const CREATE_TABLE_QUERIES: [&str; 7] = [
    STAGING_EVENTS_TABLE_CREATE,
    STAGING_SONGS_TABLE_CREATE,
    SONGPLAY_TABLE_CREATE,
    USER_TABLE_CREATE,
    SONG_TABLE_CREATE,
    ARTIST_TABLE_CREATE,
    TIME_TABLE_CREATE,
];

/// Transform statements populating the star schema. Not idempotent:
/// re-running duplicates fact rows, and the dimension DISTINCTs do not
/// dedupe against rows from earlier runs.
pub const INSERT_TABLE_QUERIES: [&str; 5] = [
    SONGPLAY_TABLE_INSERT,
    USER_TABLE_INSERT,
    SONG_TABLE_INSERT,
    ARTIST_TABLE_INSERT,
    TIME_TABLE_INSERT,
];

/// COPY statements rendered with the configured IAM role ARN. Append-only:
/// the driver truncates or rebuilds staging before re-running.
pub fn copy_table_queries(config: &WarehouseConfig) -> Vec<String> {
    vec![
        load::staging_events_copy(config),
        load::staging_songs_copy(config),
    ]
}

/// All four statement lists, rendered once from the configuration.
pub struct StatementCatalog {
    copy_table_queries: Vec<String>,
}

impl StatementCatalog {
    pub fn new(config: &WarehouseConfig) -> Self {
        Self {
            copy_table_queries: copy_table_queries(config),
        }
    }

    pub fn drop_table_queries(&self) -> &'static [&'static str] {
        &DROP_TABLE_QUERIES
    }

    pub fn create_table_queries(&self) -> &'static [&'static str] {
        &CREATE_TABLE_QUERIES
    }

    pub fn copy_table_queries(&self) -> &[String] {
        &self.copy_table_queries
    }

    pub fn insert_table_queries(&self) -> &'static [&'static str] {
        &INSERT_TABLE_QUERIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClusterConfig, IamRoleConfig};
    use crate::schema::TABLE_NAMES;

    fn test_config() -> WarehouseConfig {
        WarehouseConfig {
            cluster: ClusterConfig {
                host: "host".to_string(),
                db_name: "dwh".to_string(),
                db_user: "user".to_string(),
                db_password: "password".to_string(),
                db_port: 5439,
            },
            iam_role: IamRoleConfig {
                arn: "arn:aws:iam::123:role/test".to_string(),
            },
        }
    }

    #[test]
    fn test_list_lengths() {
        assert_eq!(DROP_TABLE_QUERIES.len(), 7);
        assert_eq!(CREATE_TABLE_QUERIES.len(), 7);
        assert_eq!(copy_table_queries(&test_config()).len(), 2);
        assert_eq!(INSERT_TABLE_QUERIES.len(), 5);
    }

    #[test]
    fn test_drop_and_create_follow_table_order() {
        for (i, name) in TABLE_NAMES.iter().enumerate() {
            assert!(DROP_TABLE_QUERIES[i].ends_with(name));
            assert!(
                CREATE_TABLE_QUERIES[i].contains(&format!("CREATE TABLE IF NOT EXISTS {name}"))
            );
        }
    }

    #[test]
    fn test_copy_order_events_then_songs() {
        let copies = copy_table_queries(&test_config());
        assert!(copies[0].contains("copy staging_events"));
        assert!(copies[1].contains("copy staging_songs"));
    }

    #[test]
    fn test_insert_order() {
        let targets = ["songplays", "users", "songs", "artists", "time"];
        for (insert, target) in INSERT_TABLE_QUERIES.iter().zip(targets) {
            assert!(insert.contains(&format!("INSERT INTO {target} (")));
        }
    }

    #[test]
    fn test_statement_catalog_bundles_all_lists() {
        let catalog = StatementCatalog::new(&test_config());
        assert_eq!(catalog.drop_table_queries().len(), 7);
        assert_eq!(catalog.create_table_queries().len(), 7);
        assert_eq!(catalog.copy_table_queries().len(), 2);
        assert_eq!(catalog.insert_table_queries().len(), 5);
    }
}
