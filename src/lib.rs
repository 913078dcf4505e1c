//! Songplay Warehouse - SQL statement catalog for the songplay analytics warehouse
//!
//! Provides the fixed set of statements an external ETL driver runs, in order,
//! against the warehouse:
//! - Schema DDL (drop/create) for two staging tables and the star schema
//! - COPY bulk loads from S3 into the staging tables
//! - INSERT...SELECT transforms populating the fact and dimension tables
//! - The four ordered statement lists the driver iterates
//!
//! The crate holds no execution logic: connection handling, sequencing and
//! error recovery belong to the driver consuming the catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod jsonpaths;
pub mod load;
pub mod schema;
pub mod transform;

// Re-export commonly used types
pub use catalog::{
    CREATE_TABLE_QUERIES, DROP_TABLE_QUERIES, INSERT_TABLE_QUERIES, StatementCatalog,
    copy_table_queries,
};
pub use config::{ClusterConfig, IamRoleConfig, WarehouseConfig};
pub use error::CatalogError;
pub use jsonpaths::{log_jsonpaths, log_jsonpaths_document};
pub use transform::event_timestamp;
