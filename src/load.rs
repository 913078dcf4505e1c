//! COPY bulk loads from S3 into the staging tables
//!
//! Each template carries a single `{}` placeholder for the IAM role ARN;
//! rendering substitutes the configured ARN and alters nothing else. The
//! event log is line-delimited JSON loaded through an explicit JSONPaths
//! mapping; song metadata is one JSON object per file, loaded with
//! `json 'auto'`. COPY is append-only: re-running a load duplicates rows,
//! so the driver truncates or rebuilds the staging tables first.

use crate::config::WarehouseConfig;

pub const STAGING_EVENTS_COPY_TEMPLATE: &str = r#"
    copy staging_events from 's3://udacity-dend/log_data'
    credentials 'aws_iam_role={}'
    region 'us-west-2'
    format as json 's3://udacity-dend/log_json_path.json';
"#;

pub const STAGING_SONGS_COPY_TEMPLATE: &str = r#"
    copy staging_songs from 's3://udacity-dend/song_data'
    credentials 'aws_iam_role={}'
    region 'us-west-2'
    json 'auto';
"#;

fn render(template: &str, arn: &str) -> String {
    template.replacen("{}", arn, 1)
}

/// COPY statement loading the raw event log into `staging_events`.
pub fn staging_events_copy(config: &WarehouseConfig) -> String {
    render(STAGING_EVENTS_COPY_TEMPLATE, &config.iam_role.arn)
}

/// COPY statement loading the raw song metadata into `staging_songs`.
pub fn staging_songs_copy(config: &WarehouseConfig) -> String {
    render(STAGING_SONGS_COPY_TEMPLATE, &config.iam_role.arn)
}
