//! DDL for the staging tables and the star schema
//!
//! Staging tables are raw landing zones and carry no constraints; the fact
//! and dimension tables enforce primary keys and NOT NULL on required
//! business fields. There are no foreign keys, so drop order does not matter.
//! All statements are idempotent (`IF NOT EXISTS` / `IF EXISTS`).

/// The seven warehouse tables, in canonical catalog order.
pub const TABLE_NAMES: [&str; 7] = [
    "staging_events",
    "staging_songs",
    "songplays",
    "users",
    "songs",
    "artists",
    "time",
];

// DROP statements

pub const STAGING_EVENTS_TABLE_DROP: &str = "DROP TABLE IF EXISTS staging_events";
pub const STAGING_SONGS_TABLE_DROP: &str = "DROP TABLE IF EXISTS staging_songs";
pub const SONGPLAY_TABLE_DROP: &str = "DROP TABLE IF EXISTS songplays";
pub const USER_TABLE_DROP: &str = "DROP TABLE IF EXISTS users";
pub const SONG_TABLE_DROP: &str = "DROP TABLE IF EXISTS songs";
pub const ARTIST_TABLE_DROP: &str = "DROP TABLE IF EXISTS artists";
pub const TIME_TABLE_DROP: &str = "DROP TABLE IF EXISTS time";

// CREATE statements

/// Landing zone for the raw event log JSON. Column order matches the
/// JSONPaths mapping the events COPY uses.
pub const STAGING_EVENTS_TABLE_CREATE: &str = r#"
CREATE TABLE IF NOT EXISTS staging_events (
    artist varchar,
    auth varchar,
    firstName varchar,
    gender varchar(1),
    itemInSession int,
    lastName varchar,
    length float,
    level varchar,
    location varchar,
    method varchar,
    page varchar,
    registration float,
    sessionId int,
    song varchar,
    status int,
    ts bigint,
    userAgent varchar,
    userId int);
"#;

/// Landing zone for the raw song metadata JSON.
pub const STAGING_SONGS_TABLE_CREATE: &str = r#"
CREATE TABLE IF NOT EXISTS staging_songs (
    num_songs int,
    artist_id varchar,
    artist_latitude float,
    artist_longitude float,
    artist_location varchar,
    artist_name varchar,
    song_id varchar,
    title varchar,
    duration float,
    year int);
"#;

/// Fact table, one row per play event. `song_id` and `artist_id` stay
/// nullable: events whose song lookup fails would otherwise be unloadable.
pub const SONGPLAY_TABLE_CREATE: &str = r#"
CREATE TABLE IF NOT EXISTS songplays (
    songplay_id int IDENTITY(0,1) PRIMARY KEY,
    start_time bigint NOT NULL,
    user_id int NOT NULL,
    level varchar NOT NULL,
    song_id varchar,
    artist_id varchar,
    session_id int NOT NULL,
    location varchar NOT NULL,
    user_agent varchar NOT NULL);
"#;

pub const USER_TABLE_CREATE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id int PRIMARY KEY,
    first_name varchar NOT NULL,
    last_name varchar NOT NULL,
    gender varchar(1),
    level varchar);
"#;

pub const SONG_TABLE_CREATE: &str = r#"
CREATE TABLE IF NOT EXISTS songs (
    song_id varchar PRIMARY KEY,
    title varchar NOT NULL,
    artist_id varchar NOT NULL,
    year int,
    duration float NOT NULL);
"#;

pub const ARTIST_TABLE_CREATE: &str = r#"
CREATE TABLE IF NOT EXISTS artists (
    artist_id varchar PRIMARY KEY,
    name varchar NOT NULL,
    location varchar,
    latitude float,
    longitude float);
"#;

/// Decomposed timestamp dimension keyed by the derived start_time.
pub const TIME_TABLE_CREATE: &str = r#"
CREATE TABLE IF NOT EXISTS time (
    start_time varchar PRIMARY KEY,
    hour int NOT NULL,
    day int NOT NULL,
    week int NOT NULL,
    month int NOT NULL,
    year int NOT NULL,
    weekday int NOT NULL);
"#;
