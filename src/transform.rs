//! INSERT...SELECT transforms from the staging tables into the star schema
//!
//! Each statement appends; only the dimension inserts deduplicate, and only
//! within a single run (DISTINCT over the staged rows, no conflict handling
//! against rows from earlier runs). The fact insert duplicates on re-run.

use chrono::{DateTime, Utc};

/// Fact insert. Inner join on (song title, artist name): events with no
/// matching song in `staging_songs` are silently dropped. A left join would
/// keep them with null song_id/artist_id; the load intentionally does not.
pub const SONGPLAY_TABLE_INSERT: &str = r#"
INSERT INTO songplays (
    start_time,
    user_id,
    level,
    song_id,
    artist_id,
    session_id,
    location,
    user_agent)
SELECT e.ts as start_time,
    e.userId as user_id,
    e.level as level,
    s.song_id as song_id,
    s.artist_id as artist_id,
    e.sessionId as session_id,
    e.location as location,
    e.userAgent as user_agent
FROM staging_events e
JOIN staging_songs s ON (e.song = s.title AND e.artist = s.artist_name)
"#;

/// User dimension. No ordering or aggregation picks a single `level` per
/// user: when a user appears with both levels, whichever DISTINCT row the
/// engine returns wins.
pub const USER_TABLE_INSERT: &str = r#"
INSERT INTO users (
    user_id,
    first_name,
    last_name,
    gender,
    level)
SELECT DISTINCT e.userId as user_id,
    e.firstName as first_name,
    e.lastName as last_name,
    e.gender as gender,
    e.level as level
FROM staging_events e
WHERE user_id IS NOT NULL
"#;

pub const SONG_TABLE_INSERT: &str = r#"
INSERT INTO songs (
    song_id,
    title,
    artist_id,
    year,
    duration)
SELECT DISTINCT s.song_id as song_id,
    s.title as title,
    s.artist_id as artist_id,
    s.year as year,
    s.duration as duration
FROM staging_songs s
"#;

pub const ARTIST_TABLE_INSERT: &str = r#"
INSERT INTO artists (
    artist_id,
    name,
    location,
    latitude,
    longitude)
SELECT DISTINCT s.artist_id as artist_id,
    s.artist_name as name,
    s.artist_location as location,
    s.artist_latitude as latitude,
    s.artist_longitude as longitude
FROM staging_songs s
"#;

/// Time dimension. `ts` holds epoch milliseconds; the derivation integer-
/// divides by 1000 and adds to the epoch, then extracts components with
/// DATE_PART codes h, d, w, mon, y, dow (Sunday = 0).
pub const TIME_TABLE_INSERT: &str = r#"
INSERT INTO time (
    start_time,
    hour,
    day,
    week,
    month,
    year,
    weekday)
SELECT timestamp 'epoch' + CAST(e.ts AS BIGINT)/1000 * interval '1 second' as start_time,
    DATE_PART(h, timestamp 'epoch' + CAST(e.ts AS BIGINT)/1000 * interval '1 second') as hour,
    DATE_PART(d, timestamp 'epoch' + CAST(e.ts AS BIGINT)/1000 * interval '1 second') as day,
    DATE_PART(w, timestamp 'epoch' + CAST(e.ts AS BIGINT)/1000 * interval '1 second') as week,
    DATE_PART(mon, timestamp 'epoch' + CAST(e.ts AS BIGINT)/1000 * interval '1 second') as month,
    DATE_PART(y, timestamp 'epoch' + CAST(e.ts AS BIGINT)/1000 * interval '1 second') as year,
    DATE_PART(dow, timestamp 'epoch' + CAST(e.ts AS BIGINT)/1000 * interval '1 second') as weekday
FROM staging_events e
"#;

/// Resolve an event `ts` (epoch milliseconds) the way the time transform
/// does: integer-divide by 1000, take as seconds since the epoch in UTC.
/// Returns None only when the result is outside chrono's representable range.
pub fn event_timestamp(ts_millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts_millis / 1000, 0)
}
