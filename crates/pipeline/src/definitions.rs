//! Static pipeline definition for the play-event star schema.
//!
//! Fact: `songplays`. Dimensions: `users`, `songs`, `artists`, `time`.
//! Staging (`staging_events`, `staging_songs`) is populated by external
//! glue before these steps run. Statement text here is data: the loader
//! and validator treat it opaquely.

use playlog_core::load::{LoadDirective, LoadMode};
use playlog_core::quality::{Assertion, QualityCheck};

/// Quality checks run after the loads, in this order.
pub fn quality_checks() -> Vec<QualityCheck> {
    vec![
        QualityCheck::new(
            "users table should have data in it",
            "SELECT COUNT(1) FROM users",
            0,
            Assertion::GreaterThan,
        ),
        QualityCheck::new(
            "songs table should have data in it",
            "SELECT COUNT(1) FROM songs",
            0,
            Assertion::GreaterThan,
        ),
        QualityCheck::new(
            "artists table should have data in it",
            "SELECT COUNT(1) FROM artists",
            0,
            Assertion::GreaterThan,
        ),
        QualityCheck::new(
            "time table should have data in it",
            "SELECT COUNT(1) FROM time",
            0,
            Assertion::GreaterThan,
        ),
        QualityCheck::new(
            "song_id in the songs table should never be null",
            "SELECT COUNT(1) FROM songs WHERE song_id IS NULL",
            0,
            Assertion::Equals,
        ),
    ]
}

/// Append-only fact load from the joined staging tables.
pub fn fact_load() -> LoadDirective {
    LoadDirective::new(
        "songplays",
        "SELECT to_timestamp(e.ts / 1000.0) AS start_time,
                e.user_id, e.level, s.song_id, s.artist_id,
                e.session_id, e.location, e.user_agent
         FROM staging_events e
         LEFT JOIN staging_songs s
                ON e.song = s.title AND e.artist = s.artist_name
         WHERE e.page = 'NextSong'",
        LoadMode::Append,
    )
}

/// Dimension loads, in the order they run after the fact load.
///
/// `users`, `songs` and `artists` are fully refreshed on every run;
/// `time` grows with the fact table and is appended.
pub fn dimension_loads() -> Vec<LoadDirective> {
    vec![
        LoadDirective::new(
            "users",
            "SELECT DISTINCT user_id, first_name, last_name, gender, level
             FROM staging_events
             WHERE page = 'NextSong' AND user_id IS NOT NULL",
            LoadMode::Replace,
        ),
        LoadDirective::new(
            "songs",
            "SELECT DISTINCT song_id, title, artist_id, year, duration
             FROM staging_songs",
            LoadMode::Replace,
        ),
        LoadDirective::new(
            "artists",
            "SELECT DISTINCT artist_id, artist_name, artist_location,
                             artist_latitude, artist_longitude
             FROM staging_songs",
            LoadMode::Replace,
        ),
        LoadDirective::new(
            "time",
            "SELECT DISTINCT start_time,
                    EXTRACT(HOUR FROM start_time)::BIGINT,
                    EXTRACT(DAY FROM start_time)::BIGINT,
                    EXTRACT(WEEK FROM start_time)::BIGINT,
                    EXTRACT(MONTH FROM start_time)::BIGINT,
                    EXTRACT(YEAR FROM start_time)::BIGINT,
                    EXTRACT(DOW FROM start_time)::BIGINT
             FROM songplays",
            LoadMode::Append,
        ),
    ]
}
