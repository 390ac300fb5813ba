//! SQLite schema definitions
//!
//! Initial schema with all tables. No migrations needed for first version.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema SQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success INTEGER NOT NULL DEFAULT 1
);

-- =============================================================================
-- 1. Profile (singleton row, the single implicit user)
-- =============================================================================
CREATE TABLE IF NOT EXISTS profile (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    name TEXT NOT NULL CHECK(length(name) >= 1 AND length(name) <= 100),
    age INTEGER NOT NULL CHECK(age >= 0),
    weight REAL NOT NULL CHECK(weight >= 0),
    height REAL NOT NULL CHECK(height >= 0),
    target_weight REAL NOT NULL CHECK(target_weight >= 0),
    water_goal REAL NOT NULL CHECK(water_goal >= 0),
    sleep_goal REAL NOT NULL CHECK(sleep_goal >= 0),
    kcal_goal INTEGER NOT NULL CHECK(kcal_goal >= 0),
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

-- =============================================================================
-- 2. Date registry (temporal anchor for all per-day data)
-- =============================================================================
CREATE TABLE IF NOT EXISTS dates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL UNIQUE CHECK(length(date) >= 1),
    created_at INTEGER NOT NULL
);

-- =============================================================================
-- 3. Daily metrics (one row per date each, upsert keyed on date_id)
-- =============================================================================
CREATE TABLE IF NOT EXISTS kcal (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date_id INTEGER NOT NULL UNIQUE REFERENCES dates(id) ON DELETE CASCADE,
    calories INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS water (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date_id INTEGER NOT NULL UNIQUE REFERENCES dates(id) ON DELETE CASCADE,
    liters REAL NOT NULL,
    updated_at INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS sleep (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date_id INTEGER NOT NULL UNIQUE REFERENCES dates(id) ON DELETE CASCADE,
    hours REAL NOT NULL,
    updated_at INTEGER NOT NULL
);

-- =============================================================================
-- 4. Exercise catalog
-- =============================================================================
CREATE TABLE IF NOT EXISTS exercise_names (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE CHECK(length(name) >= 1 AND length(name) <= 100),
    created_at INTEGER NOT NULL
);

-- =============================================================================
-- 5. Workout log (one row per logged set)
-- =============================================================================
CREATE TABLE IF NOT EXISTS workouts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date_id INTEGER NOT NULL REFERENCES dates(id) ON DELETE CASCADE,
    exercise_id INTEGER NOT NULL REFERENCES exercise_names(id) ON DELETE CASCADE,
    weight REAL NOT NULL CHECK(weight >= 0),
    reps INTEGER NOT NULL CHECK(reps >= 0),
    sets INTEGER NOT NULL CHECK(sets >= 0),
    rir INTEGER NOT NULL CHECK(rir >= 0),
    created_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(date_id);
CREATE INDEX IF NOT EXISTS idx_workouts_exercise ON workouts(exercise_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn test_schema_version_is_positive() {
        assert!(SCHEMA_VERSION > 0);
    }

    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_schema_is_not_empty() {
        assert!(!SCHEMA.is_empty());
    }

    #[test]
    fn test_schema_contains_required_tables() {
        let required_tables = [
            "schema_version",
            "schema_migrations",
            "profile",
            "dates",
            "kcal",
            "water",
            "sleep",
            "exercise_names",
            "workouts",
        ];

        for table in required_tables {
            assert!(
                SCHEMA.contains(&format!("CREATE TABLE IF NOT EXISTS {}", table)),
                "Schema missing table: {}",
                table
            );
        }
    }

    #[test]
    fn test_metric_tables_are_one_row_per_date() {
        // The upsert contract relies on the unique date_id key
        for table in ["kcal", "water", "sleep"] {
            let start = SCHEMA.find(&format!("CREATE TABLE IF NOT EXISTS {}", table)).unwrap();
            let create = &SCHEMA[start..SCHEMA[start..].find(';').unwrap() + start];
            assert!(
                create.contains("date_id INTEGER NOT NULL UNIQUE"),
                "{} is missing the unique date_id constraint",
                table
            );
        }
    }

    #[test]
    fn test_per_day_tables_cascade_on_date_delete() {
        assert_eq!(SCHEMA.matches("REFERENCES dates(id) ON DELETE CASCADE").count(), 4);
    }
}
