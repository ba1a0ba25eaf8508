/// All database primary keys are UUIDs (v4, generated by PostgreSQL).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
