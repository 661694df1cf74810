/// Record ids are opaque strings (UUID v4 for new records).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Money amounts are whole currency units.
pub type Amount = i64;
