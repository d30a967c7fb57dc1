/// Store-assigned identifier, rendered as a 24-character hex string.
pub type DishId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
