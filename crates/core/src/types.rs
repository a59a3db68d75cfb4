/// Surrogate keys are SQLite `INTEGER PRIMARY KEY` columns.
pub type DbId = i64;
