use serde::Deserialize;

/// Public doctor listings stop at this many documents; export is unbounded.
pub const LIST_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct DepartmentQuery {
    pub department: String,
}
