use serde::{Deserialize, Serialize};

/// Pagination envelope metadata
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// Total number of matching records across all pages
    pub count: u64,
    pub pages: u32,
    /// URL of the next page, `None` on the last page
    pub next: Option<String>,
    /// URL of the previous page, `None` on the first page
    pub prev: Option<String>,
}

/// One page of a paginated listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub info: Info,
    pub results: Vec<T>,
}
