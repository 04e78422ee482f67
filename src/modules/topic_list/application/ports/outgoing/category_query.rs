use async_trait::async_trait;
use serde::Serialize;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub cid: i64,
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub bg_color: Option<String>,
    pub color: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// Visible categories among `cids`, in the order requested. Unknown and
    /// disabled ids are left out.
    async fn get_categories(
        &self,
        cids: Vec<i64>,
    ) -> Result<Vec<CategorySummary>, CategoryQueryError>;
}
