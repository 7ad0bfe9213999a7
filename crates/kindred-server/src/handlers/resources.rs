//! Static crisis resources.

use axum::Json;

use crate::dto::ResourceEntry;

pub async fn list() -> Json<Vec<ResourceEntry>> {
    Json(vec![
        ResourceEntry {
            label: "Medical Emergency".into(),
            contact: "108 (IND)".into(),
        },
        ResourceEntry {
            label: "Crisis Lifeline".into(),
            contact: "022 2754 6669 (IND)".into(),
        },
    ])
}
