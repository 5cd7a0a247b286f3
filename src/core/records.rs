use serde::{Deserialize, Serialize};

/// One XP transaction as returned by the progress query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpRecord {
    pub amount: f64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(default)]
    pub path: String,
}

impl XpRecord {
    #[must_use]
    pub fn new(amount: f64, created_at: impl Into<String>) -> Self {
        Self {
            amount,
            created_at: created_at.into(),
            path: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectObject {
    #[serde(default)]
    pub name: String,
}

/// One graded project attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResult {
    pub grade: Option<f64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(default)]
    pub object: ProjectObject,
}

impl ProjectResult {
    #[must_use]
    pub fn graded(grade: f64) -> Self {
        Self {
            grade: Some(grade),
            created_at: String::new(),
            object: ProjectObject::default(),
        }
    }

    #[must_use]
    pub fn ungraded() -> Self {
        Self {
            grade: None,
            created_at: String::new(),
            object: ProjectObject::default(),
        }
    }
}

/// Drops ungraded attempts, the way the progress loader hands results over.
#[must_use]
pub fn graded_only(results: Vec<ProjectResult>) -> Vec<ProjectResult> {
    results
        .into_iter()
        .filter(|result| result.grade.is_some())
        .collect()
}
