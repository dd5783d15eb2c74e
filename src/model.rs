use serde::{Deserialize, Serialize};

/// Record shape returned by [`crate::query::get_movie`] selections.
///
/// The invoker itself hands back untyped JSON; this is a convenience for
/// callers that want to destructure the `data.get_movie` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub watched: String,
    pub actors: Vec<String>,
}
