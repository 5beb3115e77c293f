// Recommendation layer: the engine, its downstream recommenders, and the HTTP handlers.
// Only the engine talks to every stage; handlers go through the `Recommender` trait.

pub mod engine;
pub mod handlers;
pub mod projects;
pub mod repo_improvements;
pub mod resources;
pub mod technologies;
