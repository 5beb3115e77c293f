// Portfolio analysis: what the repositories say about the user.
// Pure functions over the repository list; the knowledge base is only read.

pub mod complexity;
pub mod skills;
pub mod strengths;
