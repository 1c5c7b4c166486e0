// src/titles/mod.rs

pub mod concepts;
pub mod generator;

pub use concepts::interesting_concepts;
pub use generator::{generate_titles, DRAWS, ENDINGS, PREFIXES};
