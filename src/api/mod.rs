// src/api/mod.rs

pub mod types;
pub mod page;
pub mod submit;

pub use types::SubmitForm;
pub use page::{load_default_content, IndexPage};
pub use submit::{attach_titles, submit_text};
