// src/types/mod.rs
pub mod analysis;
pub mod resume_form;

pub use analysis::*;
pub use resume_form::*;
