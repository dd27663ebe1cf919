pub mod catalog;
pub mod content;
pub mod errors;
