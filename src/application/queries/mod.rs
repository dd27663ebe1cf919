pub mod pages;
pub mod surfaces;
