pub mod time;
pub mod vocabulary;
