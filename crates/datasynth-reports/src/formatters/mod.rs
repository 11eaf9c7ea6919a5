pub mod json;
pub mod stdout;
