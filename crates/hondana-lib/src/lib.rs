pub mod models;
pub mod prelude;
pub mod source;
