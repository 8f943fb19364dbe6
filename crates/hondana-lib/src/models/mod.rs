pub mod source_info;
pub use source_info::*;

pub mod manga_info;
pub use manga_info::*;
