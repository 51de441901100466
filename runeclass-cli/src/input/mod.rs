//! Input handling module

pub mod code_point;
pub mod file_reader;
pub mod glob_resolver;

pub use code_point::{parse_arguments, parse_code_point, MAX_RANGE_LEN};
pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
