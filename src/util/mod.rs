pub mod assert;
pub mod log;
