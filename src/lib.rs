pub mod core;
pub mod hash;
pub mod linalg;
pub mod util;
