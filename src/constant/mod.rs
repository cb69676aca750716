pub mod log;
pub mod util;
