pub mod logging;
pub mod payload;
