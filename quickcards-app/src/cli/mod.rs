pub mod console;
pub mod opts;
