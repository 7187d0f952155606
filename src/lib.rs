#[macro_use]
extern crate lazy_static;

pub mod grade;
pub mod prompt;
pub mod sanitizer;

pub use sanitizer::sanitize;
