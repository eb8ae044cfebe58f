pub mod console;
pub mod filler;
pub mod report;
