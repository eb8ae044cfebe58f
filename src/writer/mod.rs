pub mod radio;
pub mod writer;
