mod tables;

pub use tables::*;
