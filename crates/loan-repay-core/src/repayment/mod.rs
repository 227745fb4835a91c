pub mod parse;
pub mod quote;
pub mod schedule;
pub mod validate;
