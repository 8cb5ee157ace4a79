pub mod quote;
pub mod rules;
