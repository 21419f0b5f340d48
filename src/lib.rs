pub mod cli;
pub mod meta;
pub mod parse;
pub mod plot;
