pub mod apply;
pub mod cli;
