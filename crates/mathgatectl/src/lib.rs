//! mathgatectl - command-line front end for the mathgate pipeline.

pub mod bench;
pub mod cache;
pub mod cli;
pub mod output;
pub mod request;
