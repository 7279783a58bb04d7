pub mod cliopt;
pub mod error;
pub mod model;
pub mod output;
pub mod parse;
pub mod runner;
pub mod transform;
