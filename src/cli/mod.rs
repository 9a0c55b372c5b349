//! Command Line Interface module
//!
//! - `combine`: the combine command and its arguments
//! - `prompt`: interactive filename entry on standard input

pub mod combine;
pub mod prompt;
