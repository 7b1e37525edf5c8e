//! Library surface of the tablecast CLI: logging setup shared with tests.

pub mod logging;
