//! Subcommand handlers

mod compile;
mod link;

pub use compile::{compile_object, test_compile, SUCCESS};
pub use link::{assemble, is_sentinel, link, SENTINEL};
