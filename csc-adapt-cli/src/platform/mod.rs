//! 平台适配层（CLI 输出格式化）

mod cli;

pub use cli::{print_error, print_usage_error};
