//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示。

use std::fmt::Display;
use std::io::{self, Write};

/// 打印用法错误，并列出收到的全部参数
pub fn print_usage_error<E: Display, S: AsRef<str>>(e: &E, args: &[S]) {
    let _ = write_usage_error(&mut io::stderr().lock(), e, args);
}

/// 打印致命错误（I/O、配置）
pub fn print_error<E: Display>(e: &E) {
    eprintln!("error : {}", e);
}

fn write_usage_error<W: Write, E: Display, S: AsRef<str>>(
    out: &mut W,
    e: &E,
    args: &[S],
) -> io::Result<()> {
    writeln!(out, "error : {}", e)?;
    writeln!(out, "No. Args={}", args.len())?;
    for arg in args {
        writeln!(out, " - {}", arg.as_ref())?;
    }
    Ok(())
}
