//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。

use crate::config::LogConfig;
use csc_adapt_config::{LogFormat, Stage};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// Target for the CLI's own events
pub const CLI_TARGET: &str = "csc_adapt::cli";

/// Build the per-stage target filter
pub fn targets(log_config: &LogConfig) -> Targets {
    Stage::ALL.into_iter().fold(
        Targets::new()
            .with_default(log_config.global)
            .with_target(CLI_TARGET, log_config.global),
        |targets, stage| targets.with_target(stage.target(), log_config.level_for(stage)),
    )
}

/// 初始化日志系统；指定文件时同时追加写入文件
pub fn init_with_file(log_config: &LogConfig, file: Option<&Path>) -> io::Result<()> {
    let targets = targets(log_config);

    let file_layer = match file {
        Some(path) => {
            let file_handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file_handle))
                    .with_filter(targets.clone()),
            )
        }
        None => None,
    };

    let stdout_layer = create_format_layer(log_config.format, io::stdout).with_filter(targets);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_targets_respect_stage_levels() {
        let config = LogConfig {
            global: Level::WARN,
            link: Some(Level::DEBUG),
            ..LogConfig::default()
        };
        let targets = targets(&config);

        assert!(targets.would_enable("csc_adapt::link", &Level::DEBUG));
        assert!(!targets.would_enable("csc_adapt::invoke", &Level::INFO));
        assert!(targets.would_enable("csc_adapt::invoke", &Level::WARN));
        assert!(!targets.would_enable("some_dependency", &Level::INFO));
    }
}
