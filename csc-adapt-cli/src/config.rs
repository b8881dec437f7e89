//! CLI 配置
//!
//! 命令行参数与配置文件合并后的日志配置

use csc_adapt_config::{AdapterConfig, LogFormat, LogLevel, Stage};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub dispatch: Option<Level>,
    pub backtrace: Option<Level>,
    pub link: Option<Level>,
    pub invoke: Option<Level>,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            dispatch: None,
            backtrace: None,
            link: None,
            invoke: None,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// 合并配置：命令行优先于配置文件
    pub fn resolve(
        file: &AdapterConfig,
        level: Option<LogLevel>,
        format: Option<LogFormat>,
        stages: &[(Stage, LogLevel)],
    ) -> Self {
        let mut config = Self {
            global: to_tracing(level.or(file.log_level).unwrap_or_default()),
            format: format.or(file.log_format).unwrap_or_default(),
            ..Self::default()
        };
        for &(stage, level) in stages {
            config.set_stage(stage, to_tracing(level));
        }
        config
    }

    /// Get log level for a specific stage
    pub fn level_for(&self, stage: Stage) -> Level {
        let level = match stage {
            Stage::Dispatch => self.dispatch,
            Stage::Backtrace => self.backtrace,
            Stage::Link => self.link,
            Stage::Invoke => self.invoke,
        };
        level.unwrap_or(self.global)
    }

    fn set_stage(&mut self, stage: Stage, level: Level) {
        let slot = match stage {
            Stage::Dispatch => &mut self.dispatch,
            Stage::Backtrace => &mut self.backtrace,
            Stage::Link => &mut self.link,
            Stage::Invoke => &mut self.invoke,
        };
        *slot = Some(level);
    }
}

pub fn to_tracing(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// 解析 `--log-stage link=debug`
pub fn parse_stage_level(s: &str) -> Result<(Stage, LogLevel), String> {
    let (stage, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected STAGE=LEVEL, got '{s}'"))?;
    let stage: Stage = stage.trim().parse()?;
    let level: LogLevel = level.trim().parse().map_err(|e| format!("{e}"))?;
    Ok((stage, level))
}
