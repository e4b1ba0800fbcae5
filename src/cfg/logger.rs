// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{Event, Subscriber};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, FmtContext, FormatEvent, FormatFields,
        format::{FmtSpan, JsonFields, Writer},
    },
    layer::SubscriberExt,
};

// Config logger
#[derive(Debug, Deserialize, Clone)]
struct LoggerConfig {
    logger: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct LogConfig {
    level: String,
    output: String,
    is_show_target: bool,
    file: Option<LogFileConfig>,
}

#[derive(Debug, Deserialize, Clone)]
struct LogFileConfig {
    path: String,
    rotation_frequency: Option<String>,
}

// Custom layer that renders tracing events as one JSON object per line.
struct JsonFormatter {
    config: Arc<LogConfig>,
}

#[derive(Serialize)]
struct LogEntry {
    timestamp: String,
    level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level: event.metadata().level().to_string(),
            target: self
                .config
                .is_show_target
                .then(|| event.metadata().target().to_string()),
            fields: visitor.fields,
        };
        writeln!(
            writer,
            "{}",
            serde_json::to_string(&entry).map_err(|_| std::fmt::Error)?
        )
    }
}

#[derive(Default)]
struct JsonVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl tracing::field::Visit for JsonVisitor {
    fn record_debug(
        &mut self,
        field: &tracing::field::Field,
        value: &dyn std::fmt::Debug,
    ) {
        self.fields
            .insert(field.name().to_string(), json!(format!("{:?}", value)));
    }
}

pub fn init_logger(config_path: &str) -> Result<WorkerGuard> {
    let config_content = fs::read_to_string(config_path)
        .context(format!("Failed to read config file: {config_path}"))?;
    let config: LoggerConfig = serde_yaml::from_str(&config_content)
        .context(format!("Failed to parse config file: {config_path}"))?;

    let (writer, guard) = match config.logger.output.as_str() {
        "stdout" => tracing_appender::non_blocking(std::io::stdout()),
        "stderr" => tracing_appender::non_blocking(std::io::stderr()),
        "file" => {
            let cfg = config
                .logger
                .file
                .clone()
                .context("Failed to find log config file")?;

            let path = Path::new(&cfg.path);
            let directory = path.parent().unwrap_or_else(|| Path::new(""));
            let file_name = path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("cdrom-target.log"));

            let rotation = match cfg.rotation_frequency.as_deref() {
                Some("minutely") => Rotation::MINUTELY,
                Some("hourly") => Rotation::HOURLY,
                Some("daily") => Rotation::DAILY,
                _ => Rotation::NEVER,
            };
            let appender = RollingFileAppender::new(rotation, directory, file_name);
            tracing_appender::non_blocking(appender)
        },
        _ => {
            return Err(anyhow::anyhow!("Invalid log output specified"));
        },
    };

    let subscriber_layer = fmt::layer()
        .with_writer(move || writer.clone())
        .with_ansi(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .json()
        .event_format(JsonFormatter {
            config: Arc::new(config.logger.clone()),
        })
        .fmt_fields(JsonFields::default());

    let env_filter = EnvFilter::try_new(&config.logger.level)
        .context("Failed to parse log level from config")?;

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(subscriber_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global default subscriber")?;

    Ok(guard)
}
