use chrono::Utc;
use chrono_tz::Asia::Seoul;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::config::LogConfig;

/// 日志时间使用 UTC+9，与行情数据的交易日一致
struct SeoulTime;

impl FormatTime for SeoulTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Utc::now().with_timezone(&Seoul);
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// 文件日志的 guard 需持有到进程退出
pub fn init_logging(cfg: &LogConfig) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.filter));

    let console_layer = fmt::layer()
        .with_timer(SeoulTime)
        .with_target(true)
        .with_line_number(true);

    if !cfg.to_file {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
        return None;
    }

    // 按天轮转，写盘放到后台线程
    let appender = RollingFileAppender::new(Rotation::DAILY, &cfg.dir, &cfg.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .with_timer(SeoulTime)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();
    Some(guard)
}
