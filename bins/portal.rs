use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(format: &str) {
    // 复用公共日志初始化工具，统一日志格式与级别处理
    common::utils::logging::init_logging(format);
    info!(service = "portal", event = "logger_init", format, "tracing subscriber initialized");
}

fn main() -> ExitCode {
    // 提前加载 .env，使得 RUST_LOG / PORTAL_API_URL 等环境变量生效
    dotenv().ok();
    let cli = console::Cli::parse();

    let cfg = match configs::AppConfig::load_and_validate_at(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&cfg.logging.format);

    // 运行实例上下文（不含敏感信息）
    let run_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：捕获异常并输出错误日志
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "portal",
            event = "panic",
            %run_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    info!(service = "portal", event = "start", %run_id, pid, version, "portal starting");

    // 单线程运行时：命令一次只发出一个请求
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "portal", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    let code = rt.block_on(async move {
        tokio::select! {
            code = console::run(cli, cfg) => code,
            _ = tokio::signal::ctrl_c() => {
                info!(service = "portal", event = "shutdown_signal", %run_id, pid, "received Ctrl+C, aborting command");
                ExitCode::from(130)
            }
        }
    });

    info!(service = "portal", event = "stop", %run_id, pid, "portal finished");
    code
}
