use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dupattr_core::{scan_and_write, OutputFormat, ScanOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "dupattr", version, about = "Report tags that declare the same attribute twice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描单个源文件中的重复属性
    Scan {
        /// 输入文件（JSX/TSX/HTML 等）
        path: PathBuf,

        /// 输出格式
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// 模式文件（TOML），覆盖内置的标签/属性正则
        #[arg(long)]
        patterns: Option<PathBuf>,

        /// 发现重复属性时以状态码 1 退出（用于 CI）
        #[arg(long)]
        deny: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<ExitCode> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { path, format, patterns, deny } => {
            info!(?path, ?patterns, "starting scan");

            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());

            let opts = ScanOptions { format: format.into(), patterns_path: patterns };
            let stats = scan_and_write(&path, &mut out, &opts)
                .with_context(|| format!("scan of {} failed", path.display()))?;
            out.flush().context("flush report")?;

            info!(tags_scanned = stats.tags_scanned, tags_reported = stats.tags_reported, "scan finished");

            if deny && stats.tags_reported > 0 {
                warn!(tags_reported = stats.tags_reported, "duplicate attributes found");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只留给报告
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
