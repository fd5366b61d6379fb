//! 读取点集文件，输出以每个点为中心、互不重叠的轴对齐正方形的最大边长。
//!
//! 输入格式：首个整数为点数 n，随后 n 行 `x y`。
//!
//! 用法：
//!   max-side-length points.txt
//!   max-side-length points.txt --trace trace.json
//!   max-side-length points.txt --verify

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use max_side_length::oracle::{brute_force_square_side, tied_square_sides};
use max_side_length::preprocess::load_points_from_path;
use max_side_length::{Limits, SolveError, SolveOptions, solve};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "max-side-length", version, about)]
struct Cli {
    /// 输入文件
    input: PathBuf,

    /// 将 `closest-trace.v1` JSON 写入该文件
    #[arg(long, value_name = "FILE")]
    trace: Option<PathBuf>,

    /// 同时运行 O(n²) 暴力解并比对答案
    #[arg(long)]
    verify: bool,

    /// 输入点数上限
    #[arg(long, default_value_t = Limits::default().max_points)]
    max_points: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(side) => {
            println!("{side}");
            ExitCode::SUCCESS
        }
        Err(CliError::Solve(e)) if e.is_user_error() => {
            eprintln!("错误：{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("错误：{e}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error("写入 trace 失败：{}（{}）", .path.display(), .reason)]
    TraceWrite { path: PathBuf, reason: String },
    #[error("校验失败：分治结果 {fast}，暴力结果 {naive}")]
    VerifyMismatch { fast: u64, naive: u64 },
}

fn run(cli: Cli) -> Result<u64, CliError> {
    let points = load_points_from_path(&cli.input).map_err(SolveError::from)?;
    let options = SolveOptions {
        trace_enabled: cli.trace.is_some(),
        limits: Limits {
            max_points: cli.max_points,
            ..Limits::default()
        },
    };
    let solution = solve(&points, &options)?;
    info!(
        input = %cli.input.display(),
        points = points.len(),
        a = %solution.pair.a,
        b = %solution.pair.b,
        side = solution.side,
        "solved"
    );

    if let (Some(path), Some(trace)) = (&cli.trace, &solution.trace) {
        let json = trace.to_json_string().map_err(|e| CliError::TraceWrite {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        fs::write(path, json).map_err(|e| CliError::TraceWrite {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    }

    if cli.verify {
        // 取整距离平局时两种解法可能选中不同的最近点对，只要求落在平局集合内
        let tied = tied_square_sides(points.as_slice());
        if !tied.contains(&solution.side) {
            let naive = brute_force_square_side(points.as_slice()).unwrap_or(0);
            warn!(fast = solution.side, naive, "answers differ");
            return Err(CliError::VerifyMismatch {
                fast: solution.side,
                naive,
            });
        }
        if tied.len() > 1 {
            info!(sides = ?tied, "closest distance is tied across pairs with different sides");
        }
    }

    Ok(solution.side)
}
