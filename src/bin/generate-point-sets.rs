use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use max_side_length::Point;
use max_side_length::geom::fixed::{COORD_MAX, COORD_MIN};
use max_side_length::oracle::{brute_force_closest_pair, brute_force_square_side};
use max_side_length::preprocess::points_to_input_string;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

const INDEX_SCHEMA: &str = "point-set-index.v1";

/// 生成最大正方形边长问题的输入文件（精选 + 随机），并附带暴力解作为期望答案。
#[derive(Parser, Debug)]
#[command(name = "generate-point-sets", version, about)]
struct Args {
    /// 输出目录
    #[arg(long = "out", default_value = "generated")]
    out_dir: PathBuf,

    /// 随机用例个数
    #[arg(long = "random", default_value_t = 30)]
    random_count: usize,

    /// 每个随机用例的点数（至少 2）
    #[arg(long = "points", default_value_t = 200, value_parser = clap::value_parser!(u64).range(2..=20_000))]
    points_per_case: u64,

    /// 随机坐标取值范围 [-range, range]
    #[arg(long, default_value_t = 10_000_000, value_parser = clap::value_parser!(i64).range(1..=COORD_MAX))]
    range: i64,

    /// 随机种子
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(msg) = run(args) {
        eprintln!("错误：{msg}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let side = 2 * args.range as u128 + 1;
    if (args.points_per_case as u128) > side * side {
        return Err(format!(
            "--points {} 超过了 [-{r}, {r}]² 中不同整数点的个数",
            args.points_per_case,
            r = args.range
        ));
    }

    let out_dir = args.out_dir;
    let curated_dir = out_dir.join("curated");
    let random_dir = out_dir.join("random");
    fs::create_dir_all(&curated_dir)
        .map_err(|e| format!("创建目录失败：{}（{}）", curated_dir.display(), e))?;
    fs::create_dir_all(&random_dir)
        .map_err(|e| format!("创建目录失败：{}（{}）", random_dir.display(), e))?;

    let mut items: Vec<IndexItem> = Vec::new();
    for case in curated_cases() {
        items.push(write_case(&curated_dir, "curated", &case)?);
    }

    for i in 0..args.random_count {
        let seed = mix_seed(args.seed, i as u64);
        let case = Case {
            id: format!("random-{i:04}"),
            title: format!("随机：{} 个点（seed={seed}）", args.points_per_case),
            tags: vec!["random"],
            points: build_random_points(seed, args.points_per_case as usize, args.range),
        };
        items.push(write_case(&random_dir, "random", &case)?);
    }

    let index_json = index_to_json_string(&items)
        .map_err(|e| format!("序列化 index.json 失败：{e}"))?;
    let index_path = out_dir.join("index.json");
    fs::write(&index_path, index_json)
        .map_err(|e| format!("写入 index.json 失败：{}（{}）", index_path.display(), e))?;

    info!(
        out_dir = %out_dir.display(),
        curated = items.len() - args.random_count,
        random = args.random_count,
        index = %index_path.display(),
        "generated point sets"
    );
    Ok(())
}

#[derive(Clone, Debug)]
struct Case {
    id: String,
    title: String,
    tags: Vec<&'static str>,
    points: Vec<Point>,
}

#[derive(Clone, Debug, Serialize)]
struct IndexItem {
    id: String,
    title: String,
    path: String,
    tags: Vec<String>,
    points: usize,
    closest_distance: u64,
    expected_side: u64,
}

#[derive(Serialize)]
struct IndexDocument<'a> {
    schema: &'static str,
    items: &'a [IndexItem],
}

fn index_to_json_string(items: &[IndexItem]) -> serde_json::Result<String> {
    serde_json::to_string(&IndexDocument {
        schema: INDEX_SCHEMA,
        items,
    })
}

fn write_case(dir: &Path, group: &str, case: &Case) -> Result<IndexItem, String> {
    let (Some(pair), Some(expected_side)) = (
        brute_force_closest_pair(&case.points),
        brute_force_square_side(&case.points),
    ) else {
        return Err(format!("用例 {} 少于 2 个点", case.id));
    };

    let file_name = format!("{}.txt", case.id);
    let out_path = dir.join(&file_name);
    fs::write(&out_path, points_to_input_string(&case.points))
        .map_err(|e| format!("写入失败：{}（{}）", out_path.display(), e))?;

    Ok(IndexItem {
        id: case.id.clone(),
        title: case.title.clone(),
        path: format!("{group}/{file_name}"),
        tags: case.tags.iter().map(|t| t.to_string()).collect(),
        points: case.points.len(),
        closest_distance: pair.distance,
        expected_side,
    })
}

fn curated_cases() -> Vec<Case> {
    let p = |x, y| Point::new(x, y);
    vec![
        Case {
            id: "two-points".to_string(),
            title: "基本：两点 (0,0)-(3,4)，欧氏 5，边长 4".to_string(),
            tags: vec!["curated"],
            points: vec![p(0, 0), p(3, 4)],
        },
        Case {
            id: "collinear".to_string(),
            title: "基本：三点共线".to_string(),
            tags: vec!["curated"],
            points: vec![p(0, 0), p(1, 0), p(5, 0)],
        },
        Case {
            id: "diagonal".to_string(),
            title: "基本：对角相邻 (0,0)-(1,1)".to_string(),
            tags: vec!["curated"],
            points: vec![p(0, 0), p(10, 10), p(1, 1), p(20, 0)],
        },
        Case {
            id: "shared-x".to_string(),
            title: "退化：所有点 x 相同".to_string(),
            tags: vec!["curated", "degenerate"],
            points: [0, 30, 3, 17, 19, -8, 12, 40].iter().map(|&y| p(5, y)).collect(),
        },
        Case {
            id: "straddle".to_string(),
            title: "合并：最近点对跨越分割线".to_string(),
            tags: vec!["curated", "stripe"],
            points: vec![p(-10, 0), p(-9, 50), p(0, 0), p(1, 0), p(10, 50), p(11, 0)],
        },
        Case {
            id: "extreme".to_string(),
            title: "边界：坐标取到 32 位整数极值".to_string(),
            tags: vec!["curated", "degenerate"],
            points: vec![
                p(COORD_MIN, COORD_MIN),
                p(COORD_MAX, COORD_MAX),
                p(COORD_MIN, COORD_MAX),
                p(0, 0),
            ],
        },
    ]
}

fn build_random_points(seed: u64, count: usize, range: i64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seen: BTreeSet<Point> = BTreeSet::new();
    let mut points = Vec::with_capacity(count);

    while points.len() < count {
        let point = Point::new(rng.gen_range(-range..=range), rng.gen_range(-range..=range));
        if seen.insert(point) {
            points.push(point);
        }
    }
    points
}

fn mix_seed(base: u64, salt: u64) -> u64 {
    base ^ salt.wrapping_mul(0x9e37_79b9_7f4a_7c15)
}
