use core::fmt;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::geom::fixed::{CoordError, parse_coord};
use crate::geom::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCoord {
    X,
    Y,
}

impl fmt::Display for InputCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputCoord::X => write!(f, "x 坐标"),
            InputCoord::Y => write!(f, "y 坐标"),
        }
    }
}

/// 输入边界上的错误：在核心算法运行之前拒绝。
#[derive(Debug, Error)]
pub enum InputError {
    #[error("读取输入失败：{0}")]
    Io(#[from] io::Error),
    #[error("缺少点数")]
    MissingCount,
    #[error("点数 `{token}` 不是非负整数")]
    InvalidCount { token: String },
    #[error("第 {point_index} 个点：缺少{coord}")]
    MissingCoordinate { point_index: usize, coord: InputCoord },
    #[error("第 {point_index} 个点：{coord} `{token}` 无效（{error}）")]
    InvalidCoordinate {
        point_index: usize,
        coord: InputCoord,
        token: String,
        error: CoordError,
    },
    #[error("声明的 {declared} 个点之后还有多余输入")]
    TrailingInput { declared: usize },
    #[error("至少需要 2 个点，实际 {actual} 个")]
    TooFewPoints { actual: usize },
    #[error("第 {point_index} 个点 {point} 与第 {kept_point_index} 个点重复")]
    DuplicatePoint {
        point_index: usize,
        kept_point_index: usize,
        point: Point,
    },
}

/// 校验后的点集：至少 2 个点，且两两不同。
///
/// 只能通过 [`validate_points`]（或其上层的 [`load_points`]）构造。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointList {
    points: Vec<Point>,
}

impl PointList {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }

    /// 跳过唯一性检查直接包装。
    ///
    /// 说明：调用方需保证点两两不同；核心算法不会再次校验。
    pub(crate) fn from_unique_unchecked(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// 校验点数（>= 2）与唯一性；重复时报告首次出现的位置。
pub fn validate_points(points: Vec<Point>) -> Result<PointList, InputError> {
    if points.len() < 2 {
        return Err(InputError::TooFewPoints {
            actual: points.len(),
        });
    }

    let mut seen: BTreeMap<Point, usize> = BTreeMap::new();
    for (point_index, &point) in points.iter().enumerate() {
        if let Some(&kept_point_index) = seen.get(&point) {
            return Err(InputError::DuplicatePoint {
                point_index,
                kept_point_index,
                point,
            });
        }
        seen.insert(point, point_index);
    }

    Ok(PointList { points })
}

/// 解析文本输入：首个记号为点数 `n`，随后是 `n` 对空白分隔的整数 `x y`。
pub fn load_points(source: &str) -> Result<PointList, InputError> {
    let mut tokens = source.split_whitespace();

    let count_token = tokens.next().ok_or(InputError::MissingCount)?;
    let declared: usize = count_token.parse().map_err(|_| InputError::InvalidCount {
        token: count_token.to_string(),
    })?;

    // 声明的点数不可信，预分配量以实际记号数为上限
    let mut points = Vec::with_capacity(declared.min(source.len() / 4 + 1));
    for point_index in 0..declared {
        let x = next_coord(&mut tokens, point_index, InputCoord::X)?;
        let y = next_coord(&mut tokens, point_index, InputCoord::Y)?;
        points.push(Point { x, y });
    }

    if tokens.next().is_some() {
        return Err(InputError::TrailingInput { declared });
    }

    debug!(points = points.len(), "parsed point input");
    validate_points(points)
}

pub fn load_points_from_path(path: impl AsRef<Path>) -> Result<PointList, InputError> {
    let source = std::fs::read_to_string(path)?;
    load_points(&source)
}

/// 将点集写回输入格式（与 [`load_points`] 互逆）。
pub fn points_to_input_string(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 16 + 8);
    out.push_str(&points.len().to_string());
    out.push('\n');
    for p in points {
        out.push_str(&p.x.to_string());
        out.push(' ');
        out.push_str(&p.y.to_string());
        out.push('\n');
    }
    out
}

fn next_coord<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    point_index: usize,
    coord: InputCoord,
) -> Result<i64, InputError> {
    let token = tokens
        .next()
        .ok_or(InputError::MissingCoordinate { point_index, coord })?;
    parse_coord(token).map_err(|error| InputError::InvalidCoordinate {
        point_index,
        coord,
        token: token.to_string(),
        error,
    })
}
