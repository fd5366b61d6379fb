//! 距离度量：欧氏距离（向下取整）与切比雪夫距离。
//!
//! 约定：
//! - 坐标来自校验后的整数输入（`Coord = i64`，见 `geom::fixed`），中间量用 `i128/u128`，结果精确；
//! - 欧氏距离按 `floor(sqrt(dx² + dy²))` 截断为整数，比较与条带宽度都以截断值为准。

use crate::geom::point::Point;

/// 计算 `dx² + dy²`。
pub fn squared_distance(a: Point, b: Point) -> u128 {
    let dx = (a.x as i128) - (b.x as i128);
    let dy = (a.y as i128) - (b.y as i128);
    (dx * dx + dy * dy) as u128
}

/// 计算 `floor(sqrt(dx² + dy²))`。
///
/// 说明：使用整数平方根，避免浮点开方在大坐标下的舍入误差。
pub fn euclidean_floor(a: Point, b: Point) -> u64 {
    squared_distance(a, b).isqrt() as u64
}

/// 计算 `max(|dx|, |dy|)`：以两点为中心、互不重叠的轴对齐正方形的最大边长。
pub fn chebyshev(a: Point, b: Point) -> u64 {
    let dx = (a.x as i128 - b.x as i128).unsigned_abs();
    let dy = (a.y as i128 - b.y as i128).unsigned_abs();
    dx.max(dy) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::fixed::{COORD_MAX, COORD_MIN};

    #[test]
    fn euclidean_floor_truncates() {
        let o = Point::new(0, 0);
        assert_eq!(euclidean_floor(o, Point::new(3, 4)), 5);
        assert_eq!(euclidean_floor(o, Point::new(1, 1)), 1);
        assert_eq!(euclidean_floor(o, Point::new(2, 2)), 2);
        assert_eq!(euclidean_floor(o, Point::new(0, -7)), 7);
    }

    #[test]
    fn chebyshev_takes_larger_axis() {
        let o = Point::new(0, 0);
        assert_eq!(chebyshev(o, Point::new(3, 4)), 4);
        assert_eq!(chebyshev(o, Point::new(-9, 2)), 9);
        assert_eq!(chebyshev(Point::new(5, 5), Point::new(5, 5)), 0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Point::new(COORD_MIN, COORD_MIN);
        let b = Point::new(COORD_MAX, COORD_MAX);
        let side = (COORD_MAX - COORD_MIN) as u64;
        assert_eq!(chebyshev(a, b), side);
        assert_eq!(squared_distance(a, b), 2 * (side as u128) * (side as u128));
        // floor(side * sqrt(2))
        let d = euclidean_floor(a, b) as u128;
        assert!(d * d <= 2 * (side as u128) * (side as u128));
        assert!((d + 1) * (d + 1) > 2 * (side as u128) * (side as u128));
    }

    #[test]
    fn euclidean_floor_is_exact_for_large_coordinates() {
        let k: i64 = 40_000_000;
        let o = Point::new(0, 0);
        // k² + 1 不是完全平方数，取整后仍为 k
        assert_eq!(euclidean_floor(o, Point::new(k, 1)), k as u64);
        assert_eq!(euclidean_floor(o, Point::new(3 * k, 4 * k)), 5 * k as u64);
        assert_eq!(euclidean_floor(o, Point::new(3 * k, 4 * k - 1)), 5 * k as u64 - 1);
    }
}
