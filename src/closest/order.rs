use crate::geom::point::Point;

/// 同一点集的两种视图：x 序（x 升序，x 相同按 y 升序）与 y 序（y 升序）。
///
/// 两种顺序只在顶层排序一次；递归过程中只做保序过滤，不再重新排序。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DualOrder {
    x_order: Vec<Point>,
    y_order: Vec<Point>,
}

impl DualOrder {
    /// 说明：y 相同的点再按 x 排序，使 y 序与输入顺序无关。
    pub fn new(points: &[Point]) -> Self {
        let mut x_order = points.to_vec();
        x_order.sort_unstable();

        let mut y_order = points.to_vec();
        y_order.sort_unstable_by_key(|p| (p.y, p.x));

        Self { x_order, y_order }
    }

    pub fn len(&self) -> usize {
        self.x_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_order.is_empty()
    }

    pub fn x_order(&self) -> &[Point] {
        &self.x_order
    }

    pub fn y_order(&self) -> &[Point] {
        &self.y_order
    }
}
