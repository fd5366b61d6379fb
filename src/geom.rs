pub mod fixed;
pub mod metric;
pub mod point;
