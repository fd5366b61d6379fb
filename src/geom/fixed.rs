use thiserror::Error;

pub type Coord = i64;

/// 输入坐标允许的闭区间 `[COORD_MIN, COORD_MAX]`（与 32 位整数输入保持一致）。
pub const COORD_MIN: Coord = i32::MIN as Coord;
pub const COORD_MAX: Coord = i32::MAX as Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("输入坐标不是整数")]
    NotInteger,
    #[error("输入坐标超出允许范围 [{}, {}]", COORD_MIN, COORD_MAX)]
    OutOfRange,
}

pub fn parse_coord(token: &str) -> Result<Coord, CoordError> {
    let value: i128 = token.parse().map_err(|_| CoordError::NotInteger)?;
    check_coord(value)
}

pub fn check_coord(value: i128) -> Result<Coord, CoordError> {
    if value < COORD_MIN as i128 || value > COORD_MAX as i128 {
        return Err(CoordError::OutOfRange);
    }
    Ok(value as Coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coord_accepts_signed_integers() {
        assert_eq!(parse_coord("0").unwrap(), 0);
        assert_eq!(parse_coord("-17").unwrap(), -17);
        assert_eq!(parse_coord("+42").unwrap(), 42);
        assert_eq!(parse_coord("2147483647").unwrap(), COORD_MAX);
        assert_eq!(parse_coord("-2147483648").unwrap(), COORD_MIN);
    }

    #[test]
    fn parse_coord_rejects_out_of_range() {
        assert_eq!(
            parse_coord("2147483648").unwrap_err(),
            CoordError::OutOfRange
        );
        assert_eq!(
            parse_coord("-2147483649").unwrap_err(),
            CoordError::OutOfRange
        );
        assert_eq!(
            parse_coord("99999999999999999999999").unwrap_err(),
            CoordError::OutOfRange
        );
    }

    #[test]
    fn parse_coord_rejects_non_integers() {
        assert_eq!(parse_coord("1.5").unwrap_err(), CoordError::NotInteger);
        assert_eq!(parse_coord("abc").unwrap_err(), CoordError::NotInteger);
        assert_eq!(parse_coord("").unwrap_err(), CoordError::NotInteger);
    }
}
