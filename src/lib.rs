pub mod answer;
pub mod closest;
pub mod error;
pub mod geom;
pub mod limits;
pub mod oracle;
pub mod preprocess;
pub mod run;
pub mod trace;

pub use answer::{max_square_side, max_square_side_with_limits, square_side};
pub use closest::{CandidatePair, DualOrder, InternalInvariantError};
pub use error::SolveError;
pub use geom::point::Point;
pub use limits::{LimitExceeded, LimitKind, Limits};
pub use preprocess::{InputError, PointList, load_points, load_points_from_path, validate_points};
pub use run::{Solution, SolveOptions, run_file, run_source, solve};
pub use trace::{TRACE_SCHEMA, Trace};
