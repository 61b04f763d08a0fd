//! Numeric constants for model stability
//!
//! These constants define thresholds used to keep the path-loss math
//! well-defined across the full input range.

/// Smallest distance (in meters) accepted by the path-loss law.
/// log10 is undefined at zero and blows up for denormals, so anything
/// below this floor is rejected as an invalid distance rather than
/// silently producing -inf/NaN readings.
pub const MIN_DISTANCE: f64 = 1e-9;

/// Smallest accepted room dimension in meters. Rules out degenerate
/// zero-area rooms where uniform placement is meaningless.
pub const MIN_ROOM_DIMENSION: f64 = 1e-6;
