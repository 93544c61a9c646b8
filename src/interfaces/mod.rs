// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod fixed_point;

pub use fixed_point::FixedPoint;
