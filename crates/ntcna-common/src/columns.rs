//! Column names derived at load time rather than read from source files.

/// Longitude of the feature geometry centroid.
pub const CENTROID_X_COLUMN: &str = "centroid_x";
/// Latitude of the feature geometry centroid.
pub const CENTROID_Y_COLUMN: &str = "centroid_y";
