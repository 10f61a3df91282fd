pub mod config;
pub mod csv_table;
pub mod frame_builder;
pub mod geojson;

pub use config::load_config;
pub use csv_table::read_csv_frame;
pub use frame_builder::{Cell, FrameBuilder, IngestOptions};
pub use geojson::{
    CENTROID_X_COLUMN, CENTROID_Y_COLUMN, geometry_centroid, parse_feature_collection,
    read_geojson_frame,
};
