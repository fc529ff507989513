pub mod compute;
pub mod config;
pub mod models;
pub mod reader;
pub mod tool;
pub mod traits;
pub mod utils;
pub mod writer;

pub use compute::{RunSummary, compute_per_feature_extents, compute_whole_layer_extent};
pub use config::{Args, Config, OutputFormat, Source};
pub use models::{geometry::BoundingBox, mode::Mode, record::ExtentRecord};
pub use tool::ExtentTool;
