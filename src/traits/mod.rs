mod extent;

pub use extent::{Bounded, ExtentSink, LayerSource, NoProgress, ProgressSink};
