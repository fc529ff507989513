pub mod geometry;
pub mod mode;
pub mod record;
