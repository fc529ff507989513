pub mod local;
pub mod vector;

pub use local::find_vector_files;
pub use vector::VectorSource;
