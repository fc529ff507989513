use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions GDAL opens as vector datasets.
const VECTOR_EXTENSIONS: [&str; 7] = ["gpkg", "shp", "geojson", "json", "fgb", "gml", "kml"];

pub fn is_vector_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            VECTOR_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Gather every vector file under `root`, sorted by path.
pub fn find_vector_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && is_vector_file(e.path()))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}
