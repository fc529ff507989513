use crate::models::mode::Mode;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Source {
    File(PathBuf),
    Folder(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Gpkg,
    Shp,
    Geojson,
    Fgb,
    Csv,
}

impl OutputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Some(match ext.as_str() {
            "gpkg" => OutputFormat::Gpkg,
            "shp" => OutputFormat::Shp,
            "geojson" | "json" => OutputFormat::Geojson,
            "fgb" => OutputFormat::Fgb,
            "csv" => OutputFormat::Csv,
            _ => return None,
        })
    }

    /// OGR driver short name, `None` for CSV which is written without GDAL.
    pub fn driver_name(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Gpkg => Some("GPKG"),
            OutputFormat::Shp => Some("ESRI Shapefile"),
            OutputFormat::Geojson => Some("GeoJSON"),
            OutputFormat::Fgb => Some("FlatGeobuf"),
            OutputFormat::Csv => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Gpkg => "gpkg",
            OutputFormat::Shp => "shp",
            OutputFormat::Geojson => "geojson",
            OutputFormat::Fgb => "fgb",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Polygon from layer extent
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Input vector file, or a folder to process every vector file in it
    pub input: PathBuf,

    /// Output file (or folder when the input is a folder)
    pub output: PathBuf,

    /// Calculate extent for each feature separately
    #[arg(long)]
    pub by_feature: bool,

    /// Layer to read, defaults to the first layer
    #[arg(long)]
    pub layer: Option<String>,

    /// Output format, guessed from the output extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Hide the progress bar and summary table
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub output: PathBuf,
    pub mode: Mode,
    pub layer: Option<String>,
    pub format: Option<OutputFormat>,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: Source::Folder(PathBuf::from("data")),
            output: PathBuf::from("extents"),
            mode: Mode::WholeLayer,
            layer: None,
            format: None,
            quiet: false,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> anyhow::Result<Self> {
        let source = if args.input.is_dir() {
            Source::Folder(args.input)
        } else if args.input.is_file() {
            Source::File(args.input)
        } else {
            anyhow::bail!("Input {:?} does not exist", args.input);
        };

        // a single output file must name its format one way or another
        if matches!(source, Source::File(_))
            && args.format.is_none()
            && OutputFormat::from_path(&args.output).is_none()
        {
            anyhow::bail!(
                "Cannot guess output format from {:?}, pass --format",
                args.output
            );
        }

        Ok(Config {
            source,
            output: args.output,
            mode: Mode::from_by_feature(args.by_feature),
            layer: args.layer,
            format: args.format,
            quiet: args.quiet,
        })
    }
}

impl Config {
    /// Format used for `output`: explicit choice, then extension, then GeoPackage.
    pub fn format_for(&self, output: &Path) -> OutputFormat {
        self.format
            .or_else(|| OutputFormat::from_path(output))
            .unwrap_or(OutputFormat::Gpkg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: PathBuf, output: &str) -> Args {
        Args {
            input,
            output: PathBuf::from(output),
            by_feature: false,
            layer: None,
            format: None,
            quiet: true,
        }
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out.GPKG")),
            Some(OutputFormat::Gpkg)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.json")),
            Some(OutputFormat::Geojson)
        );
        assert_eq!(OutputFormat::from_path(Path::new("out.txt")), None);
        assert_eq!(OutputFormat::from_path(Path::new("out")), None);
    }

    #[test]
    fn test_config_rejects_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::try_from(args(dir.path().join("missing.gpkg"), "out.gpkg"));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_unknown_output_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.geojson");
        std::fs::write(&input, "{}").unwrap();
        assert!(Config::try_from(args(input.clone(), "out.txt")).is_err());

        let mut explicit = args(input, "out.txt");
        explicit.format = Some(OutputFormat::Csv);
        let config = Config::try_from(explicit).unwrap();
        assert_eq!(config.format_for(&config.output), OutputFormat::Csv);
    }

    #[test]
    fn test_config_folder_source_and_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(dir.path().to_path_buf(), "extents");
        a.by_feature = true;
        let config = Config::try_from(a).unwrap();

        assert!(matches!(config.source, Source::Folder(_)));
        assert_eq!(config.mode, Mode::PerFeature);
        assert_eq!(
            config.format_for(Path::new("extents/x_extent")),
            OutputFormat::Gpkg
        );
    }
}
