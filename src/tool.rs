use crate::compute::{self, RunSummary};
use crate::config::{Config, Source};
use crate::reader::{VectorSource, find_vector_files};
use crate::traits::NoProgress;
use crate::utils::progress::TerminalProgress;
use crate::utils::summary::{RunReport, print_run_summary};
use crate::writer::create_writer;
use anyhow::Context;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct ExtentTool {
    config: Config,
    jobs: Vec<(PathBuf, PathBuf)>,
}

impl ExtentTool {
    /// Resolve the (input, output) pairs this run will process.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let jobs = match &config.source {
            Source::File(path) => vec![(path.clone(), config.output.clone())],
            Source::Folder(root) => {
                std::fs::create_dir_all(&config.output).with_context(|| {
                    format!("Failed to create output folder {:?}", config.output)
                })?;
                let format = config.format_for(&config.output);
                let jobs: Vec<(PathBuf, PathBuf)> = find_vector_files(root)
                    .into_iter()
                    .filter(|input| !input.starts_with(&config.output))
                    .map(|input| {
                        let output =
                            batch_output_path(&input, root, &config.output, format.extension());
                        (input, output)
                    })
                    .collect();

                let mut seen = HashSet::new();
                for (input, output) in &jobs {
                    if !seen.insert(output.to_string_lossy().to_lowercase()) {
                        anyhow::bail!("{:?} would overwrite the output of another input", input);
                    }
                }
                jobs
            }
        };

        if jobs.is_empty() {
            anyhow::bail!("No vector files found in {:?}", config.source);
        }

        Ok(Self { config, jobs })
    }

    /// Process every job, print the summary and fail if nothing succeeded.
    pub fn start(self) -> anyhow::Result<Vec<RunReport>> {
        let mut reports = Vec::with_capacity(self.jobs.len());

        for (input, output) in &self.jobs {
            let mut layer = None;
            let result = self
                .process(input, output, &mut layer)
                .map_err(|e| format!("{:#}", e));
            if let Err(err) = &result {
                eprintln!("❌ {:?}: {}", input, err);
            }
            reports.push(RunReport {
                input: input.clone(),
                output: output.clone(),
                layer,
                mode: self.config.mode,
                result,
            });
        }

        if !self.config.quiet {
            print_run_summary(&reports);
        }

        if reports.iter().all(|r| r.result.is_err()) {
            anyhow::bail!("No extent could be computed");
        }
        Ok(reports)
    }

    fn process(
        &self,
        input: &Path,
        output: &Path,
        layer_name: &mut Option<String>,
    ) -> anyhow::Result<RunSummary> {
        let mut source = VectorSource::open(input, self.config.layer.as_deref())?;
        *layer_name = Some(source.layer_name().to_string());

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output folder {:?}", parent))?;
        }

        let srs = source.spatial_ref();
        let format = self.config.format_for(output);
        let mut writer = create_writer(output, format, srs.as_ref())?;

        if self.config.quiet {
            let summary =
                compute::run(&mut source, self.config.mode, writer.as_mut(), &mut NoProgress)?;
            writer.finish()?;
            return Ok(summary);
        }

        let mut progress = TerminalProgress::new(format!(
            "Computing {} extent of {:?}",
            self.config.mode, input
        ));
        let result = compute::run(&mut source, self.config.mode, writer.as_mut(), &mut progress)
            .and_then(|summary| writer.finish().map(|_| summary));
        match &result {
            Ok(summary) => {
                progress.finish(format!("✅ {} record(s) → {:?}", summary.records, output))
            }
            Err(_) => progress.abandon(format!("❌ Stopped on {:?}", input)),
        }
        result
    }
}

/// `<out_dir>/<subfolder>/<stem>_<source ext>_extent.<ext>` for one file of a
/// batch run, mirroring the layout under `root`.
fn batch_output_path(input: &Path, root: &Path, out_dir: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("layer");
    let source_ext = input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let subfolder = input
        .strip_prefix(root)
        .ok()
        .and_then(Path::parent)
        .unwrap_or(Path::new(""));
    out_dir
        .join(subfolder)
        .join(format!("{}_{}_extent.{}", stem, source_ext, extension))
}
