use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use itertools::Itertools;
use tracing::{debug, info};

use crate::compiler::ShaderCompiler;
use crate::config::BatchConfig;
use crate::error::BatchError;

const SOURCE_GLOB: &str = "*.*";

/// Shaders compiled by one batch, as `(input, output)` pairs in compile order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub compiled: Vec<(PathBuf, PathBuf)>,
}

/// Entries matching `*.*` directly inside the source dir with a `vert`/`frag`
/// extension, sorted by path.
pub fn collect_shaders(config: &BatchConfig) -> Result<Vec<PathBuf>, BatchError> {
    let source_dir = &config.source_dir;
    if !source_dir.is_dir() {
        return Err(BatchError::SourceDirMissing {
            path: source_dir.clone(),
        });
    }

    // hidden files are not matched by `*`, same as a shell
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let pattern = format!(
        "{}/{}",
        Pattern::escape(&source_dir.to_string_lossy()),
        SOURCE_GLOB
    );
    let entries = glob::glob_with(&pattern, options).map_err(|source| {
        BatchError::SourcePattern {
            pattern: pattern.clone(),
            source,
        }
    })?;

    let mut shaders = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            BatchError::read_source(path, e.into_error())
        })?;
        if path.is_dir() {
            continue;
        }
        if !BatchConfig::is_shader(&path) {
            debug!("skipping {}", path.display());
            continue;
        }
        shaders.push(path);
    }
    Ok(shaders.into_iter().sorted().collect())
}

pub fn progress_line(input: &Path, output: &Path) -> String {
    format!("Compiled {} -> {}", input.display(), output.display())
}

/// Compiles every shader in the source dir, stopping at the first failure.
///
/// One progress line goes to `progress` after each successful compile.
pub fn run(
    config: &BatchConfig,
    compiler: &dyn ShaderCompiler,
    progress: &mut dyn Write,
) -> Result<BatchReport, BatchError> {
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| BatchError::output_dir(&config.output_dir, e))?;
    let shaders = collect_shaders(config)?;

    let mut report = BatchReport::default();
    for input in shaders {
        let output = config.output_path_for(&input);
        compiler.compile(&input, &output)?;
        writeln!(progress, "{}", progress_line(&input, &output))
            .map_err(BatchError::Progress)?;
        report.compiled.push((input, output));
    }
    info!(
        "compiled {} shader(s) into {}",
        report.compiled.len(),
        config.output_dir.display()
    );
    Ok(report)
}
