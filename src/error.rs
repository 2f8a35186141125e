use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("source directory not found: {}", path.display())]
    SourceDirMissing { path: PathBuf },
    #[error("failed to create output directory {}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid source pattern `{pattern}`")]
    SourcePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("failed to read source entry {}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to launch shader compiler `{program}`")]
    CompilerUnavailable {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("shader compilation failed ({status}): {command}")]
    CompileFailed { command: String, status: ExitStatus },
    #[error("failed to write progress output")]
    Progress(#[source] io::Error),
}

impl BatchError {
    pub fn output_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputDir {
            path: path.into(),
            source,
        }
    }

    pub fn read_source(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadSource {
            path: path.into(),
            source,
        }
    }
}
