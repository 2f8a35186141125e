use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::config::{COMPILER, OUTPUT_FLAG};
use crate::error::BatchError;

pub trait ShaderCompiler {
    /// Compiles `input` into `output`, blocking until the compiler exits.
    fn compile(&self, input: &Path, output: &Path) -> Result<(), BatchError>;
}

/// Runs an external `glslc`-style compiler: `<program> <input> -o <output>`.
#[derive(Debug, Clone)]
pub struct Glslc {
    program: String,
}

impl Default for Glslc {
    fn default() -> Self {
        Self::with_program(COMPILER)
    }
}

impl Glslc {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn command_line(&self, input: &Path, output: &Path) -> String {
        format!(
            "{} {} {} {}",
            self.program,
            input.display(),
            OUTPUT_FLAG,
            output.display()
        )
    }
}

impl ShaderCompiler for Glslc {
    fn compile(&self, input: &Path, output: &Path) -> Result<(), BatchError> {
        debug!("running {}", self.command_line(input, output));
        let status = Command::new(&self.program)
            .arg(input)
            .arg(OUTPUT_FLAG)
            .arg(output)
            .status()
            .map_err(|source| BatchError::CompilerUnavailable {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(BatchError::CompileFailed {
                command: self.command_line(input, output),
                status,
            });
        }
        Ok(())
    }
}
