use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::compiler::Glslc;
use crate::config::BatchConfig;

mod batch;
mod compiler;
mod config;
mod error;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BatchConfig::default();
    batch::run(&config, &Glslc::default(), &mut std::io::stdout()).with_context(|| {
        format!(
            "failed to compile shaders from {} into {}",
            config.source_dir.display(),
            config.output_dir.display()
        )
    })?;
    Ok(())
}
