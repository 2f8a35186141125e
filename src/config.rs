use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const SOURCE_DIR: &str = "src";
pub const OUTPUT_DIR: &str = "bin";
pub const SHADER_EXTENSIONS: [&str; 2] = ["vert", "frag"];
pub const COMPILER: &str = "glslc";
pub const OUTPUT_FLAG: &str = "-o";
pub const SPIRV_SUFFIX: &str = "spv";

/// Where shaders are read from and where the compiled SPIR-V lands.
///
/// The binary only ever uses [`BatchConfig::default`]; other values exist for tests.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(SOURCE_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}

impl BatchConfig {
    #[cfg(test)]
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn is_shader(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| SHADER_EXTENSIONS.contains(&ext))
            .unwrap_or(false)
    }

    // a.vert -> <output_dir>/a.vert.spv, the stage extension is kept
    pub fn output_path_for(&self, shader: &Path) -> PathBuf {
        let mut name = shader
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".");
        name.push(SPIRV_SUFFIX);
        self.output_dir.join(name)
    }
}
