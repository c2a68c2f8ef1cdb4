//! Shader materials loaded from disk.
//!
//! A material `name` is a pair of WGSL files in one directory:
//! `{name}.vert.wgsl` (entry point `vs_main`) and `{name}.frag.wgsl`
//! (entry point `fs_main`). Both are read once at startup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// WGSL source of one material, as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub name: String,
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    /// Returns the `(vertex, fragment)` file paths for `name` under `dir`.
    pub fn paths(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
        (
            dir.join(format!("{name}.vert.wgsl")),
            dir.join(format!("{name}.frag.wgsl")),
        )
    }

    /// Reads both stages of material `name` from `dir`.
    pub fn read(dir: &Path, name: &str) -> Result<Self> {
        let (vert_path, frag_path) = Self::paths(dir, name);

        let vertex = std::fs::read_to_string(&vert_path)
            .with_context(|| format!("failed to read vertex shader {}", vert_path.display()))?;
        let fragment = std::fs::read_to_string(&frag_path)
            .with_context(|| format!("failed to read fragment shader {}", frag_path.display()))?;

        log::debug!("loaded material {name:?} from {}", dir.display());

        Ok(Self {
            name: name.to_string(),
            vertex,
            fragment,
        })
    }
}

/// Compiled vertex + fragment modules of one material.
pub struct ShaderProgram {
    pub name: String,
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    /// Reads and compiles material `name` from `dir`.
    pub fn load(device: &wgpu::Device, dir: &Path, name: &str) -> Result<Self> {
        let source = ShaderSource::read(dir, name)?;
        Ok(Self::compile(device, &source))
    }

    pub fn compile(device: &wgpu::Device, source: &ShaderSource) -> Self {
        let vertex = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("quadspin {} vertex", source.name)),
            source: wgpu::ShaderSource::Wgsl(source.vertex.as_str().into()),
        });
        let fragment = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("quadspin {} fragment", source.name)),
            source: wgpu::ShaderSource::Wgsl(source.fragment.as_str().into()),
        });

        Self {
            name: source.name.clone(),
            vertex,
            fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quadspin-shader-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn paths_follow_material_naming() {
        let (v, f) = ShaderSource::paths(Path::new("shaders"), "default");
        assert_eq!(v, Path::new("shaders/default.vert.wgsl"));
        assert_eq!(f, Path::new("shaders/default.frag.wgsl"));
    }

    #[test]
    fn reads_both_stages() {
        let dir = scratch_dir("ok");
        std::fs::write(dir.join("flat.vert.wgsl"), "// vs").unwrap();
        std::fs::write(dir.join("flat.frag.wgsl"), "// fs").unwrap();

        let src = ShaderSource::read(&dir, "flat").unwrap();
        assert_eq!(src.name, "flat");
        assert_eq!(src.vertex, "// vs");
        assert_eq!(src.fragment, "// fs");

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_fragment_names_the_file() {
        let dir = scratch_dir("missing");
        std::fs::write(dir.join("half.vert.wgsl"), "// vs").unwrap();

        let err = ShaderSource::read(&dir, "half").unwrap_err();
        assert!(format!("{err:#}").contains("half.frag.wgsl"));

        std::fs::remove_dir_all(dir).ok();
    }
}
