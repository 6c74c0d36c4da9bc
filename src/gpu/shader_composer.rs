use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage, ShaderType,
};

use crate::error::PlanetsError;

/// Wraps `naga_oil::compose::Composer` to provide shader composition with `#import` support.
///
/// Shared WGSL modules are registered at construction time. Consuming
/// shaders pull them in with `#import planets::module_name`, and the
/// composer produces `naga::Module` IR directly for pipeline creation.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition: (source, file_path)
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

/// Shared modules, in dependency order.
const MODULES: &[ModuleDef] = &[
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/camera.wgsl"),
        file_path: "modules/camera.wgsl",
    },
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/environment.wgsl"),
        file_path: "modules/environment.wgsl",
    },
];

/// Source of the sphere shader used by both scene pipelines.
pub const SPHERE_SHADER: &str = include_str!("../../assets/shaders/sphere.wgsl");

impl ShaderComposer {
    /// Create a composer with every shared module registered.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetsError::Shader`] if a shared module fails to parse.
    pub fn new() -> Result<Self, PlanetsError> {
        let mut composer = Composer::default();
        for m in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    PlanetsError::Shader(format!("module '{}': {e:?}", m.file_path))
                })?;
        }
        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import` directives)
    /// into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetsError::Shader`] if composition fails.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, PlanetsError> {
        let naga_module = self.compose_naga(source, file_path)?;
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose a shader source into a `naga::Module` without creating a wgpu shader module.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetsError::Shader`] if composition fails.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, PlanetsError> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| PlanetsError::Shader(format!("'{file_path}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_shader_composes() {
        let mut composer = ShaderComposer::new().unwrap();
        let module = composer
            .compose_naga(SPHERE_SHADER, "sphere.wgsl")
            .unwrap_or_else(|e| panic!("sphere shader failed to compose: {e}"));

        let entry_points: Vec<&str> = module
            .entry_points
            .iter()
            .map(|ep| ep.name.as_str())
            .collect();
        for name in ["vs_main", "fs_body", "fs_backdrop"] {
            assert!(entry_points.contains(&name), "missing entry point {name}");
        }
    }

    #[test]
    fn unknown_import_is_an_error() {
        let mut composer = ShaderComposer::new().unwrap();
        let source = "#import planets::nowhere::thing\n@fragment fn fs_main() {}";
        assert!(matches!(
            composer.compose_naga(source, "bad.wgsl"),
            Err(PlanetsError::Shader(_))
        ));
    }
}
