//! Draws the backdrop and the orbiting bodies in a single MSAA-aware pass.

use glam::Mat4;
use wgpu::util::DeviceExt;

use super::environment::EnvironmentUniform;
use super::mesh::GpuMesh;
use crate::assets::{fallback, ColorImage, HdrImage};
use crate::camera::CameraUniform;
use crate::error::PlanetsError;
use crate::gpu::pipeline_helpers::{
    create_sphere_pipeline, filtering_sampler, spherical_sampler, texture_2d, uniform_buffer,
    SpherePipelineDesc, DEPTH_FORMAT,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, SPHERE_SHADER};
use crate::gpu::texture::GpuTexture;
use crate::options::{LightingOptions, Options};
use crate::scene::sphere::SphereMesh;
use crate::scene::{SceneGraph, BODY_COUNT};

/// Per-mesh uniform: model matrix and opacity (80 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshUniform {
    model: [[f32; 4]; 4],
    opacity: f32,
    _pad: [f32; 3],
}

impl MeshUniform {
    fn new(model: Mat4, opacity: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            opacity,
            _pad: [0.0; 3],
        }
    }
}

/// A mesh instance's uniform buffer, surface texture and bind group.
struct SurfaceBinding {
    uniform: wgpu::Buffer,
    texture: GpuTexture,
    bind_group: wgpu::BindGroup,
}

/// Size-dependent render attachments.
struct Attachments {
    depth: GpuTexture,
    msaa: Option<GpuTexture>,
}

impl Attachments {
    fn new(context: &RenderContext) -> Self {
        let size = context.size();
        let msaa = (context.sample_count > 1).then(|| {
            GpuTexture::attachment(
                &context.device,
                "MSAA Color",
                size,
                context.format(),
                context.sample_count,
            )
        });
        Self {
            depth: GpuTexture::attachment(
                &context.device,
                "Scene Depth",
                size,
                DEPTH_FORMAT,
                context.sample_count,
            ),
            msaa,
        }
    }
}

/// GPU side of the scene: pipelines, meshes, textures and uniforms.
pub struct SceneRenderer {
    body_pipeline: wgpu::RenderPipeline,
    backdrop_pipeline: wgpu::RenderPipeline,
    frame_layout: wgpu::BindGroupLayout,
    surface_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    environment: EnvironmentUniform,
    environment_buffer: wgpu::Buffer,
    environment_texture: GpuTexture,
    frame_bind_group: wgpu::BindGroup,

    body_mesh: GpuMesh,
    backdrop_mesh: GpuMesh,
    bodies: [SurfaceBinding; BODY_COUNT],
    backdrop: SurfaceBinding,

    attachments: Attachments,
    clear_color: wgpu::Color,
    lighting: LightingOptions,
}

impl SceneRenderer {
    /// Build pipelines and placeholder resources. Bodies start with a flat
    /// texture of their configured color, the backdrop with black, and the
    /// environment switched off.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetsError::Shader`] if the sphere shader fails to
    /// compose.
    pub fn new(context: &RenderContext, options: &Options) -> Result<Self, PlanetsError> {
        let device = &context.device;

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Layout"),
            entries: &[
                uniform_buffer(0),
                texture_2d(1),
                filtering_sampler(2),
                uniform_buffer(3),
            ],
        });
        let surface_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Surface Layout"),
            entries: &[uniform_buffer(0), texture_2d(1), filtering_sampler(2)],
        });

        let mut composer = ShaderComposer::new()?;
        let shader = composer.compose(device, "Sphere Shader", SPHERE_SHADER, "sphere.wgsl")?;
        let layouts = [&frame_layout, &surface_layout];
        let body_pipeline = create_sphere_pipeline(
            device,
            &shader,
            context.format(),
            context.sample_count,
            &layouts,
            &SpherePipelineDesc {
                label: "Body",
                fragment_entry: "fs_body",
                cull_mode: wgpu::Face::Back,
                blend: None,
                depth_write: true,
            },
        );
        // Seen from inside, so the outward faces are culled.
        let backdrop_pipeline = create_sphere_pipeline(
            device,
            &shader,
            context.format(),
            context.sample_count,
            &layouts,
            &SpherePipelineDesc {
                label: "Backdrop",
                fragment_entry: "fs_backdrop",
                cull_mode: wgpu::Face::Front,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );

        let sampler = spherical_sampler(device, "Spherical Sampler");

        let camera_uniform = CameraUniform::new();
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Uniform"),
            contents: bytemuck::bytes_of(&camera_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let environment = EnvironmentUniform::disabled(&options.lighting);
        let environment_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Environment Uniform"),
            contents: bytemuck::bytes_of(&environment),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let environment_texture = GpuTexture::from_hdr(
            device,
            &context.queue,
            "Neutral Environment",
            &fallback::neutral_environment(),
        );
        let frame_bind_group = Self::frame_bind_group(
            device,
            &frame_layout,
            &camera_buffer,
            &environment_texture,
            &sampler,
            &environment_buffer,
        );

        let orbit = &options.orbit;
        let body_mesh = GpuMesh::new(
            device,
            "Body Sphere",
            &SphereMesh::new(orbit.body_radius, orbit.segments, orbit.segments),
        );
        let backdrop_options = &options.backdrop;
        let backdrop_mesh = GpuMesh::new(
            device,
            "Backdrop Sphere",
            &SphereMesh::new(
                backdrop_options.radius,
                backdrop_options.segments,
                backdrop_options.segments,
            ),
        );

        let make_surface = |label: &str, image: &ColorImage, opacity: f32| {
            let uniform = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Uniform")),
                contents: bytemuck::bytes_of(&MeshUniform::new(Mat4::IDENTITY, opacity)),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
            let texture = GpuTexture::from_color(device, &context.queue, label, image);
            let bind_group =
                Self::surface_bind_group(device, &surface_layout, &uniform, &texture, &sampler);
            SurfaceBinding {
                uniform,
                texture,
                bind_group,
            }
        };
        let bodies = std::array::from_fn(|i| {
            make_surface(
                &format!("Body {i}"),
                &fallback::solid_color(options.assets.bodies[i].color_rgba8()),
                1.0,
            )
        });
        let backdrop = make_surface(
            "Backdrop",
            &fallback::solid_color([0, 0, 0, 255]),
            backdrop_options.opacity,
        );

        let [r, g, b] = options.lighting.clear_color;

        Ok(Self {
            body_pipeline,
            backdrop_pipeline,
            frame_layout,
            surface_layout,
            sampler,
            camera_uniform,
            camera_buffer,
            environment,
            environment_buffer,
            environment_texture,
            frame_bind_group,
            body_mesh,
            backdrop_mesh,
            bodies,
            backdrop,
            attachments: Attachments::new(context),
            clear_color: wgpu::Color {
                r: f64::from(r),
                g: f64::from(g),
                b: f64::from(b),
                a: 1.0,
            },
            lighting: options.lighting.clone(),
        })
    }

    fn frame_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        camera: &wgpu::Buffer,
        environment_texture: &GpuTexture,
        sampler: &wgpu::Sampler,
        environment: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&environment_texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: environment.as_entire_binding(),
                },
            ],
        })
    }

    fn surface_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        uniform: &wgpu::Buffer,
        texture: &GpuTexture,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Surface Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    fn retexture(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        binding: &mut SurfaceBinding,
        label: &str,
        image: &ColorImage,
    ) {
        binding.texture = GpuTexture::from_color(&context.device, &context.queue, label, image);
        binding.bind_group =
            Self::surface_bind_group(&context.device, layout, &binding.uniform, &binding.texture, sampler);
    }

    /// Install the surface texture of body `index`. Out-of-range indices
    /// are ignored.
    pub fn set_body_texture(&mut self, context: &RenderContext, index: usize, image: &ColorImage) {
        let Some(binding) = self.bodies.get_mut(index) else {
            log::warn!("no body {index} to texture");
            return;
        };
        Self::retexture(
            context,
            &self.surface_layout,
            &self.sampler,
            binding,
            &format!("Body {index}"),
            image,
        );
    }

    /// Install the starfield texture of the backdrop.
    pub fn set_backdrop_texture(&mut self, context: &RenderContext, image: &ColorImage) {
        Self::retexture(
            context,
            &self.surface_layout,
            &self.sampler,
            &mut self.backdrop,
            "Backdrop",
            image,
        );
    }

    /// Install an HDR environment map and switch environment shading on.
    pub fn set_environment(&mut self, context: &RenderContext, image: &HdrImage) {
        self.environment_texture =
            GpuTexture::from_hdr(&context.device, &context.queue, "Environment", image);
        self.environment = EnvironmentUniform::enabled(&self.lighting);
        context
            .queue
            .write_buffer(&self.environment_buffer, 0, bytemuck::bytes_of(&self.environment));
        self.frame_bind_group = Self::frame_bind_group(
            &context.device,
            &self.frame_layout,
            &self.camera_buffer,
            &self.environment_texture,
            &self.sampler,
            &self.environment_buffer,
        );
    }

    /// Current environment parameters.
    #[must_use]
    pub fn environment(&self) -> EnvironmentUniform {
        self.environment
    }

    /// Recreate the depth and MSAA attachments for the context's current
    /// surface size.
    pub fn resize(&mut self, context: &RenderContext) {
        self.attachments = Attachments::new(context);
    }

    /// Upload the camera and every mesh transform from `scene`.
    pub fn update(&mut self, queue: &wgpu::Queue, scene: &SceneGraph) {
        self.camera_uniform.update_view_proj(&scene.camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&self.camera_uniform));

        let backdrop = MeshUniform::new(Mat4::IDENTITY, scene.backdrop.opacity);
        queue.write_buffer(&self.backdrop.uniform, 0, bytemuck::bytes_of(&backdrop));

        for (i, binding) in self.bodies.iter().enumerate() {
            let uniform = MeshUniform::new(scene.orbit.body_matrix(i), 1.0);
            queue.write_buffer(&binding.uniform, 0, bytemuck::bytes_of(&uniform));
        }
    }

    /// Draw one frame to the surface: the backdrop first, then the bodies.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if no swapchain texture could be
    /// acquired.
    pub fn render(&self, context: &RenderContext) -> Result<(), wgpu::SurfaceError> {
        let frame = context.get_next_frame()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(context.format()),
            ..Default::default()
        });
        let (target, resolve_target) = match &self.attachments.msaa {
            Some(msaa) => (&msaa.view, Some(&view)),
            None => (&view, None),
        };

        let mut encoder = context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.attachments.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_bind_group(0, &self.frame_bind_group, &[]);

            pass.set_pipeline(&self.backdrop_pipeline);
            pass.set_bind_group(1, &self.backdrop.bind_group, &[]);
            self.backdrop_mesh.draw(&mut pass);

            pass.set_pipeline(&self.body_pipeline);
            for body in &self.bodies {
                pass.set_bind_group(1, &body.bind_group, &[]);
                self.body_mesh.draw(&mut pass);
            }
        }
        context.submit(encoder);
        frame.present();
        Ok(())
    }
}
