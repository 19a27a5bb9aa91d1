//! wgpu bring-up and the per-frame draw of the cube instance list.

use std::{iter, path::Path};

use thiserror::Error;
use wgpu::{DepthStencilState, RenderPipeline, TextureFormat};

use crate::{
    scene::{CameraPose, DrawList, Finish, ToggleState},
    wgpu_utils::{binding_types, UniformBuffer},
};

use super::{
    camera::{convert_matrix4_to_array, projection_matrix, view_matrix},
    cube::CubeMesh,
    lighting::LightsUniform,
    texture::{TextureLibrary, TextureResource},
    vertex::Vertex3D,
};

/// Startup failures the renderer cannot recover from. Surfaced once and
/// aborts the run; there is no retry.
#[derive(Debug, Error)]
pub enum RenderInitError {
    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable graphics adapter found: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to acquire graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Per-frame global uniforms. Must match the `Globals` struct in the shader
/// exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct GlobalsUniform {
    view_position: [f32; 4],
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    ambient: [f32; 4],
    light_positions: [[f32; 4]; 3],
    light_colors: [[f32; 4]; 3],
}

/// Per-instance vertex data: model transform, normal-correction transform,
/// color multiplier, and a use-texture flag in `flags.x`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
    color: [f32; 4],
    flags: [f32; 4],
}

impl InstanceData {
    const ATTRIBUTES: [wgpu::VertexAttribute; 10] = wgpu::vertex_attr_array![
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4,
        9 => Float32x4,
        10 => Float32x4,
        11 => Float32x4,
        12 => Float32x4,
        13 => Float32x4,
    ];

    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,

    pipeline: RenderPipeline,
    cube: CubeMesh,

    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,

    globals_ubo: UniformBuffer<GlobalsUniform>,
    globals_bind_group: wgpu::BindGroup,

    textures: TextureLibrary,
}

impl RenderEngine {
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        texture_dir: &Path,
    ) -> Result<RenderEngine, RenderInitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_capabilities.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: surface_capabilities.present_modes[0],
            alpha_mode: surface_capabilities.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let textures = TextureLibrary::new(&device, &queue, texture_dir);

        let globals_ubo = UniformBuffer::new(&device);
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: binding_types::uniform(),
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_ubo.binding_resource(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: None,
            bind_group_layouts: &[&globals_layout, textures.layout()],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: None,
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex3D::desc(), InstanceData::vertex_buffer_layout()],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
                unclipped_depth: false,
            },
            depth_stencil: Some(DepthStencilState {
                format: depth_texture.texture.format(),
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview: None,
            cache: None,
        });

        let cube = CubeMesh::new(&device);
        let (instance_buffer, instance_capacity) = create_instance_buffer(&device, 256);

        Ok(RenderEngine {
            surface,
            device,
            queue,
            config,
            depth_texture,
            format,
            pipeline,
            cube,
            instance_buffer,
            instance_capacity,
            globals_ubo,
            globals_bind_group,
            textures,
        })
    }

    /// Per-frame uniform refresh: polls for finished texture decodes, then
    /// rebuilds the global uniform block from the camera pose and toggles.
    pub fn update(&mut self, pose: &CameraPose, toggles: &ToggleState) {
        self.textures.poll(&self.device, &self.queue);

        let aspect = self.config.width as f32 / self.config.height as f32;
        let lights = LightsUniform::from_toggles(toggles);
        let globals = GlobalsUniform {
            view_position: [pose.x_offset, pose.y_offset, pose.z_offset, 1.0],
            view: convert_matrix4_to_array(view_matrix(pose)),
            proj: convert_matrix4_to_array(projection_matrix(aspect)),
            ambient: lights.ambient,
            light_positions: lights.positions,
            light_colors: lights.colors,
        };
        self.globals_ubo.update_content(&self.queue, globals);
    }

    /// Draws the frame's cube list, one indexed draw per material group.
    pub fn render_frame(&mut self, draw_list: &DrawList) {
        let (instances, groups) = group_by_finish(draw_list);
        self.upload_instances(&instances);

        let surface_texture = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Outdated) | Err(wgpu::SurfaceError::Lost) => {
                // Reconfigure; the next frame picks up the fresh swapchain.
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(err) => {
                log::warn!("skipping frame: {}", err);
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.format),
                ..Default::default()
            });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 215.0 / 255.0,
                            g: 224.0 / 255.0,
                            b: 230.0 / 255.0,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.cube.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass
                .set_index_buffer(self.cube.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

            for (finish, range) in &groups {
                render_pass.set_bind_group(1, self.textures.bind_group(*finish), &[]);
                render_pass.draw_indexed(0..self.cube.index_count, 0, range.clone());
            }
        }

        self.queue.submit(iter::once(encoder.finish()));
        surface_texture.present();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    fn upload_instances(&mut self, instances: &[InstanceData]) {
        if instances.len() > self.instance_capacity {
            let (buffer, capacity) = create_instance_buffer(&self.device, instances.len());
            self.instance_buffer = buffer;
            self.instance_capacity = capacity;
        }
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> (wgpu::Buffer, usize) {
    let capacity = capacity.next_power_of_two();
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Cube Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    (buffer, capacity)
}

/// Buckets the draw list per material so each texture is bound once, and
/// returns the reordered instance data plus the instance range of each
/// bucket. Flat-color draws land in a trailing bucket of their own.
fn group_by_finish(
    draw_list: &DrawList,
) -> (
    Vec<InstanceData>,
    Vec<(Option<Finish>, std::ops::Range<u32>)>,
) {
    let mut buckets: Vec<Vec<InstanceData>> =
        (0..Finish::ALL.len() + 1).map(|_| Vec::new()).collect();

    for cube in &draw_list.instances {
        let bucket = cube.finish.map_or(Finish::ALL.len(), |f| f.slot());
        buckets[bucket].push(InstanceData {
            model: cube.model.into(),
            normal: cube.normal.into(),
            color: cube.color,
            flags: [
                if cube.finish.is_some() { 1.0 } else { 0.0 },
                0.0,
                0.0,
                0.0,
            ],
        });
    }

    let mut instances = Vec::with_capacity(draw_list.len());
    let mut groups = Vec::new();
    for (bucket, data) in buckets.into_iter().enumerate() {
        if data.is_empty() {
            continue;
        }
        let start = instances.len() as u32;
        let finish = Finish::ALL.get(bucket).copied();
        instances.extend(data);
        groups.push((finish, start..instances.len() as u32));
    }
    (instances, groups)
}
