//! Texture resources and the material texture library.
//!
//! Each furniture finish maps to one image file. Decoding happens on
//! background threads; decoded images arrive over a channel and are
//! uploaded when the frame loop polls. Until a slot's image is ready, draws
//! using it fall back to a neutral placeholder instead of failing — a slot
//! whose file is missing or undecodable keeps the placeholder for good.

use std::{
    path::Path,
    sync::mpsc::{self, Receiver},
    thread,
};

use crate::scene::Finish;

/// GPU texture, view, and sampler bundled together.
pub struct TextureResource {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl TextureResource {
    /// Standard depth buffer format used throughout the renderer.
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Creates a depth texture matching the surface configuration.
    pub fn create_depth_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        };

        let desc = wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[Self::DEPTH_FORMAT],
        };

        let texture = device.create_texture(&desc);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            lod_min_clamp: 0.0,
            lod_max_clamp: 100.0,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Creates a 2D texture from raw RGBA8 data.
    pub fn from_rgba_data(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[u8],
        width: u32,
        height: u32,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{} Sampler", label)),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// A 1x1 neutral gray, used while real textures are still loading.
    pub fn placeholder(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::from_rgba_data(device, queue, &[204, 204, 204, 255], 1, 1, "Placeholder")
    }
}

/// Image file for each finish, relative to the texture directory.
fn file_name(finish: Finish) -> &'static str {
    match finish {
        Finish::Hardwood => "hardwood.jpg",
        Finish::Marble => "marble.jpg",
        Finish::BlackWood => "blackwood.jpg",
        Finish::BeigeUpholstery => "leatheroption.jpg",
        Finish::BlueLeather => "leatherblu.jpg",
        Finish::WhiteLacquer => "whitelacquer.jpg",
        Finish::CremeLeather => "leathercreme.jpg",
        Finish::TvScreen => "tvscreen.jpg",
        Finish::NavyFabric => "navyfabric.jpg",
        Finish::RugPattern => "rug.jpg",
        Finish::CodeScreen => "code.jpg",
        Finish::FloorTile => "tile.jpg",
        Finish::LightWood => "lightwood.jpg",
        Finish::Silver => "silver.jpg",
    }
}

struct DecodedImage {
    finish: Finish,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// All material textures, keyed by finish slot, with a shared bind group
/// layout and a placeholder fallback.
pub struct TextureLibrary {
    layout: wgpu::BindGroupLayout,
    placeholder: wgpu::BindGroup,
    slots: Vec<Option<wgpu::BindGroup>>,
    pending: Receiver<DecodedImage>,
}

impl TextureLibrary {
    /// Builds the library and kicks off one decode thread per finish.
    /// Decode failures are logged and leave the placeholder bound.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, texture_dir: &Path) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: crate::wgpu_utils::binding_types::texture_2d(),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: crate::wgpu_utils::binding_types::sampler(
                        wgpu::SamplerBindingType::Filtering,
                    ),
                    count: None,
                },
            ],
        });

        let placeholder_resource = TextureResource::placeholder(device, queue);
        let placeholder = bind_texture(device, &layout, &placeholder_resource, "Placeholder");

        let (sender, pending) = mpsc::channel();
        for finish in Finish::ALL {
            let path = texture_dir.join(file_name(finish));
            let sender = sender.clone();
            thread::spawn(move || match image::open(&path) {
                Ok(img) => {
                    let rgba = img.to_rgba8();
                    let (width, height) = rgba.dimensions();
                    // The receiver may be gone if the app shut down first.
                    let _ = sender.send(DecodedImage {
                        finish,
                        width,
                        height,
                        pixels: rgba.into_raw(),
                    });
                }
                Err(err) => {
                    log::warn!(
                        "failed to load texture {:?} from {}: {}",
                        finish,
                        path.display(),
                        err
                    );
                }
            });
        }

        Self {
            layout,
            placeholder,
            slots: Finish::ALL.iter().map(|_| None).collect(),
            pending,
        }
    }

    /// Uploads any textures whose decode finished since the last frame.
    pub fn poll(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        while let Ok(decoded) = self.pending.try_recv() {
            let label = file_name(decoded.finish);
            let resource = TextureResource::from_rgba_data(
                device,
                queue,
                &decoded.pixels,
                decoded.width,
                decoded.height,
                label,
            );
            let bind_group = bind_texture(device, &self.layout, &resource, label);
            self.slots[decoded.finish.slot()] = Some(bind_group);
            log::debug!("texture ready: {:?}", decoded.finish);
        }
    }

    /// The bind group for a draw: the finish's texture if it is ready, the
    /// placeholder otherwise. Flat-color draws also bind the placeholder;
    /// the shader's use-texture flag ignores it.
    pub fn bind_group(&self, finish: Option<Finish>) -> &wgpu::BindGroup {
        finish
            .and_then(|f| self.slots[f.slot()].as_ref())
            .unwrap_or(&self.placeholder)
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }
}

fn bind_texture(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    resource: &TextureResource,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&resource.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&resource.sampler),
            },
        ],
    })
}
