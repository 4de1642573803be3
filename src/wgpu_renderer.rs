// GPU-accelerated rendering using wgpu with raw Wayland surface
// Fills the fold polygons with a solid-color pipeline and overlays the
// pre-rasterized label texture; integrates with layer-shell without winit

use crate::style::Color;
use crate::widget::FoldTurnWidget;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::ptr::NonNull;
use wgpu::rwh::{RawDisplayHandle, RawWindowHandle, WaylandDisplayHandle, WaylandWindowHandle};
use wgpu::util::DeviceExt;

// Maximum surface size to prevent GPU memory issues
const MAX_SURFACE_SIZE: u32 = 4096;

// Mirror quad (two triangles) plus the fold triangle
const MAX_SOLID_VERTICES: usize = 9;

pub struct WgpuRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    solid_pipeline: wgpu::RenderPipeline,
    label_pipeline: wgpu::RenderPipeline,
    solid_vertex_buffer: wgpu::Buffer,
    label_vertex_buffer: wgpu::Buffer,
    label_index_buffer: wgpu::Buffer,
    label_bind_group: Option<wgpu::BindGroup>,
    width: u32,
    height: u32,
    max_texture_size: u32,
}

/// Vertex for the solid-color fold polygons, already in NDC
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SolidVertex {
    position: [f32; 2],
    color: [f32; 4],
}

impl SolidVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SolidVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Vertex for the full-surface label overlay quad
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct LabelVertex {
    position: [f32; 3],
    tex_coords: [f32; 2],
}

impl LabelVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LabelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

const LABEL_VERTICES: &[LabelVertex] = &[
    LabelVertex {
        position: [-1.0, -1.0, 0.0],
        tex_coords: [0.0, 1.0],
    }, // Bottom-left
    LabelVertex {
        position: [1.0, -1.0, 0.0],
        tex_coords: [1.0, 1.0],
    }, // Bottom-right
    LabelVertex {
        position: [1.0, 1.0, 0.0],
        tex_coords: [1.0, 0.0],
    }, // Top-right
    LabelVertex {
        position: [-1.0, 1.0, 0.0],
        tex_coords: [0.0, 0.0],
    }, // Top-left
];

const LABEL_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];

/// Build the per-frame solid geometry for the widget: the mirror quad
/// first, then the fold triangle on top. Empty when the corner is flat.
pub fn fold_scene(widget: &FoldTurnWidget) -> Vec<SolidVertex> {
    let bounds = widget.bounds();
    let Some(geo) = widget.geometry() else {
        return Vec::new();
    };

    let to_ndc = |p: crate::geometry::Point| {
        [
            p.x / bounds.width * 2.0 - 1.0,
            1.0 - p.y / bounds.height * 2.0,
        ]
    };

    let mirror = widget.style().mirror_color.to_linear();
    let fold = widget.style().fold_color.to_linear();

    let quad = geo.mirror_quad(bounds);
    let tri = geo.fold_triangle();

    let mut scene = Vec::with_capacity(MAX_SOLID_VERTICES);
    for idx in [0, 1, 2, 0, 2, 3] {
        scene.push(SolidVertex {
            position: to_ndc(quad[idx]),
            color: mirror,
        });
    }
    for p in tri {
        scene.push(SolidVertex {
            position: to_ndc(p),
            color: fold,
        });
    }
    scene
}

impl WgpuRenderer {
    /// Create a new WgpuRenderer from raw Wayland display and surface pointers
    ///
    /// # Safety
    /// - `display_ptr` must be a valid pointer to a wl_display
    /// - `surface_ptr` must be a valid pointer to a wl_surface
    /// - The display and surface must remain valid for the lifetime of the renderer
    pub fn new(
        display_ptr: *mut std::ffi::c_void,
        surface_ptr: *mut std::ffi::c_void,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        info!("Initializing wgpu renderer with size {}x{}", width, height);

        let display_non_null = NonNull::new(display_ptr).context("Display pointer is null")?;
        let surface_non_null = NonNull::new(surface_ptr).context("Surface pointer is null")?;

        let raw_display_handle =
            RawDisplayHandle::Wayland(WaylandDisplayHandle::new(display_non_null));
        let raw_window_handle =
            RawWindowHandle::Wayland(WaylandWindowHandle::new(surface_non_null));

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::VULKAN | wgpu::Backends::GL,
            ..Default::default()
        });

        // Create surface from raw handles
        let surface = unsafe {
            instance.create_surface_unsafe(wgpu::SurfaceTargetUnsafe::RawHandle {
                raw_display_handle,
                raw_window_handle,
            })?
        };

        pollster::block_on(Self::init_async(surface, instance, width, height))
    }

    async fn init_async(
        surface: wgpu::Surface<'static>,
        instance: wgpu::Instance,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find an appropriate adapter")?;

        info!("Using adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("Failed to create device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        debug!("Surface capabilities: {:?}", surface_caps);

        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        // Select alpha mode - prefer PreMultiplied for transparency
        let alpha_mode = if surface_caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else if surface_caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PostMultiplied)
        {
            wgpu::CompositeAlphaMode::PostMultiplied
        } else {
            surface_caps.alpha_modes[0]
        };
        info!("Using alpha mode: {:?}", alpha_mode);

        let max_texture_size = adapter.limits().max_texture_dimension_2d;

        // Clamp dimensions to safe limits
        let safe_width = width.max(1).min(MAX_SURFACE_SIZE).min(max_texture_size);
        let safe_height = height.max(1).min(MAX_SURFACE_SIZE).min(max_texture_size);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: safe_width,
            height: safe_height,
            present_mode: wgpu::PresentMode::Fifo, // VSync, stable
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        // Shader
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        // Texture bind group layout for the label overlay
        let label_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
                label: Some("label_bind_group_layout"),
            });

        let solid_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Solid Pipeline Layout"),
                bind_group_layouts: &[],
                push_constant_ranges: &[],
            });

        let solid_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Solid Pipeline"),
            layout: Some(&solid_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_solid",
                buffers: &[SolidVertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_solid",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Fold geometry winding depends on the pointer position
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let label_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Label Pipeline Layout"),
                bind_group_layouts: &[&label_bind_group_layout],
                push_constant_ranges: &[],
            });

        let label_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Label Pipeline"),
            layout: Some(&label_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[LabelVertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let solid_vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Solid Vertex Buffer"),
            size: (MAX_SOLID_VERTICES * std::mem::size_of::<SolidVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let label_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Label Vertex Buffer"),
            contents: bytemuck::cast_slice(LABEL_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let label_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Label Index Buffer"),
            contents: bytemuck::cast_slice(LABEL_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            solid_pipeline,
            label_pipeline,
            solid_vertex_buffer,
            label_vertex_buffer,
            label_index_buffer,
            label_bind_group: None,
            width: safe_width,
            height: safe_height,
            max_texture_size,
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            // Clamp to safe limits to prevent broken pipe
            let safe_width = new_width.min(MAX_SURFACE_SIZE).min(self.max_texture_size);
            let safe_height = new_height.min(MAX_SURFACE_SIZE).min(self.max_texture_size);

            if safe_width != self.width || safe_height != self.height {
                self.width = safe_width;
                self.height = safe_height;
                self.config.width = safe_width;
                self.config.height = safe_height;

                // Reconfigure surface with new size
                self.surface.configure(&self.device, &self.config);
                debug!("Resized to {}x{}", safe_width, safe_height);
            }
        }
    }

    /// Upload the rasterized label overlay. `pixels` is the BGRA canvas
    /// the software path draws labels into; transparent where no text.
    pub fn upload_labels(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<()> {
        let tex_width = width.min(self.max_texture_size);
        let tex_height = height.min(self.max_texture_size);

        debug!("Uploading label texture: {}x{}", tex_width, tex_height);

        let texture_size = wgpu::Extent3d {
            width: tex_width,
            height: tex_height,
            depth_or_array_layers: 1,
        };

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            size: texture_size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            label: Some("label_texture"),
            view_formats: &[],
        });

        // Convert BGRA to RGBA for wgpu
        let mut rgba_data = pixels.to_vec();
        for pixel in rgba_data.chunks_exact_mut(4) {
            pixel.swap(0, 2); // Swap B and R back to RGBA
        }

        self.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rgba_data,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * tex_width),
                rows_per_image: Some(tex_height),
            },
            texture_size,
        );

        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let label_bind_group_layout = &self.label_pipeline.get_bind_group_layout(0);

        let label_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: label_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
            label: Some("label_bind_group"),
        });

        self.label_bind_group = Some(label_bind_group);

        Ok(())
    }

    /// Render a frame and return whether successful
    pub fn render(&mut self, card: Color, scene: &[SolidVertex]) -> Result<bool> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Timeout) => {
                debug!("Surface timeout, skipping frame");
                return Ok(false);
            }
            Err(wgpu::SurfaceError::Outdated) => {
                debug!("Surface outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(false);
            }
            Err(wgpu::SurfaceError::Lost) => {
                debug!("Surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(false);
            }
            Err(e) => {
                warn!("Surface error: {:?}", e);
                return Err(e.into());
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let vertex_count = scene.len().min(MAX_SOLID_VERTICES);
        if vertex_count > 0 {
            self.queue.write_buffer(
                &self.solid_vertex_buffer,
                0,
                bytemuck::cast_slice(&scene[..vertex_count]),
            );
        }

        let clear = card.to_linear();

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear[0] as f64,
                            g: clear[1] as f64,
                            b: clear[2] as f64,
                            a: clear[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            // Labels sit under the fold, matching the software draw order
            if let Some(ref label_bind_group) = self.label_bind_group {
                render_pass.set_pipeline(&self.label_pipeline);
                render_pass.set_bind_group(0, label_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.label_vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(self.label_index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(0..LABEL_INDICES.len() as u32, 0, 0..1);
            }

            if vertex_count > 0 {
                render_pass.set_pipeline(&self.solid_pipeline);
                render_pass.set_vertex_buffer(0, self.solid_vertex_buffer.slice(..));
                render_pass.draw(0..vertex_count as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(true)
    }
}
