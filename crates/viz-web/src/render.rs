//! WebGPU renderer: one toon pipeline for the section meshes and one
//! instanced-quad pipeline for the point-cloud backdrop.

use glam::Mat4;
use viz_core::{
    cone, point_cloud, torus, torus_knot, Camera, MeshData, LIGHT_DIRECTION, POINT_CLOUD_SEED,
    POINT_COUNT, POINT_SIZE, SECTION_COUNT,
};
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    // Debug-panel material color, shared by meshes and the point cloud.
    point_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshInstance {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PointInstance {
    pos: [f32; 3],
    size: f32,
}

struct MeshBuffers {
    vertex_vb: wgpu::Buffer,
    index_ib: wgpu::Buffer,
    index_count: u32,
}

// The key-light constant is prepended from `LIGHT_DIRECTION` at pipeline
// build; see `shader_source`.
const SHADER_SRC: &str = r#"
struct Uniforms {
  view_proj: mat4x4<f32>,
  point_color: vec4<f32>,
};
@group(0) @binding(0) var<uniform> u: Uniforms;

struct MeshOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) normal: vec3<f32>,
  @location(1) color: vec4<f32>,
};

@vertex
fn vs_mesh(
  @location(0) v_pos: vec3<f32>,
  @location(1) v_normal: vec3<f32>,
  @location(2) m0: vec4<f32>,
  @location(3) m1: vec4<f32>,
  @location(4) m2: vec4<f32>,
  @location(5) m3: vec4<f32>,
  @location(6) i_color: vec4<f32>,
) -> MeshOut {
  let model = mat4x4<f32>(m0, m1, m2, m3);
  var out: MeshOut;
  out.pos = u.view_proj * model * vec4<f32>(v_pos, 1.0);
  // Uniform scale only, so the upper 3x3 carries normals fine.
  out.normal = (model * vec4<f32>(v_normal, 0.0)).xyz;
  out.color = i_color;
  return out;
}

@fragment
fn fs_mesh(inf: MeshOut) -> @location(0) vec4<f32> {
  let n = normalize(inf.normal);
  let ndl = max(dot(n, LIGHT_DIR), 0.0);
  // Quantized diffuse: a three-step ramp standing in for a gradient map.
  let shade = 0.3 + floor(ndl * 3.0) / 3.0 * 0.7;
  return vec4<f32>(inf.color.rgb * shade, 1.0);
}

struct PointOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) local: vec2<f32>,
  @location(1) color: vec4<f32>,
};

@vertex
fn vs_point(
  @location(0) v_pos: vec2<f32>,
  @location(1) i_pos: vec3<f32>,
  @location(2) i_size: f32,
) -> PointOut {
  // Camera never rolls, so an axis-aligned billboard is enough.
  let world = vec4<f32>(i_pos + vec3<f32>(v_pos * i_size, 0.0), 1.0);
  var out: PointOut;
  out.pos = u.view_proj * world;
  out.local = v_pos;
  out.color = u.point_color;
  return out;
}

@fragment
fn fs_point(inf: PointOut) -> @location(0) vec4<f32> {
  // Circular mask within the quad (unit circle of radius 0.5)
  let r = length(inf.local);
  let shape_alpha = 1.0 - smoothstep(0.42, 0.5, r);
  return vec4<f32>(inf.color.rgb, shape_alpha * inf.color.a);
}
"#;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    mesh_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    meshes: Vec<MeshBuffers>,
    mesh_instance_vb: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    point_instance_vb: wgpu::Buffer,
    point_count: u32,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            // Transparent canvas so the page background shows through.
            alpha_mode: if caps
                .alpha_modes
                .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
            {
                wgpu::CompositeAlphaMode::PreMultiplied
            } else {
                caps.alpha_modes[0]
            },
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source().into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        // One mesh per section: torus, cone, torus knot.
        let section_meshes = [
            torus(1.0, 0.4, 16, 60),
            cone(1.0, 2.0, 32),
            torus_knot(0.8, 0.35, 100, 16),
        ];
        let meshes = section_meshes
            .iter()
            .map(|m| upload_mesh(&device, m))
            .collect::<Vec<_>>();
        let mesh_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh_instances"),
            size: (std::mem::size_of::<MeshInstance>() * SECTION_COUNT) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Point-cloud backdrop: static instances, uploaded once.
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let points: Vec<PointInstance> = point_cloud(POINT_CLOUD_SEED, POINT_COUNT)
            .into_iter()
            .map(|p| PointInstance {
                pos: p.to_array(),
                size: POINT_SIZE,
            })
            .collect();
        let point_instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point_instances"),
            contents: bytemuck::cast_slice(&points),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let mesh_vertex_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<viz_core::Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MeshInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![
                    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
                    6 => Float32x4
                ],
            },
        ];
        let point_vertex_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x2],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PointInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32],
            },
        ];

        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_mesh"),
                buffers: &mesh_vertex_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth24Plus,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_mesh"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let point_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("point pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_point"),
                buffers: &point_vertex_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            // Points read depth so meshes occlude them, but never write it.
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth24Plus,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_point"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let depth_view = create_depth_view(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            mesh_pipeline,
            point_pipeline,
            uniform_buffer,
            bind_group,
            meshes,
            mesh_instance_vb,
            quad_vb,
            point_instance_vb,
            point_count: points.len() as u32,
            depth_view,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    /// Draw the section meshes and the point cloud for one frame.
    ///
    /// `models` carries one (model matrix, material color) pair per section
    /// mesh; `point_color` tints the backdrop.
    pub fn render(
        &mut self,
        camera: &Camera,
        models: &[(Mat4, [f32; 3])],
        point_color: [f32; 3],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_proj().to_cols_array_2d(),
                point_color: [point_color[0], point_color[1], point_color[2], 1.0],
            }),
        );
        let instances: Vec<MeshInstance> = models
            .iter()
            .map(|(model, color)| MeshInstance {
                model: model.to_cols_array_2d(),
                color: [color[0], color[1], color[2], 1.0],
            })
            .collect();
        self.queue
            .write_buffer(&self.mesh_instance_vb, 0, bytemuck::cast_slice(&instances));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.mesh_instance_vb.slice(..));
            for (i, mesh) in self.meshes.iter().enumerate().take(models.len()) {
                rpass.set_vertex_buffer(0, mesh.vertex_vb.slice(..));
                rpass.set_index_buffer(mesh.index_ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, i as u32..i as u32 + 1);
            }

            rpass.set_pipeline(&self.point_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.point_instance_vb.slice(..));
            rpass.draw(0..6, 0..self.point_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// WGSL for both pipelines, with the key light baked in from
/// [`LIGHT_DIRECTION`] so the shader and the scene constants cannot drift.
fn shader_source() -> String {
    let light = LIGHT_DIRECTION.normalize();
    format!(
        "const LIGHT_DIR: vec3<f32> = vec3<f32>({:.6}, {:.6}, {:.6});\n{}",
        light.x, light.y, light.z, SHADER_SRC
    )
}

fn upload_mesh(device: &wgpu::Device, mesh: &MeshData) -> MeshBuffers {
    let vertex_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mesh_vb"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mesh_ib"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    MeshBuffers {
        vertex_vb,
        index_ib,
        index_count: mesh.indices.len() as u32,
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth24Plus,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}
