use super::geometry::{
    QUAD_INDEX_BYTES, QUAD_INDEX_FORMAT, QUAD_INDICES, QUAD_VERTEX_BYTES, QUAD_VERTICES,
    quad_vertex_layout,
};
use super::RenderCtx;

/// WGSL source of the quad shader (`vertexMain` / `fragmentMain`).
pub const QUAD_SHADER: &str = include_str!("shaders/quad.wgsl");

/// Background color the quad pass clears to.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Encoder and color view a [`QuadRenderer`] records into.
pub struct FrameTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> FrameTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}

/// How the renderer treats its GPU resources between frames.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PipelineMode {
    /// Buffers, shader module and pipeline are created anew for every frame.
    #[default]
    RebuildPerFrame,
    /// Resources are created once and reused until the surface format changes.
    Cached,
}

struct QuadResources {
    format: wgpu::TextureFormat,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
}

impl QuadResources {
    fn build(ctx: &RenderCtx<'_>) -> Self {
        let vertex_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("kestrel quad vertices"),
            size: QUAD_VERTEX_BYTES,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("kestrel quad indices"),
            size: QUAD_INDEX_BYTES,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        ctx.queue
            .write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&QUAD_VERTICES));
        ctx.queue
            .write_buffer(&index_buffer, 0, bytemuck::cast_slice(&QUAD_INDICES));

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("kestrel quad shader"),
            source: wgpu::ShaderSource::Wgsl(QUAD_SHADER.into()),
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("kestrel quad pipeline"),
            // Layout derived from the shader.
            layout: None,

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vertexMain"),
                compilation_options: Default::default(),
                buffers: &[quad_vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fragmentMain"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self {
            format: ctx.surface_format,
            vertex_buffer,
            index_buffer,
            pipeline,
        }
    }
}

/// Draws the static quad in a single pass that clears to [`CLEAR_COLOR`].
#[derive(Default)]
pub struct QuadRenderer {
    mode: PipelineMode,
    cached: Option<QuadResources>,
    builds: u64,
}

impl QuadRenderer {
    pub fn new(mode: PipelineMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> PipelineMode {
        self.mode
    }

    /// How many times GPU resources have been created.
    pub fn resource_builds(&self) -> u64 {
        self.builds
    }

    /// Records the quad pass into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut FrameTarget<'_>) {
        let fresh;
        let resources = match self.mode {
            PipelineMode::RebuildPerFrame => {
                fresh = self.build(ctx);
                &fresh
            }
            PipelineMode::Cached => {
                if self.cached.as_ref().map(|r| r.format) != Some(ctx.surface_format) {
                    self.cached = Some(self.build(ctx));
                }
                let Some(cached) = self.cached.as_ref() else { return };
                cached
            }
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("kestrel quad pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&resources.pipeline);
        rpass.set_vertex_buffer(0, resources.vertex_buffer.slice(..));
        rpass.set_index_buffer(resources.index_buffer.slice(..), QUAD_INDEX_FORMAT);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }

    fn build(&mut self, ctx: &RenderCtx<'_>) -> QuadResources {
        self.builds += 1;
        log::trace!("building quad resources #{} for {:?}", self.builds, ctx.surface_format);
        QuadResources::build(ctx)
    }
}
