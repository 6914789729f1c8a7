use crate::scene::VertexStream;

use super::{RenderCtx, RenderTarget};

/// Line-segment renderer for the flattened scene stream.
///
/// Positions and colors live in two parallel vertex buffers, mirroring the
/// stream layout; each object's range becomes one draw call. Geometry is
/// stored as explicit segment pairs, so `LineList` renders closed loops
/// without needing a line-loop topology.
#[derive(Default)]
pub struct StreamRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    position_vbo: Option<wgpu::Buffer>,
    color_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
}

impl StreamRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `stream` and draws every non-empty range into `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        stream: &VertexStream,
    ) {
        if stream.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_vertex_capacity(ctx, stream.vertex_count());

        let (Some(position_vbo), Some(color_vbo)) =
            (self.position_vbo.as_ref(), self.color_vbo.as_ref())
        else {
            return;
        };

        // Channels are carried raw (0–255); normalize exactly the way the
        // original pipeline did. `(c - 255)/255 + 1` is c/255, preserved
        // verbatim for visual fidelity.
        let colors: Vec<f32> = stream.colors.iter().map(|c| (c - 255.0) / 255.0 + 1.0).collect();

        ctx.queue
            .write_buffer(position_vbo, 0, bytemuck::cast_slice(&stream.positions));
        ctx.queue.write_buffer(color_vbo, 0, bytemuck::cast_slice(&colors));

        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("linework stream pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, position_vbo.slice(..));
        rpass.set_vertex_buffer(1, color_vbo.slice(..));

        for range in &stream.ranges {
            if range.count == 0 {
                continue;
            }
            rpass.draw(range.offset..range.offset + range.count, 0..1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/stream.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("linework stream shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("linework stream pipeline layout"),
                    bind_group_layouts: &[],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("linework stream pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout(), color_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
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

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required_vertices: usize) {
        if required_vertices <= self.vertex_capacity
            && self.position_vbo.is_some()
            && self.color_vbo.is_some()
        {
            return;
        }

        let new_cap = required_vertices.next_power_of_two().max(256);

        self.position_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("linework stream position vbo"),
            size: (new_cap * 2 * std::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));

        self.color_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("linework stream color vbo"),
            size: (new_cap * 3 * std::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));

        self.vertex_capacity = new_cap;
    }
}

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
    wgpu::VertexBufferLayout {
        array_stride: (2 * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];
    wgpu::VertexBufferLayout {
        array_stride: (3 * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}
