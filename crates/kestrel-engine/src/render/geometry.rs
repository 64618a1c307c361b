//! Static quad geometry and the vertex/index layout that describes it.

/// Unit quad in clip space, two `f32` per vertex (x, y).
pub const QUAD_VERTICES: [f32; 8] = [
    -1.0, -1.0, //
    1.0, -1.0, //
    1.0, 1.0, //
    -1.0, 1.0, //
];

/// Element type of [`QUAD_INDICES`]. Must agree with [`QUAD_INDEX_FORMAT`].
pub type QuadIndex = u32;

/// Two triangles covering the quad.
pub const QUAD_INDICES: [QuadIndex; 6] = [0, 1, 2, 2, 3, 0];

/// Index format bound in the render pass.
pub const QUAD_INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

/// Bytes between consecutive vertices.
pub const VERTEX_STRIDE: wgpu::BufferAddress = (2 * size_of::<f32>()) as wgpu::BufferAddress;

pub const QUAD_VERTEX_BYTES: wgpu::BufferAddress = size_of::<[f32; 8]>() as wgpu::BufferAddress;
pub const QUAD_INDEX_BYTES: wgpu::BufferAddress =
    size_of::<[QuadIndex; 6]>() as wgpu::BufferAddress;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

/// Position-only layout: one `Float32x2` at offset 0, shader location 0.
pub fn quad_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

/// Width in bytes of one index of `format`.
pub const fn index_width(format: wgpu::IndexFormat) -> usize {
    match format {
        wgpu::IndexFormat::Uint16 => 2,
        wgpu::IndexFormat::Uint32 => 4,
    }
}
