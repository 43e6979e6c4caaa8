// Flat `f32` records handed to the JS renderer once per frame.

use bytemuck::{Pod, Zeroable};
use stage_core::{PlaneMesh, PlaneUniforms};

/// One attached mesh. The handle travels as `f32`, exact up to 2^24.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshOutput {
    pub handle: f32,
    pub position: [f32; 2],
    pub scale: [f32; 2],
    pub rotation_z: f32,
    pub uniforms: PlaneUniforms,
}

pub const MESH_OUTPUT_FLOATS: usize = std::mem::size_of::<MeshOutput>() / std::mem::size_of::<f32>();

impl From<&PlaneMesh> for MeshOutput {
    fn from(mesh: &PlaneMesh) -> Self {
        Self {
            handle: mesh.handle.0 as f32,
            position: mesh.transform.position.to_array(),
            scale: mesh.transform.scale.to_array(),
            rotation_z: mesh.transform.rotation_z,
            uniforms: mesh.uniforms,
        }
    }
}

/// Refill `out` from `meshes` and view it as floats.
pub fn pack_meshes<'a, 'b>(
    meshes: impl IntoIterator<Item = &'a PlaneMesh>,
    out: &'b mut Vec<MeshOutput>,
) -> &'b [f32] {
    out.clear();
    out.extend(meshes.into_iter().map(MeshOutput::from));
    bytemuck::cast_slice(out.as_slice())
}
