//! Write-side view of an externally owned plane mesh.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Identifies the renderer-side mesh; opaque to this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Shader parameters of a card plane, laid out for direct upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PlaneUniforms {
    pub plane_size: [f32; 2],
    pub strength: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshTransform {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation_z: f32,
}

impl Default for MeshTransform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation_z: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaneMesh {
    pub handle: MeshHandle,
    pub transform: MeshTransform,
    pub uniforms: PlaneUniforms,
}

impl PlaneMesh {
    pub fn new(handle: MeshHandle) -> Self {
        Self {
            handle,
            transform: MeshTransform::default(),
            uniforms: PlaneUniforms::default(),
        }
    }
}

/// Mesh lifecycle of a tracked item. Assets load asynchronously, so items
/// exist before their mesh does.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MeshSlot {
    #[default]
    Unattached,
    Attached(PlaneMesh),
}

impl MeshSlot {
    pub fn get(&self) -> Option<&PlaneMesh> {
        match self {
            MeshSlot::Attached(mesh) => Some(mesh),
            MeshSlot::Unattached => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut PlaneMesh> {
        match self {
            MeshSlot::Attached(mesh) => Some(mesh),
            MeshSlot::Unattached => None,
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self, MeshSlot::Attached(_))
    }

    /// Attach `mesh`, returning the one it replaced.
    pub fn attach(&mut self, mesh: PlaneMesh) -> Option<PlaneMesh> {
        match std::mem::replace(self, MeshSlot::Attached(mesh)) {
            MeshSlot::Attached(prev) => Some(prev),
            MeshSlot::Unattached => None,
        }
    }

    pub fn detach(&mut self) -> Option<PlaneMesh> {
        match std::mem::take(self) {
            MeshSlot::Attached(prev) => Some(prev),
            MeshSlot::Unattached => None,
        }
    }
}
