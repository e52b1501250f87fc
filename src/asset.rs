//! Visualization assets attached to a wheel body.
//!
//! An [`AssetRef`] is an `Rc` handle. Two handles refer to the same asset only
//! when [`same_asset`] says so; `VisualAsset` deliberately has no `PartialEq`,
//! so two meshes with equal names and equal geometry stay distinguishable.

use std::rc::Rc;

use nalgebra::Vector3;
use uuid::Uuid;

use crate::mesh::TriangleMesh;

pub type AssetRef = Rc<VisualAsset>;

#[derive(Debug, Clone)]
pub enum VisualShape {
    TriangleMesh(Rc<TriangleMesh>),
    /// Axis along the body's y (spin) axis.
    Cylinder { radius: f64, width: f64 },
}

impl VisualShape {
    pub fn kind(&self) -> &'static str {
        match self {
            VisualShape::TriangleMesh(_) => "triangle_mesh",
            VisualShape::Cylinder { .. } => "cylinder",
        }
    }
}

#[derive(Debug)]
pub struct VisualAsset {
    id: Uuid,
    name: String,
    shape: VisualShape,
    is_static: bool,
    offset: Vector3<f64>, // body-local, meters
}

impl VisualAsset {
    pub fn new(name: impl Into<String>, shape: VisualShape) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            shape,
            is_static: false,
            offset: Vector3::zeros(),
        }
    }

    /// Static meshes are never deformed by the renderer.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_offset(mut self, offset: Vector3<f64>) -> Self {
        self.offset = offset;
        self
    }

    pub fn into_ref(self) -> AssetRef {
        Rc::new(self)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &VisualShape {
        &self.shape
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn offset(&self) -> Vector3<f64> {
        self.offset
    }
}

/// Handle identity, never content equality.
#[inline]
pub fn same_asset(a: &AssetRef, b: &AssetRef) -> bool {
    Rc::ptr_eq(a, b)
}
