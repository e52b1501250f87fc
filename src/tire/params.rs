//! Tire parameter record.
//!
//! A [`TireParams`] is produced once by the loader (or a preset) and is
//! read-only from then on: every field is private to the crate and only
//! exposed through accessors.

use nalgebra::Vector3;
use rapier3d::prelude::ColliderBuilder;

use crate::asset::VisualShape;
use crate::tire::contact::{ContactMaterial, rigid_tire_collider};

/// Width of the thin cylinders drawn for each LuGre disc.
pub const DISC_VIS_WIDTH: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct MeshDescriptor {
    pub(crate) name: String,
    pub(crate) file: String,
}

impl MeshDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resource path as written in the description; may be empty.
    pub fn file(&self) -> &str {
        &self.file
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RigidTireParams {
    pub(crate) width: f64,
    pub(crate) contact: ContactMaterial,
}

impl RigidTireParams {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn contact(&self) -> &ContactMaterial {
        &self.contact
    }
}

/// LuGre bristle parameters, each as `[longitudinal, lateral]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LugreFriction {
    pub sigma0: [f64; 2], // bristle stiffness
    pub sigma1: [f64; 2], // bristle damping
    pub sigma2: [f64; 2], // viscous friction
    pub fc: [f64; 2],     // Coulomb friction coefficient
    pub fs: [f64; 2],     // static friction coefficient
    pub vs: [f64; 2],     // Stribeck velocity, m/s
}

impl LugreFriction {
    pub const DEFAULT: LugreFriction = LugreFriction {
        sigma0: [181.54, 60.55],
        sigma1: [1.0, 0.0],
        sigma2: [0.0018, 0.0018],
        fc: [0.6, 0.6],
        fs: [1.0, 1.0],
        vs: [3.5, 3.5],
    };
}

impl Default for LugreFriction {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LugreTireParams {
    pub(crate) disc_locations: Vec<f64>,
    pub(crate) normal_stiffness: f64,
    pub(crate) normal_damping: f64,
    pub(crate) friction: LugreFriction,
}

impl LugreTireParams {
    pub fn num_discs(&self) -> usize {
        self.disc_locations.len()
    }

    /// Axial disc offsets (body y), in description order.
    pub fn disc_locations(&self) -> &[f64] {
        &self.disc_locations
    }

    pub fn normal_stiffness(&self) -> f64 {
        self.normal_stiffness
    }

    pub fn normal_damping(&self) -> f64 {
        self.normal_damping
    }

    pub fn friction(&self) -> &LugreFriction {
        &self.friction
    }
}

/// Tire model family.
#[derive(Debug, Clone, PartialEq)]
pub enum TireModel {
    Rigid(RigidTireParams),
    Lugre(LugreTireParams),
}

impl TireModel {
    pub fn template(&self) -> &'static str {
        match self {
            TireModel::Rigid(_) => "RigidTire",
            TireModel::Lugre(_) => "LugreTire",
        }
    }
}

/// Default (non-mesh) shapes a model contributes, as `(shape, axial offset)`.
pub trait PrimitiveShapes {
    fn primitive_shapes(&self, radius: f64) -> Vec<(VisualShape, f64)>;
}

impl PrimitiveShapes for RigidTireParams {
    fn primitive_shapes(&self, radius: f64) -> Vec<(VisualShape, f64)> {
        vec![(VisualShape::Cylinder { radius, width: self.width }, 0.0)]
    }
}

impl PrimitiveShapes for LugreTireParams {
    fn primitive_shapes(&self, radius: f64) -> Vec<(VisualShape, f64)> {
        self.disc_locations
            .iter()
            .map(|&y| (VisualShape::Cylinder { radius, width: DISC_VIS_WIDTH }, y))
            .collect()
    }
}

impl PrimitiveShapes for TireModel {
    fn primitive_shapes(&self, radius: f64) -> Vec<(VisualShape, f64)> {
        match self {
            TireModel::Rigid(p) => p.primitive_shapes(radius),
            TireModel::Lugre(p) => p.primitive_shapes(radius),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TireParams {
    pub(crate) name: String,
    pub(crate) radius: f64,
    pub(crate) mass: f64,
    pub(crate) inertia: Vector3<f64>,
    pub(crate) model: TireModel,
    pub(crate) mesh: Option<MeshDescriptor>,
}

impl TireParams {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `None` for disc-based models.
    pub fn width(&self) -> Option<f64> {
        match &self.model {
            TireModel::Rigid(p) => Some(p.width),
            TireModel::Lugre(_) => None,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inertia(&self) -> Vector3<f64> {
        self.inertia
    }

    pub fn model(&self) -> &TireModel {
        &self.model
    }

    pub fn has_mesh(&self) -> bool {
        self.mesh.is_some()
    }

    pub fn mesh(&self) -> Option<&MeshDescriptor> {
        self.mesh.as_ref()
    }

    pub fn mesh_name(&self) -> Option<&str> {
        self.mesh.as_ref().map(MeshDescriptor::name)
    }

    pub fn mesh_file(&self) -> Option<&str> {
        self.mesh.as_ref().map(MeshDescriptor::file)
    }

    pub fn primitive_shapes(&self) -> Vec<(VisualShape, f64)> {
        self.model.primitive_shapes(self.radius)
    }

    /// Rigid tires collide as a cylinder; LuGre contact is disc-based and has no collider.
    pub fn contact_collider(&self) -> Option<ColliderBuilder> {
        match &self.model {
            TireModel::Rigid(p) => Some(rigid_tire_collider(
                self.radius,
                p.width,
                self.mass,
                [self.inertia.x, self.inertia.y, self.inertia.z],
                &p.contact,
            )),
            TireModel::Lugre(_) => None,
        }
    }
}
