// ==============================================================================
// presets.rs — BUILT-IN TIRE DEFINITIONS
// ------------------------------------------------------------------------------
// Compile-time tire descriptions for vehicles that ship without a JSON file.
// A preset turns into the same TireParams record the loader produces.
// ==============================================================================

use nalgebra::Vector3;

use crate::tire::{ContactMaterial, MeshDescriptor, RigidTireParams, TireModel, TireParams};

const INCH: f64 = 0.0254; // m

pub struct RigidTirePreset {
    pub name: &'static str,
    pub radius: f64,         // m
    pub width: f64,          // m
    pub mass: f64,           // kg
    pub inertia: [f64; 3],   // kg·m², principal
    pub mesh_name: &'static str,
    pub mesh_file: &'static str, // relative to the data dir
    pub contact: ContactMaterial,
}

pub const SEDAN_RIGID_TIRE: RigidTirePreset = RigidTirePreset {
    name: "Sedan_RigidTire",
    radius: (26.49 / 2.0) * INCH,
    width: 8.07 * INCH,
    mass: 12.0,
    inertia: [0.156, 0.679, 0.156],
    mesh_name: "sedan_tire_POV_geom",
    mesh_file: "sedan/tire.obj",
    contact: ContactMaterial {
        friction: 0.9,
        restitution: 0.1,
        young_modulus: 2e7,
        poisson_ratio: 0.3,
        kn: 2e5,
        gn: 40.0,
        kt: 2e5,
        gt: 20.0,
    },
};

impl RigidTirePreset {
    /// `use_mesh = false` drops the visualization descriptor (primitive fallback only).
    pub fn to_params(&self, use_mesh: bool) -> TireParams {
        let mesh = use_mesh.then(|| MeshDescriptor {
            name: self.mesh_name.to_string(),
            file: self.mesh_file.to_string(),
        });

        TireParams {
            name: self.name.to_string(),
            radius: self.radius,
            mass: self.mass,
            inertia: Vector3::from(self.inertia),
            model: TireModel::Rigid(RigidTireParams { width: self.width, contact: self.contact }),
            mesh,
        }
    }
}
