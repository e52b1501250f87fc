// ==============================================================================
// contact.rs — CONTACT MATERIAL + RIGID TIRE COLLIDER
// ------------------------------------------------------------------------------
// ContactMaterial is the smooth-contact material a rigid tire hands to the
// contact engine: friction/restitution plus the elastic properties and the
// explicit normal/tangential spring-damper coefficients.
//
// rigid_tire_collider() turns a rigid tire record into a rapier cylinder
// collider (spin axis = body y) carrying friction, restitution and the tire's
// own mass properties. Values are handed over as-is; the contact model itself
// lives in the engine.
// ==============================================================================

use rapier3d::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactMaterial {
    pub friction: f64,      // [0, 1]
    pub restitution: f64,   // [0, 1]
    pub young_modulus: f64, // Pa
    pub poisson_ratio: f64, // [0, 0.5]
    pub kn: f64,            // normal stiffness
    pub gn: f64,            // normal damping
    pub kt: f64,            // tangential stiffness
    pub gt: f64,            // tangential damping
}

impl ContactMaterial {
    pub const DEFAULT: ContactMaterial = ContactMaterial {
        friction: 0.6,
        restitution: 0.4,
        young_modulus: 2e5,
        poisson_ratio: 0.3,
        kn: 2e5,
        gn: 40.0,
        kt: 2e5,
        gt: 20.0,
    };
}

impl Default for ContactMaterial {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub(crate) fn rigid_tire_collider(
    radius: f64,
    width: f64,
    mass: f64,
    inertia: [f64; 3],
    material: &ContactMaterial,
) -> ColliderBuilder {
    let props = MassProperties::new(
        Point::origin(),
        mass as Real,
        vector![inertia[0] as Real, inertia[1] as Real, inertia[2] as Real],
    );

    ColliderBuilder::cylinder((width * 0.5) as Real, radius as Real)
        .friction(material.friction as Real)
        .restitution(material.restitution as Real)
        .mass_properties(props)
}
