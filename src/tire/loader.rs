// ==============================================================================
// loader.rs — TIRE DESCRIPTION (JSON) → TireParams
// ------------------------------------------------------------------------------
// Entry points:
// - TireParams::from_file(path)      read + parse, then from_document
// - TireParams::from_document(&doc)  already-parsed document
// - "...".parse::<TireParams>()      JSON text
//
// Layout:
//   Template           "RigidTire" | "LugreTire"            (required)
//   Name               string                               (optional)
//   Radius, Mass       number > 0                           (required)
//   Inertia            [Ixx, Iyy, Izz], each > 0            (required)
//   -- RigidTire --
//   Width              number > 0                           (required)
//   Contact Material   { Coefficient of Friction, Coefficient of Restitution,
//                        Properties{..}, Coefficients{..} } (optional block)
//   -- LugreTire --
//   Number Of Discs    integer >= 1                         (required)
//   Disc Locations     [y0, y1, ...], len == count          (required)
//   Normal Stiffness, Normal Damping  number >= 0           (required)
//   Lugre Parameters   { sigma0, sigma1, sigma2, Fc, Fs, vs } pairs (optional)
//   -- both --
//   Visualization      { Mesh Filename, Mesh Name }         (optional block)
//
// The loader is pure: it never touches a body or any visualization state, and
// it fails on the first bad field without returning a partial record.
// ==============================================================================

use std::path::Path;
use std::str::FromStr;

use nalgebra::Vector3;
use serde_json::Value;

use crate::document::{Node, NodePath};
use crate::error::TireLoadError;
use crate::tire::contact::ContactMaterial;
use crate::tire::params::{
    LugreFriction, LugreTireParams, MeshDescriptor, RigidTireParams, TireModel, TireParams,
};

impl TireParams {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TireLoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TireLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let doc: Value = serde_json::from_str(&text)?;
        let params = Self::from_document(&doc)?;
        log::info!(
            "loaded {} `{}` from {}",
            params.model.template(),
            params.name,
            path.display()
        );
        Ok(params)
    }

    pub fn from_document(doc: &Value) -> Result<Self, TireLoadError> {
        let root = Node::root(doc)?;

        let template = root.str("Template")?;
        let name = if root.has("Name") { root.str("Name")?.to_string() } else { String::new() };

        let radius = positive(&root, "Radius")?;
        let mass = positive(&root, "Mass")?;
        let inertia = positive_vec3(&root, "Inertia")?;

        let model = match template {
            "RigidTire" => TireModel::Rigid(read_rigid(&root)?),
            "LugreTire" => TireModel::Lugre(read_lugre(&root)?),
            other => return Err(TireLoadError::UnknownTemplate(other.to_string())),
        };

        let mesh = read_visualization(&root)?;

        log::debug!(
            "tire `{name}`: template={template} radius={radius} mass={mass} mesh={}",
            mesh.as_ref().map_or("<none>", |m| m.name.as_str())
        );

        Ok(TireParams { name, radius, mass, inertia, model, mesh })
    }
}

impl FromStr for TireParams {
    type Err = TireLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let doc: Value = serde_json::from_str(s)?;
        Self::from_document(&doc)
    }
}

// ------------------------------------------------------------------------------
// model families
// ------------------------------------------------------------------------------

fn read_rigid(root: &Node<'_>) -> Result<RigidTireParams, TireLoadError> {
    let width = positive(root, "Width")?;

    let cm_path = NodePath::join(root.path(), "Contact Material");
    let contact = match root.opt_child("Contact Material", &cm_path)? {
        Some(cm) => read_contact_material(&cm)?,
        None => ContactMaterial::default(),
    };

    Ok(RigidTireParams { width, contact })
}

fn read_contact_material(cm: &Node<'_>) -> Result<ContactMaterial, TireLoadError> {
    let mut mat = ContactMaterial {
        friction: unit_interval(cm, "Coefficient of Friction")?,
        restitution: unit_interval(cm, "Coefficient of Restitution")?,
        ..ContactMaterial::default()
    };

    let props_path = NodePath::join(cm.path(), "Properties");
    if let Some(props) = cm.opt_child("Properties", &props_path)? {
        mat.young_modulus = non_negative(&props, "Young Modulus")?;
        mat.poisson_ratio = in_range(&props, "Poisson Ratio", 0.0, 0.5)?;
    }

    let coef_path = NodePath::join(cm.path(), "Coefficients");
    if let Some(coef) = cm.opt_child("Coefficients", &coef_path)? {
        mat.kn = non_negative(&coef, "Normal Stiffness")?;
        mat.gn = non_negative(&coef, "Normal Damping")?;
        mat.kt = non_negative(&coef, "Tangential Stiffness")?;
        mat.gt = non_negative(&coef, "Tangential Damping")?;
    }

    Ok(mat)
}

fn read_lugre(root: &Node<'_>) -> Result<LugreTireParams, TireLoadError> {
    let count_field = "Number Of Discs";
    let declared = root.i64(count_field)?;
    if declared <= 0 {
        return Err(TireLoadError::InvalidDiscCount {
            field: root.field_path(count_field),
            value: declared,
        });
    }
    let declared = declared as usize;

    let locs_field = "Disc Locations";
    let listed = root.f64_array(locs_field)?;
    if listed.len() != declared {
        return Err(TireLoadError::DiscCountMismatch {
            field: root.field_path(locs_field),
            declared,
            found: listed.len(),
        });
    }

    let disc_locations = listed;

    let normal_stiffness = non_negative(root, "Normal Stiffness")?;
    let normal_damping = non_negative(root, "Normal Damping")?;

    let lp_path = NodePath::join(root.path(), "Lugre Parameters");
    let friction = match root.opt_child("Lugre Parameters", &lp_path)? {
        Some(lp) => read_lugre_friction(&lp)?,
        None => LugreFriction::default(),
    };

    Ok(LugreTireParams { disc_locations, normal_stiffness, normal_damping, friction })
}

fn read_lugre_friction(lp: &Node<'_>) -> Result<LugreFriction, TireLoadError> {
    let d = LugreFriction::DEFAULT;
    Ok(LugreFriction {
        sigma0: pair(lp, "sigma0", d.sigma0, Bound::NonNegative)?,
        sigma1: pair(lp, "sigma1", d.sigma1, Bound::NonNegative)?,
        sigma2: pair(lp, "sigma2", d.sigma2, Bound::NonNegative)?,
        fc: pair(lp, "Fc", d.fc, Bound::UnitInterval)?,
        fs: pair(lp, "Fs", d.fs, Bound::UnitInterval)?,
        vs: pair(lp, "vs", d.vs, Bound::NonNegative)?,
    })
}

fn read_visualization(root: &Node<'_>) -> Result<Option<MeshDescriptor>, TireLoadError> {
    let vis_path = NodePath::join(root.path(), "Visualization");
    let Some(vis) = root.opt_child("Visualization", &vis_path)? else {
        return Ok(None);
    };

    Ok(Some(MeshDescriptor {
        file: vis.str("Mesh Filename")?.to_string(),
        name: vis.str("Mesh Name")?.to_string(),
    }))
}

// ------------------------------------------------------------------------------
// validated scalar reads
// ------------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum Bound {
    NonNegative,
    UnitInterval,
}

fn check(node: &Node<'_>, key: &str, value: f64, bound: Bound) -> Result<f64, TireLoadError> {
    match bound {
        Bound::NonNegative if value < 0.0 => Err(TireLoadError::Negative {
            field: node.field_path(key),
            value,
        }),
        Bound::UnitInterval if !(0.0..=1.0).contains(&value) => Err(TireLoadError::OutOfRange {
            field: node.field_path(key),
            value,
            min: 0.0,
            max: 1.0,
        }),
        _ => Ok(value),
    }
}

fn positive(node: &Node<'_>, key: &str) -> Result<f64, TireLoadError> {
    let value = node.f64(key)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(TireLoadError::NonPositive { field: node.field_path(key), value })
    }
}

fn positive_vec3(node: &Node<'_>, key: &str) -> Result<Vector3<f64>, TireLoadError> {
    let v = node.vec3(key)?;
    match v.iter().find(|c| **c <= 0.0) {
        Some(&value) => Err(TireLoadError::NonPositive { field: node.field_path(key), value }),
        None => Ok(v),
    }
}

fn non_negative(node: &Node<'_>, key: &str) -> Result<f64, TireLoadError> {
    check(node, key, node.f64(key)?, Bound::NonNegative)
}

fn unit_interval(node: &Node<'_>, key: &str) -> Result<f64, TireLoadError> {
    check(node, key, node.f64(key)?, Bound::UnitInterval)
}

fn in_range(node: &Node<'_>, key: &str, min: f64, max: f64) -> Result<f64, TireLoadError> {
    let value = node.f64(key)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(TireLoadError::OutOfRange { field: node.field_path(key), value, min, max })
    }
}

fn pair(node: &Node<'_>, key: &str, default: [f64; 2], bound: Bound) -> Result<[f64; 2], TireLoadError> {
    match node.opt_pair(key)? {
        Some([a, b]) => Ok([check(node, key, a, bound)?, check(node, key, b, bound)?]),
        None => Ok(default),
    }
}
