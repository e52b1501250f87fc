//! Tire Description Loading Tests
//!
//! Tests for:
//! - RigidTire / LugreTire documents: field values survive loading unchanged
//! - Disc arrays: declared count vs listed locations
//! - Load failures: missing/invalid fields name the offending field
//! - Visualization block: has_mesh independent of the mesh path
//! - Rigid contact collider

use std::io::Write;
use std::path::PathBuf;

use nalgebra::Vector3;
use serde_json::json;
use tire_subsystem::tire::{ContactMaterial, LugreFriction, TireModel};
use tire_subsystem::{TireLoadError, TireParams};

fn data_file(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(rel)
}

fn rigid_doc() -> serde_json::Value {
    json!({
        "Name": "Test Rigid",
        "Template": "RigidTire",
        "Radius": 0.3366,
        "Width": 0.2058,
        "Mass": 12.0,
        "Inertia": [0.156, 0.679, 0.156]
    })
}

fn lugre_doc() -> serde_json::Value {
    json!({
        "Template": "LugreTire",
        "Radius": 0.4699,
        "Mass": 37.6,
        "Inertia": [3.84, 6.69, 3.84],
        "Number Of Discs": 3,
        "Disc Locations": [-0.1, 0.0, 0.1],
        "Normal Stiffness": 2e6,
        "Normal Damping": 1e3
    })
}

// ============================================================================
// Rigid tire
// ============================================================================

#[test]
fn rigid_fixture_round_trips_field_values() {
    let p = TireParams::from_file(data_file("tires/Sedan_RigidTire.json")).unwrap();

    assert_eq!(p.name(), "Sedan Rigid Tire");
    assert_eq!(p.radius(), 0.3366);
    assert_eq!(p.width(), Some(0.2058));
    assert_eq!(p.mass(), 12.0);
    assert_eq!(p.inertia(), Vector3::new(0.156, 0.679, 0.156));

    let TireModel::Rigid(rigid) = p.model() else { panic!("expected a rigid tire") };
    let cm = rigid.contact();
    assert_eq!(cm.friction, 0.9);
    assert_eq!(cm.restitution, 0.1);
    assert_eq!(cm.young_modulus, 2e7);
    assert_eq!(cm.poisson_ratio, 0.3);
    assert_eq!((cm.kn, cm.gn, cm.kt, cm.gt), (2e5, 40.0, 2e5, 20.0));

    assert!(p.has_mesh());
    assert_eq!(p.mesh_name(), Some("sedan_tire_POV_geom"));
    assert_eq!(p.mesh_file(), Some("sedan/tire.obj"));
}

#[test]
fn rigid_without_contact_block_uses_material_defaults() {
    let p = TireParams::from_document(&rigid_doc()).unwrap();
    let TireModel::Rigid(rigid) = p.model() else { panic!("expected a rigid tire") };
    assert_eq!(*rigid.contact(), ContactMaterial::default());
}

#[test]
fn load_from_string_and_temp_file_agree() {
    let text = rigid_doc().to_string();
    let from_str: TireParams = text.parse().unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    let from_file = TireParams::from_file(file.path()).unwrap();

    assert_eq!(from_str, from_file);
}

// ============================================================================
// LuGre discs
// ============================================================================

#[test]
fn lugre_fixture_keeps_disc_order() {
    let p = TireParams::from_file(data_file("tires/HMMWV_LugreTire.json")).unwrap();

    assert_eq!(p.width(), None);
    let TireModel::Lugre(lugre) = p.model() else { panic!("expected a LuGre tire") };
    assert_eq!(lugre.num_discs(), 4);
    assert_eq!(lugre.disc_locations(), &[-0.0975, -0.0325, 0.0325, 0.0975]);
    assert_eq!(lugre.normal_stiffness(), 2e6);
    assert_eq!(lugre.normal_damping(), 1e3);
    assert_eq!(lugre.friction().sigma0, [181.54, 60.55]);
}

#[test]
fn lugre_parameters_default_when_absent() {
    let p = TireParams::from_document(&lugre_doc()).unwrap();
    let TireModel::Lugre(lugre) = p.model() else { panic!("expected a LuGre tire") };
    assert_eq!(lugre.disc_locations(), &[-0.1, 0.0, 0.1]);
    assert_eq!(*lugre.friction(), LugreFriction::default());
}

#[test]
fn disc_count_larger_than_list_fails() {
    let mut doc = lugre_doc();
    doc["Number Of Discs"] = json!(4);

    let err = TireParams::from_document(&doc).unwrap_err();
    assert!(matches!(
        err,
        TireLoadError::DiscCountMismatch { declared: 4, found: 3, .. }
    ));
    assert_eq!(err.field(), Some("Disc Locations"));
}

#[test]
fn disc_count_smaller_than_list_fails() {
    let mut doc = lugre_doc();
    doc["Number Of Discs"] = json!(2);

    let err = TireParams::from_document(&doc).unwrap_err();
    assert!(matches!(
        err,
        TireLoadError::DiscCountMismatch { declared: 2, found: 3, .. }
    ));
}

#[test]
fn zero_or_negative_disc_count_fails() {
    for count in [0, -2] {
        let mut doc = lugre_doc();
        doc["Number Of Discs"] = json!(count);

        let err = TireParams::from_document(&doc).unwrap_err();
        assert!(matches!(err, TireLoadError::InvalidDiscCount { .. }), "count {count}: {err}");
        assert_eq!(err.field(), Some("Number Of Discs"));
    }
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_mass_fails() {
    let mut doc = rigid_doc();
    doc.as_object_mut().unwrap().remove("Mass");

    let err = TireParams::from_document(&doc).unwrap_err();
    assert!(matches!(err, TireLoadError::MissingField(ref f) if f == "Mass"));
}

#[test]
fn non_positive_physical_quantities_fail() {
    for (key, value) in [("Radius", json!(0.0)), ("Width", json!(-0.2)), ("Mass", json!(-1.0))] {
        let mut doc = rigid_doc();
        doc[key] = value;

        let err = TireParams::from_document(&doc).unwrap_err();
        assert!(matches!(err, TireLoadError::NonPositive { .. }), "{key}: {err}");
        assert_eq!(err.field(), Some(key));
    }
}

#[test]
fn inertia_needs_three_positive_components() {
    let mut doc = rigid_doc();
    doc["Inertia"] = json!([0.156, 0.679]);
    assert!(matches!(
        TireParams::from_document(&doc),
        Err(TireLoadError::WrongType { .. })
    ));

    doc["Inertia"] = json!([0.156, 0.0, 0.156]);
    assert!(matches!(
        TireParams::from_document(&doc),
        Err(TireLoadError::NonPositive { .. })
    ));
}

#[test]
fn friction_out_of_range_names_nested_field() {
    let mut doc = rigid_doc();
    doc["Contact Material"] = json!({
        "Coefficient of Friction": 1.4,
        "Coefficient of Restitution": 0.1
    });

    let err = TireParams::from_document(&doc).unwrap_err();
    assert!(matches!(err, TireLoadError::OutOfRange { .. }));
    assert_eq!(err.field(), Some("Contact Material.Coefficient of Friction"));
}

#[test]
fn negative_damping_fails() {
    let mut doc = lugre_doc();
    doc["Normal Damping"] = json!(-5.0);

    let err = TireParams::from_document(&doc).unwrap_err();
    assert!(matches!(err, TireLoadError::Negative { .. }));
}

#[test]
fn unknown_template_fails() {
    let mut doc = rigid_doc();
    doc["Template"] = json!("FialaTire");

    let err = TireParams::from_document(&doc).unwrap_err();
    assert!(matches!(err, TireLoadError::UnknownTemplate(ref t) if t == "FialaTire"));
}

#[test]
fn malformed_json_fails() {
    let err = "{ \"Template\": \"RigidTire\", ".parse::<TireParams>().unwrap_err();
    assert!(matches!(err, TireLoadError::Json(_)));

    let err = "[1, 2, 3]".parse::<TireParams>().unwrap_err();
    assert!(matches!(err, TireLoadError::NotAnObject));
}

#[test]
fn missing_file_is_io_error() {
    let err = TireParams::from_file(data_file("tires/DoesNotExist.json")).unwrap_err();
    assert!(matches!(err, TireLoadError::Io { .. }));
}

// ============================================================================
// Visualization block
// ============================================================================

#[test]
fn no_visualization_block_means_no_mesh() {
    let p = TireParams::from_file(data_file("tires/Generic_RigidTire_NoMesh.json")).unwrap();
    assert!(!p.has_mesh());
    assert_eq!(p.mesh_name(), None);
}

#[test]
fn empty_mesh_path_still_counts_as_mesh() {
    let mut doc = rigid_doc();
    doc["Visualization"] = json!({ "Mesh Filename": "", "Mesh Name": "placeholder" });

    let p = TireParams::from_document(&doc).unwrap();
    assert!(p.has_mesh());
    assert_eq!(p.mesh_file(), Some(""));
}

#[test]
fn visualization_block_requires_mesh_name() {
    let mut doc = rigid_doc();
    doc["Visualization"] = json!({ "Mesh Filename": "sedan/tire.obj" });

    let err = TireParams::from_document(&doc).unwrap_err();
    assert_eq!(err.field(), Some("Visualization.Mesh Name"));
}

// ============================================================================
// Contact collider
// ============================================================================

#[test]
fn rigid_tire_collider_carries_material_and_mass() {
    let p = TireParams::from_file(data_file("tires/Sedan_RigidTire.json")).unwrap();
    let collider = p.contact_collider().expect("rigid tires have a collider").build();

    let cyl = collider.shape().as_cylinder().expect("cylinder shape");
    assert!((cyl.radius - 0.3366).abs() < 1e-6);
    assert!((cyl.half_height - 0.1029).abs() < 1e-6);
    assert!((collider.friction() - 0.9).abs() < 1e-6);
    assert!((collider.restitution() - 0.1).abs() < 1e-6);
    assert!((collider.mass() - 12.0).abs() < 1e-4);
}

#[test]
fn lugre_tire_has_no_collider() {
    let p = TireParams::from_document(&lugre_doc()).unwrap();
    assert!(p.contact_collider().is_none());
}
