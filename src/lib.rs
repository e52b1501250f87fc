//! tire-subsystem - JSON-driven tire parameters and wheel-body visualization ownership
//!
//! A tire is described by a JSON document ([`tire::TireParams`]), mounted on a
//! [`body::WheelBody`] that other wheel subsystems also draw on, and adds or
//! removes exactly its own [`asset::VisualAsset`]s on that body.

pub mod asset;
pub mod body;
pub mod config;
pub mod document;
pub mod error;
pub mod mesh;
pub mod presets;
pub mod snapshot;
pub mod tire;

pub use asset::{AssetRef, VisualAsset, VisualShape, same_asset};
pub use body::{SharedBody, WheelBody};
pub use config::DataConfig;
pub use error::{MeshLoadError, TireLoadError, VisualizationError};
pub use mesh::{MeshLoader, ObjMeshLoader, TriangleMesh};
pub use snapshot::BodySnapshot;
pub use tire::{Tire, TireModel, TireParams, VisualizationType};
