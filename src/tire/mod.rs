//! tire - parameter records, JSON loading and visualization ownership

pub mod contact;
pub mod instance;
pub mod loader;
pub mod params;
pub mod visual;

pub use contact::ContactMaterial;
pub use instance::Tire;
pub use params::*;
pub use visual::{PrimitiveVisuals, VisualizationType};
