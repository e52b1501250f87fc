// ==============================================================================
// visual.rs — BASE (PRIMITIVE) TIRE VISUALIZATION
// ------------------------------------------------------------------------------
// Every tire, mesh or not, can be drawn from its parameters alone:
// - rigid: one cylinder (radius x width)
// - LuGre: one thin cylinder per disc, at the disc's axial offset
//
// PrimitiveVisuals remembers exactly which handles it pushed so that remove()
// takes those and nothing else off the shared body.
// ==============================================================================

use nalgebra::Vector3;

use crate::asset::{AssetRef, VisualAsset};
use crate::body::WheelBody;
use crate::tire::params::TireParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualizationType {
    #[default]
    None,
    Primitives,
    Mesh,
}

#[derive(Debug, Default)]
pub struct PrimitiveVisuals {
    assets: Vec<AssetRef>,
}

impl PrimitiveVisuals {
    pub fn is_attached(&self) -> bool {
        !self.assets.is_empty()
    }

    pub fn assets(&self) -> &[AssetRef] {
        &self.assets
    }

    /// No-op for `None` and while our shapes are already on the body.
    pub fn add(&mut self, body: &mut WheelBody, params: &TireParams, vis: VisualizationType) {
        // forget shapes another contributor already took off the body
        self.assets.retain(|a| body.contains(a));

        if vis == VisualizationType::None || self.is_attached() {
            return;
        }

        for (i, (shape, y)) in params.primitive_shapes().into_iter().enumerate() {
            let asset = VisualAsset::new(format!("{}_prim_{i}", params.name()), shape)
                .with_offset(Vector3::new(0.0, y, 0.0))
                .into_ref();
            body.add_asset(asset.clone());
            self.assets.push(asset);
        }

        log::debug!(
            "body {}: {} primitive asset(s) for tire `{}`",
            body.name(),
            self.assets.len(),
            params.name()
        );
    }

    pub fn remove(&mut self, body: &mut WheelBody) {
        for asset in self.assets.drain(..) {
            body.remove_asset(&asset);
        }
    }
}
