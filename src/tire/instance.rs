// ==============================================================================
// instance.rs — TIRE INSTANCE: PARAMETERS + VISUALIZATION OWNERSHIP
// ------------------------------------------------------------------------------
// A Tire is built by the vehicle assembly from a TireParams record and the
// wheel body it is mounted on. The body is shared with the wheel rim, brake,
// etc., so the tire may only ever take off the body what it put there.
//
// add_visualization_assets(vis):
//   Mesh + has_mesh  -> load mesh, build ONE static asset, append, remember it
//                       (already attached -> no-op; load error -> body untouched)
//   anything else    -> base primitive shapes (PrimitiveVisuals)
//
// remove_visualization_assets():
//   base primitives first, then the remembered mesh handle (identity lookup,
//   silently ignored if someone else already removed it), then forget it.
//
// Switching representation replaces rather than stacks: attaching the mesh
// retires our primitives, attaching primitives retires our mesh.
// ==============================================================================

use std::rc::Rc;

use crate::asset::{AssetRef, VisualAsset, VisualShape};
use crate::body::SharedBody;
use crate::config::DataConfig;
use crate::error::VisualizationError;
use crate::mesh::{MeshLoader, ObjMeshLoader};
use crate::tire::params::{MeshDescriptor, TireParams};
use crate::tire::visual::{PrimitiveVisuals, VisualizationType};

pub struct Tire {
    name: String,
    params: TireParams,
    body: SharedBody,
    mesh_loader: Rc<dyn MeshLoader>,
    primitives: PrimitiveVisuals,
    mesh_shape: Option<AssetRef>, // the one mesh asset this tire owns on `body`
}

impl Tire {
    /// Meshes are loaded with an [`ObjMeshLoader`] over [`DataConfig::default`], which
    /// reads `$TIRE_DATA_DIR` at this point (falling back to `data/`). Use
    /// [`Tire::with_data_config`] or [`Tire::with_mesh_loader`] to pick the source explicitly.
    pub fn new(name: impl Into<String>, params: TireParams, body: SharedBody) -> Self {
        Self {
            name: name.into(),
            params,
            body,
            mesh_loader: Rc::new(ObjMeshLoader::new(DataConfig::default())),
            primitives: PrimitiveVisuals::default(),
            mesh_shape: None,
        }
    }

    pub fn with_data_config(self, data: DataConfig) -> Self {
        self.with_mesh_loader(Rc::new(ObjMeshLoader::new(data)))
    }

    pub fn with_mesh_loader(mut self, loader: Rc<dyn MeshLoader>) -> Self {
        self.mesh_loader = loader;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &TireParams {
        &self.params
    }

    pub fn body(&self) -> &SharedBody {
        &self.body
    }

    pub fn radius(&self) -> f64 {
        self.params.radius()
    }

    pub fn width(&self) -> Option<f64> {
        self.params.width()
    }

    pub fn mass(&self) -> f64 {
        self.params.mass()
    }

    /// Mesh asset currently owned by this tire, if any.
    pub fn mesh_asset(&self) -> Option<&AssetRef> {
        self.mesh_shape.as_ref()
    }

    pub fn primitive_assets(&self) -> &[AssetRef] {
        self.primitives.assets()
    }

    pub fn add_visualization_assets(
        &mut self,
        vis: VisualizationType,
    ) -> Result<(), VisualizationError> {
        if vis == VisualizationType::Mesh {
            if let Some(mesh) = self.params.mesh().cloned() {
                return self.attach_mesh(&mesh);
            }
        }

        let mut body = self.body.borrow_mut();
        if vis != VisualizationType::None {
            if let Some(owned) = self.mesh_shape.take() {
                body.remove_asset(&owned);
            }
        }
        self.primitives.add(&mut body, &self.params, vis);
        Ok(())
    }

    pub fn remove_visualization_assets(&mut self) {
        let mut body = self.body.borrow_mut();
        self.primitives.remove(&mut body);

        // Only the handle we created; the rim may carry an identical-looking mesh.
        if let Some(owned) = self.mesh_shape.take() {
            if !body.remove_asset(&owned) {
                log::debug!(
                    "tire `{}`: mesh `{}` already gone from body {}",
                    self.name,
                    owned.name(),
                    body.name()
                );
            }
        }
    }

    fn attach_mesh(&mut self, mesh: &MeshDescriptor) -> Result<(), VisualizationError> {
        if let Some(owned) = &self.mesh_shape {
            if self.body.borrow().contains(owned) {
                log::trace!("tire `{}`: mesh already attached", self.name);
                return Ok(());
            }
            // removed behind our back; the handle is stale
            log::debug!("tire `{}`: mesh `{}` no longer on body, reloading", self.name, owned.name());
            self.mesh_shape = None;
        }

        let trimesh = self
            .mesh_loader
            .load(mesh.file())
            .map_err(|source| VisualizationError::Mesh { name: mesh.name().to_string(), source })?;

        let shape = VisualAsset::new(mesh.name(), VisualShape::TriangleMesh(Rc::new(trimesh)))
            .with_static(true)
            .into_ref();

        let mut body = self.body.borrow_mut();
        self.primitives.remove(&mut body);
        body.add_asset(shape.clone());
        log::debug!("tire `{}`: attached mesh `{}` to body {}", self.name, mesh.name(), body.name());

        self.mesh_shape = Some(shape);
        Ok(())
    }
}
