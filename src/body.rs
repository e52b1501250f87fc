// ==============================================================================
// body.rs — SHARED WHEEL BODY (ORDERED ASSET LIST WITH FOREIGN ENTRIES)
// ------------------------------------------------------------------------------
// A WheelBody is the spindle/wheel rigid body every wheel-mounted subsystem
// (tire, rim, brake, ...) hangs its visualization assets on. Nobody owns the
// list as a whole; each contributor owns only the entries it pushed.
//
// Rules:
// - lookups are by handle identity (asset::same_asset), never by name/kind
// - removing an entry never reorders the remaining ones
// - the body is shared through Rc<RefCell<..>>; contributors borrow it for the
//   duration of one add/remove and release it immediately
// ==============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use rapier3d::prelude::RigidBodyHandle;

use crate::asset::{AssetRef, same_asset};

pub type SharedBody = Rc<RefCell<WheelBody>>;

#[derive(Debug)]
pub struct WheelBody {
    name: String,
    handle: RigidBodyHandle, // rapier body this wheel maps to
    assets: Vec<AssetRef>,
}

impl WheelBody {
    pub fn new(name: impl Into<String>, handle: RigidBodyHandle) -> Self {
        Self {
            name: name.into(),
            handle,
            assets: Vec::new(),
        }
    }

    pub fn into_shared(self) -> SharedBody {
        Rc::new(RefCell::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> RigidBodyHandle {
        self.handle
    }

    pub fn assets(&self) -> &[AssetRef] {
        &self.assets
    }

    pub fn add_asset(&mut self, asset: AssetRef) {
        log::trace!("body {}: + asset {} ({})", self.name, asset.name(), asset.id());
        self.assets.push(asset);
    }

    /// Position of the entry that *is* `asset` (same handle).
    pub fn position_of(&self, asset: &AssetRef) -> Option<usize> {
        self.assets.iter().position(|a| same_asset(a, asset))
    }

    pub fn contains(&self, asset: &AssetRef) -> bool {
        self.position_of(asset).is_some()
    }

    /// `None` when `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<AssetRef> {
        if index >= self.assets.len() {
            return None;
        }
        let asset = self.assets.remove(index);
        log::trace!("body {}: - asset {} ({})", self.name, asset.name(), asset.id());
        Some(asset)
    }

    /// Removes the one entry identical to `asset`. Returns false when it was not there.
    pub fn remove_asset(&mut self, asset: &AssetRef) -> bool {
        match self.position_of(asset) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }
}
