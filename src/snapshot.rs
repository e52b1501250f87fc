// ==============================================================================
// snapshot.rs — SERIALIZABLE VIEW OF A BODY'S ASSET LIST
// ------------------------------------------------------------------------------
// Pure reporting: captures (id, name, kind, static) per asset in body order.
// Never holds handles, so a snapshot cannot keep an asset alive.
// ==============================================================================

use serde::Serialize;
use uuid::Uuid;

use crate::body::WheelBody;

#[derive(Clone, Debug, Serialize)]
pub struct AssetSnapshot {
    pub id: Uuid,
    pub name: String,
    pub kind: &'static str,
    pub is_static: bool,
    pub offset: [f64; 3],
}

#[derive(Clone, Debug, Serialize)]
pub struct BodySnapshot {
    pub body: String,
    pub assets: Vec<AssetSnapshot>,
}

impl BodySnapshot {
    pub fn capture(body: &WheelBody) -> Self {
        let assets = body
            .assets()
            .iter()
            .map(|a| AssetSnapshot {
                id: a.id(),
                name: a.name().to_string(),
                kind: a.shape().kind(),
                is_static: a.is_static(),
                offset: a.offset().into(),
            })
            .collect();

        Self { body: body.name().to_string(), assets }
    }

    pub fn names(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.name.as_str()).collect()
    }
}
