// ==============================================================================
// document.rs — PATH-AWARE FIELD ACCESS ON A PARSED JSON DOCUMENT
// ------------------------------------------------------------------------------
// Node wraps one JSON object plus the dotted path that leads to it, so every
// lookup failure can report "Contact Material.Coefficients.Normal Damping"
// instead of just "Normal Damping".
//
// Only three capabilities are needed by the loaders:
// - field lookup by name (child / has)
// - typed scalar and array extraction (f64, i64, str, vec3, f64_array, pair)
// - an optional-block test (opt_child)
// ==============================================================================

use nalgebra::Vector3;
use serde_json::{Map, Value};

use crate::error::TireLoadError;

#[derive(Clone, Copy)]
pub struct Node<'a> {
    path: &'a str,
    map: &'a Map<String, Value>,
}

/// Owned path buffer; `Node` borrows from it so nested lookups stay cheap.
pub struct NodePath(String);

impl NodePath {
    pub fn join(parent: &str, key: &str) -> Self {
        if parent.is_empty() {
            NodePath(key.to_string())
        } else {
            NodePath(format!("{parent}.{key}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> Node<'a> {
    pub fn root(doc: &'a Value) -> Result<Self, TireLoadError> {
        match doc.as_object() {
            Some(map) => Ok(Node { path: "", map }),
            None => Err(TireLoadError::NotAnObject),
        }
    }

    pub fn path(&self) -> &str {
        self.path
    }

    pub fn field_path(&self, key: &str) -> String {
        NodePath::join(self.path, key).0
    }

    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<&'a Value, TireLoadError> {
        self.map
            .get(key)
            .ok_or_else(|| TireLoadError::MissingField(self.field_path(key)))
    }

    /// Required nested object. The caller keeps `path` alive for the child.
    pub fn child(&self, key: &str, path: &'a NodePath) -> Result<Node<'a>, TireLoadError> {
        match self.get(key)?.as_object() {
            Some(map) => Ok(Node { path: path.as_str(), map }),
            None => Err(self.wrong_type(key, "an object")),
        }
    }

    /// Optional nested object: `Ok(None)` when absent, error when present but not an object.
    pub fn opt_child(
        &self,
        key: &str,
        path: &'a NodePath,
    ) -> Result<Option<Node<'a>>, TireLoadError> {
        if self.has(key) { self.child(key, path).map(Some) } else { Ok(None) }
    }

    pub fn f64(&self, key: &str) -> Result<f64, TireLoadError> {
        self.get(key)?
            .as_f64()
            .ok_or_else(|| self.wrong_type(key, "a number"))
    }

    pub fn opt_f64(&self, key: &str) -> Result<Option<f64>, TireLoadError> {
        if self.has(key) { self.f64(key).map(Some) } else { Ok(None) }
    }

    pub fn i64(&self, key: &str) -> Result<i64, TireLoadError> {
        self.get(key)?
            .as_i64()
            .ok_or_else(|| self.wrong_type(key, "an integer"))
    }

    pub fn str(&self, key: &str) -> Result<&'a str, TireLoadError> {
        self.get(key)?
            .as_str()
            .ok_or_else(|| self.wrong_type(key, "a string"))
    }

    pub fn f64_array(&self, key: &str) -> Result<Vec<f64>, TireLoadError> {
        let items = self
            .get(key)?
            .as_array()
            .ok_or_else(|| self.wrong_type(key, "an array of numbers"))?;

        items
            .iter()
            .map(|v| v.as_f64().ok_or_else(|| self.wrong_type(key, "an array of numbers")))
            .collect()
    }

    pub fn vec3(&self, key: &str) -> Result<Vector3<f64>, TireLoadError> {
        match self.f64_array(key)?.as_slice() {
            [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
            _ => Err(self.wrong_type(key, "an array of 3 numbers")),
        }
    }

    /// `[longitudinal, lateral]` style pair, absent → `None`.
    pub fn opt_pair(&self, key: &str) -> Result<Option<[f64; 2]>, TireLoadError> {
        if !self.has(key) {
            return Ok(None);
        }
        match self.f64_array(key)?.as_slice() {
            [a, b] => Ok(Some([*a, *b])),
            _ => Err(self.wrong_type(key, "an array of 2 numbers")),
        }
    }

    fn wrong_type(&self, key: &str, expected: &'static str) -> TireLoadError {
        TireLoadError::WrongType { field: self.field_path(key), expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_errors_carry_full_path() {
        let doc = json!({ "Contact Material": { "Coefficients": { "Normal Damping": "soft" } } });
        let root = Node::root(&doc).unwrap();

        let cm_path = NodePath::join(root.path(), "Contact Material");
        let cm = root.child("Contact Material", &cm_path).unwrap();
        let co_path = NodePath::join(cm.path(), "Coefficients");
        let co = cm.child("Coefficients", &co_path).unwrap();

        let err = co.f64("Normal Damping").unwrap_err();
        assert_eq!(err.field(), Some("Contact Material.Coefficients.Normal Damping"));

        let err = co.f64("Normal Stiffness").unwrap_err();
        assert!(matches!(err, TireLoadError::MissingField(ref f)
            if f == "Contact Material.Coefficients.Normal Stiffness"));
    }

    #[test]
    fn root_must_be_object() {
        let doc = json!([1, 2, 3]);
        assert!(matches!(Node::root(&doc), Err(TireLoadError::NotAnObject)));
    }

    #[test]
    fn vec3_requires_exactly_three() {
        let doc = json!({ "Inertia": [1.0, 2.0], "Ok": [1, 2, 3] });
        let root = Node::root(&doc).unwrap();
        assert!(root.vec3("Inertia").is_err());
        assert_eq!(root.vec3("Ok").unwrap(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn optional_lookups() {
        let doc = json!({ "Visualization": 3, "Width": 0.2 });
        let root = Node::root(&doc).unwrap();
        let path = NodePath::join(root.path(), "Visualization");

        assert!(root.opt_child("Visualization", &path).is_err());
        assert_eq!(root.opt_f64("Width").unwrap(), Some(0.2));
        assert_eq!(root.opt_f64("Height").unwrap(), None);
        assert_eq!(root.opt_pair("sigma0").unwrap(), None);
    }
}
