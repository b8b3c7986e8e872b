//! Element store exposing the attribute get/set surface behaviors rely on.

use crate::orientation::{Orientation, RotationTarget};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Handle to an element for lookups and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ElementHandle(pub u64);

/// Errors raised while building or querying a scene.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// A selectable element was declared without an identifier.
    #[error("selectable element `{name}` has no id")]
    MissingId {
        /// Name of the offending element.
        name: String,
    },
    /// Two elements share the same name.
    #[error("duplicate element name `{0}`")]
    DuplicateName(String),
    /// No element is registered under the given name.
    #[error("unknown element `{0}`")]
    UnknownElement(String),
}

/// A scene entity with the attributes behaviors read and write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    name: String,
    id: Option<String>,
    rotation: Orientation,
}

impl Element {
    /// Create an element with no identifier and zero rotation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            rotation: Orientation::ZERO,
        }
    }

    /// Builder: set the selection identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: set the initial rotation.
    pub fn with_rotation(mut self, rotation: Orientation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Scene-unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selection identifier, if this element is selectable.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl RotationTarget for Element {
    fn rotation(&self) -> Orientation {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Orientation) {
        self.rotation = rotation;
    }
}

/// Owns every element and hands out stable handles.
#[derive(Debug, Default)]
pub struct Scene {
    elements: BTreeMap<ElementHandle, Element>,
    next_handle: u64,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            next_handle: 1,
        }
    }

    /// Add an element, rejecting duplicate names.
    pub fn spawn(&mut self, element: Element) -> Result<ElementHandle, SceneError> {
        if self.find(element.name()).is_some() {
            return Err(SceneError::DuplicateName(element.name.clone()));
        }

        let handle = ElementHandle(self.next_handle.max(1));
        self.next_handle = handle.0 + 1;
        tracing::debug!(name = %element.name, handle = handle.0, "spawned element");
        self.elements.insert(handle, element);
        Ok(handle)
    }

    /// Add a selectable element; the identifier must be non-empty.
    pub fn spawn_selectable(
        &mut self,
        name: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<ElementHandle, SceneError> {
        let name = name.into();
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SceneError::MissingId { name });
        }
        self.spawn(Element::new(name).with_id(id))
    }

    /// Remove an element, returning it if it existed.
    pub fn remove(&mut self, handle: ElementHandle) -> Option<Element> {
        self.elements.remove(&handle)
    }

    /// Look up an element by handle.
    pub fn get(&self, handle: ElementHandle) -> Option<&Element> {
        self.elements.get(&handle)
    }

    /// Mutable lookup by handle.
    pub fn get_mut(&mut self, handle: ElementHandle) -> Option<&mut Element> {
        self.elements.get_mut(&handle)
    }

    /// Find an element handle by name.
    pub fn find(&self, name: &str) -> Option<ElementHandle> {
        self.elements
            .iter()
            .find(|(_, element)| element.name == name)
            .map(|(handle, _)| *handle)
    }

    /// Like [`Scene::find`], but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<ElementHandle, SceneError> {
        self.find(name)
            .ok_or_else(|| SceneError::UnknownElement(name.to_string()))
    }

    /// Iterate elements in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementHandle, &Element)> {
        self.elements.iter().map(|(handle, element)| (*handle, element))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the scene has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_assigns_increasing_handles() {
        let mut scene = Scene::new();
        let a = scene.spawn(Element::new("a")).unwrap();
        let b = scene.spawn(Element::new("b")).unwrap();
        assert!(a < b);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.find("b"), Some(b));
    }

    #[test]
    fn default_scene_handles_start_at_one() {
        let mut scene = Scene::default();
        let handle = scene.spawn(Element::new("a")).unwrap();
        assert_eq!(handle, ElementHandle(1));
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut scene = Scene::new();
        scene.spawn(Element::new("model")).unwrap();
        let err = scene.spawn(Element::new("model")).unwrap_err();
        assert_eq!(err, SceneError::DuplicateName("model".into()));
    }

    #[test]
    fn selectable_requires_id() {
        let mut scene = Scene::new();
        let err = scene.spawn_selectable("glove", "  ").unwrap_err();
        assert_eq!(
            err,
            SceneError::MissingId {
                name: "glove".into()
            }
        );

        let handle = scene.spawn_selectable("glove", "luva").unwrap();
        assert_eq!(scene.get(handle).and_then(Element::id), Some("luva"));
    }

    #[test]
    fn rotation_round_trips_through_element() {
        let mut scene = Scene::new();
        let handle = scene.spawn(Element::new("model")).unwrap();
        let element = scene.get_mut(handle).unwrap();
        element.set_rotation(Orientation::new(1.0, 2.0, 3.0));
        assert_eq!(
            scene.get(handle).map(|e| e.rotation()),
            Some(Orientation::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn require_reports_unknown_names() {
        let scene = Scene::new();
        assert_eq!(
            scene.require("missing"),
            Err(SceneError::UnknownElement("missing".into()))
        );
    }

    #[test]
    fn removed_elements_are_gone() {
        let mut scene = Scene::new();
        let handle = scene.spawn(Element::new("model")).unwrap();
        assert!(scene.remove(handle).is_some());
        assert!(scene.get(handle).is_none());
        assert!(scene.is_empty());
    }
}
