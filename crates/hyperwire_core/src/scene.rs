//! Scene: an ordered collection of objects plus a selection cursor
//!
//! Invariant: while the scene is non-empty exactly one object is selected.
//! Adding the first object selects it; removing the selected object
//! re-selects index 0 (or clears the cursor when the scene empties).

use hyperwire_math::Vec4;

use crate::{Object4D, ShapeKind};

/// An ordered list of 4D objects with a selection cursor
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<Object4D>,
    selected: Option<usize>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            selected: None,
        }
    }

    /// The demo scene: a unit tesseract and a hypersphere shifted +2 on x
    pub fn demo() -> Self {
        let mut scene = Scene::new();
        scene.add(Object4D::new(ShapeKind::tesseract(1.0)));

        let mut sphere = Object4D::new(ShapeKind::hypersphere(0.7, 12));
        sphere.translate(Vec4::new(2.0, 0.0, 0.0, 0.0));
        scene.add(sphere);

        scene
    }

    /// Add an object, returning its index. The first object added to an
    /// empty scene becomes the selection.
    pub fn add(&mut self, object: Object4D) -> usize {
        let index = self.objects.len();
        log::debug!("scene: added {} at index {}", object.name(), index);
        self.objects.push(object);
        if self.selected.is_none() {
            self.selected = Some(index);
        }
        index
    }

    /// Remove the object at `index`, if present
    ///
    /// Removing the selected object re-selects index 0 (or clears the
    /// selection when the scene empties). Removing an object before the
    /// selected one shifts the cursor so the same object stays selected.
    pub fn remove(&mut self, index: usize) -> Option<Object4D> {
        if index >= self.objects.len() {
            return None;
        }
        let removed = self.objects.remove(index);

        self.selected = match self.selected {
            Some(sel) if sel == index => {
                if self.objects.is_empty() {
                    None
                } else {
                    Some(0)
                }
            }
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };

        Some(removed)
    }

    /// Move the selection cursor. Out-of-range indices are a no-op.
    pub fn select(&mut self, index: usize) {
        if index < self.objects.len() {
            self.selected = Some(index);
        }
    }

    /// Index of the selected object, if any
    #[inline]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected object, if any
    pub fn selected(&self) -> Option<&Object4D> {
        self.selected.and_then(|i| self.objects.get(i))
    }

    /// Mutable access to the selected object, if any
    pub fn selected_mut(&mut self) -> Option<&mut Object4D> {
        let index = self.selected?;
        self.objects.get_mut(index)
    }

    /// All objects, in insertion order
    #[inline]
    pub fn objects(&self) -> &[Object4D] {
        &self.objects
    }

    /// Iterate over all objects mutably
    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut Object4D> {
        self.objects.iter_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
