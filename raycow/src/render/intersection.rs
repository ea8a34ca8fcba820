use std::fmt;

use crate::geometry::{ray::Ray, tuple::Tuple};
use crate::scene::scene_object::SceneObject;

/// A ray parameter `t` at which a ray crosses the surface of `object`.
/// Negative `t` lies behind the ray origin.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {

    t: f64,
    object: &'a dyn SceneObject,
}

impl<'a> Intersection<'a> {

    pub fn new(t: f64, object: &'a dyn SceneObject) -> Self {
        Self {
            t,
            object,
        }
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn object(&self) -> &'a dyn SceneObject {
        self.object
    }

    /// Precomputes the shading inputs for this intersection of `ray`.
    pub fn prepare_computations(&self, ray: &Ray) -> IntersectionComputation<'a> {
        let point = ray.position(self.t);
        let eye = -*ray.direction();
        let mut normal = self.object.normal_at(&point);

        let inside = normal.dot_product(&eye) < 0.0;
        if inside {
            normal = -normal;
        }

        IntersectionComputation {
            t: self.t,
            object: self.object,
            point,
            eye,
            normal,
            inside,
        }
    }
}

impl fmt::Debug for Intersection<'_> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection").field("t", &self.t).finish()
    }
}

/// Unordered collection of intersections.
#[derive(Clone, Debug, Default)]
pub struct Intersections<'a> {

    intersections: Vec<Intersection<'a>>,
}

impl<'a> Intersections<'a> {

    pub fn new(intersections: Vec<Intersection<'a>>) -> Self {
        Self {
            intersections,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intersection<'a>> {
        self.intersections.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Intersection<'a>> {
        self.intersections.get(index)
    }

    pub fn extend(&mut self, other: Intersections<'a>) {
        self.intersections.extend(other.intersections);
    }

    /// Stable ascending sort by `t`.
    pub fn sort(&mut self) {
        self.intersections.sort_by(|a, b| a.t.total_cmp(&b.t));
    }

    /// The intersection with the lowest non-negative `t`, or `None` when every
    /// intersection lies behind the ray origin.
    pub fn hit(&self) -> Option<Intersection<'a>> {
        self.intersections.iter()
            .filter(|v| v.t >= 0.0)
            .min_by(|a, b| a.t.total_cmp(&b.t))
            .copied()
    }
}

impl<'a> From<Vec<Intersection<'a>>> for Intersections<'a> {

    fn from(intersections: Vec<Intersection<'a>>) -> Self {
        Self::new(intersections)
    }
}

impl<'a> IntoIterator for Intersections<'a> {

    type Item = Intersection<'a>;
    type IntoIter = std::vec::IntoIter<Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intersections.into_iter()
    }
}

/// Shading inputs derived from one intersection and the ray that produced it.
/// `normal` always faces the eye; `inside` records whether it had to be flipped.
pub struct IntersectionComputation<'a> {
    pub t: f64,
    pub object: &'a dyn SceneObject,
    pub point: Tuple,
    pub eye: Tuple,
    pub normal: Tuple,
    pub inside: bool,
}
