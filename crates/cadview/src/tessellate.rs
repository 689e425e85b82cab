//! The tessellator boundary.
//!
//! Meshing itself is an external concern — a geometry kernel converts solids
//! and sketches into triangle buffers. This crate only defines the batch
//! contract it calls through, plus an adapter for kernels that expose a
//! per-shape meshing function.

use std::marker::PhantomData;

use cadview_protocol::{default_part_name, MeshBuffers, Payload, ViewPart};

use crate::error::TessellateError;

/// Converts a batch of shapes into a renderable payload.
///
/// All four slices are positionally aligned: element `i` of `names`,
/// `colors`, and `alphas` describes `shapes[i]`, and part `i` of the returned
/// payload must correspond to `shapes[i]`. The batch is called once per
/// serialization (never per shape) so implementations can amortize setup
/// cost, and is never called with an empty batch — the serializer
/// short-circuits that case.
///
/// Implementations substitute [`default_part_name`] for `None` names and are
/// expected to return [`Payload::Parts`], not the empty sentinel.
pub trait Tessellator {
    /// The opaque geometry type this tessellator meshes.
    type Shape;

    /// Mesh the batch, preserving input order.
    fn tessellate(
        &self,
        shapes: &[Self::Shape],
        names: &[Option<String>],
        colors: &[Option<String>],
        alphas: &[Option<f64>],
    ) -> Result<Payload, TessellateError>;
}

/// Adapter turning a per-shape meshing function into the batch contract.
///
/// Handles part assembly (positional metadata, name defaulting) so a geometry
/// kernel only needs to supply `Fn(&Shape) -> Result<MeshBuffers, _>`. The
/// first shape that fails to mesh fails the whole batch.
pub struct MeshFnTessellator<S, F> {
    mesh_fn: F,
    _shape: PhantomData<fn(&S) -> MeshBuffers>,
}

impl<S, F> MeshFnTessellator<S, F>
where
    F: Fn(&S) -> Result<MeshBuffers, TessellateError>,
{
    /// Wrap a per-shape meshing function.
    pub fn new(mesh_fn: F) -> Self {
        Self {
            mesh_fn,
            _shape: PhantomData,
        }
    }
}

impl<S, F> Tessellator for MeshFnTessellator<S, F>
where
    F: Fn(&S) -> Result<MeshBuffers, TessellateError>,
{
    type Shape = S;

    fn tessellate(
        &self,
        shapes: &[S],
        names: &[Option<String>],
        colors: &[Option<String>],
        alphas: &[Option<f64>],
    ) -> Result<Payload, TessellateError> {
        let mut parts = Vec::with_capacity(shapes.len());
        for (i, shape) in shapes.iter().enumerate() {
            let mesh = (self.mesh_fn)(shape)?;
            parts.push(ViewPart {
                mesh,
                name: names[i].clone().unwrap_or_else(|| default_part_name(i)),
                color: colors[i].clone(),
                alpha: alphas[i],
            });
        }
        Ok(Payload::Parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tri;

    fn tri_mesh(_shape: &Tri) -> Result<MeshBuffers, TessellateError> {
        Ok(MeshBuffers {
            vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            indices: vec![0, 1, 2],
            normals: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        })
    }

    #[test]
    fn assembles_parts_in_order_with_metadata() {
        let tess = MeshFnTessellator::new(tri_mesh);
        let payload = tess
            .tessellate(
                &[Tri, Tri],
                &[Some("Base".to_string()), None],
                &[Some("#4a90d9".to_string()), None],
                &[None, Some(0.25)],
            )
            .unwrap();

        let parts = payload.parts().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].name, "Base");
        assert_eq!(parts[0].color.as_deref(), Some("#4a90d9"));
        assert_eq!(parts[0].alpha, None);
        assert_eq!(parts[1].alpha, Some(0.25));
    }

    #[test]
    fn unnamed_parts_get_positional_placeholder() {
        let tess = MeshFnTessellator::new(tri_mesh);
        let payload = tess
            .tessellate(
                &[Tri, Tri, Tri],
                &[None, None, None],
                &[None, None, None],
                &[None, None, None],
            )
            .unwrap();
        let names: Vec<&str> = payload
            .parts()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Part 0", "Part 1", "Part 2"]);
    }

    #[test]
    fn first_failure_fails_the_batch() {
        let tess = MeshFnTessellator::new(|_: &Tri| {
            Err(TessellateError::InvalidGeometry("open shell".to_string()))
        });
        let err = tess
            .tessellate(&[Tri], &[None], &[None], &[None])
            .unwrap_err();
        assert!(matches!(err, TessellateError::InvalidGeometry(_)));
    }
}
