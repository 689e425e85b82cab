#![warn(missing_docs)]

//! Wire format shared between the cadview producer and the viewer renderer.
//!
//! This crate defines the payload that travels across the state-sync boundary:
//! an ordered list of renderable parts, each carrying mesh buffers and display
//! metadata. The JSON shape is fixed:
//!
//! ```text
//! {}                                                      // empty sentinel
//! {"parts": [{"mesh": ..., "name": "Part 0",
//!             "color": "#4a90d9" | null,
//!             "alpha": 0.5 | null}, ...]}                 // rendered parts
//! ```
//!
//! The empty mapping `{}` means "nothing to show / not yet rendered" and is
//! distinct from `{"parts": []}`, which means "explicitly rendered zero parts".
//! Consumers rely on part order for stable identity across updates, so `parts`
//! always preserves producer-side input order.

use serde::{Deserialize, Serialize};

pub mod color;

/// Renderable mesh buffers produced by a tessellator.
///
/// Flat buffers in the usual GPU-friendly layout. This crate treats the
/// contents as opaque: it never inspects or validates the geometry, it only
/// carries it to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
    /// Flat array of vertex normals: `[nx0, ny0, nz0, ...]`. Same length as
    /// `vertices`.
    pub normals: Vec<f32>,
}

impl MeshBuffers {
    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }
}

/// One renderable part of a payload.
///
/// `color` and `alpha` serialize as JSON `null` when absent — the renderer
/// substitutes its own defaults for `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPart {
    /// Mesh buffers for this part.
    pub mesh: MeshBuffers,
    /// Display name. Producers that have no explicit name use
    /// [`default_part_name`].
    pub name: String,
    /// Resolved color as a hex string, or `None` for the renderer default.
    pub color: Option<String>,
    /// Opacity in `0.0..=1.0`, or `None` for the renderer default.
    pub alpha: Option<f64>,
}

/// One serialized viewer update.
///
/// [`Payload::Empty`] is the sentinel value a fresh connection starts with and
/// is never a meaningful scene; [`Payload::Parts`] replaces the consumer's
/// entire scene, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// Nothing to show / not yet rendered. Serializes as `{}`.
    #[default]
    Empty,
    /// An ordered list of parts. Serializes as `{"parts": [...]}` — an empty
    /// list is a valid scene (zero parts), not the sentinel.
    Parts(Vec<ViewPart>),
}

impl Payload {
    /// The empty sentinel.
    pub fn empty() -> Self {
        Payload::Empty
    }

    /// The parts of this payload, or `None` for the empty sentinel.
    pub fn parts(&self) -> Option<&[ViewPart]> {
        match self {
            Payload::Empty => None,
            Payload::Parts(parts) => Some(parts),
        }
    }

    /// Number of parts (zero for the empty sentinel).
    pub fn num_parts(&self) -> usize {
        self.parts().map_or(0, <[ViewPart]>::len)
    }

    /// Whether this is the empty sentinel (not the same as zero parts).
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// On-wire representation: the `parts` key is present iff the payload is not
/// the empty sentinel.
#[derive(Deserialize)]
struct PayloadRepr {
    parts: Option<Vec<ViewPart>>,
}

#[derive(Serialize)]
struct PayloadReprRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    parts: Option<&'a [ViewPart]>,
}

impl Serialize for Payload {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PayloadReprRef {
            parts: self.parts(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = PayloadRepr::deserialize(deserializer)?;
        Ok(match repr.parts {
            None => Payload::Empty,
            Some(parts) => Payload::Parts(parts),
        })
    }
}

/// Placeholder display name for the part at `index`.
///
/// Used downstream by tessellators when a part was supplied without an
/// explicit name.
pub fn default_part_name(index: usize) -> String {
    format!("Part {index}")
}
