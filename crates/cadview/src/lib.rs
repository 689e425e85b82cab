#![warn(missing_docs)]

//! cadview — shape-to-viewer serialization and deferred delivery.
//!
//! This crate is the producer side of a reactive CAD viewer: it turns opaque
//! geometry (plus optional per-part display metadata) into the wire payload
//! defined by [`cadview_protocol`], and manages delivery to a render surface
//! that may not have finished initializing yet.
//!
//! Meshing and rendering stay external: geometry enters through the
//! [`Tessellator`] trait and payloads leave through the [`Transport`] trait.
//!
//! # Example
//!
//! ```ignore
//! use cadview::{MeshFnTessellator, PartSpec, RenderInput, Viewer};
//!
//! let mut viewer = Viewer::new(MeshFnTessellator::new(mesh_solid), transport);
//! viewer.render(RenderInput::spec(
//!     PartSpec::new(solid).name("Base").color("blue"),
//! ));
//! // Buffered until the surface signals readiness:
//! viewer.on_ready();
//! ```

pub mod channel;
pub mod error;
pub mod input;
pub mod serialize;
pub mod tessellate;
pub mod viewer;

pub use channel::{SyncChannel, Transport};
pub use error::{SerializeError, TessellateError, TransportError};
pub use input::{PartSpec, RenderInput, ShapeEntry};
pub use serialize::{serialize, serialize_or_empty};
pub use tessellate::{MeshFnTessellator, Tessellator};
pub use viewer::{Viewer, ViewerOptions, Width};

pub use cadview_protocol::{color, default_part_name, MeshBuffers, Payload, ViewPart};
