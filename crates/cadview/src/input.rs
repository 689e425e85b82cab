//! Input model for the serializer.
//!
//! Callers hand the serializer either a bare shape, a [`PartSpec`] (shape plus
//! display metadata), or an ordered sequence mixing both. The three cases form
//! the closed union [`RenderInput`], chosen at construction — there is no
//! runtime sniffing of what a value "looks like", and a spec can never be
//! mistaken for a sequence.
//!
//! Sequence construction is eager: [`RenderInput::sequence`] collects its
//! iterator up front, so input to a render call is always finite and countable
//! before the tessellator is involved.

/// A shape annotated with optional display metadata.
///
/// The shape itself is required; everything else defaults to "let the
/// renderer decide".
#[derive(Debug, Clone, PartialEq)]
pub struct PartSpec<S> {
    /// The geometry to render. Opaque to this crate.
    pub shape: S,
    /// Optional display name. Unnamed parts get a positional placeholder
    /// downstream.
    pub name: Option<String>,
    /// Optional color, either a known name or a raw hex string.
    pub color: Option<String>,
    /// Optional opacity in `0.0..=1.0`.
    pub alpha: Option<f64>,
}

impl<S> PartSpec<S> {
    /// A spec with no metadata, equivalent to passing the bare shape.
    pub fn new(shape: S) -> Self {
        Self {
            shape,
            name: None,
            color: None,
            alpha: None,
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the color (named or hex).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the opacity.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

/// One element of a mixed input sequence: a bare shape or a full spec.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEntry<S> {
    /// A bare shape with no metadata.
    Shape(S),
    /// A shape with display metadata.
    Spec(PartSpec<S>),
}

impl<S> ShapeEntry<S> {
    /// Split into the shape and its (possibly absent) metadata fields.
    pub(crate) fn into_fields(self) -> (S, Option<String>, Option<String>, Option<f64>) {
        match self {
            ShapeEntry::Shape(shape) => (shape, None, None, None),
            ShapeEntry::Spec(spec) => (spec.shape, spec.name, spec.color, spec.alpha),
        }
    }
}

impl<S> From<PartSpec<S>> for ShapeEntry<S> {
    fn from(spec: PartSpec<S>) -> Self {
        ShapeEntry::Spec(spec)
    }
}

/// Input to one serialization call.
///
/// Exactly three forms, mirroring what a viewer accepts: one shape, one
/// annotated shape, or an ordered sequence of either.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInput<S> {
    /// A single bare shape.
    Shape(S),
    /// A single annotated shape.
    Spec(PartSpec<S>),
    /// An ordered sequence of shapes and/or specs. May be empty, which
    /// renders an explicit zero-part scene.
    Sequence(Vec<ShapeEntry<S>>),
}

impl<S> RenderInput<S> {
    /// A single bare shape.
    pub fn shape(shape: S) -> Self {
        RenderInput::Shape(shape)
    }

    /// A single annotated shape.
    pub fn spec(spec: PartSpec<S>) -> Self {
        RenderInput::Spec(spec)
    }

    /// A sequence of mixed entries, collected eagerly.
    pub fn sequence(entries: impl IntoIterator<Item = ShapeEntry<S>>) -> Self {
        RenderInput::Sequence(entries.into_iter().collect())
    }

    /// A sequence of bare shapes, collected eagerly.
    pub fn shapes(shapes: impl IntoIterator<Item = S>) -> Self {
        RenderInput::Sequence(shapes.into_iter().map(ShapeEntry::Shape).collect())
    }

    /// Normalize to the ordered entry list the serializer works on.
    pub(crate) fn into_entries(self) -> Vec<ShapeEntry<S>> {
        match self {
            RenderInput::Shape(shape) => vec![ShapeEntry::Shape(shape)],
            RenderInput::Spec(spec) => vec![ShapeEntry::Spec(spec)],
            RenderInput::Sequence(entries) => entries,
        }
    }
}

impl<S> From<PartSpec<S>> for RenderInput<S> {
    fn from(spec: PartSpec<S>) -> Self {
        RenderInput::Spec(spec)
    }
}

impl<S> From<Vec<ShapeEntry<S>>> for RenderInput<S> {
    fn from(entries: Vec<ShapeEntry<S>>) -> Self {
        RenderInput::Sequence(entries)
    }
}
