//! Shape-to-payload serialization.
//!
//! One call turns a [`RenderInput`] into the wire [`Payload`]: normalize to an
//! ordered entry list, resolve colors, then hand the whole batch to the
//! tessellator in one positional call.

use std::error::Error;

use cadview_protocol::{color, Payload};

use crate::error::SerializeError;
use crate::input::RenderInput;
use crate::tessellate::Tessellator;

/// Serialize shapes into a renderable payload.
///
/// An input that normalizes to zero entries returns [`Payload::Empty`]
/// without invoking the tessellator. Otherwise the tessellator is called
/// exactly once with four positionally aligned slices; its failure is
/// reported as [`SerializeError::Tessellation`] and loses the whole batch.
pub fn serialize<T: Tessellator>(
    tessellator: &T,
    input: RenderInput<T::Shape>,
) -> Result<Payload, SerializeError> {
    let entries = input.into_entries();
    if entries.is_empty() {
        return Ok(Payload::Empty);
    }

    let mut shapes = Vec::with_capacity(entries.len());
    let mut names = Vec::with_capacity(entries.len());
    let mut colors = Vec::with_capacity(entries.len());
    let mut alphas = Vec::with_capacity(entries.len());
    for entry in entries {
        let (shape, name, entry_color, alpha) = entry.into_fields();
        shapes.push(shape);
        names.push(name);
        colors.push(color::resolve(entry_color.as_deref()));
        alphas.push(alpha);
    }

    let count = shapes.len();
    tessellator
        .tessellate(&shapes, &names, &colors, &alphas)
        .map_err(|source| SerializeError::Tessellation { count, source })
}

/// Fail-soft variant of [`serialize`].
///
/// A tessellation failure is logged with its error chain and swallowed; the
/// caller gets the empty sentinel and the consumer keeps showing whatever it
/// already has. A broken geometry update must never take down the session.
pub fn serialize_or_empty<T: Tessellator>(
    tessellator: &T,
    input: RenderInput<T::Shape>,
) -> Payload {
    match serialize(tessellator, input) {
        Ok(payload) => payload,
        Err(err) => {
            log_serialize_failure(&err);
            Payload::Empty
        }
    }
}

/// Log a serialization failure including its source chain.
pub(crate) fn log_serialize_failure(err: &SerializeError) {
    log::error!("failed to serialize shapes: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        log::error!("caused by: {cause}");
        source = cause.source();
    }
}
