//! The viewer facade tying serializer and sync channel together.

use std::fmt;

use cadview_protocol::Payload;

use crate::channel::{SyncChannel, Transport};
use crate::input::RenderInput;
use crate::serialize::{log_serialize_failure, serialize};
use crate::tessellate::Tessellator;

/// Display width of the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Width {
    /// A CSS width string, e.g. `"100%"` or `"800px"`.
    Css(String),
    /// A pixel count, displayed as `"{n}px"`.
    Px(u32),
}

impl Default for Width {
    fn default() -> Self {
        Width::Css("100%".to_string())
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Css(css) => f.write_str(css),
            Width::Px(px) => write!(f, "{px}px"),
        }
    }
}

impl From<u32> for Width {
    fn from(px: u32) -> Self {
        Width::Px(px)
    }
}

impl From<&str> for Width {
    fn from(css: &str) -> Self {
        Width::Css(css.to_string())
    }
}

impl From<String> for Width {
    fn from(css: String) -> Self {
        Width::Css(css)
    }
}

/// Sizing options for a viewer's render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Surface width. Defaults to `"100%"`.
    pub width: Width,
    /// Surface height in pixels. Defaults to 600.
    pub height: u32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            width: Width::default(),
            height: 600,
        }
    }
}

/// A reactive CAD viewer connection: one tessellator, one consumer.
///
/// `render` calls are sequential; the consumer's readiness signal arrives
/// asynchronously through [`Viewer::on_ready`] and is forwarded to the
/// channel, which replays the latest buffered payload.
pub struct Viewer<T: Tessellator, C: Transport> {
    tessellator: T,
    channel: SyncChannel<C>,
    options: ViewerOptions,
}

impl<T: Tessellator, C: Transport> Viewer<T, C> {
    /// A viewer with default sizing.
    pub fn new(tessellator: T, consumer: C) -> Self {
        Self::with_options(tessellator, consumer, ViewerOptions::default())
    }

    /// A viewer with explicit sizing options.
    pub fn with_options(tessellator: T, consumer: C, options: ViewerOptions) -> Self {
        Self {
            tessellator,
            channel: SyncChannel::new(consumer),
            options,
        }
    }

    /// Render shapes, replacing the whole scene.
    ///
    /// Serializes the input and delivers the payload through the channel. An
    /// explicitly empty input delivers a zero-part scene, clearing the
    /// consumer's view. A tessellation failure is logged and delivers
    /// nothing, so the consumer keeps showing the prior frame.
    pub fn render(&mut self, input: RenderInput<T::Shape>) {
        match serialize(&self.tessellator, input) {
            // The sentinel is never transmitted: an explicitly empty input
            // means "render zero parts", which is a real (clearing) scene.
            Ok(Payload::Empty) => self.channel.deliver(Payload::Parts(Vec::new())),
            Ok(payload) => self.channel.deliver(payload),
            Err(err) => log_serialize_failure(&err),
        }
    }

    /// Forward the consumer's readiness signal.
    pub fn on_ready(&mut self) {
        self.channel.on_ready();
    }

    /// The last payload delivered.
    pub fn current(&self) -> &Payload {
        self.channel.current()
    }

    /// Number of parts in the last delivered payload.
    pub fn num_parts(&self) -> usize {
        self.channel.current().num_parts()
    }

    /// The underlying sync channel.
    pub fn channel(&self) -> &SyncChannel<C> {
        &self.channel
    }

    /// Sizing options for the render surface.
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }
}

impl<T: Tessellator, C: Transport> fmt::Display for Viewer<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Viewer({} parts)", self.num_parts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TessellateError, TransportError};
    use crate::input::PartSpec;
    use crate::tessellate::MeshFnTessellator;
    use cadview_protocol::MeshBuffers;

    #[derive(Debug, Clone, PartialEq)]
    struct Box3 {
        size: f64,
    }

    struct RecordingTransport {
        sent: Vec<Payload>,
    }

    impl Transport for RecordingTransport {
        fn transmit(&mut self, payload: &Payload) -> Result<(), TransportError> {
            self.sent.push(payload.clone());
            Ok(())
        }
    }

    fn box_mesh(shape: &Box3) -> Result<MeshBuffers, TessellateError> {
        if shape.size <= 0.0 {
            return Err(TessellateError::InvalidGeometry(
                "non-positive box size".to_string(),
            ));
        }
        Ok(MeshBuffers {
            vertices: vec![0.0; 9],
            indices: vec![0, 1, 2],
            normals: vec![0.0; 9],
        })
    }

    type BoxMeshFn = fn(&Box3) -> Result<MeshBuffers, TessellateError>;

    fn viewer() -> Viewer<MeshFnTessellator<Box3, BoxMeshFn>, RecordingTransport> {
        Viewer::new(
            MeshFnTessellator::new(box_mesh as BoxMeshFn),
            RecordingTransport { sent: Vec::new() },
        )
    }

    fn sent(v: &Viewer<MeshFnTessellator<Box3, BoxMeshFn>, RecordingTransport>) -> &[Payload] {
        &v.channel().consumer().sent
    }

    #[test]
    fn render_before_ready_buffers_then_replays_once() {
        let mut v = viewer();
        v.render(RenderInput::shape(Box3 { size: 10.0 }));
        assert!(sent(&v).is_empty());
        assert_eq!(v.channel().pending().map(Payload::num_parts), Some(1));

        v.on_ready();
        assert_eq!(sent(&v).len(), 1);
        assert_eq!(sent(&v)[0].num_parts(), 1);
        assert!(v.channel().pending().is_none());
    }

    #[test]
    fn render_after_ready_transmits_immediately() {
        let mut v = viewer();
        v.on_ready();
        v.render(RenderInput::shapes([
            Box3 { size: 1.0 },
            Box3 { size: 2.0 },
        ]));
        assert_eq!(sent(&v).len(), 1);
        assert_eq!(sent(&v)[0].num_parts(), 2);
        assert!(v.channel().pending().is_none());
    }

    #[test]
    fn empty_render_clears_the_scene_with_zero_parts() {
        let mut v = viewer();
        v.on_ready();
        v.render(RenderInput::shape(Box3 { size: 10.0 }));
        assert_eq!(v.num_parts(), 1);

        v.render(RenderInput::sequence([]));
        assert_eq!(v.num_parts(), 0);
        // The clearing payload is an explicit empty scene, not the sentinel.
        assert_eq!(sent(&v)[1], Payload::Parts(Vec::new()));
        assert_eq!(
            serde_json::to_value(&sent(&v)[1]).unwrap(),
            serde_json::json!({ "parts": [] })
        );
    }

    #[test]
    fn failed_render_keeps_the_prior_frame() {
        let mut v = viewer();
        v.on_ready();
        v.render(RenderInput::shape(Box3 { size: 10.0 }));
        assert_eq!(sent(&v).len(), 1);

        v.render(RenderInput::shape(Box3 { size: -1.0 }));
        // Nothing delivered, nothing transmitted, current unchanged.
        assert_eq!(sent(&v).len(), 1);
        assert_eq!(v.num_parts(), 1);
    }

    #[test]
    fn render_replaces_shapes() {
        let mut v = viewer();
        v.on_ready();
        v.render(RenderInput::shape(Box3 { size: 1.0 }));
        assert_eq!(v.num_parts(), 1);
        v.render(RenderInput::shapes([
            Box3 { size: 1.0 },
            Box3 { size: 2.0 },
        ]));
        assert_eq!(v.num_parts(), 2);
        v.render(RenderInput::spec(
            PartSpec::new(Box3 { size: 3.0 }).name("Lid").color("blue"),
        ));
        assert_eq!(v.num_parts(), 1);
        assert_eq!(v.current().parts().unwrap()[0].color.as_deref(), Some("#4a90d9"));
    }

    #[test]
    fn display_reports_part_count() {
        let mut v = viewer();
        v.on_ready();
        v.render(RenderInput::shapes([
            Box3 { size: 1.0 },
            Box3 { size: 2.0 },
        ]));
        assert_eq!(v.to_string(), "Viewer(2 parts)");
    }

    #[test]
    fn default_options() {
        let v = viewer();
        assert_eq!(v.options().width.to_string(), "100%");
        assert_eq!(v.options().height, 600);
    }

    #[test]
    fn pixel_width_renders_with_suffix() {
        assert_eq!(Width::from(1200).to_string(), "1200px");
        assert_eq!(Width::from("50%").to_string(), "50%");
    }
}
