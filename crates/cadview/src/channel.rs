//! Deferred-delivery sync channel.
//!
//! The consumer — a browser-side render surface — initializes asynchronously
//! relative to the producer, so the first payloads can arrive before anyone is
//! listening. The channel buffers the latest payload until the consumer
//! signals readiness, then replays it exactly once. Without this handshake,
//! shapes rendered before the surface finished loading would be silently lost
//! and the view would stay blank until the next update.

use cadview_protocol::Payload;

use crate::error::TransportError;

/// Producer-side endpoint of the state-sync boundary.
///
/// Implementations push a payload to the consumer; the mechanism (synced
/// property, message channel, ...) is theirs. The channel only guarantees
/// *when* a transmit happens: never before readiness, at most once per
/// delivered payload.
pub trait Transport {
    /// Push one payload to the consumer.
    fn transmit(&mut self, payload: &Payload) -> Result<(), TransportError>;
}

/// Per-connection delivery state for one viewer instance.
///
/// State lives in the channel, not in anything global, so independent viewer
/// instances never share readiness or buffered payloads.
pub struct SyncChannel<C> {
    consumer: C,
    ready: bool,
    pending: Option<Payload>,
    current: Payload,
}

impl<C: Transport> SyncChannel<C> {
    /// A channel whose consumer has not yet signaled readiness.
    ///
    /// `current` starts as the empty sentinel, which is never transmitted.
    pub fn new(consumer: C) -> Self {
        Self {
            consumer,
            ready: false,
            pending: None,
            current: Payload::Empty,
        }
    }

    /// Deliver a payload to the consumer.
    ///
    /// Always replaces `current`. If the consumer is ready the payload is
    /// transmitted immediately; otherwise it is buffered, overwriting any
    /// previously buffered payload — only the latest matters.
    pub fn deliver(&mut self, payload: Payload) {
        self.current = payload;
        if self.ready {
            transmit(&mut self.consumer, &self.current);
        } else {
            log::debug!("consumer not ready, deferring payload");
            self.pending = Some(self.current.clone());
        }
    }

    /// Consumer readiness signal.
    ///
    /// Marks the connection ready and flushes the buffered payload, if any.
    /// Safe to call again (duplicate signal, reconnect): `pending` is already
    /// cleared, so nothing is retransmitted.
    pub fn on_ready(&mut self) {
        if self.ready {
            log::debug!("duplicate readiness signal");
        }
        self.ready = true;
        if let Some(pending) = self.pending.take() {
            log::debug!("consumer ready, flushing deferred payload");
            transmit(&mut self.consumer, &pending);
        }
    }

    /// Whether the consumer has signaled readiness.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The last payload delivered (the empty sentinel before any delivery).
    pub fn current(&self) -> &Payload {
        &self.current
    }

    /// The payload buffered for replay, if the consumer is not yet ready.
    pub fn pending(&self) -> Option<&Payload> {
        self.pending.as_ref()
    }

    /// The consumer endpoint.
    pub fn consumer(&self) -> &C {
        &self.consumer
    }
}

/// Transmit, swallowing transport failures.
///
/// A failed push is logged but does not unwind channel state — the next
/// delivery supersedes the lost payload anyway.
fn transmit<C: Transport>(consumer: &mut C, payload: &Payload) {
    if let Err(err) = consumer.transmit(payload) {
        log::error!("failed to transmit payload: {err}");
    }
}
