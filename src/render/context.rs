//! Per-pass route data context.
//!
//! A `RenderContext` is created fresh for every render pass and passed by
//! reference to every view in the tree. It holds exactly one published
//! [`RouteData`] value; nothing about it is global, so concurrent passes never
//! observe each other's data.

use std::cell::OnceCell;

use crate::render::data::{RouteData, RoutePayload};
use crate::render::RenderError;

#[derive(Debug, Default)]
pub struct RenderContext {
    slot: OnceCell<RouteData>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `data` available to the rest of this pass. A pass publishes once.
    pub fn publish(&self, data: RouteData) -> Result<(), RenderError> {
        self.slot
            .set(data)
            .map_err(|_| RenderError::RenderFailure("route data published twice in one pass".into()))
    }

    /// The published payload, or `DataUnavailable` before `publish`.
    pub fn read(&self) -> Result<&RouteData, RenderError> {
        self.slot.get().ok_or(RenderError::DataUnavailable)
    }

    /// Borrow the payload as the shape a view expects.
    pub fn read_as<T: RoutePayload>(&self) -> Result<&T, RenderError> {
        let data = self.read()?;
        T::from_route_data(data).ok_or_else(|| {
            RenderError::RenderFailure(format!("expected {} data, found {}", T::KIND, data.kind()))
        })
    }
}
