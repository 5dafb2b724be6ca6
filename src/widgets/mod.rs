//! Explore widgets.
//!
//! This module provides:
//! - `WidgetKind`: the type tag packed into each widget id
//! - `ExploreWidget`: the read-only descriptor consumed by follow-up calls
//! - `ExploreWidgets`: ordering and filtering over the explore result

mod kind;
mod widget;

pub use kind::WidgetKind;
pub use widget::{ExploreWidget, ExploreWidgets};

pub(crate) use widget::ExploreOut;
