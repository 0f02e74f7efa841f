//! Client-side state stores.
//!
//! Each store exclusively owns its collection; cross-component effects
//! are explicit signals (see [`RegistrySignal`]), never shared mutable
//! state. All mutation is expected to happen on one event loop:
//! channel pushes, completed fetches and user actions are serialized
//! by the caller.

pub mod builder;
pub mod catalog;
pub mod registry;
pub mod templates;

pub use builder::OverlayBuilder;
pub use catalog::CatalogStore;
pub use registry::{JobRegistry, RegistrySignal};
pub use templates::TemplateStore;
