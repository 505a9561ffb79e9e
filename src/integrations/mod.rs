// src/integrations/mod.rs
//
// External collaborators consumed by the editor.
// Only interfaces and trivial adapters live here.

pub mod confirmation;
pub mod renderer;

pub use confirmation::{Confirmation, FixedConfirmation, FnConfirmation};
pub use renderer::{NullRenderer, Renderer};

#[cfg(test)]
pub use confirmation::MockConfirmation;
#[cfg(test)]
pub use renderer::MockRenderer;
