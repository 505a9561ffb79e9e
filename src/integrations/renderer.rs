// src/integrations/renderer.rs
//
// Renderer: turns the current collection into visible UI.
// Implemented by the host (web view, terminal, test double).

use crate::application::dto::CollectionView;

/// Contract:
/// - `render` receives the full current view after every mutation
/// - each card carries the id the UI passes back to edit/delete
/// - `CollectionView::Empty` gets a distinct empty-state view
#[cfg_attr(test, mockall::automock)]
pub trait Renderer: Send + Sync {
    fn render(&self, view: &CollectionView);

    /// Bring the form into view (called when editing starts)
    fn focus_form(&self);
}

/// Renderer that draws nothing; useful for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, view: &CollectionView) {
        log::trace!("NullRenderer skipped {} cards", view.len());
    }

    fn focus_form(&self) {}
}
