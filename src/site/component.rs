use crate::{dom::document::ElementId, host::page::Page};

/// A view with a mount/unmount lifecycle.
///
/// `mount` renders into `parent` and acquires lifecycle resources
/// (timers, listeners); `unmount` releases them unconditionally and
/// removes the rendered subtree. `rerender` refreshes markup only.
pub trait Component {
    /// Render under `parent` and return the root. Mounting twice returns the existing root.
    fn mount(&mut self, page: &mut Page, parent: ElementId) -> ElementId;

    /// Refresh markup from current data.
    fn rerender(&mut self, _page: &mut Page) {}

    /// Release lifecycle resources and free the rendered subtree.
    fn unmount(&mut self, page: &mut Page);

    /// Rendered root while mounted.
    fn root(&self) -> Option<ElementId>;
}
