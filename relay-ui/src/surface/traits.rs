use crate::error::SurfaceError;
use crate::node::ElementKind;
use crate::style::{StyleProperty, StyleValue};

/// Rendering primitives the command applier drives
///
/// Implementations wrap a concrete document (the browser DOM, an in-memory
/// tree, ...). Every call mutates the surface immediately; there is no
/// deferred flush.
pub trait Surface {
    /// Handle to one live element; cloning must not duplicate the element
    type Element: Clone;

    /// Instantiate a detached element of the given kind
    fn create_element(&mut self, kind: &ElementKind) -> Result<Self::Element, SurfaceError>;

    /// Attach an element as the last child of the surface root
    fn append_to_root(&mut self, element: &Self::Element) -> Result<(), SurfaceError>;

    /// Detach an element from the tree and release it
    fn remove(&mut self, element: &Self::Element) -> Result<(), SurfaceError>;

    /// Replace the element's text content
    fn set_text(&mut self, element: &Self::Element, text: &str) -> Result<(), SurfaceError>;

    /// Set one presentation property
    fn set_style(
        &mut self,
        element: &Self::Element,
        property: StyleProperty,
        value: &StyleValue,
    ) -> Result<(), SurfaceError>;
}
