//! System color-scheme preference abstraction.

use std::rc::Rc;

/// Source of the host's preferred color scheme, the equivalent of the
/// `prefers-color-scheme: dark` media query.
pub trait ColorSchemeSource {
    /// Whether the host prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

impl<S: ColorSchemeSource + ?Sized> ColorSchemeSource for Rc<S> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}
