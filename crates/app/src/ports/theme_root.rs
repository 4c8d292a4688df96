//! Theme root port — the element carrying the dark style scope.

/// The document root whose class list selects the active theme.
pub trait ThemeRoot {
    /// Add (`true`) or remove (`false`) the dark style scope.
    fn set_dark_scope(&self, enabled: bool);
}

impl<T: ThemeRoot + ?Sized> ThemeRoot for &T {
    fn set_dark_scope(&self, enabled: bool) {
        (**self).set_dark_scope(enabled);
    }
}
