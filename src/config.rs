/// Configuration for an [`Rbt`] instance.
///
/// [`Rbt`]: crate::Rbt
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    allow_empty: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config { allow_empty: false }
    }
}

impl Config {
    pub fn new() -> Config {
        Default::default()
    }

    /// When set, removing the only entry empties the tree. By default such
    /// a removal is refused with [`RbtError::LastEntry`] and the entry
    /// stays in place.
    ///
    /// [`RbtError::LastEntry`]: crate::RbtError::LastEntry
    pub fn set_allow_empty(&mut self, allow: bool) -> &mut Self {
        self.allow_empty = allow;
        self
    }

    #[inline]
    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }
}
