//! Indentation unit for generated sources.

/// One level of indentation, as a number of spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(usize);

impl Indent {
    /// Four spaces, used for both Java and Kotlin units.
    pub const JVM: Self = Self(4);

    pub const fn spaces(width: usize) -> Self {
        Self(width)
    }

    pub fn width(&self) -> usize {
        self.0
    }

    /// Number of spaces that `level` levels take up.
    pub fn columns(&self, level: usize) -> usize {
        self.0 * level
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JVM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        assert_eq!(Indent::JVM.columns(2), 8);
        assert_eq!(Indent::spaces(2).columns(3), 6);
        assert_eq!(Indent::default().width(), 4);
    }
}
