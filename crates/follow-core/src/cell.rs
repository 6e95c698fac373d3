//! The [`Cell`] type: the state of a single grid square.

/// State of one grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Traversable floor.
    #[default]
    Open,
    /// Wall. Everything outside the grid reads as `Blocked`.
    Blocked,
}

impl Cell {
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// The other state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Blocked,
            Self::Blocked => Self::Open,
        }
    }
}

impl From<bool> for Cell {
    /// `true` maps to [`Cell::Blocked`], mirroring a wall bitmap.
    #[inline]
    fn from(blocked: bool) -> Self {
        if blocked { Self::Blocked } else { Self::Open }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open() {
        assert_eq!(Cell::default(), Cell::Open);
        assert!(Cell::default().is_open());
    }

    #[test]
    fn toggle_and_bool() {
        assert_eq!(Cell::Open.toggled(), Cell::Blocked);
        assert_eq!(Cell::Blocked.toggled(), Cell::Open);
        assert_eq!(Cell::from(true), Cell::Blocked);
        assert!(Cell::from(false).is_open());
    }
}
