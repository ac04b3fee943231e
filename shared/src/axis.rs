use std::fmt;

/// Orientation of a pillar-like material. `None` is used by variants that
/// have no orientation at all (e.g. a log covered in bark on every side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Y,
    Z,
    X,
    None,
}

impl Axis {
    pub fn all() -> [Axis; 4] {
        [Axis::Y, Axis::Z, Axis::X, Axis::None]
    }

    pub fn from_string(val: &str) -> Option<Axis> {
        Some(match val {
            "y" => Axis::Y,
            "z" => Axis::Z,
            "x" => Axis::X,
            "none" => Axis::None,
            _ => return None,
        })
    }

    pub fn as_string(self) -> &'static str {
        match self {
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::X => "x",
            Axis::None => "none",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::X | Axis::Z)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_names_round_trip() {
        for axis in Axis::all() {
            assert_eq!(Axis::from_string(axis.as_string()), Some(axis));
        }
        assert_eq!(Axis::from_string("w"), None);
    }

    #[test]
    fn horizontal_axes() {
        assert!(Axis::X.is_horizontal());
        assert!(Axis::Z.is_horizontal());
        assert!(!Axis::Y.is_horizontal());
        assert!(!Axis::None.is_horizontal());
    }
}
