use super::*;

/// An RGB colour rendered as `#rrggbb`.
///
/// Channels are truncated toward zero, not rounded, and saturate into
/// `0..=255`, so a center of `(255.0, 0.0, 128.4)` renders as `#ff0080`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex([u8; 3]);

impl Hex {
    pub fn rgb(&self) -> [u8; 3] {
        self.0
    }
}

impl From<[u8; 3]> for Hex {
    fn from(rgb: [u8; 3]) -> Self {
        Self(rgb)
    }
}

impl From<&Color> for Hex {
    fn from(color: &Color) -> Self {
        // float-to-int `as` truncates and saturates; NaN lands on 0
        Self(color.coords().map(|c| c as u8))
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl serde::Serialize for Hex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
