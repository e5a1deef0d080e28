use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Rendering target for vendor-specific names and values.
///
/// Declaration order doubles as emission order: prefixed vendors sort before
/// `Standard`, so iterating a `BTreeSet<Vendor>` yields prefixed forms first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// Internet Explorer
    IE,
    /// Mozilla
    Mozilla,
    /// Safari
    Safari,
    /// Webkit
    Webkit,
    /// JavaFX
    JavaFX,
    /// Standard
    Standard,
}

impl Vendor {
    pub const ALL: [Vendor; 6] = [
        Vendor::IE,
        Vendor::Mozilla,
        Vendor::Safari,
        Vendor::Webkit,
        Vendor::JavaFX,
        Vendor::Standard,
    ];

    /// Name prefix used by this vendor.
    pub fn prefix(self) -> &'static str {
        match self {
            Vendor::IE => "-ms-",
            Vendor::Mozilla => "-moz-",
            Vendor::Safari | Vendor::Webkit => "-webkit-",
            Vendor::JavaFX => "-fx-",
            Vendor::Standard => "",
        }
    }

    /// The minimal vendor set every value supports.
    pub fn standard() -> BTreeSet<Vendor> {
        BTreeSet::from([Vendor::Standard])
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
