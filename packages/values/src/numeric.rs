use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// CSS length, angle, time and ratio units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    None,
    Px,
    Em,
    Rem,
    Ex,
    Ch,
    In,
    Vh,
    Vw,
    Vmin,
    Vmax,
    Fr,
    Deg,
    S,
    Ms,
    Percent,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Ex => "ex",
            Unit::Ch => "ch",
            Unit::In => "in",
            Unit::Vh => "vh",
            Unit::Vw => "vw",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Fr => "fr",
            Unit::Deg => "deg",
            Unit::S => "s",
            Unit::Ms => "ms",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Magnitude with a unit.
///
/// Equality and hashing compare the bit pattern of the magnitude so that
/// numerics can key caches the same way text values do.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Numeric {
    magnitude: f64,
    unit: Unit,
}

impl Numeric {
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    pub fn px(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Px)
    }

    pub fn em(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Em)
    }

    pub fn percent(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Percent)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

/// Render a magnitude without a fractional part when it is integral.
pub fn format_magnitude(magnitude: f64) -> String {
    if magnitude.is_finite() && magnitude.fract() == 0.0 && magnitude.abs() < 1e15 {
        // `as i64` also folds -0.0 into 0
        (magnitude as i64).to_string()
    } else {
        magnitude.to_string()
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_magnitude(self.magnitude), self.unit)
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude.to_bits() == other.magnitude.to_bits() && self.unit == other.unit
    }
}

impl Eq for Numeric {}

impl Hash for Numeric {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.to_bits().hash(state);
        self.unit.hash(state);
    }
}
