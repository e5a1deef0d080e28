pub mod color;
pub mod numeric;
pub mod properties;
pub mod value;
pub mod vendor;

pub use color::Color;
pub use numeric::{Numeric, Unit};
pub use properties::Properties;
pub use value::Value;
pub use vendor::Vendor;
