pub mod number;
pub mod style;
pub mod text;

pub use style::Style;
