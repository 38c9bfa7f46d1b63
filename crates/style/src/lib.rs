pub mod css;
pub mod stylesheet;

pub use css::{CssRule, CssSheet};
pub use stylesheet::generate;
