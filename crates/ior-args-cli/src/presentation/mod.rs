pub mod formatters;
pub mod table;

pub use formatters::{RenderOptions, render};
