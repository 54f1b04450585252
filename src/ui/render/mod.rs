mod all;
mod bindings;
mod footer;
mod tabs;

use super::Frame;
use bindings::bindings;
use footer::footer;
use tabs::tabs;

pub use all::all as render;
pub use bindings::build_lines;
