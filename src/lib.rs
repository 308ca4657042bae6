pub mod camera;
pub mod events;
pub mod io;
pub mod pattern;
pub mod quadtree;

mod ext;

pub type ScreenSize = u16;
