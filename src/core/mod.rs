pub mod camera;
pub mod constants;
pub mod options;
pub mod ripples;
pub mod sketch;
pub mod textures;
pub mod viewport;

pub use camera::*;
pub use constants::*;
pub use options::*;
pub use ripples::*;
pub use sketch::*;
pub use textures::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static RIPPLES_WGSL: &str = include_str!("../../shaders/ripples.wgsl");
pub static COMPOSITE_WGSL: &str = include_str!("../../shaders/composite.wgsl");
