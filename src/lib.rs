pub mod animation;
pub mod atlas;
pub mod errors;
pub mod sprite;
pub mod texture;
pub mod utils;

pub use animation::{AnimationClip, AnimationController};
pub use atlas::{Frame, FrameAtlas};
pub use errors::{FlipbookError, Result};
pub use sprite::SpriteQuad;
pub use texture::SpriteTexture;
pub use utils::Timer;
