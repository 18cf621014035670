pub mod clip;
pub mod controller;

pub use clip::AnimationClip;
pub use controller::AnimationController;
