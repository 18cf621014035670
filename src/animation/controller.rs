//! Animation Controller
//!
//! Owns a named set of [`AnimationClip`]s, tracks which one is active, and is
//! the single entry point the host render loop drives: `update(dt)` once per
//! tick, then resolve the active clip's frame through a [`FrameAtlas`] into
//! the UV rectangle to draw.

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::animation::clip::AnimationClip;
use crate::atlas::{Frame, FrameAtlas};
use crate::errors::{FlipbookError, Result};
use crate::sprite::SpriteQuad;

/// Mediates between a set of named clips and the render loop.
///
/// The active clip is stored by name and re-resolved through the map on every
/// access, so overwriting an entry can never leave a dangling selection.
#[derive(Debug, Default)]
pub struct AnimationController {
    animations: FxHashMap<String, AnimationClip>,
    active: Option<String>,
}

impl AnimationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a clip under its own name. An existing clip with the same
    /// name is overwritten.
    pub fn add_animation(&mut self, clip: AnimationClip) {
        log::debug!(
            "Animation '{}' added ({} frames)",
            clip.name(),
            clip.frame_count()
        );
        self.animations.insert(clip.name().to_string(), clip);
    }

    /// Makes the named clip active and restarts it from its first frame.
    ///
    /// Switching always restarts; there is no resume-from-previous-position.
    /// An unknown name leaves the current selection untouched.
    pub fn set_animation(&mut self, name: &str) -> Result<()> {
        let Some(clip) = self.animations.get_mut(name) else {
            log::error!("Animation '{name}' not found");
            return Err(FlipbookError::AnimationNotFound(name.to_string()));
        };

        clip.reset();
        clip.play();
        self.active = Some(name.to_string());

        log::debug!("Switched to animation '{name}'");
        Ok(())
    }

    /// Advances the active clip by `dt` seconds. No-op when none is active.
    pub fn update(&mut self, dt: f32) {
        if let Some(clip) = self.current_animation_mut() {
            clip.update(dt);
        }
    }

    /// Resumes the active clip, if any.
    pub fn play(&mut self) {
        if let Some(clip) = self.current_animation_mut() {
            clip.play();
        }
    }

    /// Pauses the active clip, if any.
    pub fn pause(&mut self) {
        if let Some(clip) = self.current_animation_mut() {
            clip.pause();
        }
    }

    /// The active clip, or `None` if nothing has been selected yet.
    #[must_use]
    pub fn current_animation(&self) -> Option<&AnimationClip> {
        self.active
            .as_deref()
            .and_then(|name| self.animations.get(name))
    }

    pub fn current_animation_mut(&mut self) -> Option<&mut AnimationClip> {
        self.active
            .as_deref()
            .and_then(|name| self.animations.get_mut(name))
    }

    #[must_use]
    pub fn has_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    #[must_use]
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Resolves the active clip's current frame through `atlas`.
    ///
    /// This is the per-tick render query: call after [`update`](Self::update),
    /// hand the returned UV rectangle to the renderer. Any failure means the
    /// caller should skip the draw; none of them disturb controller state.
    pub fn current_frame<'a>(&self, atlas: &'a FrameAtlas) -> Result<&'a Frame> {
        if !atlas.is_valid() {
            return Err(FlipbookError::AtlasInvalid);
        }

        let clip = self
            .current_animation()
            .ok_or(FlipbookError::NoActiveAnimation)?;
        let index = clip
            .current_frame()
            .ok_or_else(|| FlipbookError::EmptyAnimation(clip.name().to_string()))?;

        atlas.frame(index)
    }

    /// Resolves the full draw submission for this tick: the active frame's
    /// UVs plus the caller-supplied transform and tint.
    pub fn quad(
        &self,
        atlas: &FrameAtlas,
        position: Vec2,
        size: Vec2,
        rotation: f32,
        color: Vec3,
    ) -> Result<SpriteQuad> {
        let frame = self.current_frame(atlas)?;
        Ok(SpriteQuad {
            uv: frame.uv(),
            position,
            size,
            rotation,
            color,
        })
    }
}
