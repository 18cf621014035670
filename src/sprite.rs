//! Draw Submission
//!
//! The data handed to the external rendering backend each tick. This crate
//! resolves *what* to draw (UV rectangle) and carries the caller's transform;
//! turning it into a textured quad and issuing the draw call is the
//! renderer's job.

use glam::{Vec2, Vec3, Vec4};

/// Everything the renderer needs for one textured quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteQuad {
    /// UV rectangle as `(u0, v0, u1, v1)`, normalized.
    pub uv: Vec4,
    /// World position.
    pub position: Vec2,
    /// Quad size in world units.
    pub size: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Color tint; white leaves the texture unchanged.
    pub color: Vec3,
}
