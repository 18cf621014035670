//! Frame Atlas
//!
//! Maps rectangular pixel regions of a single sprite-sheet image to
//! normalized texture coordinates, addressable by a dense integer index.
//! Frames are appended during setup and never removed or reordered, so an
//! index handed out once stays valid for the atlas's lifetime.

use glam::Vec4;

use crate::errors::{FlipbookError, Result};
use crate::texture::SpriteTexture;

/// One rectangular sub-region of the atlas image in normalized texture space,
/// plus the original pixel size for layout/debug display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Left edge, normalized
    pub u0: f32,
    /// Bottom edge, normalized
    pub v0: f32,
    /// Right edge, normalized
    pub u1: f32,
    /// Top edge, normalized
    pub v1: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Default for Frame {
    /// A frame covering the whole texture.
    fn default() -> Self {
        Self {
            u0: 0.0,
            v0: 0.0,
            u1: 1.0,
            v1: 1.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Frame {
    /// Packs the UV rectangle as `(u0, v0, u1, v1)` for the renderer.
    #[must_use]
    pub fn uv(&self) -> Vec4 {
        Vec4::new(self.u0, self.v0, self.u1, self.v1)
    }
}

/// A sprite-sheet texture plus its ordered, append-only list of frames.
///
/// Built once at startup: construct from the host's loaded texture, append
/// frames via [`add_frame`](Self::add_frame) or
/// [`add_frame_grid`](Self::add_frame_grid), then treat as read-only.
pub struct FrameAtlas {
    texture: Box<dyn SpriteTexture>,
    frames: Vec<Frame>,
    texture_width: u32,
    texture_height: u32,
}

impl FrameAtlas {
    /// Wraps a loaded texture. Dimensions are cached here; a texture that
    /// failed to load leaves the atlas unable to accept frames.
    #[must_use]
    pub fn new(texture: Box<dyn SpriteTexture>) -> Self {
        let (width, height) = if texture.is_valid() {
            texture.dimensions()
        } else {
            (0, 0)
        };

        if width == 0 || height == 0 {
            log::error!("Frame atlas created from an unloaded texture");
        } else {
            log::info!("Frame atlas ready: {width}x{height}");
        }

        Self {
            texture,
            frames: Vec::new(),
            texture_width: width,
            texture_height: height,
        }
    }

    /// Appends a frame covering the pixel rectangle `(x, y, w, h)`.
    ///
    /// `(x, y)` is the rectangle's top-left corner with the image origin at
    /// the top-left; texture coordinates put the origin at the bottom-left,
    /// so the vertical axis is flipped when normalizing. The new frame's
    /// index is the frame count before the call.
    ///
    /// Without a loaded texture this warns and leaves the frame list alone.
    pub fn add_frame(&mut self, x: u32, y: u32, w: u32, h: u32) {
        if self.texture_width == 0 || self.texture_height == 0 {
            log::warn!("Cannot add frame: atlas texture not loaded");
            return;
        }

        let tw = self.texture_width as f32;
        let th = self.texture_height as f32;

        let frame = Frame {
            u0: x as f32 / tw,
            v0: 1.0 - (y + h) as f32 / th,
            u1: (x + w) as f32 / tw,
            v1: 1.0 - y as f32 / th,
            width: w as f32,
            height: h as f32,
        };
        self.frames.push(frame);

        log::debug!(
            "Frame {} added: pos({x},{y}) size({w}x{h}) UV({},{})-({},{})",
            self.frames.len() - 1,
            frame.u0,
            frame.v0,
            frame.u1,
            frame.v1
        );
    }

    /// Appends frames laid out on a regular grid, scanning row-major (row
    /// outer, column inner) from `(start_x, start_y)`.
    ///
    /// Stops after `count` frames when given, else after `cols * rows`.
    /// Relative to the first index added by this call, cell `(row, col)`
    /// lands at index `row * cols + col`.
    pub fn add_frame_grid(
        &mut self,
        start_x: u32,
        start_y: u32,
        frame_w: u32,
        frame_h: u32,
        cols: u32,
        rows: u32,
        count: Option<u32>,
    ) {
        let total = count.unwrap_or(cols * rows);
        let mut added = 0;

        'grid: for row in 0..rows {
            for col in 0..cols {
                if added >= total {
                    break 'grid;
                }
                self.add_frame(
                    start_x + col * frame_w,
                    start_y + row * frame_h,
                    frame_w,
                    frame_h,
                );
                added += 1;
            }
        }

        log::debug!("Added {added} frames in a {cols}x{rows} grid");
    }

    /// Returns the frame at `index`.
    pub fn frame(&self, index: usize) -> Result<&Frame> {
        self.frames.get(index).ok_or(FlipbookError::FrameOutOfBounds {
            index,
            count: self.frames.len(),
        })
    }

    /// Number of frames defined so far.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// True iff the texture is loaded and at least one frame is defined.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.texture.is_valid() && !self.frames.is_empty()
    }

    /// Binds the atlas texture on the given unit. Skipped if the texture
    /// never loaded.
    pub fn bind(&self, unit: u32) {
        if self.texture.is_valid() {
            self.texture.bind(unit);
        }
    }

    /// Releases the atlas texture binding.
    pub fn unbind(&self) {
        if self.texture.is_valid() {
            self.texture.unbind();
        }
    }

    /// Cached texture width in pixels.
    #[must_use]
    pub fn texture_width(&self) -> u32 {
        self.texture_width
    }

    /// Cached texture height in pixels.
    #[must_use]
    pub fn texture_height(&self) -> u32 {
        self.texture_height
    }
}

impl std::fmt::Debug for FrameAtlas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameAtlas")
            .field("texture_width", &self.texture_width)
            .field("texture_height", &self.texture_height)
            .field("frame_count", &self.frames.len())
            .finish_non_exhaustive()
    }
}
