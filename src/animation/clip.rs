//! Animation Clip
//!
//! A named playback sequence over atlas frame indices: accumulate wall-clock
//! time, step through the sequence at a configurable rate, loop or clamp at
//! the end. A clip knows nothing about the atlas itself; it only yields
//! indices into one.

/// Fallback rate when a non-positive fps is supplied.
const DEFAULT_FPS: f32 = 10.0;

/// A named, time-driven walk over a sequence of atlas frame indices.
///
/// Freshly constructed clips are playing, looping, at speed 1.0, positioned
/// on the first element of the sequence.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    name: String,
    frame_indices: Vec<usize>,
    frame_duration: f32,
    looping: bool,
    speed: f32,
    paused: bool,

    // Runtime state. `current` indexes into `frame_indices`, not the atlas.
    current: usize,
    elapsed: f32,
    finished: bool,
}

impl AnimationClip {
    /// Creates a clip named `name` over `frames` (atlas indices, repeats
    /// allowed), advancing at `fps` frames per second.
    ///
    /// An empty `frames` list is tolerated with a warning: the clip exists
    /// but never advances and yields no frame.
    #[must_use]
    pub fn new(name: impl Into<String>, frames: Vec<usize>, fps: f32) -> Self {
        let name = name.into();
        if frames.is_empty() {
            log::warn!("Animation '{name}' created with no frames");
        }

        Self {
            frame_duration: Self::duration_from_fps(&name, fps),
            name,
            frame_indices: frames,
            looping: true,
            speed: 1.0,
            paused: false,
            current: 0,
            elapsed: 0.0,
            finished: false,
        }
    }

    fn duration_from_fps(name: &str, fps: f32) -> f32 {
        if fps <= 0.0 {
            log::warn!("Animation '{name}': fps must be positive, using {DEFAULT_FPS}");
            1.0 / DEFAULT_FPS
        } else {
            1.0 / fps
        }
    }

    /// Advances playback by `dt` seconds of wall-clock time.
    ///
    /// Consumes as many whole frame durations as `dt * speed` covers, so a
    /// large `dt` (a stall, a dropped tick) steps through every intermediate
    /// frame instead of losing them. Does nothing while paused or finished,
    /// or when the clip has no frames.
    pub fn update(&mut self, dt: f32) {
        if self.paused || self.finished {
            return;
        }
        if self.frame_indices.is_empty() {
            return;
        }

        self.elapsed += dt * self.speed;

        while self.elapsed >= self.frame_duration {
            self.elapsed -= self.frame_duration;
            self.current += 1;

            if self.current >= self.frame_indices.len() {
                if self.looping {
                    self.current = 0;
                } else {
                    // Hold the last frame and stop advancing.
                    self.current = self.frame_indices.len() - 1;
                    self.finished = true;
                    self.elapsed = 0.0;
                    break;
                }
            }
        }
    }

    /// Starts or resumes playback. A finished clip restarts from the top.
    pub fn play(&mut self) {
        if self.finished {
            self.reset();
        }
        self.paused = false;
    }

    /// Pauses playback, keeping the current position.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Rewinds to the first frame and clears the paused/finished flags.
    pub fn reset(&mut self) {
        self.current = 0;
        self.elapsed = 0.0;
        self.finished = false;
        self.paused = false;
    }

    /// Sets the playback speed multiplier (1.0 = normal).
    ///
    /// Negative values clamp to 0 with a warning. Speed 0 freezes playback
    /// without pausing it: [`is_paused`](Self::is_paused) stays `false`.
    pub fn set_speed(&mut self, multiplier: f32) {
        if multiplier < 0.0 {
            log::warn!("Animation '{}': speed cannot be negative, clamping to 0", self.name);
            self.speed = 0.0;
        } else {
            self.speed = multiplier;
        }
    }

    /// Sets whether the clip wraps at the end of its sequence.
    ///
    /// Switching a finished clip back to looping clears the finished flag,
    /// letting it resume from its last frame without an explicit reset.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
        if self.looping && self.finished {
            self.finished = false;
        }
    }

    /// Changes the playback rate. Non-positive values fall back to
    /// 10 fps with a warning. The current position is kept; the new rate
    /// takes effect from here on.
    pub fn set_fps(&mut self, fps: f32) {
        self.frame_duration = Self::duration_from_fps(&self.name, fps);
    }

    /// The atlas index of the current frame, or `None` for a clip with no
    /// frames.
    #[must_use]
    pub fn current_frame(&self) -> Option<usize> {
        self.frame_indices.get(self.current).copied()
    }

    /// Position within the clip's own sequence (not an atlas index).
    #[must_use]
    pub fn current_frame_index(&self) -> usize {
        self.current
    }

    /// True once a non-looping clip has reached and held its last frame.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the clip's frame sequence.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_indices.len()
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Playback rate, derived from the frame duration.
    #[must_use]
    pub fn fps(&self) -> f32 {
        if self.frame_duration > 0.0 {
            1.0 / self.frame_duration
        } else {
            0.0
        }
    }
}
