// Copyright 2026 The sandbox-engine Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Frame timing
//!
//! [`FrameClock`] measures wall-clock time between frames and keeps the
//! derived quantities a frame loop wants: delta seconds, accumulated
//! runtime, frame count, and a once-per-second FPS reading. It is an
//! explicit value owned by the loop, not process-global state.

use std::time::Instant;

/// Per-frame timing context
///
/// Call [`tick`](FrameClock::tick) exactly once at the top of each
/// frame; everything else is a cheap accessor of the state sampled
/// there. The time scale only affects
/// [`scaled_delta_time`](FrameClock::scaled_delta_time), letting
/// slow-motion and pause effects leave real-time measurements intact.
///
/// # Examples
///
/// ```
/// use sandbox_engine::time::FrameClock;
///
/// let mut clock = FrameClock::new();
/// let dt = clock.tick();
/// assert!(dt >= 0.0);
/// assert_eq!(clock.frame_count(), 1);
/// ```
pub struct FrameClock {
    last_tick: Instant,
    delta: f32,
    total: f32,
    frame_count: u64,
    time_scale: f32,
    fps: f32,
    fps_window: f32,
    fps_frames: u32,
}

impl FrameClock {
    /// Create a clock starting at the current instant
    pub fn new() -> Self {
        FrameClock {
            last_tick: Instant::now(),
            delta: 0.0,
            total: 0.0,
            frame_count: 0,
            time_scale: 1.0,
            fps: 0.0,
            fps_window: 0.0,
            fps_frames: 0,
        }
    }

    /// Advance to the next frame, returning the delta in seconds
    ///
    /// Also feeds the FPS window, which refreshes the
    /// [`fps`](FrameClock::fps) reading once a full second of wall
    /// time has accumulated.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.total += self.delta;
        self.frame_count += 1;

        self.fps_window += self.delta;
        self.fps_frames += 1;
        if self.fps_window >= 1.0 {
            self.fps = self.fps_frames as f32 / self.fps_window;
            self.fps_window = 0.0;
            self.fps_frames = 0;
        }

        self.delta
    }

    /// Seconds elapsed between the two most recent ticks
    pub fn delta_time(&self) -> f32 {
        self.delta
    }

    /// Delta time multiplied by the current time scale
    pub fn scaled_delta_time(&self) -> f32 {
        self.delta * self.time_scale
    }

    /// Total wall-clock seconds accumulated across all ticks
    pub fn total_time(&self) -> f32 {
        self.total
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second, averaged over the last full second
    ///
    /// Reads 0 until the first second of runtime has passed.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Get the time scale applied to [`scaled_delta_time`](FrameClock::scaled_delta_time)
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the time scale: 1 is real time, 0 pauses scaled time
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
