//! Timing and stepping system.

use std;
use std::collections::VecDeque;
use std::time::Duration;

use crate::utils::time::Timestamp;

use super::settings::EngineParams;

pub struct TimeSystem {
    min_fps: u32,
    max_fps: u32,
    smoothing_step: usize,
    fixed_timestep: Option<Duration>,
    timestep: Duration,
    previous_timesteps: VecDeque<Duration>,
    last_frame_timepoint: Timestamp,
    frames: u64,
}

impl TimeSystem {
    pub fn new(setup: &EngineParams) -> Self {
        TimeSystem {
            min_fps: setup.min_fps,
            max_fps: setup.max_fps,
            smoothing_step: setup.time_smooth_step as usize,
            fixed_timestep: setup.fixed_timestep_ms.map(Duration::from_millis),
            previous_timesteps: VecDeque::new(),
            timestep: Duration::new(0, 0),
            last_frame_timepoint: Timestamp::now(),
            frames: 0,
        }
    }

    /// Starts a new frame, and measures the duration of the last one.
    pub fn advance(&mut self) {
        self.frames += 1;

        if let Some(step) = self.fixed_timestep {
            self.timestep = step;
            self.last_frame_timepoint = Timestamp::now();
            return;
        }

        // Perform waiting loop if maximum fps set, cooperatively gives up
        // a timeslice to the OS scheduler.
        if self.max_fps > 0 {
            let td = Duration::from_millis(u64::from(1000 / self.max_fps));
            while self.last_frame_timepoint.elapsed() <= td {
                if (self.last_frame_timepoint.elapsed() + Duration::from_millis(2)) < td {
                    std::thread::sleep(Duration::from_millis(1));
                } else {
                    std::thread::yield_now();
                }
            }
        }

        let mut elapsed = self.last_frame_timepoint.elapsed();
        self.last_frame_timepoint = Timestamp::now();

        // If fps lower than minimum, simply clamp it.
        if self.min_fps > 0 {
            elapsed = std::cmp::min(
                elapsed,
                Duration::from_millis(u64::from(1000 / self.min_fps)),
            );
        }

        // Perform timestep smoothing.
        if self.smoothing_step > 0 {
            self.previous_timesteps.push_front(elapsed);
            self.previous_timesteps.truncate(self.smoothing_step);

            let sum: Duration = self.previous_timesteps.iter().sum();
            self.timestep = sum / self.previous_timesteps.len() as u32;
        } else {
            self.timestep = elapsed;
        }
    }

    /// Set minimum frames per second. If fps goes lower than this, time will
    /// appear to slow.
    #[inline]
    pub fn set_min_fps(&mut self, fps: u32) {
        self.min_fps = fps;
    }

    /// Set maximum frames per second. The Time will sleep if fps is higher
    /// than this for less resource(e.g. power) consumptions.
    #[inline]
    pub fn set_max_fps(&mut self, fps: u32) {
        self.max_fps = fps;
    }

    /// Set how many frames to average for timestep smoothing.
    #[inline]
    pub fn set_time_smoothing_step(&mut self, step: u32) {
        self.smoothing_step = step as usize;
    }

    /// Replaces the wall clock with a constant step, or restores it with `None`.
    #[inline]
    pub fn set_fixed_timestep(&mut self, step: Option<Duration>) {
        self.fixed_timestep = step;
    }

    /// Gets current fps.
    #[inline]
    pub fn fps(&self) -> u32 {
        let secs = self.delta_seconds();
        if secs <= std::f32::EPSILON {
            0
        } else {
            (1.0 / secs).round() as u32
        }
    }

    /// Gets the duration duraing last frame.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.timestep
    }

    /// Gets the duration during last frame in seconds.
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.timestep.as_secs() as f32 + self.timestep.subsec_nanos() as f32 * 1e-9
    }

    /// Gets the number of frames started so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
