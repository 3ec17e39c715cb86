/// A single keyframe: normalized time and value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Normalized time in [0, 1]
    pub time: f32,
    pub value: f32,
}

/// Ordered keyframes for one animated attribute.
///
/// Always holds at least two keyframes, starts at time 0, ends at time 1,
/// and never goes back in time.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTrack {
    keyframes: Vec<Keyframe>,
}

impl KeyframeTrack {
    /// Build a track from parallel lists of key times and values.
    ///
    /// When the lists disagree in length, or the times do not start at 0,
    /// end at 1 and stay ordered, the values are spaced evenly over [0, 1]
    /// instead. Fewer than two values are padded by repeating the last one
    /// (or zero for an empty list).
    pub fn new(key_times: &[f32], values: &[f32]) -> Self {
        let mut values = values.to_vec();
        if values.is_empty() {
            values.push(0.0);
        }
        if values.len() == 1 {
            values.push(values[0]);
        }

        if key_times.len() == values.len() && times_are_valid(key_times) {
            let keyframes = key_times
                .iter()
                .zip(values.iter())
                .map(|(&time, &value)| Keyframe { time, value })
                .collect();
            return Self { keyframes };
        }

        if key_times.len() != values.len() {
            log::debug!(
                "Keyframe count mismatch ({} times, {} values), spacing evenly",
                key_times.len(),
                values.len()
            );
        }
        Self::evenly_spaced(&values)
    }

    /// Build a track with values spaced evenly over [0, 1]
    pub fn evenly_spaced(values: &[f32]) -> Self {
        match values {
            [] => Self::new(&[], &[]),
            [only] => Self::new(&[], &[*only]),
            _ => {
                let last = (values.len() - 1) as f32;
                let keyframes = values
                    .iter()
                    .enumerate()
                    .map(|(i, &value)| Keyframe {
                        time: i as f32 / last,
                        value,
                    })
                    .collect();
                Self { keyframes }
            }
        }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn key_times(&self) -> Vec<f32> {
        self.keyframes.iter().map(|k| k.time).collect()
    }

    pub fn values(&self) -> Vec<f32> {
        self.keyframes.iter().map(|k| k.value).collect()
    }

    /// Sample the track at normalized time `t`, interpolating linearly
    /// between the surrounding keyframes. `t` is clamped to [0, 1].
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        // Last segment whose start is at or before t
        let index = self
            .keyframes
            .windows(2)
            .position(|pair| t <= pair[1].time)
            .unwrap_or(self.keyframes.len() - 2);
        let start = self.keyframes[index];
        let end = self.keyframes[index + 1];

        let span = end.time - start.time;
        if span <= f32::EPSILON {
            return end.value;
        }
        let local = (t - start.time) / span;
        start.value + (end.value - start.value) * local
    }
}

fn times_are_valid(times: &[f32]) -> bool {
    times.len() >= 2
        && times.first() == Some(&0.0)
        && times.last() == Some(&1.0)
        && times.windows(2).all(|pair| pair[0] <= pair[1])
}
