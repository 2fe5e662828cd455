// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `current` toward `target` by at most `step`.
///
/// Snaps to `target` once the remaining distance is within one step, so the
/// result never overshoots. A negative step is treated as its magnitude.
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    let step = step.abs();
    let distance = target - current;

    if distance.abs() <= step {
        target
    } else {
        current + step.copysign(distance)
    }
}
