use std::time::Duration;

/// Tick rate in ticks per second for a snake of the given length
///
/// Never decreases as the snake grows, and stays flat past the cap.
pub fn ticks_per_second(length: usize) -> u32 {
    match length {
        0..=5 => 10,
        6..=50 => 20,
        _ => 30,
    }
}

/// Time between game ticks for a snake of the given length
pub fn tick_interval(length: usize) -> Duration {
    Duration::from_millis(u64::from(1000 / ticks_per_second(length)))
}
