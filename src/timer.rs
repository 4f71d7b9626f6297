use colored::Colorize;
use time::PreciseTime;

pub struct Timer {
    start_time: PreciseTime,
    last_lap_time: PreciseTime,
}

impl Timer {
    pub fn new() -> Timer {
        let now = PreciseTime::now();
        Timer { start_time: now, last_lap_time: now }
    }

    /// returns (seconds since the last lap, seconds since creation) and starts a new lap
    pub fn lap(&mut self) -> (f64, f64) {
        let now = PreciseTime::now();
        let lap = self.last_lap_time.to(now);
        let total = self.start_time.to(now);
        self.last_lap_time = now;
        (lap.num_milliseconds() as f64 * 1e-3, total.num_milliseconds() as f64 * 1e-3)
    }

    pub fn print(&mut self, stage: &str) {
        let (lap, total) = self.lap();
        println!("{}", format!("{}: {:.3} sec; since start: {:.3} sec", stage, lap, total).bold());
    }
}

#[cfg(test)]
mod tests {
    use super::Timer;

    #[test]
    fn test_lap_is_monotone() {
        let mut timer = Timer::new();
        let (first_lap, first_total) = timer.lap();
        let (second_lap, second_total) = timer.lap();
        assert!(first_lap >= 0. && second_lap >= 0.);
        assert!(second_total >= first_total);
    }
}
