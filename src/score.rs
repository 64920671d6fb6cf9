//! Score, level and gravity progression

use std::time::Duration;

/// Points per cleared row, before the level multiplier
const POINTS_PER_LINE: u64 = 100;
/// Lines needed per level
const LINES_PER_LEVEL: u32 = 10;

/// Gravity timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityCurve {
    /// Interval at level 1
    pub base: Duration,
    /// Floor the interval never drops below
    pub min: Duration,
    /// Reduction per level
    pub step: Duration,
}

impl Default for GravityCurve {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(500),
            min: Duration::from_millis(100),
            step: Duration::from_millis(50),
        }
    }
}

impl GravityCurve {
    /// Gravity interval for a level: max(min, base - (level - 1) * step)
    pub fn interval(&self, level: u32) -> Duration {
        let reduction = self.step.saturating_mul(level.saturating_sub(1));
        self.base.saturating_sub(reduction).max(self.min)
    }
}

/// Score tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Current level, starts at 1
    pub level: u32,
    /// Total lines cleared
    pub lines: u32,
    curve: GravityCurve,
}

impl Default for Score {
    fn default() -> Self {
        Self::new(GravityCurve::default())
    }
}

impl Score {
    pub fn new(curve: GravityCurve) -> Self {
        Self {
            points: 0,
            level: 1,
            lines: 0,
            curve,
        }
    }

    /// Apply a collapse of `rows` cleared rows.
    /// Points use the level in effect before the clear. Returns points awarded.
    pub fn add_clear(&mut self, rows: u32) -> u64 {
        let awarded = rows as u64 * POINTS_PER_LINE * self.level as u64;
        self.points += awarded;
        self.lines += rows;
        self.level = self.lines / LINES_PER_LEVEL + 1;
        awarded
    }

    /// Time between gravity ticks at the current level
    pub fn gravity_interval(&self) -> Duration {
        self.curve.interval(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_clear() {
        let mut score = Score::default();
        assert_eq!(score.add_clear(1), 100);
        assert_eq!(score.points, 100);
        assert_eq!(score.lines, 1);
    }

    #[test]
    fn test_double_at_level_three() {
        let mut score = Score::default();
        score.lines = 20;
        score.level = 3;
        let before = score.points;
        score.add_clear(2);
        assert_eq!(score.points - before, 600);
    }

    #[test]
    fn test_multi_line_is_linear() {
        let mut score = Score::default();
        assert_eq!(score.add_clear(4), 400);
    }

    #[test]
    fn test_level_boundaries() {
        let mut score = Score::default();
        score.add_clear(9);
        assert_eq!(score.level, 1);
        score.add_clear(1);
        assert_eq!(score.level, 2);
        assert_eq!(score.lines, 10);
    }

    #[test]
    fn test_level_uses_pre_clear_multiplier() {
        let mut score = Score::default();
        score.add_clear(9);
        // Crosses into level 2 but is scored at level 1
        assert_eq!(score.add_clear(2), 200);
        assert_eq!(score.level, 2);
    }

    #[test]
    fn test_gravity_interval() {
        let curve = GravityCurve::default();
        assert_eq!(curve.interval(1), Duration::from_millis(500));
        assert_eq!(curve.interval(2), Duration::from_millis(450));
        assert_eq!(curve.interval(9), Duration::from_millis(100));
        assert_eq!(curve.interval(10), Duration::from_millis(100));
        assert_eq!(curve.interval(500), Duration::from_millis(100));
    }

    #[test]
    fn test_gravity_follows_level() {
        let mut score = Score::default();
        assert_eq!(score.gravity_interval(), Duration::from_millis(500));
        score.add_clear(30);
        assert_eq!(score.level, 4);
        assert_eq!(score.gravity_interval(), Duration::from_millis(350));
    }
}
