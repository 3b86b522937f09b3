use std::time::Duration;

/// Points a level is worth before any penalty, per level number.
const POINTS_PER_LEVEL: u64 = 1000;

/// Spare-cell removals allowed per round.
pub const MAX_SPARE_REMOVALS: u8 = 2;

/// Points awarded for one finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub remaining_points: u64,
    pub bonus_points: u64,
    pub total_puzzle_points: u64,
    pub total_score: u64,
}

/// Share of spare cells a removal stage clears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpareRemoval {
    pub stage: u8,
    pub share: f64,
    pub remaining_points: u64,
}

/// Tracks one player's score across rounds.
///
/// Checking a walk costs a quarter of the remaining points, each spare-cell
/// removal stage halves them, and finishing adds a time bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    total_score: u64,
    level: u8,
    max_level_points: u64,
    remaining_points: u64,
    spare_removals: u8,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    pub fn remaining_points(&self) -> u64 {
        self.remaining_points
    }

    pub fn max_level_points(&self) -> u64 {
        self.max_level_points
    }

    pub fn spare_removals(&self) -> u8 {
        self.spare_removals
    }

    /// Starts scoring a round at `level`. The running total is kept.
    pub fn start_level(&mut self, level: u8) {
        self.level = level;
        self.max_level_points = POINTS_PER_LEVEL * u64::from(level);
        self.remaining_points = self.max_level_points;
        self.spare_removals = 0;
    }

    /// Applies the cost of checking a walk and returns the points left.
    pub fn charge_check(&mut self) -> u64 {
        self.remaining_points = (self.remaining_points * 3).div_ceil(4);
        self.remaining_points
    }

    /// Applies the cost of a spare-cell removal. The first stage clears half
    /// the spare cells, the second the rest; `None` once both are used.
    pub fn charge_spare_removal(&mut self) -> Option<SpareRemoval> {
        if self.spare_removals >= MAX_SPARE_REMOVALS {
            return None;
        }
        self.remaining_points = self.remaining_points.div_ceil(2);
        self.spare_removals += 1;
        Some(SpareRemoval {
            stage: self.spare_removals,
            share: if self.spare_removals == 1 { 0.5 } else { 1.0 },
            remaining_points: self.remaining_points,
        })
    }

    /// Time bonus for a round solved after `elapsed`.
    ///
    /// Seconds are rounded up to a multiple of ten and the bonus is
    /// `ceil(1000 × level × 20 / seconds)`; an instant solve earns twice the
    /// level's points.
    pub fn bonus_points(&self, elapsed: Duration) -> u64 {
        let rounded_seconds = elapsed.as_secs_f64() / 10.0;
        // Whole tens of seconds, never negative.
        let rounded_seconds = rounded_seconds.ceil() as u64 * 10;
        if rounded_seconds == 0 {
            return self.max_level_points * 2;
        }
        (POINTS_PER_LEVEL * u64::from(self.level) * 20).div_ceil(rounded_seconds)
    }

    /// Closes the round and adds its points to the total.
    pub fn complete(&mut self, elapsed: Duration) -> PointsBreakdown {
        let bonus_points = self.bonus_points(elapsed);
        let total_puzzle_points = self.remaining_points + bonus_points;
        self.total_score += total_puzzle_points;
        PointsBreakdown {
            remaining_points: self.remaining_points,
            bonus_points,
            total_puzzle_points,
            total_score: self.total_score,
        }
    }

    /// Clears the round state, keeping the running total.
    pub fn reset_round(&mut self) {
        self.level = 0;
        self.max_level_points = 0;
        self.remaining_points = 0;
        self.spare_removals = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalties_round_up() {
        let mut card = Scorecard::new();
        card.start_level(3);
        assert_eq!(card.remaining_points(), 3000);
        assert_eq!(card.charge_check(), 2250);
        assert_eq!(card.charge_check(), 1688);

        let first = card.charge_spare_removal().unwrap();
        assert_eq!(first.stage, 1);
        assert_eq!(first.share, 0.5);
        assert_eq!(first.remaining_points, 844);
        let second = card.charge_spare_removal().unwrap();
        assert_eq!(second.share, 1.0);
        assert_eq!(second.remaining_points, 422);
        assert_eq!(card.charge_spare_removal(), None);
    }

    #[test]
    fn time_bonus() {
        let mut card = Scorecard::new();
        card.start_level(2);
        assert_eq!(card.bonus_points(Duration::ZERO), 4000);
        // 35 s rounds to 40 s: 2000 × 20 / 40.
        assert_eq!(card.bonus_points(Duration::from_secs(35)), 1000);
        // 61 s rounds to 70 s: ceil(40000 / 70).
        assert_eq!(card.bonus_points(Duration::from_secs(61)), 572);
    }

    #[test]
    fn totals_accumulate_across_rounds() {
        let mut card = Scorecard::new();
        card.start_level(1);
        let first = card.complete(Duration::from_secs(20));
        assert_eq!(first.bonus_points, 1000);
        assert_eq!(first.total_puzzle_points, 2000);

        card.reset_round();
        card.start_level(1);
        card.charge_check();
        let second = card.complete(Duration::from_secs(200));
        assert_eq!(second.remaining_points, 750);
        assert_eq!(second.total_score, 2000 + 750 + 100);
    }
}
