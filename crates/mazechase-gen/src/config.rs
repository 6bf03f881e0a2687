//! Tunable parameters for [`MazeGen`](crate::MazeGen).

/// Probability used by [`MazeConfig::default`] for opening a dead end.
pub const DEFAULT_BRAID_PROBABILITY: f64 = 0.35;

/// Maze generation settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Chance, in `[0, 1]`, that a dead end gets an extra passage during
    /// braiding. `0.0` leaves a perfect maze.
    pub braid_probability: f64,
    /// Try the four lattice directions in random order when braiding a dead
    /// end. When `false` they are tried up, down, left, right.
    pub shuffle_braid_directions: bool,
    /// Number of collectibles scattered on floor cells after carving.
    pub collectibles: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            braid_probability: DEFAULT_BRAID_PROBABILITY,
            shuffle_braid_directions: true,
            collectibles: 0,
        }
    }
}

impl MazeConfig {
    /// A config that produces perfect (loop-free) mazes.
    pub fn perfect() -> Self {
        Self {
            braid_probability: 0.0,
            ..Self::default()
        }
    }

    /// Set the braid probability, clamped into `[0, 1]`. NaN becomes `0`.
    pub fn with_braid_probability(mut self, p: f64) -> Self {
        self.braid_probability = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self
    }

    /// Choose whether braiding tries the lattice directions in random order.
    pub fn with_shuffled_braiding(mut self, shuffle: bool) -> Self {
        self.shuffle_braid_directions = shuffle;
        self
    }

    /// Set how many collectibles are scattered after braiding.
    pub fn with_collectibles(mut self, n: usize) -> Self {
        self.collectibles = n;
        self
    }

    /// The braid probability as stored, clamped for use with the RNG.
    pub(crate) fn braid_chance(&self) -> f64 {
        if self.braid_probability.is_nan() {
            0.0
        } else {
            self.braid_probability.clamp(0.0, 1.0)
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = MazeConfig::default().with_collectibles(5).with_shuffled_braiding(false);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
