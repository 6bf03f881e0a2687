//! Planning many routes at once.

use mazechase_core::{GridMap, Point};
use rayon::prelude::*;

use crate::astar::PathFinder;
use crate::error::Result;
use crate::limits::{SearchLimits, SearchMode};
use crate::path::Path;

/// One agent's route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRequest {
    pub start: Point,
    pub goal: Point,
}

impl PathRequest {
    pub fn new(start: impl Into<Point>, goal: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Plan every request against the same read-only grid, in parallel.
///
/// Each rayon worker owns its own [`PathFinder`]; results come back in
/// request order and one failing request does not affect the others.
pub fn plan_all(
    grid: &GridMap,
    requests: &[PathRequest],
    mode: SearchMode,
    limits: SearchLimits,
) -> Vec<Result<Path>> {
    log::debug!("planning {} routes ({mode:?})", requests.len());
    requests
        .par_iter()
        .map_init(
            || PathFinder::new().with_mode(mode).with_limits(limits),
            |finder, req| finder.find_path(grid, req.start, req.goal),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::find_path;
    use crate::error::PathError;
    use mazechase_gen::{generate, random_floor};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parallel_results_match_sequential() {
        let grid = generate(45, 31, 99).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let requests: Vec<PathRequest> = (0..32)
            .map(|_| {
                PathRequest::new(
                    random_floor(&grid, &mut rng).unwrap(),
                    random_floor(&grid, &mut rng).unwrap(),
                )
            })
            .collect();

        let got = plan_all(&grid, &requests, SearchMode::Relaxed, SearchLimits::unbounded());
        assert_eq!(got.len(), requests.len());
        for (req, res) in requests.iter().zip(&got) {
            let expected = find_path(&grid, req.start, req.goal).unwrap();
            assert_eq!(res.as_ref().unwrap(), &expected);
        }
    }

    #[test]
    fn failures_stay_in_place() {
        let grid = generate(11, 11, 1).unwrap();
        let requests = [
            PathRequest::new((1, 1), (9, 9)),
            PathRequest::new((0, 0), (9, 9)),
            PathRequest::new((1, 1), (1, 1)),
        ];
        let got = plan_all(&grid, &requests, SearchMode::Strict, SearchLimits::unbounded());
        assert!(got[0].is_ok());
        assert!(matches!(got[1], Err(PathError::InvalidCoordinate { .. })));
        assert_eq!(got[2].as_ref().unwrap().cost(), 0);
    }

    #[test]
    fn limits_apply_to_every_worker() {
        let grid = generate(51, 51, 8).unwrap();
        let requests = vec![PathRequest::new((1, 1), (49, 49)); 4];
        let got = plan_all(
            &grid,
            &requests,
            SearchMode::Relaxed,
            SearchLimits::with_max_expansions(5),
        );
        assert!(
            got.iter()
                .all(|r| *r == Err(PathError::BudgetExhausted { limit: 5 }))
        );
    }
}
