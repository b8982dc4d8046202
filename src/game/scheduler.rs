//! Turn-order ring
//!
//! A fixed circular ordering of player ids with a current index and a
//! direction flag. All operations are O(1).

use crate::core::PlayerId;
use crate::{EngineError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheduler {
    ring: Vec<PlayerId>,
    current: usize,
    clockwise: bool,
}

impl Scheduler {
    /// Build a ring over the given ids, starting at the first. The ring is
    /// fixed for the game's lifetime; an empty set is a setup error.
    pub fn new(ids: &[PlayerId]) -> Result<Self> {
        if ids.is_empty() {
            return Err(EngineError::InvalidSetup(
                "scheduler requires at least one player".to_string(),
            ));
        }
        Ok(Scheduler {
            ring: ids.to_vec(),
            current: 0,
            clockwise: true,
        })
    }

    /// The player whose turn it is. Never mutates.
    pub fn current_player(&self) -> PlayerId {
        self.ring[self.current]
    }

    /// Move one position in the active direction and return the new current
    /// player. This is the only mutator of the index.
    pub fn advance(&mut self) -> PlayerId {
        if self.clockwise {
            self.current = (self.current + 1) % self.ring.len();
        } else {
            self.current = self
                .current
                .checked_sub(1)
                .unwrap_or(self.ring.len() - 1);
        }
        self.ring[self.current]
    }

    /// Flip the direction without moving. The very next `advance` reflects
    /// the new direction from the current position; with two players this
    /// degenerates naturally and is not special-cased.
    pub fn reverse(&mut self) {
        self.clockwise = !self.clockwise;
    }

    /// Skip one seat: a single extra unconditional advance. The subsequent
    /// next-actor query lands on the player after the skipped one.
    pub fn skip(&mut self) {
        self.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: u32) -> Vec<PlayerId> {
        (1..=n).map(PlayerId::new).collect()
    }

    #[test]
    fn test_empty_ring_is_an_error() {
        assert!(matches!(
            Scheduler::new(&[]),
            Err(EngineError::InvalidSetup(_))
        ));
    }

    #[test]
    fn test_advance_cycles_through_ring() {
        let ids = ring(3);
        let mut scheduler = Scheduler::new(&ids).unwrap();
        assert_eq!(scheduler.current_player(), ids[0]);

        assert_eq!(scheduler.advance(), ids[1]);
        assert_eq!(scheduler.advance(), ids[2]);
        assert_eq!(scheduler.advance(), ids[0]);
    }

    #[test]
    fn test_n_advances_return_to_start() {
        for n in 1..=5 {
            let ids = ring(n);
            let mut scheduler = Scheduler::new(&ids).unwrap();
            let start = scheduler.current_player();
            for _ in 0..n {
                let id = scheduler.advance();
                assert!(ids.contains(&id));
            }
            assert_eq!(scheduler.current_player(), start);
        }
    }

    #[test]
    fn test_skip_consumes_one_seat() {
        // Ring [A, B, C] clockwise, active = A: after a skip, the next
        // actor is C, not B.
        let ids = ring(3);
        let mut scheduler = Scheduler::new(&ids).unwrap();

        scheduler.skip();
        assert_eq!(scheduler.advance(), ids[2]);
    }

    #[test]
    fn test_reverse_changes_next_advance() {
        // Ring [A, B, C] clockwise, active = B: reverse then advance yields
        // A, not C.
        let ids = ring(3);
        let mut scheduler = Scheduler::new(&ids).unwrap();
        scheduler.advance(); // active = B

        scheduler.reverse();
        assert_eq!(scheduler.advance(), ids[0]);
    }

    #[test]
    fn test_reverse_does_not_move_index() {
        let ids = ring(4);
        let mut scheduler = Scheduler::new(&ids).unwrap();
        scheduler.advance(); // B

        scheduler.reverse();
        assert_eq!(scheduler.current_player(), ids[1]);
    }

    #[test]
    fn test_double_reverse_restores_direction() {
        let ids = ring(3);
        let mut scheduler = Scheduler::new(&ids).unwrap();
        scheduler.reverse();
        scheduler.reverse();
        assert_eq!(scheduler.advance(), ids[1]);
    }

    #[test]
    fn test_single_player_ring() {
        let ids = ring(1);
        let mut scheduler = Scheduler::new(&ids).unwrap();
        assert_eq!(scheduler.advance(), ids[0]);
        scheduler.skip();
        assert_eq!(scheduler.current_player(), ids[0]);
    }
}
