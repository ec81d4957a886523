use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::ball::Ball;

/// Edge length of a trail mark in pixels.
pub const TRAIL_SIZE: f64 = 40.0;
/// How long a trail mark stays on screen.
pub const TRAIL_LIFETIME_MS: f64 = 1000.0;

/// Identifier the display uses to find a mark again when it expires.
pub type TrailId = u64;

/// A short-lived square left behind at the ball's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailMark {
    pub id: TrailId,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Palette index snapshotted from the ball at creation.
    pub gradient: usize,
    pub expires_at: f64,
}

/// Tracks live trail marks so the display can remove each one after its
/// lifetime. Marks share one lifetime, so expiry order equals spawn order.
#[derive(Debug)]
pub struct TrailLedger {
    live: VecDeque<TrailMark>,
    next_id: TrailId,
    size: f64,
    lifetime_ms: f64,
}

impl TrailLedger {
    pub fn new(size: f64, lifetime_ms: f64) -> Self {
        Self {
            live: VecDeque::new(),
            next_id: 0,
            size,
            lifetime_ms,
        }
    }

    /// Create a mark centered on `ball` carrying the given palette index.
    pub fn spawn(&mut self, ball: &Ball, gradient: usize, now_ms: f64) -> TrailMark {
        let (cx, cy) = ball.center();
        let mark = TrailMark {
            id: self.next_id,
            x: cx - self.size / 2.0,
            y: cy - self.size / 2.0,
            size: self.size,
            gradient,
            expires_at: now_ms + self.lifetime_ms,
        };
        self.next_id += 1;
        self.live.push_back(mark);
        mark
    }

    /// Drop every mark whose deadline has passed and return their ids, oldest
    /// first.
    pub fn expire(&mut self, now_ms: f64) -> Vec<TrailId> {
        let mut expired = Vec::new();
        while let Some(front) = self.live.front() {
            if front.expires_at > now_ms {
                break;
            }
            expired.push(front.id);
            self.live.pop_front();
        }
        expired
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl Default for TrailLedger {
    fn default() -> Self {
        Self::new(TRAIL_SIZE, TRAIL_LIFETIME_MS)
    }
}
