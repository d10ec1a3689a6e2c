//! Motion event queue.
//!
//! Hosts that batch input (test harnesses, platform adapters that receive
//! several events per frame) enqueue events together with their touch
//! target and drain them in arrival order on the UI thread.

use super::types::MotionEvent;
use smallvec::SmallVec;

/// Most frames carry a handful of events; larger bursts spill to the heap.
const INLINE_EVENTS: usize = 8;

pub struct MotionQueue<T> {
    queue: SmallVec<[(T, MotionEvent); INLINE_EVENTS]>,
}

impl<T> Default for MotionQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MotionQueue<T> {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, target: T, event: MotionEvent) {
        self.queue.push((target, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(T, MotionEvent),
    {
        for (target, event) in self.queue.drain(..) {
            handler(target, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MotionAction;
    use shade_graphics::Point;

    #[test]
    fn drains_in_arrival_order() {
        let mut queue = MotionQueue::new();
        for (index, action) in [MotionAction::Down, MotionAction::Move, MotionAction::Up]
            .into_iter()
            .enumerate()
        {
            queue.push(index, MotionEvent::at_raw(action, Point::ZERO, index as i64));
        }
        assert_eq!(queue.len(), 3);

        let mut seen = Vec::new();
        queue.drain(|target, event| seen.push((target, event.action)));

        assert_eq!(
            seen,
            vec![
                (0, MotionAction::Down),
                (1, MotionAction::Move),
                (2, MotionAction::Up)
            ]
        );
        assert!(queue.is_empty());
    }
}
