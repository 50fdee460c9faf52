//! Pointer input, resolved to world space by the host
//!
//! The host pushes events as they arrive; the game drains them once per
//! tick so that edges are applied before that tick's gate check.

use glam::Vec2;

/// Input event types the round understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to a world position
    PointerMove(Vec2),
    /// Press began at a world position
    PressStarted(Vec2),
    /// Press ended (released or cancelled) at a world position
    PressReleased(Vec2),
}

/// Input for a single tick, applied in order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Events waiting for the next tick
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain everything queued into one tick's input
    pub fn take(&mut self) -> TickInput {
        TickInput {
            events: std::mem::take(&mut self.events),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_take_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PressStarted(Vec2::ZERO));
        q.push(InputEvent::PointerMove(Vec2::X));
        q.push(InputEvent::PressReleased(Vec2::X));
        assert_eq!(q.len(), 3);

        let input = q.take();
        assert!(q.is_empty());
        assert_eq!(
            input.events,
            vec![
                InputEvent::PressStarted(Vec2::ZERO),
                InputEvent::PointerMove(Vec2::X),
                InputEvent::PressReleased(Vec2::X),
            ]
        );
    }

    #[test]
    fn take_on_empty_queue() {
        let mut q = InputQueue::new();
        assert!(q.take().is_empty());
    }
}
