/// Custom event codes the match understands.
pub mod custom {
    /// Rerack and start a fresh match.
    pub const RESET: u32 = 1;
}

/// Player input, in table coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed: start charging the cue.
    PointerDown { x: f64, y: f64 },
    /// Pointer released: shoot with the charged power.
    PointerUp { x: f64, y: f64 },
    /// Pointer moved: aim the cue toward it.
    PointerMove { x: f64, y: f64 },
    /// A UI button or similar. `kind` is one of the `custom` codes;
    /// `a`, `b`, `c` carry optional data.
    Custom { kind: u32, a: f64, b: f64, c: f64 },
}

impl InputEvent {
    pub fn is_reset(&self) -> bool {
        matches!(self, InputEvent::Custom { kind: custom::RESET, .. })
    }
}

/// Events collected between ticks. The host pushes, the match reads once per
/// frame and the host drains.
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

    /// Take every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Whether a rerack is waiting in the queue.
    pub fn has_reset(&self) -> bool {
        self.events.iter().any(InputEvent::is_reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset() -> InputEvent {
        InputEvent::Custom {
            kind: custom::RESET,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        }
    }

    #[test]
    fn drain_empties_in_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        q.push(InputEvent::PointerDown { x: 3.0, y: 4.0 });
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], InputEvent::PointerDown { x: 3.0, y: 4.0 });
        assert_eq!(q.iter().count(), 0);
    }

    #[test]
    fn spots_a_pending_reset() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerUp { x: 5.0, y: 6.0 });
        assert!(!q.has_reset());
        q.push(InputEvent::Custom {
            kind: 7,
            a: 1.0,
            b: 0.0,
            c: 0.0,
        });
        assert!(!q.has_reset());
        q.push(reset());
        assert!(q.has_reset());
        q.drain();
        assert!(!q.has_reset());
    }
}
