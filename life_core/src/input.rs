// input.rs - Pointer events and drag de-duplication

use std::collections::HashSet;

/// Pointer activity over the grid, already mapped to cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press { x: usize, y: usize },
    Drag { x: usize, y: usize },
    Release,
}

/// Tracks the cells touched by the current press-and-drag gesture so that
/// each cell toggles at most once per gesture.
#[derive(Debug, Default)]
pub struct DragGesture {
    visited: HashSet<(usize, usize)>,
    active: bool,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the cell to toggle for this event, if any.
    pub fn accept(&mut self, event: PointerEvent) -> Option<(usize, usize)> {
        match event {
            PointerEvent::Press { x, y } => {
                self.visited.clear();
                self.visited.insert((x, y));
                self.active = true;
                Some((x, y))
            }
            PointerEvent::Drag { x, y } => {
                (self.active && self.visited.insert((x, y))).then_some((x, y))
            }
            PointerEvent::Release => {
                self.visited.clear();
                self.active = false;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_visits_each_cell_once() {
        let mut gesture = DragGesture::new();
        assert_eq!(gesture.accept(PointerEvent::Press { x: 1, y: 1 }), Some((1, 1)));
        assert_eq!(gesture.accept(PointerEvent::Drag { x: 1, y: 1 }), None);
        assert_eq!(gesture.accept(PointerEvent::Drag { x: 2, y: 1 }), Some((2, 1)));
        assert_eq!(gesture.accept(PointerEvent::Drag { x: 1, y: 1 }), None);
        assert_eq!(gesture.accept(PointerEvent::Drag { x: 2, y: 1 }), None);
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut gesture = DragGesture::new();
        assert_eq!(gesture.accept(PointerEvent::Drag { x: 0, y: 0 }), None);
        gesture.accept(PointerEvent::Press { x: 0, y: 0 });
        gesture.accept(PointerEvent::Release);
        assert_eq!(gesture.accept(PointerEvent::Drag { x: 3, y: 3 }), None);
        assert!(!gesture.is_active());
    }

    #[test]
    fn new_press_starts_a_fresh_gesture() {
        let mut gesture = DragGesture::new();
        gesture.accept(PointerEvent::Press { x: 0, y: 0 });
        gesture.accept(PointerEvent::Drag { x: 1, y: 0 });
        gesture.accept(PointerEvent::Release);
        assert_eq!(gesture.accept(PointerEvent::Press { x: 1, y: 0 }), Some((1, 0)));
        assert_eq!(gesture.accept(PointerEvent::Drag { x: 0, y: 0 }), Some((0, 0)));
    }
}
