//! Pointer-driven reordering of the displayed list.
//!
//! The displayed order is an explicit id list. A drag moves one id within it
//! based on where the pointer sits relative to the other items' midpoints.

use crate::task::TaskId;

/// Vertical extent of a rendered item, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub id: TaskId,
    pub top: f64,
    pub height: f64,
}

impl ItemBounds {
    pub fn new(id: TaskId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// Pointer position relative to the item's midpoint; negative above it.
    fn offset(&self, pointer_y: f64) -> f64 {
        pointer_y - self.top - self.height / 2.0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    /// Drag began; the marker is applied after the drag image is captured.
    Pending(TaskId),
    Dragging(TaskId),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DragReorder {
    phase: Phase,
}

impl DragReorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, id: TaskId) {
        self.phase = Phase::Pending(id);
    }

    /// Applies the dragging marker. Ignored if the drag already ended or a
    /// different item is being dragged.
    pub fn mark(&mut self, id: TaskId) -> bool {
        if self.phase == Phase::Pending(id) {
            self.phase = Phase::Dragging(id);
            true
        } else {
            false
        }
    }

    pub fn end(&mut self) {
        self.phase = Phase::Idle;
    }

    /// The item carrying the dragging marker, if any.
    pub fn dragging(&self) -> Option<TaskId> {
        match self.phase {
            Phase::Dragging(id) => Some(id),
            _ => None,
        }
    }

    /// Computes the displayed order after the pointer moved to `pointer_y`.
    ///
    /// Returns `None` when nothing is being dragged or the order is unchanged.
    pub fn over(
        &self,
        order: &[TaskId],
        pointer_y: f64,
        bounds: &[ItemBounds],
    ) -> Option<Vec<TaskId>> {
        let dragging = self.dragging()?;
        if !order.contains(&dragging) {
            return None;
        }

        let mut reordered: Vec<TaskId> = order
            .iter()
            .copied()
            .filter(|id| *id != dragging)
            .collect();
        match drop_target(pointer_y, bounds, dragging) {
            Some(before) => {
                let index = reordered
                    .iter()
                    .position(|id| *id == before)
                    .unwrap_or(reordered.len());
                reordered.insert(index, dragging);
            }
            None => reordered.push(dragging),
        }

        (reordered != order).then_some(reordered)
    }
}

/// The item the dragged one should be inserted before: among the other items,
/// the one whose midpoint is closest below the pointer. `None` means append.
pub fn drop_target(pointer_y: f64, bounds: &[ItemBounds], dragging: TaskId) -> Option<TaskId> {
    bounds
        .iter()
        .filter(|item| item.id != dragging)
        .map(|item| (item.offset(pointer_y), item.id))
        .filter(|(offset, _)| *offset < 0.0)
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Three 40px rows stacked from y = 0.
    fn rows(ids: &[TaskId]) -> Vec<ItemBounds> {
        ids.iter()
            .enumerate()
            .map(|(index, id)| ItemBounds::new(*id, index as f64 * 40.0, 40.0))
            .collect()
    }

    fn dragging(id: TaskId) -> DragReorder {
        let mut drag = DragReorder::new();
        drag.start(id);
        drag.mark(id);
        drag
    }

    #[test]
    fn picks_nearest_item_below_pointer() {
        let bounds = rows(&[1, 2, 3]);

        assert_eq!(drop_target(5.0, &bounds, 9), Some(1));
        assert_eq!(drop_target(30.0, &bounds, 9), Some(2));
        assert_eq!(drop_target(70.0, &bounds, 9), Some(3));
        assert_eq!(drop_target(110.0, &bounds, 9), None);
    }

    #[test]
    fn skips_dragged_item_when_picking_target() {
        let bounds = rows(&[1, 2, 3]);

        assert_eq!(drop_target(30.0, &bounds, 2), Some(3));
    }

    #[test]
    fn can_move_item_up() {
        let order = [1, 2, 3];
        let drag = dragging(3);

        let reordered = drag.over(&order, 10.0, &rows(&order));

        assert_eq!(reordered, Some(vec![3, 1, 2]));
    }

    #[test]
    fn can_move_item_to_end() {
        let order = [1, 2, 3];
        let drag = dragging(1);

        let reordered = drag.over(&order, 200.0, &rows(&order));

        assert_eq!(reordered, Some(vec![2, 3, 1]));
    }

    #[test]
    fn unchanged_order_yields_nothing() {
        let order = [1, 2, 3];
        let drag = dragging(2);

        assert_eq!(drag.over(&order, 50.0, &rows(&order)), None);
    }

    #[test]
    fn cannot_reorder_before_marker_is_applied() {
        let order = [1, 2, 3];
        let mut drag = DragReorder::new();
        drag.start(3);

        assert_eq!(drag.over(&order, 10.0, &rows(&order)), None);
    }

    #[test]
    fn marker_is_ignored_after_drag_ended() {
        let mut drag = DragReorder::new();
        drag.start(1);
        drag.end();

        assert!(!drag.mark(1));
        assert_eq!(drag.dragging(), None);
    }
}
