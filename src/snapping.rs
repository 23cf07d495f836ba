//! Edge snapping for the floating window.

/// Window rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug)]
struct SnapCandidate {
    offset: f32,
    distance: f32,
}

/// Find the best snap position for a released window against the monitor
/// edges. Returns (x, y) if snapping should occur, None otherwise.
pub fn find_snap_position(window: Rect, monitor: Rect, threshold: f32) -> Option<(f32, f32)> {
    if threshold <= 0.0 {
        return None; // Snapping disabled
    }

    let mut best_x: Option<SnapCandidate> = None;
    let mut best_y: Option<SnapCandidate> = None;

    // Snap left edge to the left side, right edge to the right side
    check_snap(&mut best_x, window.left(), monitor.left(), threshold);
    check_snap(&mut best_x, window.right(), monitor.right(), threshold);

    // Snap top edge to the top, bottom edge to the bottom
    check_snap(&mut best_y, window.top(), monitor.top(), threshold);
    check_snap(&mut best_y, window.bottom(), monitor.bottom(), threshold);

    let snap_x = best_x.map(|s| window.x + s.offset);
    let snap_y = best_y.map(|s| window.y + s.offset);

    match (snap_x, snap_y) {
        (Some(x), Some(y)) => Some((x, y)),
        (Some(x), None) => Some((x, window.y)),
        (None, Some(y)) => Some((window.x, y)),
        (None, None) => None,
    }
}

fn check_snap(best: &mut Option<SnapCandidate>, edge: f32, target: f32, threshold: f32) {
    let distance = (edge - target).abs();
    if distance <= threshold {
        let candidate = SnapCandidate {
            offset: target - edge,
            distance,
        };

        // Keep this candidate if it's closer than the current best
        if best.as_ref().is_none_or(|b| candidate.distance < b.distance) {
            *best = Some(candidate);
        }
    }
}

/// Keep the window fully inside the monitor area. A window larger than the
/// monitor pins to the top-left corner.
pub fn clamp_to_monitor(window: Rect, monitor: Rect) -> (f32, f32) {
    let max_x = (monitor.right() - window.width).max(monitor.left());
    let max_y = (monitor.bottom() - window.height).max(monitor.top());
    (
        window.x.clamp(monitor.left(), max_x),
        window.y.clamp(monitor.top(), max_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 1920.0,
            height: 1080.0,
        }
    }

    fn window_at(x: f32, y: f32) -> Rect {
        Rect {
            x,
            y,
            width: 88.0,
            height: 88.0,
        }
    }

    #[test]
    fn test_zero_threshold_disables_snapping() {
        assert_eq!(find_snap_position(window_at(2.0, 2.0), monitor(), 0.0), None);
    }

    #[test]
    fn test_far_from_edges_does_not_snap() {
        assert_eq!(
            find_snap_position(window_at(500.0, 500.0), monitor(), 15.0),
            None
        );
    }

    #[test]
    fn test_snaps_to_left_edge() {
        let snapped = find_snap_position(window_at(8.0, 500.0), monitor(), 15.0);
        assert_eq!(snapped, Some((0.0, 500.0)));
    }

    #[test]
    fn test_snaps_to_right_edge() {
        // Right edge at 1910, 10 px from the monitor's right side
        let snapped = find_snap_position(window_at(1822.0, 500.0), monitor(), 15.0);
        assert_eq!(snapped, Some((1832.0, 500.0)));
    }

    #[test]
    fn test_corner_snaps_both_axes() {
        let snapped = find_snap_position(window_at(6.0, 1000.0), monitor(), 15.0);
        assert_eq!(snapped, Some((0.0, 992.0)));
    }

    #[test]
    fn test_keeps_closest_edge() {
        // 300 px wide monitor: left edge 20 away, right edge 192 away
        let small = Rect {
            x: 0.0,
            y: 0.0,
            width: 300.0,
            height: 300.0,
        };
        let window = Rect {
            x: 20.0,
            y: 150.0,
            width: 88.0,
            height: 88.0,
        };
        // Bottom edge (62 away) beats the top edge (150 away) on the y axis
        let snapped = find_snap_position(window, small, 200.0);
        assert_eq!(snapped, Some((0.0, 212.0)));
    }

    #[test]
    fn test_clamp_keeps_window_on_screen() {
        assert_eq!(
            clamp_to_monitor(window_at(-40.0, 2000.0), monitor()),
            (0.0, 992.0)
        );
        assert_eq!(
            clamp_to_monitor(window_at(500.0, 500.0), monitor()),
            (500.0, 500.0)
        );
    }

    #[test]
    fn test_clamp_oversized_window_pins_top_left() {
        let big = Rect {
            x: 100.0,
            y: 100.0,
            width: 4000.0,
            height: 4000.0,
        };
        assert_eq!(clamp_to_monitor(big, monitor()), (0.0, 0.0));
    }
}
