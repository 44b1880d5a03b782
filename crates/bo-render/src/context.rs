use bo_contour::BorderPoint;

/// Per-call scratch state: the pre-effect snapshot and the distance field.
///
/// Both are sized to the image and dropped with the context, so nothing
/// outlives one outline pass.
#[derive(Debug)]
pub struct RenderContext {
    width: usize,
    height: usize,
    snapshot: Vec<Option<u32>>,
    dist: Vec<f32>,
}

impl RenderContext {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            snapshot: vec![None; len],
            dist: vec![f32::INFINITY; len],
        }
    }

    pub fn snapshot(&self, idx: usize) -> Option<u32> {
        self.snapshot[idx]
    }

    pub fn distance(&self, idx: usize) -> f32 {
        self.dist[idx]
    }

    /// Original value of `idx`, captured from `img` on first access.
    ///
    /// Only pixels that already have a snapshot are ever written by the
    /// renderer, so a first capture always sees the unmodified value.
    pub fn snapshot_or_capture(&mut self, idx: usize, img: &[u32]) -> u32 {
        *self.snapshot[idx].get_or_insert(img[idx])
    }

    /// Records `distance` for `idx` if it is strictly closer than the current
    /// entry. Returns whether the caller owns the pixel now.
    pub fn claim(&mut self, idx: usize, distance: f32) -> bool {
        if distance < self.dist[idx] {
            self.dist[idx] = distance;
            true
        } else {
            false
        }
    }

    /// Captures the wedge behind `cursor` and seeds its distances with a
    /// placeholder the render pass can undercut.
    ///
    /// The wedge spans `border_width` pixels inward and, after a left turn,
    /// `border_width` pixels back along the tangent; otherwise a single
    /// column.
    pub fn seed_footprint(
        &mut self,
        img: &[u32],
        cursor: BorderPoint,
        border_width: usize,
        turned_left: bool,
    ) {
        let inward = cursor.dir.right();
        let backward = inward.right();
        let jmax = if turned_left { border_width } else { 1 };
        let placeholder = (2 * border_width) as f32;

        for i in 0..border_width as isize {
            for j in 0..jmax as isize {
                let p = cursor.offset(inward, i) + backward.unit() * j;
                let Some(idx) = bo_core::linear_index(self.width, self.height, p.x, p.y) else {
                    continue;
                };
                if self.snapshot[idx].is_none() {
                    self.snapshot[idx] = Some(img[idx]);
                    self.dist[idx] = placeholder;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bo_contour::BorderPoint;
    use bo_core::Direction;

    use super::RenderContext;

    #[test]
    fn claim_is_strictly_decreasing() {
        let mut ctx = RenderContext::new(2, 2);
        assert!(ctx.claim(1, 3.0));
        assert!(!ctx.claim(1, 3.0));
        assert!(!ctx.claim(1, 4.0));
        assert!(ctx.claim(1, 0.5));
        assert_eq!(ctx.distance(1), 0.5);
        assert_eq!(ctx.distance(0), f32::INFINITY);
    }

    #[test]
    fn snapshot_is_captured_once() {
        let mut img = vec![10u32, 20, 30, 40];
        let mut ctx = RenderContext::new(2, 2);
        assert_eq!(ctx.snapshot(2), None);
        assert_eq!(ctx.snapshot_or_capture(2, &img), 30);
        img[2] = 99;
        assert_eq!(ctx.snapshot_or_capture(2, &img), 30);
    }

    #[test]
    fn reseeding_keeps_first_snapshot() {
        let mut img: Vec<u32> = (0..25).collect();
        let mut ctx = RenderContext::new(5, 5);
        let cursor = BorderPoint::new(2, 0, Direction::Right);

        ctx.seed_footprint(&img, cursor, 2, false);
        img[7] = 700;
        ctx.seed_footprint(&img, cursor, 2, true);

        assert_eq!(ctx.snapshot(7), Some(7));
        assert_eq!(ctx.snapshot(2), Some(2));
        // The left-turn wedge reaches (1, 1), which was not seeded before.
        assert_eq!(ctx.snapshot(6), Some(6));
    }

    #[test]
    fn straight_step_seeds_inward_column() {
        let img: Vec<u32> = (0..25).collect();
        let mut ctx = RenderContext::new(5, 5);
        // Heading right along the top edge: inward is down.
        ctx.seed_footprint(&img, BorderPoint::new(2, 0, Direction::Right), 3, false);

        let seeded: Vec<usize> = (0..25).filter(|&i| ctx.snapshot(i).is_some()).collect();
        assert_eq!(seeded, vec![2, 7, 12]);
        assert_eq!(ctx.distance(7), 6.0);
        assert_eq!(ctx.snapshot(12), Some(12));
    }

    #[test]
    fn left_turn_seeds_square_wedge_clipped_to_bounds() {
        let img: Vec<u32> = (0..25).collect();
        let mut ctx = RenderContext::new(5, 5);
        // Heading up at x = 1: inward is right, backward is down.
        ctx.seed_footprint(&img, BorderPoint::new(1, 3, Direction::Up), 2, true);

        let seeded: Vec<usize> = (0..25).filter(|&i| ctx.snapshot(i).is_some()).collect();
        // (1,3) (2,3) (1,4) (2,4)
        assert_eq!(seeded, vec![16, 17, 21, 22]);

        ctx.seed_footprint(&img, BorderPoint::new(4, 4, Direction::Up), 2, true);
        assert_eq!(ctx.snapshot(24), Some(24));
    }
}
