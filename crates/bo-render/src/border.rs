use bo_contour::Backlog;
use bo_core::{ImageViewMut, Vec2f, adjust_pixel, alpha, rotate_f32};

use crate::context::RenderContext;
use crate::settings::RenderSettings;

/// Floor for the render distance; keeps the falloff finite at the border.
const MIN_DISTANCE: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// The sample was drawn; carries the number of pixel writes it won.
    Painted(usize),
    /// The smoothed normal was zero or pointed outward; nothing was drawn.
    Degenerate,
}

/// Normals at the start and end of the segment around the backlog center.
///
/// Each is the perpendicular of a chord across the window, so with the shape
/// on the right of the walk they point inward.
pub fn segment_normals(backlog: &Backlog) -> (Vec2f, Vec2f) {
    let begin = (backlog.second_newest().pos() - backlog.oldest().pos()).to_f32();
    let end = (backlog.newest().pos() - backlog.second_oldest().pos()).to_f32();
    (begin.perp(), end.perp())
}

/// Lambertian-style factor in `[-1, 1]` for a unit illumination vector;
/// positive when the outward normal faces the light.
pub fn illumination_cosine(n_begin: Vec2f, n_end: Vec2f, illum: Vec2f) -> Option<f32> {
    let sum = n_begin + n_end;
    let norm = sum.norm();
    if norm == 0.0 {
        return None;
    }
    Some(-sum.dot(illum) / norm)
}

/// Brightness delta for a pixel at `distance` from the border, before the
/// sign and weight of the illumination are applied.
pub fn falloff(distance: f32, settings: &RenderSettings) -> f32 {
    let ratio = settings.effective_border_width() as f32 / distance;
    (256.0 * settings.rel_strength * ratio * ratio).min(settings.max_strength as f32)
}

/// Paints the bevel footprint of the backlog's center point.
///
/// Pixels are written from their snapshot, so overlapping footprints never
/// compound; the distance field decides which sample owns a pixel.
pub fn render_border(
    ctx: &mut RenderContext,
    img: &mut ImageViewMut<'_, u32>,
    backlog: &Backlog,
    settings: &RenderSettings,
) -> SampleOutcome {
    let cursor = backlog.center();
    let (n_begin, n_end) = segment_normals(backlog);

    let Some(cosphi) = illumination_cosine(n_begin, n_end, settings.illumination()) else {
        return SampleOutcome::Degenerate;
    };

    let Some(cursor_idx) = img.index(cursor.x, cursor.y) else {
        return SampleOutcome::Degenerate;
    };
    let feather = f32::from(alpha(ctx.snapshot_or_capture(cursor_idx, img.data()))) / 255.0;

    // Local frame: j runs along the heading, i runs inward.
    let to_local = -cursor.dir.index();
    let nb = rotate_f32(n_begin, to_local);
    let ne = rotate_f32(n_end, to_local);
    if nb.y <= 0.0 || ne.y <= 0.0 {
        return SampleOutcome::Degenerate;
    }

    // Wedge boundaries shared with the neighbouring samples.
    let slope_b = nb.x / nb.y;
    let slope_e = ne.x / ne.y;

    let bw = settings.effective_border_width() as isize;
    let r2 = bw * bw;
    let inward = cursor.dir.right().unit();
    let along = cursor.dir.unit();
    let mut painted = 0;

    for i in 0..bw {
        let mid = i as f32 + 0.5;
        let mut j = -(((r2 - i * i) as f32).sqrt() as isize);
        let lower = slope_b * mid - 0.5;
        if (j as f32) < lower {
            j = lower.ceil() as isize;
        }

        while (j as f32) <= slope_e * mid + 0.5 {
            if i * i + j * j > r2 {
                break;
            }

            let p = cursor.pos() + inward * i + along * j;
            if let Some(idx) = img.index(p.x, p.y) {
                let distance = (((i * i + j * j) as f32).sqrt() + feather - 0.5).max(MIN_DISTANCE);
                if ctx.claim(idx, distance) {
                    let amount = falloff(distance, settings) * cosphi;
                    let original = ctx.snapshot_or_capture(idx, img.data());
                    img.data_mut()[idx] = adjust_pixel(original, amount as i32);
                    painted += 1;
                }
            }
            j += 1;
        }
    }

    SampleOutcome::Painted(painted)
}

#[cfg(test)]
mod tests {
    use bo_contour::{Backlog, BorderPoint};
    use bo_core::{Direction, Image, Vec2f};

    use super::{SampleOutcome, falloff, illumination_cosine, render_border, segment_normals};
    use crate::context::RenderContext;
    use crate::settings::RenderSettings;

    fn straight_run(
        capacity: usize,
        y: isize,
        dir: Direction,
        mut xs: impl Iterator<Item = isize>,
    ) -> Backlog {
        let first = xs.next().expect("nonempty run");
        let mut b = Backlog::new(capacity, BorderPoint::new(first, y, dir));
        for x in xs {
            b.push(BorderPoint::new(x, y, dir));
        }
        b
    }

    #[test]
    fn normals_point_inward_on_straight_edges() {
        // Top edge walked rightward: inside is below.
        let b = straight_run(4, 0, Direction::Right, 0..4);
        let (nb, ne) = segment_normals(&b);
        assert!(nb.y > 0.0 && ne.y > 0.0);
        assert_eq!(nb.x, 0.0);

        // Bottom edge walked leftward: inside is above.
        let b = straight_run(4, 9, Direction::Left, (0..4).rev());
        let (nb, ne) = segment_normals(&b);
        assert!(nb.y < 0.0 && ne.y < 0.0);
    }

    #[test]
    fn cosine_sign_follows_light() {
        let up = Vec2f::new(0.0, -2.0);
        let down = Vec2f::new(0.0, 2.0);
        let light_below = Vec2f::new(0.0, 1.0);

        assert_eq!(illumination_cosine(up, up, light_below), Some(1.0));
        assert_eq!(illumination_cosine(down, down, light_below), Some(-1.0));
        assert_eq!(illumination_cosine(up, down, light_below), None);
    }

    #[test]
    fn falloff_is_capped() {
        let rs = RenderSettings {
            border_width: 4,
            max_strength: 100,
            rel_strength: 0.05,
            ..RenderSettings::default()
        };
        assert_eq!(falloff(1e-5, &rs), 100.0);
        // 256 * 0.05 * (4 / 4)^2
        assert!((falloff(4.0, &rs) - 12.8).abs() < 1e-4);
        assert!(falloff(3.0, &rs) > falloff(3.5, &rs));
    }

    #[test]
    fn bottom_edge_sample_brightens_inward_pixels() {
        let (w, h) = (12usize, 10usize);
        let mut img = Image::new_fill(w, h, 0xff80_8080u32);
        let mut ctx = RenderContext::new(w, h);
        let rs = RenderSettings {
            border_width: 2,
            ..RenderSettings::default()
        };

        let b = straight_run(4, 9, Direction::Left, (4..8).rev());
        let cursor = b.center();
        assert_eq!(cursor, BorderPoint::new(6, 9, Direction::Left));

        let mut view = img.as_view_mut();
        let outcome = render_border(&mut ctx, &mut view, &b, &rs);
        assert!(matches!(outcome, SampleOutcome::Painted(n) if n > 0));

        let at = |x: usize, y: usize| img.data()[y * w + x];
        assert!(at(6, 9) & 0xff > 0x80);
        assert!(at(6, 8) & 0xff > 0x80);
        assert_eq!(at(6, 7), 0xff80_8080);
        assert_eq!(at(6, 9) >> 24, 0xff);
    }

    #[test]
    fn outward_normal_is_skipped() {
        let mut img = Image::new_fill(8, 8, 0xff80_8080u32);
        let mut ctx = RenderContext::new(8, 8);
        let rs = RenderSettings::default();

        // Heading left while the chord runs right: normal points outward.
        let b = straight_run(4, 3, Direction::Left, 1..5);
        let mut view = img.as_view_mut();
        assert_eq!(render_border(&mut ctx, &mut view, &b, &rs), SampleOutcome::Degenerate);
        assert!(img.data().iter().all(|&p| p == 0xff80_8080));
    }
}
