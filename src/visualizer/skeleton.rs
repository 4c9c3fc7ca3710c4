// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton topology and rendering.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

use crate::error::{AnalyzerError, Result};
use crate::landmark::{Landmark, LandmarkSet, Point2D};
use crate::sampler::Region;
use crate::visualizer::color::Color;

/// Segments drawn between landmarks, in drawing order, with the region whose color they use.
///
/// The hip line appears twice; redrawing it has no visible effect.
pub const SKELETON: [(Landmark, Landmark, Region); 10] = [
    (Landmark::LeftShoulder, Landmark::RightShoulder, Region::Torso),
    (Landmark::RightShoulder, Landmark::RightHip, Region::Torso),
    (Landmark::RightHip, Landmark::LeftHip, Region::Torso),
    (Landmark::LeftHip, Landmark::LeftShoulder, Region::Torso),
    (Landmark::RightHip, Landmark::LeftHip, Region::Torso),
    (Landmark::RightHip, Landmark::RightKnee, Region::Legs),
    (Landmark::RightKnee, Landmark::RightAnkle, Region::Legs),
    (Landmark::LeftHip, Landmark::LeftKnee, Region::Legs),
    (Landmark::LeftKnee, Landmark::LeftAnkle, Region::Legs),
    (Landmark::LeftAnkle, Landmark::RightAnkle, Region::Legs),
];

/// Landmarks referenced by [`SKELETON`], in first-use order.
pub fn required_landmarks() -> impl Iterator<Item = Landmark> {
    SKELETON.into_iter().flat_map(|(a, b, _)| [a, b])
}

/// Draw the skeleton onto a copy of `image`.
///
/// Torso segments use `torso_color`, leg segments use `leg_color`. The source
/// image is left untouched; the returned image has the same dimensions and format.
///
/// # Errors
///
/// * [`AnalyzerError::MissingLandmark`] if any segment endpoint is absent. Nothing
///   is drawn in that case.
/// * [`AnalyzerError::InvalidArgument`] if `stroke_width` is not a positive finite number.
pub fn render(
    image: &RgbaImage,
    landmarks: &LandmarkSet,
    torso_color: Color,
    leg_color: Color,
    stroke_width: f32,
) -> Result<RgbaImage> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(AnalyzerError::InvalidArgument(format!(
            "stroke width must be positive, got {stroke_width}"
        )));
    }
    if let Some(missing) = landmarks.first_missing(required_landmarks()) {
        return Err(AnalyzerError::MissingLandmark(missing));
    }

    let mut canvas = image.clone();
    for &(a, b, region) in &SKELETON {
        let color = match region {
            Region::Torso => torso_color,
            Region::Legs => leg_color,
        };
        draw_segment(
            &mut canvas,
            landmarks.require(a)?,
            landmarks.require(b)?,
            color.into(),
            stroke_width,
        );
    }

    Ok(canvas)
}

/// Clip the segment `start..end` to the canvas grown by `margin` on every side.
///
/// Liang-Barsky in `f64` so endpoints far off the canvas keep their direction.
/// Returns `None` when the segment misses the canvas or has a non-finite endpoint.
#[allow(clippy::cast_possible_truncation)]
fn clip_segment(
    start: Point2D,
    end: Point2D,
    (width, height): (u32, u32),
    margin: f32,
) -> Option<(Point2D, Point2D)> {
    if ![start.x, start.y, end.x, end.y].iter().all(|v| v.is_finite()) {
        return None;
    }

    let margin = f64::from(margin);
    let (x0, y0) = (f64::from(start.x), f64::from(start.y));
    let (dx, dy) = (f64::from(end.x) - x0, f64::from(end.y) - y0);
    let (min_x, min_y) = (-margin, -margin);
    let (max_x, max_y) = (f64::from(width) + margin, f64::from(height) + margin);

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-dx, x0 - min_x),
        (dx, max_x - x0),
        (-dy, y0 - min_y),
        (dy, max_y - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| Point2D::new((x0 + t * dx) as f32, (y0 + t * dy) as f32);
    Some((at(t0), at(t1)))
}

/// Draw a straight segment of the given stroke width.
///
/// The 1-pixel centerline is always drawn; wider strokes add a filled quad around it.
#[allow(clippy::cast_possible_truncation)]
fn draw_segment(canvas: &mut RgbaImage, start: Point2D, end: Point2D, color: Rgba<u8>, width: f32) {
    // Only the part near the canvas is rasterized.
    let Some((start, end)) = clip_segment(start, end, canvas.dimensions(), width / 2.0 + 1.0)
    else {
        return;
    };

    draw_line_segment_mut(canvas, start.into(), end.into(), color);

    if width <= 1.0 {
        return;
    }

    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let len = dx.hypot(dy);
    if len == 0.0 {
        return;
    }

    // Unit normal scaled to half the stroke width.
    let half = width / 2.0;
    let (nx, ny) = (-dy / len * half, dx / len * half);

    let corner = |p: Point2D, sign: f32| {
        Point::new(
            (p.x + sign * nx).round() as i32,
            (p.y + sign * ny).round() as i32,
        )
    };
    let quad = [
        corner(start, 1.0),
        corner(end, 1.0),
        corner(end, -1.0),
        corner(start, -1.0),
    ];

    // draw_polygon_mut rejects polygons whose first and last points coincide.
    if quad[0] != quad[3] {
        draw_polygon_mut(canvas, &quad, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Rgba<u8> = Rgba([10, 20, 30, 255]);

    fn body() -> LandmarkSet {
        LandmarkSet::new()
            .with(Landmark::LeftShoulder, (10.0, 10.0))
            .with(Landmark::RightShoulder, (30.0, 10.0))
            .with(Landmark::LeftHip, (10.0, 25.0))
            .with(Landmark::RightHip, (30.0, 25.0))
            .with(Landmark::LeftKnee, (10.0, 35.0))
            .with(Landmark::RightKnee, (30.0, 35.0))
            .with(Landmark::LeftAnkle, (10.0, 45.0))
            .with(Landmark::RightAnkle, (30.0, 45.0))
    }

    #[test]
    fn test_required_landmarks_cover_body() {
        let required: Vec<_> = required_landmarks().collect();
        assert_eq!(required.len(), 20);
        for l in [
            Landmark::LeftShoulder,
            Landmark::RightShoulder,
            Landmark::LeftHip,
            Landmark::RightHip,
            Landmark::LeftKnee,
            Landmark::RightKnee,
            Landmark::LeftAnkle,
            Landmark::RightAnkle,
        ] {
            assert!(required.contains(&l));
        }
        assert!(!required.contains(&Landmark::LeftWrist));
    }

    #[test]
    fn test_render_keeps_dimensions_and_source() {
        let img = RgbaImage::from_pixel(40, 50, BASE);
        let out = render(&img, &body(), Color::RED, Color::GREEN, 1.0).unwrap();

        assert_eq!(out.dimensions(), img.dimensions());
        // Source untouched.
        assert!(img.pixels().all(|p| *p == BASE));

        // Segment pixels.
        assert_eq!(*out.get_pixel(20, 10), Rgba::from(Color::RED));
        assert_eq!(*out.get_pixel(30, 18), Rgba::from(Color::RED));
        assert_eq!(*out.get_pixel(20, 25), Rgba::from(Color::RED));
        assert_eq!(*out.get_pixel(30, 30), Rgba::from(Color::GREEN));
        assert_eq!(*out.get_pixel(20, 45), Rgba::from(Color::GREEN));

        // Off-path pixels.
        assert_eq!(*out.get_pixel(20, 17), BASE);
        assert_eq!(*out.get_pixel(0, 0), BASE);
        assert_eq!(*out.get_pixel(39, 49), BASE);
    }

    #[test]
    fn test_render_stroke_width() {
        let img = RgbaImage::from_pixel(40, 50, BASE);
        let thin = render(&img, &body(), Color::RED, Color::GREEN, 1.0).unwrap();
        let thick = render(&img, &body(), Color::RED, Color::GREEN, 5.0).unwrap();

        assert_eq!(*thin.get_pixel(20, 12), BASE);
        assert_eq!(*thick.get_pixel(20, 12), Rgba::from(Color::RED));
        assert_eq!(*thick.get_pixel(20, 17), BASE);
    }

    #[test]
    fn test_render_missing_landmark() {
        let img = RgbaImage::from_pixel(40, 50, BASE);
        let mut set = LandmarkSet::new();
        for (l, p) in body().iter().filter(|(l, _)| *l != Landmark::LeftKnee) {
            set.insert(l, p);
        }
        let err = render(&img, &set, Color::RED, Color::GREEN, 3.0).unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingLandmark(Landmark::LeftKnee)));
    }

    #[test]
    fn test_render_rejects_bad_stroke() {
        let img = RgbaImage::from_pixel(4, 4, BASE);
        for w in [0.0, -1.0, f32::NAN] {
            assert!(matches!(
                render(&img, &body(), Color::RED, Color::GREEN, w),
                Err(AnalyzerError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_render_clips_outside_canvas() {
        let img = RgbaImage::from_pixel(20, 20, BASE);
        let out = render(&img, &body(), Color::RED, Color::GREEN, 3.0).unwrap();
        assert_eq!(out.dimensions(), (20, 20));
        assert_eq!(*out.get_pixel(15, 10), Rgba::from(Color::RED));
    }

    #[test]
    fn test_render_far_off_canvas() {
        let img = RgbaImage::from_pixel(40, 50, BASE);
        let mut far = LandmarkSet::new();
        for (l, p) in body().iter() {
            far.insert(l, (p.x * 1e8 - 3e9, p.y * 1e8));
        }
        let out = render(&img, &far, Color::RED, Color::GREEN, 3.0).unwrap();
        assert!(out.pixels().all(|p| *p == BASE));
    }

    #[test]
    fn test_render_long_segment_crossing_canvas() {
        let img = RgbaImage::from_pixel(40, 50, BASE);
        let set = body()
            .with(Landmark::LeftShoulder, (-1e9, 10.0))
            .with(Landmark::RightShoulder, (1e9, 10.0));
        let out = render(&img, &set, Color::RED, Color::GREEN, 1.0).unwrap();
        assert_eq!(*out.get_pixel(0, 10), Rgba::from(Color::RED));
        assert_eq!(*out.get_pixel(39, 10), Rgba::from(Color::RED));
        assert_eq!(*out.get_pixel(35, 5), BASE);
    }

    #[test]
    fn test_clip_segment() {
        let inside = clip_segment(Point2D::new(1.0, 2.0), Point2D::new(5.0, 6.0), (10, 10), 1.0);
        assert_eq!(inside, Some((Point2D::new(1.0, 2.0), Point2D::new(5.0, 6.0))));

        let (a, b) =
            clip_segment(Point2D::new(-100.0, 5.0), Point2D::new(100.0, 5.0), (10, 10), 2.0).unwrap();
        assert!((a.x + 2.0).abs() < 1e-4 && (b.x - 12.0).abs() < 1e-4);
        assert!((a.y - 5.0).abs() < 1e-6 && (b.y - 5.0).abs() < 1e-6);

        assert_eq!(
            clip_segment(Point2D::new(-50.0, -50.0), Point2D::new(-40.0, 80.0), (10, 10), 1.0),
            None
        );
        assert_eq!(
            clip_segment(Point2D::new(f32::NAN, 0.0), Point2D::new(5.0, 5.0), (10, 10), 1.0),
            None
        );
    }
}
