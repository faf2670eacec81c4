//! Catmull-Rom curve fitting: turns stroke polylines into smooth SVG path data.

/// Formats a coordinate with at most two decimals, trimming trailing zeros so
/// serialized output stays stable and diff-friendly.
pub(crate) fn fmt_num(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn pair(p: [f32; 2]) -> String {
    format!("{},{}", fmt_num(p[0]), fmt_num(p[1]))
}

/// Emits SVG path data interpolating `points` with a uniform Catmull-Rom
/// spline, converted to cubic Bézier segments. Endpoints are duplicated as
/// phantom control points so the curve passes through them.
///
/// One-point strokes degrade to a bare `M`; two-point strokes to a line.
pub(crate) fn catmull_rom_path(points: &[[f32; 2]]) -> String {
    match points {
        [] => String::new(),
        [p] => format!("M{}", pair(*p)),
        [p, q] => format!("M{} L{}", pair(*p), pair(*q)),
        _ => {
            let mut d = format!("M{}", pair(points[0]));
            let n = points.len();
            for i in 0..n - 1 {
                let p0 = points[i.saturating_sub(1)];
                let p1 = points[i];
                let p2 = points[i + 1];
                let p3 = points[(i + 2).min(n - 1)];
                let c1 = [p1[0] + (p2[0] - p0[0]) / 6.0, p1[1] + (p2[1] - p0[1]) / 6.0];
                let c2 = [p2[0] - (p3[0] - p1[0]) / 6.0, p2[1] - (p3[1] - p1[1]) / 6.0];
                d.push_str(&format!(" C{} {} {}", pair(c1), pair(c2), pair(p2)));
            }
            d
        },
    }
}

/// Concatenates per-stroke path data into one multi-subpath `d` attribute.
pub(crate) fn multi_path<'a, I: IntoIterator<Item = &'a Vec<[f32; 2]>>>(strokes: I) -> String {
    strokes
        .into_iter()
        .map(|stroke| catmull_rom_path(stroke))
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(fmt_num(80.0), "80");
        assert_eq!(fmt_num(26.400002), "26.4");
        assert_eq!(fmt_num(0.126), "0.13");
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn single_point_is_a_bare_move() {
        assert_eq!(catmull_rom_path(&[[20.0, 20.0]]), "M20,20");
    }

    #[test]
    fn two_points_make_a_line() {
        assert_eq!(catmull_rom_path(&[[0.0, 0.0], [8.0, 16.0]]), "M0,0 L8,16");
    }

    #[test]
    fn three_points_emit_cubic_segments_through_every_point() {
        let d = catmull_rom_path(&[[0.0, 0.0], [6.0, 6.0], [12.0, 0.0]]);
        assert!(d.starts_with("M0,0 C"));
        assert_eq!(d.matches('C').count(), 2);
        assert!(d.ends_with("12,0"));
        assert!(d.contains("6,6"));
    }

    #[test]
    fn multi_path_joins_subpaths() {
        let strokes = vec![vec![[0.0, 0.0], [1.0, 1.0]], vec![[2.0, 2.0]]];
        assert_eq!(multi_path(&strokes), "M0,0 L1,1 M2,2");
    }

    #[test]
    fn empty_strokes_are_skipped() {
        let strokes: Vec<Vec<[f32; 2]>> = vec![vec![], vec![[1.0, 2.0]]];
        assert_eq!(multi_path(&strokes), "M1,2");
    }
}
