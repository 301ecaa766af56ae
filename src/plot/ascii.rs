//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - signed relative error of an approximation: `-` line
//! - zero-error axis: `.`
//! - worst sample: `X`
//!
//! Ranked mean errors are drawn separately as `#` bars on a log10 axis.

use crate::domain::ErrorSample;

/// Render the signed relative error (%) of one entry against α.
pub fn render_error_plot(title: &str, samples: &[ErrorSample], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (a_min, a_max) = alpha_range(samples).unwrap_or((0.0, 1.0));
    let (e_min, e_max) = error_range(samples).unwrap_or((-1.0, 1.0));
    let (e_min, e_max) = pad_range(e_min, e_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Curve first so the axis only fills blanks.
    let points: Vec<(f64, f64)> = samples.iter().map(|s| (s.alpha, s.rel_error_pct)).collect();
    draw_curve(&mut grid, &points, a_min, a_max, e_min, e_max);

    let zero = map_y(0.0, e_min, e_max, height);
    draw_line(&mut grid, 0, zero, width - 1, zero, '.');

    let worst = samples.iter().fold(None, |acc: Option<&ErrorSample>, s| match acc {
        Some(w) if w.abs_error_pct() >= s.abs_error_pct() => Some(w),
        _ => Some(s),
    });
    if let Some(w) = worst {
        let x = map_x(w.alpha, a_min, a_max, width);
        let y = map_y(w.rel_error_pct, e_min, e_max, height);
        grid[y][x] = 'X';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {title} | alpha=[{a_min:.4}, {a_max:.4}] | error=[{e_min:.3e}, {e_max:.3e}] %\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Horizontal bars of error (%) on a log10 axis, one row per `(name, error)` in the given order.
///
/// The axis spans whole decades from the smallest to the largest positive error.
/// Zero or non-finite errors get an empty bar.
pub fn render_error_bars(title: &str, rows: &[(&str, f64)], width: usize) -> String {
    let width = width.max(10);
    let (lo, hi) = decade_range(rows.iter().map(|&(_, e)| e)).unwrap_or((-1, 0));
    let span = f64::from(hi - lo);
    let name_width = rows.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);

    let mut out = format!("Chart: {title} | log10 axis [1e{lo}, 1e{hi}] %\n");
    for &(name, err) in rows {
        let len = if err > 0.0 && err.is_finite() {
            let frac = (err.log10() - f64::from(lo)) / span;
            ((frac * width as f64).round() as usize).clamp(1, width)
        } else {
            0
        };
        out.push_str(&format!(
            "{name:<name_width$} |{}{}| {err:.3e}\n",
            "#".repeat(len),
            " ".repeat(width - len)
        ));
    }
    out
}

/// Whole-decade exponents enclosing every positive finite value.
fn decade_range(errors: impl Iterator<Item = f64>) -> Option<(i32, i32)> {
    let (min, max) = errors
        .filter(|e| *e > 0.0 && e.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, e| match acc {
            Some((lo, hi)) => Some((lo.min(e), hi.max(e))),
            None => Some((e, e)),
        })?;
    let lo = min.log10().floor() as i32;
    let hi = (max.log10().ceil() as i32).max(lo + 1);
    Some((lo, hi))
}

fn alpha_range(samples: &[ErrorSample]) -> Option<(f64, f64)> {
    let mut min_a = f64::INFINITY;
    let mut max_a = f64::NEG_INFINITY;
    for s in samples {
        min_a = min_a.min(s.alpha);
        max_a = max_a.max(s.alpha);
    }
    if min_a.is_finite() && max_a.is_finite() && max_a > min_a {
        Some((min_a, max_a))
    } else {
        None
    }
}

/// Error range, always including zero.
fn error_range(samples: &[ErrorSample]) -> Option<(f64, f64)> {
    let mut min_e: f64 = 0.0;
    let mut max_e: f64 = 0.0;
    for s in samples {
        min_e = min_e.min(s.rel_error_pct);
        max_e = max_e.max(s.rel_error_pct);
    }
    if min_e.is_finite() && max_e.is_finite() && max_e > min_e {
        Some((min_e, max_e))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(a, e) in curve {
        let x = map_x(a, x_min, x_max, width);
        let y = map_y(e, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, '-');
        } else {
            grid[y][x] = '-';
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(alpha: f64, rel_error_pct: f64) -> ErrorSample {
        ErrorSample {
            alpha,
            exact: 1.0,
            approx: 1.0 + rel_error_pct / 100.0,
            rel_error_pct,
        }
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let samples = vec![
            sample(1.0, 0.5),
            sample(2.0, 1.0),
            sample(3.0, -1.0),
            sample(4.0, 0.0),
        ];

        let txt = render_error_plot("Test", &samples, 10, 5);
        let expected = concat!(
            "Plot: Test | alpha=[1.0000, 4.0000] | error=[-1.100e0, 1.100e0] %\n",
            "  -X      \n",
            "--  -     \n",
            ".....-...-\n",
            "     - -- \n",
            "      -   \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn bars_golden_snapshot() {
        let rows = [("Pade(2025)_13", 2e-6), ("Hunt_9", 3e-3), ("Eckart", 0.5)];

        let txt = render_error_bars("Mean error", &rows, 12);
        let expected = concat!(
            "Chart: Mean error | log10 axis [1e-6, 1e0] %\n",
            "Pade(2025)_13 |#           | 2.000e-6\n",
            "Hunt_9        |#######     | 3.000e-3\n",
            "Eckart        |########### | 5.000e-1\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn exact_entry_gets_an_empty_bar() {
        let txt = render_error_bars("Mean error", &[("Exact", 0.0), ("Beji", 0.02)], 10);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "Chart: Mean error | log10 axis [1e-2, 1e-1] %");
        assert_eq!(lines[1], "Exact |          | 0.000e0");
        assert!(lines[2].starts_with("Beji  |###"));
    }

    #[test]
    fn empty_profile_renders_axis_only() {
        let txt = render_error_plot("Empty", &[], 12, 5);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "............");
    }
}
