//! Hand-built SVG scatter of the qualified scorers.
//!
//! x = 2P%, y = 3P%, fill darkness = overall FG%, marker radius = the
//! 2-point share of attempts. Gray segments connect each paradox pair, so
//! the split leader always sits above and to the right of the overall
//! leader it is paired with.

use hooplens::dataset::PlayerRecord;
use hooplens::paradox::ParadoxPair;
use std::fmt::Write;

const WIDTH: f64 = 840.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;

const TICK_STEP: f64 = 0.05;

// Endpoints of the green fill ramp (light for low FG%, dark for high).
const FILL_LOW: (u8, u8, u8) = (211, 242, 163);
const FILL_HIGH: (u8, u8, u8) = (7, 64, 80);

struct Axis {
    min: f64,
    max: f64,
}

impl Axis {
    fn over<F: Fn(&PlayerRecord) -> f64>(players: &[PlayerRecord], f: F) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in players {
            min = min.min(f(p));
            max = max.max(f(p));
        }
        if !min.is_finite() || !max.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }
        // Pad the data range; widen degenerate spans so mapping stays sane.
        let (mut min, mut max) = (min - 0.02, max + 0.02);
        if max - min < 1e-9 {
            min -= 0.05;
            max += 0.05;
        }
        Self { min, max }
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }

    fn ticks(&self) -> Vec<f64> {
        let mut ticks = Vec::new();
        let mut t = (self.min / TICK_STEP).ceil() * TICK_STEP;
        while t <= self.max + 1e-9 {
            ticks.push(t);
            t += TICK_STEP;
        }
        ticks
    }
}

fn fill_color(fg_pct: f64, lo: f64, hi: f64) -> String {
    let t = if hi - lo > 1e-9 {
        ((fg_pct - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let lerp = |a: u8, b: u8| (f64::from(a) + t * (f64::from(b) - f64::from(a))).round() as u8;
    format!(
        "rgb({},{},{})",
        lerp(FILL_LOW.0, FILL_HIGH.0),
        lerp(FILL_LOW.1, FILL_HIGH.1),
        lerp(FILL_LOW.2, FILL_HIGH.2)
    )
}

fn marker_radius(shot_mix_weight: f64) -> f64 {
    // Weight is (50 * 2P share)^2, so sqrt maps it back onto 0..50.
    4.0 + shot_mix_weight.max(0.0).sqrt() / 5.0
}

pub fn render_scatter(players: &[PlayerRecord], pairs: &[ParadoxPair], year: i32) -> String {
    let x_axis = Axis::over(players, |p| p.two_pct);
    let y_axis = Axis::over(players, |p| p.three_pct);

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let map_x = |v: f64| MARGIN_LEFT + (v - x_axis.min) / x_axis.span() * plot_w;
    let map_y = |v: f64| HEIGHT - MARGIN_BOTTOM - (v - y_axis.min) / y_axis.span() * plot_h;

    let (mut fg_lo, mut fg_hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in players {
        fg_lo = fg_lo.min(p.fg_pct);
        fg_hi = fg_hi.max(p.fg_pct);
    }

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="30" font-family="sans-serif" font-size="18" text-anchor="middle">Simpson's Paradox Amongst Top NBA Scorers, {}</text>"#,
        WIDTH / 2.0,
        season_label(year)
    );

    // Axes
    let _ = writeln!(
        svg,
        r#"<line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        r = WIDTH - MARGIN_RIGHT,
        b = HEIGHT - MARGIN_BOTTOM
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = HEIGHT - MARGIN_BOTTOM
    );

    for tick in x_axis.ticks() {
        let x = map_x(tick);
        let base = HEIGHT - MARGIN_BOTTOM;
        let _ = writeln!(
            svg,
            r#"<line x1="{x:.1}" y1="{base:.1}" x2="{x:.1}" y2="{:.1}" stroke="black"/>"#,
            base + 5.0
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{:.1}" font-family="sans-serif" font-size="11" text-anchor="middle">{tick:.2}</text>"#,
            base + 18.0
        );
    }
    for tick in y_axis.ticks() {
        let y = map_y(tick);
        let _ = writeln!(
            svg,
            r#"<line x1="{:.1}" y1="{y:.1}" x2="{l:.1}" y2="{y:.1}" stroke="black"/>"#,
            MARGIN_LEFT - 5.0,
            l = MARGIN_LEFT
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="11" text-anchor="end">{tick:.2}</text>"#,
            MARGIN_LEFT - 9.0,
            y + 4.0
        );
    }

    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="13" text-anchor="middle">2P%</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 12.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="18" y="{:.1}" font-family="sans-serif" font-size="13" text-anchor="middle" transform="rotate(-90 18 {:.1})">3P%</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    );

    // Pair segments go under the markers.
    for pair in pairs {
        let _ = writeln!(
            svg,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="gray" stroke-width="1.5"/>"#,
            map_x(pair.overall_leader.two_pct),
            map_y(pair.overall_leader.three_pct),
            map_x(pair.split_leader.two_pct),
            map_y(pair.split_leader.three_pct)
        );
    }

    for p in players {
        let _ = writeln!(
            svg,
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" fill-opacity="0.85" stroke="black" stroke-width="0.5"><title>{} (FG% {:.3})</title></circle>"#,
            map_x(p.two_pct),
            map_y(p.three_pct),
            marker_radius(p.shot_mix_weight),
            fill_color(p.fg_pct, fg_lo, fg_hi),
            escape(&p.name),
            p.fg_pct
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn season_label(year: i32) -> String {
    format!("'{:02}-'{:02}", (year - 1).rem_euclid(100), year.rem_euclid(100))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
