//! Titanium anodizing colors.
//!
//! Anodizing titanium grows a transparent oxide layer whose thickness
//! is set by the bath voltage; thin-film interference then makes the
//! part appear colored.  This crate maps a simulated bath voltage
//! (0–110 V) to that color by piecewise-linear interpolation over a
//! fixed table of reference [`AnodizeStop`]s, and renders the full
//! [`Spectrum`] as a CSS gradient.
//!
//! - [`Spectrum`] — the whole 0–110 V range, a [`ColorRange`].
//! - [`Spectrum::at_voltage`] / [`Spectrum::at_level`] — point lookups.
//! - [`Spectrum::css_gradient`] — the table as a `linear-gradient(…)`.

use std::marker::PhantomData;
use lazy_static::lazy_static;
use rgb::RGB8;

mod stops;
pub use stops::{AnodizeStop, ANODIZE_STOPS};

/// Highest voltage covered by the stop table.
pub const MAX_VOLTAGE: f64 = 110.;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding a uniform sampling of `n` points of
    /// \[0, 1\] (both bounds included when `n ≥ 2`) together with
    /// their colors.
    fn sample(self, n: usize) -> Samples<Self, Color>
    where Self: Sized {
        Samples { range: self, color: PhantomData, i: 0, n }
    }
}

/// An exact-size iterator over uniformly sampled colors.
///
/// Created by [`ColorRange::sample`].
pub struct Samples<R, Color> {
    range: R,
    color: PhantomData<Color>,
    i: usize, // next position to be consumed (i ≤ n)
    n: usize,
}

impl<R, Color> Iterator for Samples<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.n { return None }
        let t = if self.n == 1 { 0. }
                else { self.i as f64 / (self.n - 1) as f64 };
        self.i += 1;
        Some((t, self.range.rgb(t)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.n - self.i;
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Samples<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize { self.n - self.i }
}

/// Clamp a normalized anodize level to \[0, 1\].  NaN maps to 0.
#[inline]
pub fn clamp_level(level: f64) -> f64 {
    if level.is_nan() { 0. } else { level.clamp(0., 1.) }
}

/// Convert a normalized anodize level to an integer bath voltage in
/// \[0, 110\].  Monotone in `level`.
#[inline]
pub fn level_to_voltage(level: f64) -> u16 {
    (clamp_level(level) * MAX_VOLTAGE).round() as u16
}

/// An interpolated spectrum color together with the label of the
/// nearest reference stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub color: RGB8,
    pub label: &'static str,
}

impl Shade {
    /// The color as an uppercase `#RRGGBB` string.
    pub fn hex(&self) -> String { css_hex(self.color) }
}

/// A rendered anodize selection: the voltage derived from a level and
/// the shade at that voltage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anodized {
    pub voltage: u16,
    pub color: RGB8,
    pub label: &'static str,
}

impl Anodized {
    /// The color as an uppercase `#RRGGBB` string.
    pub fn hex(&self) -> String { css_hex(self.color) }
}

/// Format a color as an uppercase `#RRGGBB` string.
pub fn css_hex(c: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 { a + (b - a) * t }

/// The full anodizing spectrum, 0 to 110 V.
///
/// A zero-sized handle over the fixed stop table; copy it freely.  All
/// lookups are pure and total for any finite or non-finite `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spectrum;

impl Spectrum {
    /// The reference stops, in ascending voltage order.
    pub fn stops(&self) -> &'static [AnodizeStop] { &ANODIZE_STOPS }

    /// Interpolated color at voltage `v`, with the label of the stop
    /// nearest to the clamped voltage.
    ///
    /// `v` is clamped to \[0, 110\] (NaN maps to 0), so out-of-range
    /// inputs behave exactly like the nearest endpoint.  A voltage
    /// lying exactly on a stop reproduces that stop's color.
    pub fn at_voltage(&self, v: f64) -> Shade {
        let v = if v.is_nan() { 0. } else { v.clamp(0., MAX_VOLTAGE) };
        let stops = &ANODIZE_STOPS;
        // First bracketing pair of adjacent stops.  The (first, last)
        // fallback only matters for inputs outside the table, which
        // clamping already rules out.
        let mut a = &stops[0];
        let mut b = &stops[stops.len() - 1];
        for w in stops.windows(2) {
            if w[0].voltage <= v && v <= w[1].voltage {
                a = &w[0];
                b = &w[1];
                break;
            }
        }
        let span = if b.voltage > a.voltage { b.voltage - a.voltage } else { 1. };
        let t = (v - a.voltage) / span;
        let color = RGB8 {
            r: lerp(a.color.r as f64, b.color.r as f64, t).round() as u8,
            g: lerp(a.color.g as f64, b.color.g as f64, t).round() as u8,
            b: lerp(a.color.b as f64, b.color.b as f64, t).round() as u8,
        };
        // Nearest label over the whole table; ties keep the earlier
        // (lower-voltage) stop.
        let mut nearest = a;
        for s in stops {
            if (s.voltage - v).abs() < (nearest.voltage - v).abs() {
                nearest = s;
            }
        }
        Shade { color, label: nearest.label }
    }

    /// Render a normalized level: derive the voltage, then look up the
    /// shade at that voltage.
    pub fn at_level(&self, level: f64) -> Anodized {
        let voltage = level_to_voltage(level);
        let Shade { color, label } = self.at_voltage(voltage as f64);
        Anodized { voltage, color, label }
    }

    /// The stop table rendered as a CSS `linear-gradient(90deg, …)`
    /// with one `#RRGGBB P.P%` entry per stop, percentages to one
    /// decimal place.
    pub fn css_gradient(&self) -> &'static str { GRADIENT.as_str() }
}

impl ColorRange<RGB8> for Spectrum {
    fn rgb(&self, t: f64) -> RGB8 { self.at_level(t).color }
}

lazy_static! {
    static ref GRADIENT: String = {
        let stops = ANODIZE_STOPS.iter()
            .map(|s| format!("{} {:.1}%", css_hex(s.color),
                             s.voltage / MAX_VOLTAGE * 100.))
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient(90deg, {stops})")
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voltage_is_monotone_in_level() {
        let mut prev = 0;
        for i in 0 ..= 1000 {
            let v = level_to_voltage(i as f64 / 1000.);
            assert!(v >= prev, "level {} lowered the voltage", i);
            assert!(v <= 110);
            prev = v;
        }
        assert_eq!(level_to_voltage(0.), 0);
        assert_eq!(level_to_voltage(1.), 110);
    }

    #[test]
    fn hex_is_well_formed_everywhere() {
        for v in 0 ..= 110 {
            let hex = Spectrum.at_voltage(v as f64).hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()),
                    "bad hex at {v} V: {hex}");
        }
    }

    #[test]
    fn endpoints_reproduce_the_boundary_stops() {
        let lo = Spectrum.at_voltage(0.);
        assert_eq!(lo.hex(), "#B5B5B5");
        assert_eq!(lo.label, "Raw Titanium");
        let hi = Spectrum.at_voltage(110.);
        assert_eq!(hi.hex(), "#87CEEB");
        assert_eq!(hi.label, "Light Blue");
    }

    #[test]
    fn exact_stop_hit_reproduces_the_stop() {
        let s = Spectrum.at_voltage(40.);
        assert_eq!(s.hex(), "#FFFF00");
        assert_eq!(s.label, "Yellow");
        for stop in &ANODIZE_STOPS {
            assert_eq!(Spectrum.at_voltage(stop.voltage).color, stop.color,
                       "{} V drifted off its stop", stop.voltage);
        }
    }

    #[test]
    fn out_of_range_clamps_to_the_endpoints() {
        assert_eq!(Spectrum.at_voltage(-5.), Spectrum.at_voltage(0.));
        assert_eq!(Spectrum.at_voltage(200.), Spectrum.at_voltage(110.));
        assert_eq!(Spectrum.at_voltage(f64::NEG_INFINITY),
                   Spectrum.at_voltage(0.));
        assert_eq!(Spectrum.at_voltage(f64::INFINITY),
                   Spectrum.at_voltage(110.));
        assert_eq!(Spectrum.at_voltage(f64::NAN), Spectrum.at_voltage(0.));
    }

    #[test]
    fn midpoint_interpolates_each_channel() {
        // Halfway between 0 V (#B5B5B5) and 10 V (#CD7F32):
        // r = (181+205)/2, g = (181+127)/2, b = round((181+50)/2).
        assert_eq!(Spectrum.at_voltage(5.).hex(), "#C19A74");
    }

    #[test]
    fn nearest_label_ties_go_to_the_earlier_stop() {
        // 10.5 V is equidistant from 10 V (Light Bronze) and
        // 11 V (Copper).
        assert_eq!(Spectrum.at_voltage(10.5).label, "Light Bronze");
        // 10.6 V is strictly closer to 11 V.
        assert_eq!(Spectrum.at_voltage(10.6).label, "Copper");
    }

    #[test]
    fn lookups_are_idempotent() {
        for v in [-3., 0., 17.2, 40., 63.9, 110., 250.] {
            assert_eq!(Spectrum.at_voltage(v), Spectrum.at_voltage(v));
        }
        assert_eq!(Spectrum.at_level(0.42), Spectrum.at_level(0.42));
    }

    #[test]
    fn level_wrapper_agrees_with_the_voltage_lookup() {
        for i in 0 ..= 100 {
            let level = i as f64 / 100.;
            let r = Spectrum.at_level(level);
            let s = Spectrum.at_voltage(r.voltage as f64);
            assert_eq!(r.color, s.color);
            assert_eq!(r.label, s.label);
        }
    }

    #[test]
    fn gradient_lists_every_stop_in_order() {
        let g = Spectrum.css_gradient();
        let inner = g.strip_prefix("linear-gradient(90deg, ").unwrap();
        let inner = inner.strip_suffix(')').unwrap();
        let parts: Vec<&str> = inner.split(", ").collect();
        assert_eq!(parts.len(), ANODIZE_STOPS.len());
        assert_eq!(parts[0], "#B5B5B5 0.0%");
        assert_eq!(parts[parts.len() - 1], "#87CEEB 100.0%");
        for (part, stop) in parts.iter().zip(&ANODIZE_STOPS) {
            let (hex, percent) = part.split_once(' ').unwrap();
            assert_eq!(hex, css_hex(stop.color));
            assert!(percent.ends_with('%'));
            let p: f64 = percent[.. percent.len() - 1].parse().unwrap();
            assert!((p - stop.voltage / MAX_VOLTAGE * 100.).abs() < 0.05);
        }
    }

    #[test]
    fn stop_table_is_strictly_ascending() {
        for w in ANODIZE_STOPS.windows(2) {
            assert!(w[0].voltage < w[1].voltage);
        }
        assert_eq!(ANODIZE_STOPS[0].voltage, 0.);
        assert_eq!(ANODIZE_STOPS[ANODIZE_STOPS.len() - 1].voltage, MAX_VOLTAGE);
    }

    #[test]
    fn sampling_covers_both_bounds() {
        let samples: Vec<_> = Spectrum.sample(12).collect();
        assert_eq!(samples.len(), 12);
        assert_eq!(samples[0], (0., ANODIZE_STOPS[0].color));
        let (t, c) = samples[11];
        assert_eq!(t, 1.);
        assert_eq!(c, ANODIZE_STOPS[ANODIZE_STOPS.len() - 1].color);
        assert_eq!(Spectrum.sample(0).count(), 0);
        assert_eq!(Spectrum.sample(1).count(), 1);
    }
}
