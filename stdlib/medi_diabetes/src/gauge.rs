//! Half-circle gauge for the risk percentage, rendered as inline SVG.
//!
//! Backdrop zones are built from [`LOW_UPPER`] and [`HIGH_LOWER`], the same
//! constants that pick the [`RiskTier`](crate::tier::RiskTier), so the colour
//! under the needle always agrees with the tier label.

use std::f64::consts::PI;

use crate::tier::{HIGH_LOWER, LOW_UPPER};

pub const BAR_COLOR: &str = "#2563eb";
pub const TITLE: &str = "Risk Score";

const WIDTH: f64 = 240.0;
const HEIGHT: f64 = 160.0;
const CX: f64 = 120.0;
const CY: f64 = 130.0;
const RADIUS: f64 = 90.0;
const ZONE_STROKE: f64 = 28.0;
const BAR_STROKE: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeZone {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

/// Light green, light yellow, light red.
pub static ZONES: [GaugeZone; 3] = [
    GaugeZone {
        from: 0.0,
        to: LOW_UPPER,
        color: "#bbf7d0",
    },
    GaugeZone {
        from: LOW_UPPER,
        to: HIGH_LOWER,
        color: "#fef08a",
    },
    GaugeZone {
        from: HIGH_LOWER,
        to: 100.0,
        color: "#fecaca",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    value: f64,
}

impl Gauge {
    pub fn new(risk_percentage: f64) -> Self {
        Self {
            value: risk_percentage.clamp(0.0, 100.0),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Zone the value falls into, using the same half-open rule as the tiers.
    pub fn zone(&self) -> &'static GaugeZone {
        ZONES
            .iter()
            .find(|z| self.value < z.to)
            .unwrap_or(&ZONES[ZONES.len() - 1])
    }

    /// Angle in degrees, 180 at 0% and 0 at 100%.
    pub fn angle_for(value: f64) -> f64 {
        180.0 - value.clamp(0.0, 100.0) * 1.8
    }

    fn point(value: f64) -> (f64, f64) {
        let theta = Self::angle_for(value) * PI / 180.0;
        (CX + RADIUS * theta.cos(), CY - RADIUS * theta.sin())
    }

    fn arc(from: f64, to: f64, color: &str, width: f64) -> String {
        let (x0, y0) = Self::point(from);
        let (x1, y1) = Self::point(to);
        format!(
            "<path d=\"M {x0:.2} {y0:.2} A {RADIUS} {RADIUS} 0 0 1 {x1:.2} {y1:.2}\" \
             fill=\"none\" stroke=\"{color}\" stroke-width=\"{width}\"/>"
        )
    }

    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg class=\"gauge\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" \
             role=\"img\" aria-label=\"{TITLE}: {:.1}\">",
            self.value
        );
        svg.push_str(&format!(
            "<text x=\"{CX}\" y=\"16\" text-anchor=\"middle\" class=\"gauge-title\">{TITLE}</text>"
        ));
        for z in &ZONES {
            svg.push_str(&Self::arc(z.from, z.to, z.color, ZONE_STROKE));
        }
        if self.value > 0.0 {
            svg.push_str(&Self::arc(0.0, self.value, BAR_COLOR, BAR_STROKE));
        }
        // needle tip takes the colour of the zone it sits in
        let (tx, ty) = Self::point(self.value);
        svg.push_str(&format!(
            "<circle class=\"gauge-tip\" cx=\"{tx:.2}\" cy=\"{ty:.2}\" r=\"9\" fill=\"{}\" stroke=\"{BAR_COLOR}\" stroke-width=\"2\"/>",
            self.zone().color
        ));
        svg.push_str(&format!(
            "<text x=\"{CX}\" y=\"{CY}\" text-anchor=\"middle\" class=\"gauge-value\">{:.1}</text>",
            self.value
        ));
        svg.push_str(&format!(
            "<text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" class=\"gauge-tick\">0</text>\
             <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" class=\"gauge-tick\">100</text>",
            CX - RADIUS,
            CY + 22.0,
            CX + RADIUS,
            CY + 22.0
        ));
        svg.push_str("</svg>");
        svg
    }
}
