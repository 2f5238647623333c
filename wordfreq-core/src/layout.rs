//! Geometry of the histogram in SVG user units.

use crate::chart::ChartData;

const MAX_TICK_INTERVALS: usize = 10;

/// Drawing area including the space around the plot
/// that is reserved for titles, ticks and the legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            padding_top: 70.0,
            padding_right: 20.0,
            padding_bottom: 100.0,
            padding_left: 70.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: usize,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramLayout {
    pub plot: Rect,
    pub bars: Vec<Rect>,
    pub ticks: Vec<Tick>,
}

/// Integer tick values starting at zero with a step of 1, 2 or 5 × 10ᵏ.
///
/// The last tick is the smallest multiple of the step that is
/// not less than `max`, saturated at `usize::MAX`.
#[must_use]
pub fn y_axis_ticks(max: usize) -> Vec<usize> {
    let max = max.max(1);
    let mut magnitude: usize = 1;
    let step = loop {
        if let Some(step) = [1, 2, 5]
            .into_iter()
            .filter_map(|f| magnitude.checked_mul(f))
            .find(|step| max.div_ceil(*step) <= MAX_TICK_INTERVALS)
        {
            break step;
        }
        match magnitude.checked_mul(10) {
            Some(next) => magnitude = next,
            None => break max,
        }
    };
    (0..=max.div_ceil(step))
        .map(|i| i.saturating_mul(step))
        .collect()
}

impl HistogramLayout {
    #[must_use]
    pub fn new(chart: &ChartData, viewport: &Viewport) -> Self {
        let plot = Rect {
            x: viewport.padding_left,
            y: viewport.padding_top,
            width: (viewport.width - viewport.padding_left - viewport.padding_right).max(0.0),
            height: (viewport.height - viewport.padding_top - viewport.padding_bottom).max(0.0),
        };
        let ticks = y_axis_ticks(chart.max_value());
        let top = ticks.last().copied().unwrap_or(1) as f64;
        let y_of = |value: usize| plot.bottom() - plot.height * value as f64 / top;

        let dataset = chart.dataset();
        let bars = if chart.is_empty() {
            Vec::new()
        } else {
            let category_width = plot.width / chart.len() as f64;
            let bar_width =
                category_width * dataset.category_percentage * dataset.bar_percentage;
            chart
                .values()
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let y = y_of(*value);
                    Rect {
                        x: plot.x + category_width * i as f64 + (category_width - bar_width) / 2.0,
                        y,
                        width: bar_width,
                        height: plot.bottom() - y,
                    }
                })
                .collect()
        };
        let ticks = ticks
            .into_iter()
            .map(|value| Tick {
                value,
                y: y_of(value),
            })
            .collect();
        Self { plot, bars, ticks }
    }
}
