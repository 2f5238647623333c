use serde::Serialize;

use crate::{color::Rgba, rank::RankedEntry};

pub const DATASET_LABEL: &str = "Word Frequency";

/// Bar chart data in the shape of a single-dataset category chart.
///
/// Labels, values and colors are always of equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    labels: Vec<String>,
    datasets: [Dataset; 1],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<usize>,
    pub background_color: Vec<Rgba>,
    /// Bar width relative to the available category width.
    pub bar_percentage: f64,
    /// Category width relative to the available sample width.
    pub category_percentage: f64,
}

/// A single bar of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar<'a> {
    pub label: &'a str,
    pub value: usize,
    pub color: Rgba,
}

impl Bar<'_> {
    /// Accessible description, e.g. `cat: 2`.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }

    /// SVG `<title>` element that browsers show as tooltip.
    #[must_use]
    pub fn tooltip_markup(&self) -> String {
        let mut markup = String::from("<title>");
        for c in self.description().chars() {
            match c {
                '&' => markup.push_str("&amp;"),
                '<' => markup.push_str("&lt;"),
                '>' => markup.push_str("&gt;"),
                c => markup.push(c),
            }
        }
        markup.push_str("</title>");
        markup
    }
}

impl ChartData {
    /// Shapes ranked entries and their colors into chart data.
    ///
    /// Surplus entries or colors are dropped.
    #[must_use]
    pub fn new(entries: Vec<RankedEntry>, colors: Vec<Rgba>) -> Self {
        debug_assert_eq!(entries.len(), colors.len());
        let (labels, (data, background_color)): (Vec<_>, (Vec<_>, Vec<_>)) = entries
            .into_iter()
            .zip(colors)
            .map(|(RankedEntry { word, count }, color)| (word, (count, color)))
            .unzip();
        Self {
            labels,
            datasets: [Dataset {
                label: DATASET_LABEL,
                data,
                background_color,
                bar_percentage: 1.0,
                category_percentage: 1.0,
            }],
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.datasets[0]
    }

    #[must_use]
    pub fn values(&self) -> &[usize] {
        &self.dataset().data
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.dataset().background_color
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn max_value(&self) -> usize {
        self.values().iter().copied().max().unwrap_or_default()
    }

    pub fn bars(&self) -> impl Iterator<Item = Bar<'_>> {
        self.labels
            .iter()
            .zip(self.values())
            .zip(self.colors())
            .map(|((label, value), color)| Bar {
                label,
                value: *value,
                color: *color,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<RankedEntry> {
        (0..n).map(|i| RankedEntry::new(format!("w{i}"), n - i)).collect()
    }

    fn colors(n: usize) -> Vec<Rgba> {
        (0..n)
            .map(|i| Rgba::new(u8::try_from(i).unwrap(), 0, 0, 0.5))
            .collect()
    }

    #[test]
    fn parallel_sequences_have_equal_length() {
        for n in 0..=20 {
            let chart = ChartData::new(entries(n), colors(n));
            assert_eq!(chart.labels().len(), n);
            assert_eq!(chart.values().len(), n);
            assert_eq!(chart.colors().len(), n);
            assert_eq!(chart.bars().count(), n);
        }
    }

    #[test]
    fn keep_ranked_order() {
        let chart = ChartData::new(
            vec![RankedEntry::new("the", 3), RankedEntry::new("cat", 2)],
            colors(2),
        );
        assert_eq!(chart.labels(), ["the", "cat"]);
        assert_eq!(chart.values(), [3, 2]);
        assert_eq!(chart.max_value(), 3);
        let bar = chart.bars().next().unwrap();
        assert_eq!(bar.label, "the");
        assert_eq!(bar.value, 3);
    }

    #[test]
    fn full_width_bars() {
        let chart = ChartData::new(entries(1), colors(1));
        let dataset = chart.dataset();
        assert_eq!(dataset.label, "Word Frequency");
        assert!((dataset.bar_percentage - 1.0).abs() < f64::EPSILON);
        assert!((dataset.category_percentage - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serialize_chart_js_shape() {
        let chart = ChartData::new(
            vec![RankedEntry::new("the", 3)],
            vec![Rgba::new(1, 2, 3, 0.5)],
        );
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "labels": ["the"],
                "datasets": [{
                    "label": "Word Frequency",
                    "data": [3],
                    "backgroundColor": ["rgba(1, 2, 3, 0.5)"],
                    "barPercentage": 1.0,
                    "categoryPercentage": 1.0
                }]
            })
        );
    }

    #[test]
    fn bar_tooltip() {
        let chart = ChartData::new(
            vec![RankedEntry::new("cat", 2), RankedEntry::new("<b>&", 1)],
            colors(2),
        );
        let bars: Vec<_> = chart.bars().collect();
        assert_eq!(bars[0].description(), "cat: 2");
        assert_eq!(bars[0].tooltip_markup(), "<title>cat: 2</title>");
        assert_eq!(bars[1].tooltip_markup(), "<title>&lt;b&gt;&amp;: 1</title>");
    }

    #[test]
    fn empty_chart() {
        let chart = ChartData::new(vec![], vec![]);
        assert!(chart.is_empty());
        assert_eq!(chart.max_value(), 0);
    }
}
