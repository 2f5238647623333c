use crate::{chart::ChartData, PipelineFailure};

pub const LABEL_GET_DATA: &str = "Get Data";
pub const LABEL_LOADING: &str = "Loading...";
pub const LABEL_REFRESH: &str = "Refresh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No data available.
    Idle,
    /// A pipeline run is in flight.
    Loading,
    /// Data is available.
    Ready,
}

/// Interaction state of the histogram page.
///
/// At most one pipeline run can be in flight at any time.
/// Every finished run replaces the previous chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistogramView {
    loading: bool,
    chart: Option<ChartData>,
}

impl HistogramView {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            loading: false,
            chart: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match (self.loading, &self.chart) {
            (true, _) => Phase::Loading,
            (false, Some(_)) => Phase::Ready,
            (false, None) => Phase::Idle,
        }
    }

    #[must_use]
    pub const fn chart(&self) -> Option<&ChartData> {
        self.chart.as_ref()
    }

    /// Starts a pipeline run.
    ///
    /// Returns `false` if a run is already in flight,
    /// in which case nothing changes.
    pub fn begin_run(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Consumes the outcome of a pipeline run and
    /// makes the trigger available again.
    ///
    /// A failed run or an empty chart leaves the view without data.
    pub fn finish_run(&mut self, outcome: Result<ChartData, PipelineFailure>) {
        self.loading = false;
        self.chart = match outcome {
            Ok(chart) if chart.is_empty() => {
                log::debug!("The text does not contain any words");
                None
            }
            Ok(chart) => Some(chart),
            Err(err) => {
                log::error!("Unable to create word frequency histogram: {err}");
                None
            }
        };
    }

    /// Visible (and accessible) label of the trigger.
    #[must_use]
    pub const fn trigger_label(&self) -> &'static str {
        match self.phase() {
            Phase::Idle => LABEL_GET_DATA,
            Phase::Loading => LABEL_LOADING,
            Phase::Ready => LABEL_REFRESH,
        }
    }

    #[must_use]
    pub const fn trigger_disabled(&self) -> bool {
        self.loading
    }
}
