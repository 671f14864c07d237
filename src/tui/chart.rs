use tracing::debug;

use crate::stat::MONTHS;

/// Fixed category axis, the same for every year.
pub const MONTH_LABELS: [&str; MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Tick granularity of the zero-based value axis.
pub const VALUE_STEP: u64 = 500;

/// What a chart instance is bound to: one year and its twelve bucket sums.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub year: String,
    pub totals: [f64; MONTHS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartId(u64);

/// Seam to the rendering backend. The binding only ever holds one live
/// id per renderer; `destroy` is always called before the next `create`.
pub trait ChartRenderer {
    fn create(&mut self, spec: &ChartSpec) -> ChartId;
    fn destroy(&mut self, id: ChartId);
}

/// Ready-to-draw bar chart data for the ratatui `BarChart` widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub bars: Vec<(String, u64)>,
    /// Value-axis ceiling, rounded up to a multiple of `VALUE_STEP`.
    pub axis_max: u64,
}

/// Production renderer: turns a `ChartSpec` into `ChartData` and holds it
/// until destroyed. Negative bucket sums clamp to zero on screen; the
/// aggregation result itself keeps its sign.
#[derive(Debug, Default)]
pub struct TuiChartRenderer {
    next_id: u64,
    chart: Option<(ChartId, ChartData)>,
}

impl TuiChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&ChartData> {
        self.chart.as_ref().map(|(_, data)| data)
    }
}

impl ChartRenderer for TuiChartRenderer {
    fn create(&mut self, spec: &ChartSpec) -> ChartId {
        debug_assert!(self.chart.is_none(), "previous chart instance not destroyed");

        let bars: Vec<(String, u64)> = MONTH_LABELS
            .iter()
            .zip(spec.totals.iter())
            .map(|(label, total)| (label.to_string(), total.max(0.0).round() as u64))
            .collect();
        let tallest = bars.iter().map(|(_, v)| *v).max().unwrap_or(0);
        let axis_max = tallest.div_ceil(VALUE_STEP).max(1) * VALUE_STEP;

        let id = ChartId(self.next_id);
        self.next_id += 1;
        self.chart = Some((
            id,
            ChartData {
                title: format!("Monthly Total Expenses {}", spec.year),
                bars,
                axis_max,
            },
        ));
        debug!(year = %spec.year, ?id, "chart created");
        id
    }

    fn destroy(&mut self, id: ChartId) {
        if let Some((live_id, _)) = self.chart {
            if live_id == id {
                self.chart = None;
                debug!(?id, "chart destroyed");
            }
        }
    }
}

/// Owns at most one live chart instance. Every path that changes or
/// removes the bound data destroys the old instance before a new one
/// exists, including drop of the binding itself.
#[derive(Debug)]
pub struct ChartBinding<R: ChartRenderer> {
    renderer: R,
    live: Option<(ChartId, ChartSpec)>,
}

impl<R: ChartRenderer> ChartBinding<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            live: None,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        self.live.as_ref().map(|(_, spec)| spec)
    }

    /// Bind `spec` as the live chart. Covers both first activation and
    /// update: an existing instance is destroyed first, so the renderer
    /// never sees two creates without an intervening destroy.
    pub fn render(&mut self, spec: ChartSpec) {
        if let Some((id, _)) = self.live.take() {
            self.renderer.destroy(id);
        }
        let id = self.renderer.create(&spec);
        self.live = Some((id, spec));
    }

    /// Deactivate: destroy the live instance, if any.
    pub fn release(&mut self) {
        if let Some((id, _)) = self.live.take() {
            self.renderer.destroy(id);
        }
    }
}

impl<R: ChartRenderer> Drop for ChartBinding<R> {
    fn drop(&mut self) {
        self.release();
    }
}
