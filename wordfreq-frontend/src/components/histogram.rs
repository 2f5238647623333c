use leptos::*;

use wordfreq_core::{
    chart::ChartData,
    layout::{HistogramLayout, Tick, Viewport},
};

const CHART_TITLE: &str = "Word Frequency";
const X_AXIS_TITLE: &str = "Word";
const Y_AXIS_TITLE: &str = "Frequency";

const GRID_COLOR: &str = "#e5e7eb";
const AXIS_COLOR: &str = "#9ca3af";
const TEXT_COLOR: &str = "#374151";

/// Bar chart of word counts, drawn as SVG.
#[component]
pub fn Histogram(chart: ChartData) -> impl IntoView {
    let viewport = Viewport::default();
    let HistogramLayout { plot, bars, ticks } = HistogramLayout::new(&chart, &viewport);
    let view_box = format!("0 0 {} {}", viewport.width, viewport.height);
    let legend_color = chart
        .colors()
        .first()
        .map(ToString::to_string)
        .unwrap_or_default();

    let grid = ticks
        .into_iter()
        .map(|Tick { value, y }| {
            view! {
              <g>
                <line x1={plot.x} x2={plot.right()} y1=y y2=y stroke=GRID_COLOR />
                <text
                  x={plot.x - 8.0}
                  y=y
                  text-anchor="end"
                  dominant-baseline="middle"
                  font-size="12"
                  fill=TEXT_COLOR
                >
                  { value }
                </text>
              </g>
            }
        })
        .collect_view();

    let bars = chart
        .bars()
        .zip(bars)
        .map(|(bar, rect)| {
            let label_x = rect.center_x();
            let label_y = plot.bottom() + 14.0;
            view! {
              <g>
                <rect
                  x={rect.x}
                  y={rect.y}
                  width={rect.width}
                  height={rect.height}
                  fill={bar.color.to_string()}
                  aria-label={bar.description()}
                  inner_html={bar.tooltip_markup()}
                />
                <text
                  x=label_x
                  y=label_y
                  transform={format!("rotate(-45 {label_x} {label_y})")}
                  text-anchor="end"
                  font-size="12"
                  fill=TEXT_COLOR
                >
                  { bar.label.to_owned() }
                </text>
              </g>
            }
        })
        .collect_view();

    let center_y = plot.y + plot.height / 2.0;

    view! {
      <svg
        class="w-full h-full"
        viewBox=view_box
        role="img"
        font-family="sans-serif"
      >
        <text
          x={viewport.width / 2.0}
          y=28.0
          text-anchor="middle"
          font-size="20"
          font-weight="bold"
          fill=TEXT_COLOR
        >
          { CHART_TITLE }
        </text>
        <g>
          <rect
            x={viewport.width / 2.0 - 70.0}
            y=42.0
            width=36.0
            height=12.0
            fill=legend_color
          />
          <text x={viewport.width / 2.0 - 28.0} y=52.0 font-size="12" fill=TEXT_COLOR>
            { CHART_TITLE }
          </text>
        </g>
        { grid }
        { bars }
        <line
          x1={plot.x}
          x2={plot.x}
          y1={plot.y}
          y2={plot.bottom()}
          stroke=AXIS_COLOR
        />
        <line
          x1={plot.x}
          x2={plot.right()}
          y1={plot.bottom()}
          y2={plot.bottom()}
          stroke=AXIS_COLOR
        />
        <text
          x={plot.center_x()}
          y={viewport.height - 8.0}
          text-anchor="middle"
          font-size="16"
          font-weight="bold"
          fill=TEXT_COLOR
        >
          { X_AXIS_TITLE }
        </text>
        <text
          x=20.0
          y=center_y
          transform={format!("rotate(-90 20 {center_y})")}
          text-anchor="middle"
          font-size="16"
          font-weight="bold"
          fill=TEXT_COLOR
        >
          { Y_AXIS_TITLE }
        </text>
      </svg>
    }
}
