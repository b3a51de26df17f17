// services/tile-dash/src/components/charts.rs
//
// Tile Dashboard - Grade Bar Chart and Status Donut
// Both charts follow the filtered record list
//

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use leptos::*;
use tilekit::query::{self, StatusSlice};
use crate::state::DashState;

const BAR_COLOR: &str = "#4F46E5";
const SLICE_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

// Bar chart plot area inside a 400x220 viewBox
const PLOT_LEFT: f64 = 32.0;
const PLOT_TOP: f64 = 12.0;
const PLOT_WIDTH: f64 = 356.0;
const PLOT_HEIGHT: f64 = 176.0;

// Donut geometry inside a 320x240 viewBox
const DONUT_CX: f64 = 160.0;
const DONUT_CY: f64 = 120.0;
const DONUT_OUTER: f64 = 70.0;
const DONUT_INNER: f64 = 48.0;

#[component]
pub fn Charts(state: DashState) -> impl IntoView {
    let filtered = create_memo(move |_| state.query.with(|q| q.filtered()));
    let grades = create_memo(move |_| filtered.with(|r| query::grade_histogram(r)));
    let statuses = create_memo(move |_| filtered.with(|r| query::status_breakdown(r)));
    let has_data = move || filtered.with(|r| !r.is_empty());

    view! {
        <div class="charts-row">
            <section class="panel chart-panel">
                <h2 class="panel-title">"Samples by Grade"</h2>
                <Show when=has_data fallback=|| view! { <EmptyChart /> }>
                    <GradeBars series=grades />
                </Show>
            </section>

            <section class="panel chart-panel">
                <h2 class="panel-title">"Sample Status"</h2>
                <Show when=has_data fallback=|| view! { <EmptyChart /> }>
                    <StatusDonut slices=statuses />
                </Show>
            </section>
        </div>
    }
}

#[component]
fn EmptyChart() -> impl IntoView {
    view! { <p class="chart-empty">"No data to chart."</p> }
}

#[component]
fn GradeBars(series: Memo<Vec<(String, usize)>>) -> impl IntoView {
    let bars = move || series.with(|s| bar_layout(s, PLOT_WIDTH, PLOT_HEIGHT));
    let top = move || series.with(|s| s.iter().map(|(_, c)| *c).max().unwrap_or(0));
    let baseline = PLOT_TOP + PLOT_HEIGHT;

    view! {
        <svg class="chart-svg" viewBox="0 0 400 220">
            // Axes
            <line x1=PLOT_LEFT y1=PLOT_TOP x2=PLOT_LEFT y2=baseline class="axis-line" />
            <line x1=PLOT_LEFT y1=baseline x2={PLOT_LEFT + PLOT_WIDTH} y2=baseline class="axis-line" />
            <text x={PLOT_LEFT - 6.0} y={PLOT_TOP + 4.0} class="axis-label" text-anchor="end">
                {top}
            </text>
            <text x={PLOT_LEFT - 6.0} y=baseline class="axis-label" text-anchor="end">"0"</text>

            {move || {
                bars()
                    .into_iter()
                    .map(|bar| {
                        let x = PLOT_LEFT + bar.x;
                        let y = PLOT_TOP + bar.y;
                        view! {
                            <g class="bar">
                                <rect
                                    x=x
                                    y=y
                                    width={bar.width}
                                    height={bar.height}
                                    rx="3"
                                    fill=BAR_COLOR
                                />
                                <text
                                    x={x + bar.width / 2.0}
                                    y={y - 4.0}
                                    class="bar-value"
                                    text-anchor="middle"
                                >
                                    {bar.count}
                                </text>
                                <text
                                    x={x + bar.width / 2.0}
                                    y={baseline + 16.0}
                                    class="axis-label"
                                    text-anchor="middle"
                                >
                                    {bar.label.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}

#[component]
fn StatusDonut(slices: Memo<Vec<StatusSlice>>) -> impl IntoView {
    let active = create_rw_signal(0usize);

    // The slice set can shrink under a filter change
    let active_index = move || {
        let len = slices.with(|s| s.len());
        active.get().min(len.saturating_sub(1))
    };

    let annotation = move || {
        let index = active_index();
        slices.with(|s| {
            let arcs = donut_arcs(s);
            s.get(index).zip(arcs.get(index).copied()).map(|(slice, arc)| {
                let callout = callout(arc);
                let (count, rate) = annotation_text(slice);
                view! {
                    <g class="donut-annotation">
                        <path
                            d=format!(
                                "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2}",
                                callout.start.0, callout.start.1,
                                callout.elbow.0, callout.elbow.1,
                                callout.end.0, callout.end.1,
                            )
                            fill="none"
                            stroke=slice_color(index)
                        />
                        <circle cx={callout.end.0} cy={callout.end.1} r="2" fill=slice_color(index) />
                        <text x={callout.label_x()} y={callout.end.1} text-anchor={callout.anchor} class="donut-count">
                            {count}
                        </text>
                        <text x={callout.label_x()} y={callout.end.1 + 14.0} text-anchor={callout.anchor} class="donut-rate">
                            {rate}
                        </text>
                    </g>
                }
            })
        })
    };

    view! {
        <div class="status-donut">
            <svg class="chart-svg" viewBox="0 0 320 240">
                {move || {
                    let current = active_index();
                    slices.with(|s| {
                        donut_arcs(s)
                            .into_iter()
                            .enumerate()
                            .map(|(i, arc)| {
                                let outer = if i == current { DONUT_OUTER + 6.0 } else { DONUT_OUTER };
                                view! {
                                    <path
                                        class="donut-slice"
                                        d={arc_path(DONUT_CX, DONUT_CY, outer, DONUT_INNER, arc.start, arc.end)}
                                        fill=slice_color(i)
                                        on:mouseenter=move |_| active.set(i)
                                    />
                                }
                            })
                            .collect_view()
                    })
                }}
                {annotation}
            </svg>

            <ul class="chart-legend">
                {move || {
                    slices.with(|s| {
                        s.iter()
                            .enumerate()
                            .map(|(i, slice)| {
                                view! {
                                    <li class="legend-item" on:mouseenter=move |_| active.set(i)>
                                        <span class="legend-swatch" style=format!("background: {}", slice_color(i))></span>
                                        <span class="legend-label">{slice.status.clone()}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
            </ul>
        </div>
    }
}

/// Screen-space rectangle for one histogram bar, relative to the plot origin
#[derive(Debug, Clone, PartialEq)]
struct Bar {
    label: String,
    count: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Lay out bars in equal slots; the tallest bar fills the plot height
fn bar_layout(series: &[(String, usize)], width: f64, height: f64) -> Vec<Bar> {
    let max = series.iter().map(|(_, c)| *c).max().unwrap_or(0);
    if series.is_empty() || max == 0 {
        return Vec::new();
    }

    let slot = width / series.len() as f64;
    series
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let h = *count as f64 / max as f64 * height;
            Bar {
                label: label.clone(),
                count: *count,
                x: i as f64 * slot + slot * 0.2,
                y: height - h,
                width: slot * 0.6,
                height: h,
            }
        })
        .collect()
}

/// Angular extent of a donut slice, in radians clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
struct SliceArc {
    start: f64,
    end: f64,
}

impl SliceArc {
    fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

fn donut_arcs(slices: &[StatusSlice]) -> Vec<SliceArc> {
    let mut cursor = -FRAC_PI_2;
    slices
        .iter()
        .map(|slice| {
            let start = cursor;
            cursor += slice.share * TAU;
            SliceArc { start, end: cursor }
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for a ring segment
fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A full turn collapses to nothing in SVG arc syntax
    let sweep = (end - start).clamp(0.0, TAU - 1e-4);
    let end = start + sweep;
    let large = if sweep > PI { 1 } else { 0 };

    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);

    format!(
        "M {:.2} {:.2} A {} {} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {} {} 0 {} 0 {:.2} {:.2} Z",
        ox0, oy0, outer, outer, large, ox1, oy1, ix1, iy1, inner, inner, large, ix0, iy0
    )
}

/// Leader line from a slice edge out to its label
struct Callout {
    start: (f64, f64),
    elbow: (f64, f64),
    end: (f64, f64),
    anchor: &'static str,
}

impl Callout {
    fn label_x(&self) -> f64 {
        if self.anchor == "start" {
            self.end.0 + 6.0
        } else {
            self.end.0 - 6.0
        }
    }
}

fn callout(arc: SliceArc) -> Callout {
    let angle = arc.mid();
    let right = angle.cos() >= 0.0;
    let start = polar(DONUT_CX, DONUT_CY, DONUT_OUTER + 8.0, angle);
    let elbow = polar(DONUT_CX, DONUT_CY, DONUT_OUTER + 22.0, angle);
    let end = (elbow.0 + if right { 18.0 } else { -18.0 }, elbow.1);

    Callout {
        start,
        elbow,
        end,
        anchor: if right { "start" } else { "end" },
    }
}

/// Two-line label for the active slice
fn annotation_text(slice: &StatusSlice) -> (String, String) {
    (
        format!("Count {}", slice.count),
        format!("(Rate {:.2}%)", slice.share * 100.0),
    )
}

fn slice_color(index: usize) -> &'static str {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}
