// services/tile-dash/src/components/stats.rs
//
// Tile Dashboard - KPI Cards Component
//

use leptos::*;
use tilekit::query::Metrics;
use crate::state::DashState;

#[component]
pub fn StatsCards(state: DashState) -> impl IntoView {
    // Headline numbers always cover the full list, not the filtered view
    let metrics = create_memo(move |_| state.query.with(|q| q.metrics()));

    view! {
        <div class="stats-grid">
            <KpiCard
                metrics=metrics
                pick=|m| m.total
                label="Total Tile Samples"
                icon="▦"
                tone="stat-info"
            />
            <KpiCard
                metrics=metrics
                pick=|m| m.unique_brands
                label="Unique Brands"
                icon="◈"
                tone="stat-neutral"
            />
            <KpiCard
                metrics=metrics
                pick=|m| m.active_samples
                label="Active Samples"
                icon="✓"
                tone="stat-success"
                detail=active_share
            />
        </div>
    }
}

/// One headline number read out of the shared metrics memo
#[component]
fn KpiCard(
    metrics: Memo<Metrics>,
    pick: fn(&Metrics) -> usize,
    label: &'static str,
    icon: &'static str,
    tone: &'static str,
    #[prop(optional)] detail: Option<fn(&Metrics) -> String>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", tone)>
            <div class="stat-icon">{icon}</div>
            <div class="stat-content">
                <span class="stat-value">
                    {move || metrics.with(|m| group_thousands(pick(m)))}
                </span>
                <span class="stat-label">{label}</span>
                {detail.map(|describe| {
                    view! {
                        <span class="stat-detail">{move || metrics.with(describe)}</span>
                    }
                })}
            </div>
        </div>
    }
}

/// Share of the list still marked active
fn active_share(metrics: &Metrics) -> String {
    if metrics.total == 0 {
        return "no samples yet".to_string();
    }
    let percent = metrics.active_samples as f64 / metrics.total as f64 * 100.0;
    format!("{:.0}% of samples", percent)
}

/// Group digits in threes: 12345 -> "12,345"
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12345), "12,345");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_active_share() {
        let metrics = Metrics {
            total: 8,
            unique_brands: 3,
            active_samples: 6,
        };
        assert_eq!(active_share(&metrics), "75% of samples");
        assert_eq!(active_share(&Metrics::default()), "no samples yet");
    }
}
