// services/resolve-dash/src/mock.rs
//
// Demo data source for running without a backend

use async_trait::async_trait;
use chrono::{Duration, Local};
use rand::Rng;
use svckit::types::{
    CriticalAlerts, CriticalProduct, DashboardData, FaultDistribution, FaultShare, HealthBand,
    ProductHealth, ProductScore, ResolutionMetrics, SatisfactionEntry, SummaryStats, TrendPoint,
    TrendSeries, UnresolvedFault,
};
use svckit::DashResult;

use crate::api::AnalyticsApi;

const PRODUCTS: &[(&str, &str)] = &[
    ("EarBud Pro X", "earbuds"),
    ("EarBud Lite", "earbuds"),
    ("Headphone Max", "headphones"),
    ("Headphone Studio", "headphones"),
    ("Speaker Boom", "speakers"),
    ("Speaker Mini", "speakers"),
    ("Watch Ultra", "smartwatches"),
    ("Watch Fit", "smartwatches"),
];

const FAULT_TYPES: &[&str] = &[
    "Battery Issue",
    "Audio Quality",
    "Connectivity",
    "Physical Damage",
    "Software Bug",
    "Firmware Update",
    "Warranty/Return",
    "Performance",
];

/// Generates fresh randomized analytics on every call.
#[derive(Debug, Default)]
pub struct MockAnalyticsApi;

impl MockAnalyticsApi {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnalyticsApi for MockAnalyticsApi {
    async fn health(&self) -> DashResult<()> {
        Ok(())
    }

    async fn dashboard(&self) -> DashResult<DashboardData> {
        Ok(generate_dashboard())
    }

    async fn summary(&self) -> DashResult<SummaryStats> {
        Ok(generate_summary())
    }

    async fn trends(&self, days: u32) -> DashResult<TrendSeries> {
        Ok(generate_trends(days))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn generate_dashboard() -> DashboardData {
    let mut rng = rand::thread_rng();

    let counts: Vec<u64> = FAULT_TYPES.iter().map(|_| rng.gen_range(5..60)).collect();
    let total_faults: u64 = counts.iter().sum();
    let mut distribution: Vec<FaultShare> = FAULT_TYPES
        .iter()
        .zip(&counts)
        .map(|(fault_type, count)| FaultShare {
            fault_type: fault_type.to_string(),
            count: *count,
            percentage: round2(*count as f64 / total_faults as f64 * 100.0),
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count));

    let mut scores: Vec<ProductScore> = PRODUCTS
        .iter()
        .enumerate()
        .map(|(idx, (name, category))| ProductScore {
            product_id: Some(idx as i64 + 1),
            product_name: name.to_string(),
            category: category.to_string(),
            health_score: round2(rng.gen_range(25.0..98.0)),
            complaint_count: rng.gen_range(3..45),
        })
        .collect();
    scores.sort_by(|a, b| b.health_score.total_cmp(&a.health_score));

    let critical_products = scores
        .iter()
        .filter(|p| p.band() == HealthBand::Poor)
        .map(|p| CriticalProduct {
            product: p.product_name.clone(),
            critical_count: rng.gen_range(1..8),
        })
        .collect();

    let unresolved_fault_types = distribution
        .iter()
        .take(rng.gen_range(0..3))
        .map(|f| UnresolvedFault {
            fault_type: f.fault_type.clone(),
            unresolved_count: f.count / 3,
        })
        .collect();

    let min = rng.gen_range(0.5..2.0);
    let max = rng.gen_range(10.0..21.0);

    DashboardData {
        fault_distribution: Some(FaultDistribution {
            total_faults,
            distribution,
        }),
        product_health: Some(ProductHealth { scores }),
        resolution_metrics: Some(ResolutionMetrics {
            total_resolved: rng.gen_range(80..160),
            avg_resolution_days: round2(rng.gen_range(min..max)),
            median_resolution_days: round2(rng.gen_range(min..max)),
            min_resolution_days: round2(min),
            max_resolution_days: round2(max),
        }),
        critical_alerts: Some(CriticalAlerts {
            critical_products,
            unresolved_fault_types,
        }),
        timestamp: Some(Local::now().to_rfc3339()),
    }
}

fn generate_summary() -> SummaryStats {
    let mut rng = rand::thread_rng();

    let total: u64 = rng.gen_range(180..260);
    let resolved = rng.gen_range(total / 2..total);
    let ratings = (0..rng.gen_range(20..60))
        .map(|_| SatisfactionEntry {
            customer_satisfaction: Some(rng.gen_range(1..=5) as f64),
        })
        .collect();

    SummaryStats {
        total_complaints: Some(total),
        resolved_complaints: Some(resolved),
        resolution_rate: Some(round2(resolved as f64 / total as f64 * 100.0)),
        critical_complaints: Some(rng.gen_range(2..20)),
        open_complaints: Some(total - resolved),
        average_satisfaction: Some(ratings),
    }
}

fn generate_trends(days: u32) -> TrendSeries {
    let mut rng = rand::thread_rng();
    let today = Local::now().date_naive();

    let data = (0..days)
        .rev()
        .map(|offset| TrendPoint {
            date: (today - Duration::days(offset as i64))
                .format("%Y-%m-%d")
                .to_string(),
            complaints: rng.gen_range(2..18),
        })
        .collect();

    TrendSeries {
        period_days: Some(days),
        data,
    }
}
