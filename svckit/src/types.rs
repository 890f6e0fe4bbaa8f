use serde::{Deserialize, Deserializer, Serialize};

/// Response of `GET /api/analytics/dashboard`.
///
/// Every section is optional on the wire; display components decide what to
/// show when one is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub fault_distribution: Option<FaultDistribution>,
    pub product_health: Option<ProductHealth>,
    pub resolution_metrics: Option<ResolutionMetrics>,
    pub critical_alerts: Option<CriticalAlerts>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FaultDistribution {
    #[serde(default)]
    pub total_faults: u64,
    #[serde(default, deserialize_with = "nullable_list")]
    pub distribution: Vec<FaultShare>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaultShare {
    pub fault_type: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductHealth {
    #[serde(default, deserialize_with = "nullable_list")]
    pub scores: Vec<ProductScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductScore {
    pub product_id: Option<i64>,
    pub product_name: String,
    pub category: String,
    pub health_score: f64,
    #[serde(default)]
    pub complaint_count: u64,
}

impl ProductScore {
    pub fn band(&self) -> HealthBand {
        HealthBand::classify(self.health_score)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResolutionMetrics {
    pub total_resolved: u64,
    pub avg_resolution_days: f64,
    pub median_resolution_days: f64,
    pub min_resolution_days: f64,
    pub max_resolution_days: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CriticalAlerts {
    #[serde(default, deserialize_with = "nullable_list")]
    pub critical_products: Vec<CriticalProduct>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub unresolved_fault_types: Vec<UnresolvedFault>,
}

impl CriticalAlerts {
    pub fn has_alerts(&self) -> bool {
        !self.critical_products.is_empty() || !self.unresolved_fault_types.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CriticalProduct {
    pub product: String,
    pub critical_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnresolvedFault {
    pub fault_type: String,
    pub unresolved_count: u64,
}

/// Response of `GET /api/stats/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SummaryStats {
    pub total_complaints: Option<u64>,
    pub resolved_complaints: Option<u64>,
    pub resolution_rate: Option<f64>,
    pub critical_complaints: Option<u64>,
    pub open_complaints: Option<u64>,
    pub average_satisfaction: Option<Vec<SatisfactionEntry>>,
}

/// One rated complaint. The backend sends whole complaint records here; only
/// the rating is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SatisfactionEntry {
    pub customer_satisfaction: Option<f64>,
}

impl SummaryStats {
    /// Mean rating, `None` when nothing was rated.
    pub fn average_satisfaction(&self) -> Option<f64> {
        let ratings: Vec<f64> = self
            .average_satisfaction
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|entry| entry.customer_satisfaction)
            .collect();

        if ratings.is_empty() {
            return None;
        }

        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }

    pub fn average_satisfaction_display(&self) -> String {
        match self.average_satisfaction() {
            Some(avg) => one_decimal(avg),
            None => "N/A".to_string(),
        }
    }
}

/// Formats `value` to one decimal from its exact binary value, so 4.35
/// (stored as 4.3499...) gives "4.3". Exact ties such as 4.25 round away
/// from zero.
pub fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    let exact_tie = quarters.fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if exact_tie {
        let up = (value * 10.0).abs().ceil().copysign(value) / 10.0;
        format!("{:.1}", up)
    } else {
        format!("{:.1}", value)
    }
}

/// Response of `GET /api/analytics/trends?days=N`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendSeries {
    pub period_days: Option<u32>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub data: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub date: String,
    pub complaints: u64,
}

/// Qualitative bucket for a 0-100 product health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthBand {
    pub fn classify(score: f64) -> Self {
        if score >= 80.0 {
            HealthBand::Excellent
        } else if score >= 60.0 {
            HealthBand::Good
        } else if score >= 40.0 {
            HealthBand::Fair
        } else {
            HealthBand::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthBand::Excellent => "Excellent",
            HealthBand::Good => "Good",
            HealthBand::Fair => "Fair",
            HealthBand::Poor => "Poor",
        }
    }

    /// green #16a34a, amber #f59e0b, orange #ea580c, red #dc2626
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            HealthBand::Excellent => (0x16, 0xa3, 0x4a),
            HealthBand::Good => (0xf5, 0x9e, 0x0b),
            HealthBand::Fair => (0xea, 0x58, 0x0c),
            HealthBand::Poor => (0xdc, 0x26, 0x26),
        }
    }
}

// `null` and a missing key both mean "no entries".
fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
