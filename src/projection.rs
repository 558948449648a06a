use crate::models::{MonthlySummary, ProjectionPoint};

/// Number of most recent months averaged for the projection slope.
pub const DEFAULT_WINDOW: usize = 3;

/// The fixed projection horizons offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    OneYear,
    ThreeYears,
    FiveYears,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::OneYear, Horizon::ThreeYears, Horizon::FiveYears];

    pub fn months(self) -> u32 {
        match self {
            Horizon::OneYear => 12,
            Horizon::ThreeYears => 36,
            Horizon::FiveYears => 60,
        }
    }

    pub fn from_months(months: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.months() == months)
    }
}

/// Map a requested month count onto the horizon menu. Anything outside the
/// menu projects zero months, i.e. only the starting point.
pub fn horizon_months(requested: u32) -> u32 {
    match Horizon::from_months(requested) {
        Some(h) => h.months(),
        None => {
            tracing::warn!(requested, "unsupported projection horizon, projecting 0 months");
            0
        }
    }
}

/// Mean net profit of the first `window` summaries, which must be ordered
/// most recent first. `None` when there is no history at all. A `window` of 0
/// is treated as 1, so existing history always yields an average.
pub fn average_recent_net_profit(summaries: &[MonthlySummary], window: usize) -> Option<f64> {
    let recent = &summaries[..summaries.len().min(window.max(1))];
    if recent.is_empty() {
        return None;
    }
    let total: f64 = recent.iter().map(|s| s.net_profit).sum();
    Some(total / recent.len() as f64)
}

/// Linear projection: `months + 1` points starting at `(0, initial_balance)`.
pub fn project_balance(initial_balance: f64, monthly_net_profit: f64, months: u32) -> Vec<ProjectionPoint> {
    let mut balance = initial_balance;
    let mut points = Vec::with_capacity(months as usize + 1);
    points.push(ProjectionPoint { month: 0, balance });
    for month in 1..=months {
        balance += monthly_net_profit;
        points.push(ProjectionPoint { month, balance });
    }
    points
}
