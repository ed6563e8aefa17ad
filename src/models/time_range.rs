/// Lookback-window selector for the trend chart.
///
/// Each token maps to a fixed window in days. The sub-day tokens are
/// approximations (0.01 and 0.04 of a day), not exact minute/hour spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Minutes15,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minutes15 => "15m",
            Self::Hour => "1h",
            Self::Day => "1d",
            Self::Week => "1w",
            Self::Month => "1M",
            Self::Quarter => "3M",
            Self::Year => "1Y",
        }
    }

    /// Parse a range token. Tokens are case-sensitive ("1M" is a month,
    /// "15m" is minutes).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "15m" => Some(Self::Minutes15),
            "1h" => Some(Self::Hour),
            "1d" => Some(Self::Day),
            "1w" => Some(Self::Week),
            "1M" => Some(Self::Month),
            "3M" => Some(Self::Quarter),
            "1Y" => Some(Self::Year),
            _ => None,
        }
    }

    pub fn all() -> &'static [TimeRange] {
        &[
            Self::Minutes15,
            Self::Hour,
            Self::Day,
            Self::Week,
            Self::Month,
            Self::Quarter,
            Self::Year,
        ]
    }

    /// Window length in days.
    pub fn window_days(&self) -> f64 {
        match self {
            Self::Minutes15 => 0.01,
            Self::Hour => 0.04,
            Self::Day => 1.0,
            Self::Week => 7.0,
            Self::Month => 30.0,
            Self::Quarter => 90.0,
            Self::Year => 365.0,
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
