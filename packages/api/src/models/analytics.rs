//! Rows returned by the analytics endpoints.

use serde::{Deserialize, Serialize};

use super::de;

/// One `{title, value}` entry of `GET /api/analytics/overview`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewStat {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "de::display")]
    pub value: String,
}

/// One metric of `GET /api/user/analytics/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsMetric {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "de::display")]
    pub value: String,
    #[serde(default)]
    pub change: Option<String>,
}

/// One entry of `GET /api/user/activities/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub link_type: String,
    #[serde(default)]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_values_accept_numbers() {
        let stats: Vec<OverviewStat> = serde_json::from_str(
            r#"[{"title": "Total Profile Views", "value": 120},
                {"title": "Engagement Rate", "value": "4.5"},
                {"title": "Total Link Clicks", "value": null}]"#,
        )
        .unwrap();

        assert_eq!(stats[0].value, "120");
        assert_eq!(stats[1].value, "4.5");
        assert_eq!(stats[2].value, "0");
    }
}
