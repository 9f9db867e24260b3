//! Analytics sink collaborator.
//!
//! Published pages report events through their inline tracking script. The
//! sink is fire-and-forget: recording never returns an error to the caller.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

const TOP_ELEMENTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsEventType {
    Visit,
    Click,
    Scroll,
    Conversion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    #[serde(alias = "pageId")]
    pub document_id: String,
    pub event_type: AnalyticsEventType,
    pub timestamp: DateTime<Utc>,
    pub visitor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AnalyticsEvent {
    /// What a click landed on: an explicit `buttonId`, else the link or
    /// button text, else its tag name.
    pub fn click_target(&self) -> Option<String> {
        let details = self.details.as_ref()?;
        ["buttonId", "text", "element"]
            .iter()
            .filter_map(|key| details.get(key).and_then(Value::as_str))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }
}

pub trait AnalyticsSink {
    fn record(&self, event: AnalyticsEvent);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    pub date: NaiveDate,
    pub visits: u64,
    pub clicks: u64,
    pub conversions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementCount {
    pub element: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_visits: u64,
    pub unique_visitors: u64,
    pub total_clicks: u64,
    pub total_conversions: u64,
    pub daily: Vec<DailyCount>,
    pub top_elements: Vec<ElementCount>,
}

/// Keeps every event in memory and aggregates on demand
#[derive(Debug, Default)]
pub struct MemoryAnalytics {
    events: RefCell<Vec<AnalyticsEvent>>,
}

impl MemoryAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }

    pub fn summary(&self, document_id: &str) -> AnalyticsSummary {
        let events = self.events.borrow();
        let mut summary = AnalyticsSummary::default();
        let mut visitors = BTreeSet::new();
        let mut daily: BTreeMap<NaiveDate, DailyCount> = BTreeMap::new();
        let mut clicked: HashMap<String, u64> = HashMap::new();

        for event in events.iter().filter(|e| e.document_id == document_id) {
            let date = event.timestamp.date_naive();
            let day = daily.entry(date).or_insert_with(|| DailyCount {
                date,
                visits: 0,
                clicks: 0,
                conversions: 0,
            });

            match event.event_type {
                AnalyticsEventType::Visit => {
                    summary.total_visits += 1;
                    day.visits += 1;
                    visitors.insert(event.visitor_id.as_str());
                }
                AnalyticsEventType::Click => {
                    summary.total_clicks += 1;
                    day.clicks += 1;
                    if let Some(target) = event.click_target() {
                        *clicked.entry(target).or_default() += 1;
                    }
                }
                AnalyticsEventType::Conversion => {
                    summary.total_conversions += 1;
                    day.conversions += 1;
                }
                AnalyticsEventType::Scroll => {}
            }
        }

        let mut top: Vec<ElementCount> = clicked
            .into_iter()
            .map(|(element, count)| ElementCount { element, count })
            .collect();
        top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.element.cmp(&b.element)));
        top.truncate(TOP_ELEMENTS);

        summary.unique_visitors = visitors.len() as u64;
        summary.daily = daily.into_values().collect();
        summary.top_elements = top;
        summary
    }
}

impl AnalyticsSink for MemoryAnalytics {
    fn record(&self, event: AnalyticsEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn event(
        event_type: AnalyticsEventType,
        visitor: &str,
        day: u32,
        details: Option<Value>,
    ) -> AnalyticsEvent {
        AnalyticsEvent {
            document_id: "page-1".to_string(),
            event_type,
            timestamp: Utc.with_ymd_and_hms(2024, 5, day, 10, 0, 0).unwrap(),
            visitor_id: visitor.to_string(),
            details,
        }
    }

    #[test]
    fn test_summary_counts() {
        let sink = MemoryAnalytics::new();
        sink.record(event(AnalyticsEventType::Visit, "a", 1, None));
        sink.record(event(AnalyticsEventType::Visit, "a", 1, None));
        sink.record(event(AnalyticsEventType::Visit, "b", 2, None));
        sink.record(event(
            AnalyticsEventType::Click,
            "a",
            2,
            Some(json!({ "element": "A", "text": "Get Started" })),
        ));
        sink.record(event(AnalyticsEventType::Conversion, "b", 2, None));
        sink.record(event(AnalyticsEventType::Scroll, "b", 2, None));

        let summary = sink.summary("page-1");
        assert_eq!(summary.total_visits, 3);
        assert_eq!(summary.unique_visitors, 2);
        assert_eq!(summary.total_clicks, 1);
        assert_eq!(summary.total_conversions, 1);
        assert_eq!(summary.daily.len(), 2);
        assert_eq!(summary.daily[0].visits, 2);
        assert_eq!(summary.daily[1].clicks, 1);
        assert_eq!(summary.top_elements[0].element, "Get Started");
    }

    #[test]
    fn test_top_elements_are_capped_and_ranked() {
        let sink = MemoryAnalytics::new();
        for i in 0..12 {
            for _ in 0..=i {
                sink.record(event(
                    AnalyticsEventType::Click,
                    "v",
                    1,
                    Some(json!({ "buttonId": format!("btn-{:02}", i) })),
                ));
            }
        }

        let top = sink.summary("page-1").top_elements;
        assert_eq!(top.len(), 10);
        assert_eq!(top[0], ElementCount { element: "btn-11".to_string(), count: 12 });
        assert_eq!(top[9].element, "btn-02");
    }

    #[test]
    fn test_other_documents_are_ignored() {
        let sink = MemoryAnalytics::new();
        sink.record(event(AnalyticsEventType::Visit, "a", 1, None));

        assert_eq!(sink.summary("page-2"), AnalyticsSummary::default());
    }

    #[test]
    fn test_event_accepts_legacy_page_id() {
        let event: AnalyticsEvent = serde_json::from_value(json!({
            "pageId": "p",
            "eventType": "click",
            "timestamp": "2024-05-01T10:00:00Z",
            "visitorId": "v",
            "details": { "element": "BUTTON", "text": "  " }
        }))
        .unwrap();

        assert_eq!(event.document_id, "p");
        assert_eq!(event.click_target().as_deref(), Some("BUTTON"));
    }
}
