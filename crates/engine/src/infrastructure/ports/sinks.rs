use herobldr_domain::{Condition, FeatureData};

/// Receives the payload a feature should now carry.
#[cfg_attr(test, mockall::automock)]
pub trait FeatureDataSink {
    fn set_data(&mut self, feature_id: &str, data: FeatureData);
}

/// Receives edits to, and removal of, a combat condition.
#[cfg_attr(test, mockall::automock)]
pub trait ConditionSink {
    fn on_change(&mut self, condition: Condition);
    fn on_delete(&mut self, condition: Condition);
}

/// Collects committed payloads in order; handy for callers that batch writes.
impl FeatureDataSink for Vec<(String, FeatureData)> {
    fn set_data(&mut self, feature_id: &str, data: FeatureData) {
        self.push((feature_id.to_string(), data));
    }
}
