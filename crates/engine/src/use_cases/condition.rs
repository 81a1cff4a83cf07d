//! Editing a combat condition.
//!
//! The editor works on its own copy of the condition. Every edit updates the
//! copy and reports it through a [`ConditionSink`].

use herobldr_domain::{Condition, ConditionEndType, ConditionType};
use serde::Serialize;

use crate::infrastructure::ports::ConditionSink;

pub const CUSTOM_TEXT_LABEL: &str = "Custom Condition Text";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConditionBody {
    /// Free text for a custom condition
    CustomText { label: String, text: String },
    /// Fixed rules text for a standard condition
    Rules { label: String, description: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndTypeOption {
    pub value: ConditionEndType,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionView {
    pub condition_id: String,
    pub body: ConditionBody,
    pub end_types: Vec<EndTypeOption>,
}

pub struct ConditionEditor<'s> {
    condition: Condition,
    sink: &'s mut dyn ConditionSink,
}

impl<'s> ConditionEditor<'s> {
    pub fn new(condition: &Condition, sink: &'s mut dyn ConditionSink) -> Self {
        Self {
            condition: condition.clone(),
            sink,
        }
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.condition.text = text.into();
        self.report();
    }

    pub fn set_end_type(&mut self, ends: ConditionEndType) {
        self.condition.ends = ends;
        self.report();
    }

    /// Ask for the condition to be removed.
    pub fn delete(self) {
        tracing::debug!(condition_id = %self.condition.id, "Deleting condition");
        self.sink.on_delete(self.condition);
    }

    pub fn view(&self) -> ConditionView {
        let body = match self.condition.condition_type {
            ConditionType::Custom => ConditionBody::CustomText {
                label: CUSTOM_TEXT_LABEL.to_string(),
                text: self.condition.text.clone(),
            },
            other => ConditionBody::Rules {
                label: other.to_string(),
                description: other.description().to_string(),
            },
        };

        ConditionView {
            condition_id: self.condition.id.clone(),
            body,
            end_types: ConditionEndType::ALL
                .iter()
                .map(|&value| EndTypeOption {
                    value,
                    label: value.to_string(),
                    selected: value == self.condition.ends,
                })
                .collect(),
        }
    }

    fn report(&mut self) {
        tracing::debug!(
            condition_id = %self.condition.id,
            condition_type = ?self.condition.condition_type,
            ends = ?self.condition.ends,
            "Updated condition"
        );
        self.sink.on_change(self.condition.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockConditionSink;

    #[test]
    fn custom_conditions_show_their_text() {
        let mut condition = Condition::new(ConditionType::Custom, ConditionEndType::EndOfTurn);
        condition.text = "Covered in honey".to_string();
        let mut sink = MockConditionSink::new();

        let editor = ConditionEditor::new(&condition, &mut sink);
        let view = editor.view();

        assert_eq!(
            view.body,
            ConditionBody::CustomText {
                label: "Custom Condition Text".to_string(),
                text: "Covered in honey".to_string(),
            }
        );
        let selected: Vec<_> = view.end_types.iter().filter(|o| o.selected).map(|o| o.value).collect();
        assert_eq!(selected, vec![ConditionEndType::EndOfTurn]);
        assert_eq!(view.end_types[1].label, "Save Ends");
    }

    #[test]
    fn standard_conditions_show_rules_text() {
        let condition = Condition::new(ConditionType::Prone, ConditionEndType::SaveEnds);
        let mut sink = MockConditionSink::new();

        let view = ConditionEditor::new(&condition, &mut sink).view();

        match view.body {
            ConditionBody::Rules { label, description } => {
                assert_eq!(label, "Prone");
                assert_eq!(description, ConditionType::Prone.description());
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn edits_report_the_updated_copy() {
        let condition = Condition::new(ConditionType::Custom, ConditionEndType::EndOfTurn);
        let id = condition.id.clone();
        let mut sink = MockConditionSink::new();
        sink.expect_on_change()
            .withf(|c| c.text == "Soaked" && c.ends == ConditionEndType::EndOfTurn)
            .times(1)
            .return_const(());
        sink.expect_on_change()
            .withf(|c| c.text == "Soaked" && c.ends == ConditionEndType::SaveEnds)
            .times(1)
            .return_const(());
        sink.expect_on_delete().never();

        let mut editor = ConditionEditor::new(&condition, &mut sink);
        editor.set_text("Soaked");
        editor.set_end_type(ConditionEndType::SaveEnds);

        assert_eq!(editor.condition().id, id);
        assert_eq!(editor.condition().text, "Soaked");
    }

    #[test]
    fn the_original_condition_is_left_alone() {
        let condition = Condition::new(ConditionType::Custom, ConditionEndType::EndOfTurn);
        let mut sink = MockConditionSink::new();
        sink.expect_on_change().return_const(());

        let mut editor = ConditionEditor::new(&condition, &mut sink);
        editor.set_text("Sticky");

        assert!(condition.text.is_empty());
    }

    #[test]
    fn delete_reports_the_current_copy() {
        let condition = Condition::new(ConditionType::Custom, ConditionEndType::EndOfTurn);
        let id = condition.id.clone();
        let mut sink = MockConditionSink::new();
        sink.expect_on_change().times(1).return_const(());
        sink.expect_on_delete()
            .withf(move |c| c.id == id && c.text == "Gone soon")
            .times(1)
            .return_const(());

        let mut editor = ConditionEditor::new(&condition, &mut sink);
        editor.set_text("Gone soon");
        editor.delete();
    }
}
