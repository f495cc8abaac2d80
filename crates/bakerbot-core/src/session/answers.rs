//! Order answers collected by the flow.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// A field of the custom order.
///
/// The declaration order is the order the fields appear in summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum OrderField {
    Type,
    Flavor,
    Occasion,
    Size,
    Theme,
    Budget,
    Name,
    Phone,
    DeliveryDate,
}

impl OrderField {
    /// Stable human-readable label used in summaries and the handoff text.
    pub fn label(&self) -> &'static str {
        match self {
            OrderField::Type => "Type",
            OrderField::Flavor => "Flavor",
            OrderField::Occasion => "Occasion",
            OrderField::Size => "Size",
            OrderField::Theme => "Theme",
            OrderField::Budget => "Budget",
            OrderField::Name => "Name",
            OrderField::Phone => "Phone",
            OrderField::DeliveryDate => "Delivery Date",
        }
    }

    /// Whether the field describes the customer rather than the bake.
    pub fn is_customer_detail(&self) -> bool {
        matches!(
            self,
            OrderField::Name | OrderField::Phone | OrderField::DeliveryDate
        )
    }

    pub fn all() -> impl Iterator<Item = OrderField> {
        OrderField::iter()
    }
}

/// Mapping from order field to the customer's answer.
///
/// Only ever mutated one field at a time; no cross-field checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderAnswers(BTreeMap<OrderField, String>);

impl OrderAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: OrderField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Stores `value`, returning the previous answer if any.
    pub fn set(&mut self, field: OrderField, value: impl Into<String>) -> Option<String> {
        self.0.insert(field, value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Fields without an answer, in summary order.
    pub fn missing(&self) -> Vec<OrderField> {
        OrderField::all()
            .filter(|field| !self.0.contains_key(field))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Parameters for the camera preview, once type, flavor and theme are known.
    pub fn preview_params(&self) -> Option<PreviewParams> {
        Some(PreviewParams {
            cake_type: self.get(OrderField::Type)?.to_string(),
            flavor: self.get(OrderField::Flavor)?.to_string(),
            theme: self.get(OrderField::Theme)?.to_string(),
        })
    }
}

/// The three strings the AR preview overlay is parameterized with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewParams {
    pub cake_type: String,
    pub flavor: String,
    pub theme: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_match_storage_names() {
        assert_eq!(OrderField::Type.as_ref(), "type");
        assert_eq!(OrderField::DeliveryDate.as_ref(), "deliveryDate");
        assert_eq!(OrderField::all().count(), 9);
    }

    #[test]
    fn test_answers_serialize_as_flat_object() {
        let mut answers = OrderAnswers::new();
        answers.set(OrderField::Flavor, "🍫 Chocolate");
        answers.set(OrderField::DeliveryDate, "Tomorrow");

        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["flavor"], "🍫 Chocolate");
        assert_eq!(json["deliveryDate"], "Tomorrow");

        let back: OrderAnswers = serde_json::from_value(json).unwrap();
        assert_eq!(back, answers);
    }

    #[test]
    fn test_missing_and_complete() {
        let mut answers = OrderAnswers::new();
        assert_eq!(answers.missing().len(), 9);
        for field in OrderField::all() {
            answers.set(field, "x");
        }
        assert!(answers.is_complete());
    }

    #[test]
    fn test_preview_params_need_type_flavor_theme() {
        let mut answers = OrderAnswers::new();
        answers.set(OrderField::Type, "🍰 Cake");
        answers.set(OrderField::Flavor, "🍋 Lemon");
        assert!(answers.preview_params().is_none());

        answers.set(OrderField::Theme, "🌸 Floral");
        let params = answers.preview_params().unwrap();
        assert_eq!(params.cake_type, "🍰 Cake");
        assert_eq!(params.theme, "🌸 Floral");
    }
}
