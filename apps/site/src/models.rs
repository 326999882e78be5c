use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Editable demo form fields; also the shape of the persisted draft.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoFormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub notes: String,
}

impl DemoFormFields {
    pub fn has_required(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoField {
    Name,
    Email,
    Company,
    Notes,
}

impl DemoFormFields {
    pub fn set(&mut self, field: DemoField, value: String) {
        match field {
            DemoField::Name => self.name = value,
            DemoField::Email => self.email = value,
            DemoField::Company => self.company = value,
            DemoField::Notes => self.notes = value,
        }
    }
}

/// Payload of `POST /api/demo-requests` and entry of the offline queue.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub notes: String,
    pub submitted_at: String,
    #[serde(default)]
    pub utm: BTreeMap<String, String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    Bot,
    User,
}

impl ChatRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bot => "Bot:",
            Self::User => "You:",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowStep {
    pub id: u32,
    pub name: String,
    pub enabled: bool,
    pub health: u8,
}

impl WorkflowStep {
    pub fn status_label(&self) -> &'static str {
        if self.enabled {
            "Enabled"
        } else {
            "Disabled"
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    #[default]
    Annual,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Annual,
            Self::Annual => Self::Monthly,
        }
    }

    pub fn is_annual(self) -> bool {
        matches!(self, Self::Annual)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub to: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Workflow,
    Sparkles,
    Layers,
    Activity,
    ShieldCheck,
    LineChart,
}

impl FeatureIcon {
    /// Glyph stand-in for the icon set.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Workflow => "⇄",
            Self::Sparkles => "✦",
            Self::Layers => "≡",
            Self::Activity => "∿",
            Self::ShieldCheck => "✓",
            Self::LineChart => "↗",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseCase {
    pub key: &'static str,
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub plan: &'static str,
    pub price_monthly: u32,
    pub price_yearly: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub contact: bool,
}

impl PricingPlan {
    /// Per-month price shown for the cycle; `None` for custom-priced plans.
    pub fn display_price(&self, cycle: BillingCycle) -> Option<u32> {
        if self.contact {
            return None;
        }
        Some(match cycle {
            BillingCycle::Annual => self.price_yearly,
            BillingCycle::Monthly => self.price_monthly,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub tag: &'static str,
    pub date: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_request_serializes_submitted_at_in_camel_case() {
        let request = DemoRequest {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            company: String::new(),
            notes: String::new(),
            submitted_at: "2025-06-01T10:00:00.000Z".into(),
            utm: BTreeMap::from([("utm_source".to_string(), "ads".to_string())]),
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["submittedAt"], "2025-06-01T10:00:00.000Z");
        assert_eq!(value["utm"]["utm_source"], "ads");
        assert!(value.get("submitted_at").is_none());
    }

    #[test]
    fn partial_draft_fills_missing_fields_with_empty_strings() {
        let fields: DemoFormFields =
            serde_json::from_str(r#"{"name":"Jane","notes":"invoices"}"#).expect("parse");
        assert_eq!(fields.name, "Jane");
        assert_eq!(fields.notes, "invoices");
        assert!(fields.email.is_empty());
        assert!(!fields.has_required());
    }

    #[test]
    fn contact_plans_have_no_display_price() {
        let growth = PricingPlan {
            plan: "Growth",
            price_monthly: 149,
            price_yearly: 119,
            features: &[],
            popular: true,
            contact: false,
        };
        let enterprise = PricingPlan {
            plan: "Enterprise",
            price_monthly: 0,
            price_yearly: 0,
            features: &[],
            popular: false,
            contact: true,
        };

        assert_eq!(growth.display_price(BillingCycle::Annual), Some(119));
        assert_eq!(growth.display_price(BillingCycle::Monthly), Some(149));
        assert_eq!(enterprise.display_price(BillingCycle::Annual), None);
    }

    #[test]
    fn billing_cycle_defaults_to_annual_and_toggles() {
        let cycle = BillingCycle::default();
        assert!(cycle.is_annual());
        assert_eq!(cycle.toggled(), BillingCycle::Monthly);
        assert_eq!(cycle.toggled().toggled(), BillingCycle::Annual);
    }
}
