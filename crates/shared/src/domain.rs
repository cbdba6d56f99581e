use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::UnknownPlanTier;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(InstanceId);
id_newtype!(TimerId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    Services,
    Agents,
    Pricing,
    About,
    Faq,
    Contact,
    Checkout,
    Crm,
    WebsiteManagement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanTier {
    #[serde(rename = "1-Month")]
    OneMonth,
    #[serde(rename = "3-Month")]
    ThreeMonth,
    #[serde(rename = "12-Month")]
    TwelveMonth,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [
        PlanTier::OneMonth,
        PlanTier::ThreeMonth,
        PlanTier::TwelveMonth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlanTier::OneMonth => "1-Month",
            PlanTier::ThreeMonth => "3-Month",
            PlanTier::TwelveMonth => "12-Month",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = UnknownPlanTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPlanTier(s.to_string()))
    }
}

/// Payload attached to a programmatic navigation and read by the destination page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuxData(BTreeMap<String, Value>);

impl AuxData {
    pub const PLAN_KEY: &'static str = "plan";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plan(plan: PlanTier) -> Self {
        Self::new().with(Self::PLAN_KEY, plan.as_str())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn plan(&self) -> Option<&str> {
        self.get(Self::PLAN_KEY).and_then(Value::as_str)
    }

    pub fn plan_tier(&self) -> Option<PlanTier> {
        self.plan().and_then(|raw| raw.parse().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_tier_uses_pricing_identifiers() {
        assert_eq!(PlanTier::TwelveMonth.as_str(), "12-Month");
        assert_eq!("3-month".parse::<PlanTier>().expect("tier"), PlanTier::ThreeMonth);
        assert!("6-Month".parse::<PlanTier>().is_err());
        assert_eq!(
            serde_json::to_string(&PlanTier::OneMonth).expect("json"),
            "\"1-Month\""
        );
    }

    #[test]
    fn aux_data_exposes_plan_by_key() {
        let aux = AuxData::with_plan(PlanTier::TwelveMonth);
        assert_eq!(aux.plan(), Some("12-Month"));
        assert_eq!(aux.plan_tier(), Some(PlanTier::TwelveMonth));
        assert_eq!(
            serde_json::to_value(&aux).expect("json"),
            serde_json::json!({ "plan": "12-Month" })
        );

        let custom = AuxData::new().with("plan", 12);
        assert_eq!(custom.plan(), None);
        assert!(AuxData::new().is_empty());
    }
}
