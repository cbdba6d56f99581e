use shared::domain::{AuxData, PlanTier};

pub const PLACEHOLDER_PLAN_LABEL: &str = "Selected Plan";

/// What the checkout page shows for the navigation payload it was opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub plan_label: String,
    pub tier: Option<PlanTier>,
}

impl CheckoutView {
    pub fn from_aux(aux: Option<&AuxData>) -> Self {
        match aux.and_then(AuxData::plan).filter(|plan| !plan.is_empty()) {
            Some(plan) => Self {
                plan_label: plan.to_string(),
                tier: aux.and_then(AuxData::plan_tier),
            },
            None => Self {
                plan_label: PLACEHOLDER_PLAN_LABEL.to_string(),
                tier: None,
            },
        }
    }

    pub fn has_selection(&self) -> bool {
        self.tier.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_selected_plan() {
        let aux = AuxData::with_plan(PlanTier::TwelveMonth);
        let view = CheckoutView::from_aux(Some(&aux));
        assert_eq!(view.plan_label, "12-Month");
        assert_eq!(view.tier, Some(PlanTier::TwelveMonth));
    }

    #[test]
    fn falls_back_to_placeholder() {
        assert_eq!(CheckoutView::from_aux(None).plan_label, "Selected Plan");
        let blank = AuxData::new().with("plan", "");
        assert_eq!(CheckoutView::from_aux(Some(&blank)).plan_label, "Selected Plan");
        assert!(!CheckoutView::from_aux(None).has_selection());
    }

    #[test]
    fn unknown_plan_label_is_shown_verbatim() {
        let aux = AuxData::new().with("plan", "Enterprise");
        let view = CheckoutView::from_aux(Some(&aux));
        assert_eq!(view.plan_label, "Enterprise");
        assert_eq!(view.tier, None);
    }
}
