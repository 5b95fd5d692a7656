//! Deterministic flow insights: breakdown, conversion funnel, classification

use arcflow_record::{title_case, ActionType, Flow};
use serde::{Deserialize, Serialize};

/// Milestones of the conversion funnel, in checklist order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    SearchInitiated,
    ProductSelected,
    CustomizationExplored,
    CartConversion,
    FlowCompleted,
}

impl FunnelStage {
    pub const ALL: [FunnelStage; 5] = [
        FunnelStage::SearchInitiated,
        FunnelStage::ProductSelected,
        FunnelStage::CustomizationExplored,
        FunnelStage::CartConversion,
        FunnelStage::FlowCompleted,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FunnelStage::SearchInitiated => "search_initiated",
            FunnelStage::ProductSelected => "product_selected",
            FunnelStage::CustomizationExplored => "customization_explored",
            FunnelStage::CartConversion => "cart_conversion",
            FunnelStage::FlowCompleted => "flow_completed",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelCheck {
    pub stage: FunnelStage,
    pub reached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub action_type: ActionType,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorIndicators {
    pub price_conscious: bool,
    pub exploration_oriented: bool,
    pub goal_oriented: bool,
    /// 100 when the flow reached its completion marker, else 0
    pub completion_rate: u8,
}

impl BehaviorIndicators {
    /// Boolean indicators with their display labels
    pub fn flags(&self) -> [(&'static str, bool); 3] {
        [
            ("Price Conscious", self.price_conscious),
            ("Exploration Oriented", self.exploration_oriented),
            ("Goal Oriented", self.goal_oriented),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowClassification {
    CustomizedConversion,
    Conversion,
    IncompleteConversion,
    ProductResearch,
    ProductDiscovery,
    GeneralNavigation,
}

impl FlowClassification {
    pub fn label(&self) -> &'static str {
        match self {
            FlowClassification::CustomizedConversion => {
                "Successful E-commerce Conversion with Product Customization"
            }
            FlowClassification::Conversion => "Successful E-commerce Conversion",
            FlowClassification::IncompleteConversion => "E-commerce Conversion (Incomplete)",
            FlowClassification::ProductResearch => {
                "Product Research with Customization Exploration"
            }
            FlowClassification::ProductDiscovery => "Product Discovery Flow",
            FlowClassification::GeneralNavigation => "General Navigation Flow",
        }
    }

    fn classify(search: bool, customization: bool, purchase: bool, completed: bool) -> Self {
        match (completed, purchase) {
            (true, true) if customization => FlowClassification::CustomizedConversion,
            (true, true) => FlowClassification::Conversion,
            (false, true) => FlowClassification::IncompleteConversion,
            _ if search && customization => FlowClassification::ProductResearch,
            _ if search => FlowClassification::ProductDiscovery,
            _ => FlowClassification::GeneralNavigation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    /// Count per action type, in first-seen order
    pub action_breakdown: Vec<BreakdownEntry>,
    pub conversion_funnel: Vec<FunnelCheck>,
    pub behavior: BehaviorIndicators,
    pub classification: FlowClassification,
}

impl Insights {
    pub fn reached(&self, stage: FunnelStage) -> bool {
        self.conversion_funnel
            .iter()
            .any(|c| c.stage == stage && c.reached)
    }
}

pub fn analyze(flow: &Flow) -> Insights {
    let search = flow.has(&ActionType::Search);
    let product = flow.has(&ActionType::SelectProduct);
    let customization =
        flow.has(&ActionType::SelectOption) || flow.has(&ActionType::BrowseOptions);
    let purchase = flow.has(&ActionType::AddToCart);
    let completed = flow.has(&ActionType::Complete);
    let declined = flow.has(&ActionType::DeclineOption);

    let product_selected = search && product;
    let cart_conversion = product && purchase;

    let conversion_funnel = FunnelStage::ALL
        .iter()
        .map(|&stage| FunnelCheck {
            stage,
            reached: match stage {
                FunnelStage::SearchInitiated => search,
                FunnelStage::ProductSelected => product_selected,
                FunnelStage::CustomizationExplored => customization,
                FunnelStage::CartConversion => cart_conversion,
                FunnelStage::FlowCompleted => completed,
            },
        })
        .collect();

    Insights {
        action_breakdown: breakdown(flow),
        conversion_funnel,
        behavior: BehaviorIndicators {
            price_conscious: declined,
            exploration_oriented: customization,
            goal_oriented: product_selected && cart_conversion,
            completion_rate: if completed { 100 } else { 0 },
        },
        classification: FlowClassification::classify(search, customization, purchase, completed),
    }
}

fn breakdown(flow: &Flow) -> Vec<BreakdownEntry> {
    flow.type_counts()
        .into_iter()
        .map(|(action_type, count)| BreakdownEntry {
            action_type: action_type.clone(),
            count,
        })
        .collect()
}
