//! Mitigation strategy reference data.
//!
//! Static lookup tables for the four planetary-defense options and the
//! response-comparison chart. The selector displays simulation context
//! (blast radii, total casualties) next to these, but applicability is
//! reference data only and is never filtered by engine output.

/// One requirement row on a strategy card.
#[derive(Clone, Copy, Debug)]
pub struct Requirement {
    pub name: &'static str,
    pub value: &'static str,
}

/// A planetary-defense strategy.
#[derive(Clone, Copy, Debug)]
pub struct MitigationStrategy {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
    /// Nominal mission success rate, percent.
    pub success_rate: u8,
    /// Human-readable lead-time range.
    pub time_required: &'static str,
    /// Human-readable cost range.
    pub cost: &'static str,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
    pub requirements: &'static [Requirement],
}

/// One row of the response-options comparison chart.
#[derive(Clone, Copy, Debug)]
pub struct ResponseComparison {
    pub option: &'static str,
    /// Cost in millions of dollars.
    pub cost_millions: f64,
    /// Lead time in months.
    pub time_months: f64,
    /// Success rate, percent.
    pub success_percent: f64,
    /// Residual-risk score (0-100, higher is worse).
    pub risk_score: f64,
}

/// All strategies, in display order.
pub static STRATEGIES: &[MitigationStrategy] = &[NUCLEAR, KINETIC, GRAVITY_TRACTOR, EVACUATION];

pub static NUCLEAR: MitigationStrategy = MitigationStrategy {
    id: "nuclear",
    name: "Nuclear Deflection",
    description: "Use a nuclear explosion near the asteroid to vaporize \
                  material and create thrust.",
    success_rate: 85,
    time_required: "6-12 months",
    cost: "$5-10 billion",
    advantages: &[
        "High energy output",
        "Effective for large asteroids",
        "Well-understood technology",
        "Can work with short warning time",
    ],
    disadvantages: &[
        "Risk of fragmentation",
        "Political/regulatory challenges",
        "Radiation concerns",
        "Requires international cooperation",
    ],
    requirements: &[
        Requirement { name: "Warning time", value: "6 months" },
        Requirement { name: "Asteroid size range", value: "100m - 10km" },
        Requirement { name: "Technology readiness", value: "7/10" },
    ],
};

pub static KINETIC: MitigationStrategy = MitigationStrategy {
    id: "kinetic",
    name: "Kinetic Impactor",
    description: "Crash a spacecraft into the asteroid at high velocity \
                  to change its trajectory.",
    success_rate: 75,
    time_required: "1-3 years",
    cost: "$300-500 million",
    advantages: &[
        "Proven technology (NASA DART)",
        "No radioactive materials",
        "Relatively low cost",
        "Minimal fragmentation risk",
    ],
    disadvantages: &[
        "Requires long warning time",
        "Less effective for larger asteroids",
        "Single-mission approach",
        "Trajectory calculations must be precise",
    ],
    requirements: &[
        Requirement { name: "Warning time", value: "12 months" },
        Requirement { name: "Asteroid size range", value: "50m - 500m" },
        Requirement { name: "Technology readiness", value: "9/10" },
    ],
};

pub static GRAVITY_TRACTOR: MitigationStrategy = MitigationStrategy {
    id: "gravity",
    name: "Gravity Tractor",
    description: "Station a spacecraft near the asteroid to use \
                  gravitational pull to slowly alter its orbit.",
    success_rate: 70,
    time_required: "5-10 years",
    cost: "$2-3 billion",
    advantages: &[
        "No impact or explosion needed",
        "Highly controlled deflection",
        "No fragmentation risk",
        "Can be combined with other methods",
    ],
    disadvantages: &[
        "Requires very long warning time",
        "Slow deflection process",
        "High mission duration",
        "Only effective for smaller asteroids",
    ],
    requirements: &[
        Requirement { name: "Warning time", value: "60 months" },
        Requirement { name: "Asteroid size range", value: "20m - 200m" },
        Requirement { name: "Technology readiness", value: "6/10" },
    ],
};

pub static EVACUATION: MitigationStrategy = MitigationStrategy {
    id: "evacuation",
    name: "Mass Evacuation",
    description: "Evacuate populations from predicted impact zones and \
                  establish emergency protocols.",
    success_rate: 60,
    time_required: "3-12 months",
    cost: "$10-50 billion",
    advantages: &[
        "Saves lives directly",
        "Works when deflection fails",
        "Can be combined with any deflection",
        "Improves emergency preparedness",
    ],
    disadvantages: &[
        "Massive logistical challenge",
        "High economic disruption",
        "Cannot prevent impact damage",
        "May cause panic",
    ],
    requirements: &[
        Requirement { name: "Warning time", value: "3 months" },
        Requirement { name: "Population affected", value: "100k+" },
        Requirement { name: "Infrastructure readiness", value: "5/10" },
    ],
};

/// Comparison rows for the decision-support chart.
pub static RESPONSE_COMPARISON: &[ResponseComparison] = &[
    ResponseComparison {
        option: "Kinetic Impactor",
        cost_millions: 500.0,
        time_months: 24.0,
        success_percent: 75.0,
        risk_score: 30.0,
    },
    ResponseComparison {
        option: "Nuclear Deflection",
        cost_millions: 8000.0,
        time_months: 12.0,
        success_percent: 85.0,
        risk_score: 60.0,
    },
    ResponseComparison {
        option: "Gravity Tractor",
        cost_millions: 2500.0,
        time_months: 72.0,
        success_percent: 70.0,
        risk_score: 20.0,
    },
    ResponseComparison {
        option: "Evacuation Only",
        cost_millions: 35000.0,
        time_months: 6.0,
        success_percent: 60.0,
        risk_score: 90.0,
    },
];

/// Look up a strategy by id.
pub fn get_strategy(id: &str) -> Option<&'static MitigationStrategy> {
    STRATEGIES.iter().find(|s| s.id == id)
}
