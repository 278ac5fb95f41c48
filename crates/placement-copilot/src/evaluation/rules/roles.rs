use super::super::domain::{Skill, SkillScoreSet};

/// Minimum skill scores a candidate must meet to be recommended for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRequirement {
    pub role: &'static str,
    pub description: &'static str,
    pub minimums: &'static [(Skill, u8)],
}

impl RoleRequirement {
    pub fn minimum_for(&self, skill: Skill) -> Option<u8> {
        self.minimums
            .iter()
            .find(|(candidate, _)| *candidate == skill)
            .map(|(_, minimum)| *minimum)
    }

    /// Skills whose score falls below this role's minimum, in table order.
    pub fn unmet(&self, scores: &SkillScoreSet) -> Vec<Skill> {
        self.minimums
            .iter()
            .filter(|(skill, minimum)| scores.get(*skill) < *minimum)
            .map(|(skill, _)| *skill)
            .collect()
    }
}

/// Role table in recommendation order.
pub const ROLE_REQUIREMENTS: &[RoleRequirement] = &[
    RoleRequirement {
        role: "Data Analyst",
        description: "Analyze data to provide actionable business insights",
        minimums: &[
            (Skill::Excel, 70),
            (Skill::Sql, 75),
            (Skill::Python, 60),
            (Skill::Statistics, 65),
            (Skill::BiTools, 70),
        ],
    },
    RoleRequirement {
        role: "Business Analyst",
        description: "Create dashboards and reports for business decision-making",
        minimums: &[(Skill::Excel, 70), (Skill::Sql, 60), (Skill::BiTools, 65)],
    },
    RoleRequirement {
        role: "Data Scientist",
        description: "Build predictive models and derive insights from complex data",
        minimums: &[
            (Skill::Python, 80),
            (Skill::Statistics, 80),
            (Skill::MachineLearning, 75),
            (Skill::Sql, 70),
        ],
    },
    RoleRequirement {
        role: "Junior ML Engineer",
        description: "Deploy and maintain machine learning models in production",
        minimums: &[
            (Skill::Python, 85),
            (Skill::MachineLearning, 85),
            (Skill::Sql, 65),
            (Skill::Statistics, 70),
        ],
    },
    RoleRequirement {
        role: "BI Analyst",
        description: "Design and implement business intelligence solutions",
        minimums: &[
            (Skill::Excel, 75),
            (Skill::Sql, 80),
            (Skill::BiTools, 85),
            (Skill::Statistics, 60),
        ],
    },
];

pub fn role_requirement(role: &str) -> Option<&'static RoleRequirement> {
    ROLE_REQUIREMENTS.iter().find(|entry| entry.role == role)
}
