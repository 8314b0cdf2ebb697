use pantrymatch_shared::{Result, bail};
use serde::{Deserialize, Serialize};

/// One meal is assumed to cover this share of the daily macro goals.
pub const MEALS_PER_DAY: f64 = 3.0;

/// Time budget in minutes used when neither the caller nor the profile sets one.
pub const DEFAULT_TIME_BUDGET: u32 = 60;

/// Maximum number of matches returned by a ranking pass unless overridden.
pub const DEFAULT_LIMIT: usize = 20;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Share of each sub-score in the total. Must sum to 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub availability: f64,
    pub substitution: f64,
    pub dietary: f64,
    pub time: f64,
    pub cookware: f64,
    pub skill: f64,
    pub nutrition: f64,
    pub cost: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            availability: 0.30,
            substitution: 0.10,
            dietary: 0.15,
            time: 0.10,
            cookware: 0.05,
            skill: 0.05,
            nutrition: 0.10,
            cost: 0.15,
        }
    }
}

impl ScoreWeights {
    fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("availability", self.availability),
            ("substitution", self.substitution),
            ("dietary", self.dietary),
            ("time", self.time),
            ("cookware", self.cookware),
            ("skill", self.skill),
            ("nutrition", self.nutrition),
            ("cost", self.cost),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.named().iter().map(|(_, weight)| weight).sum()
    }

    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.named() {
            if !weight.is_finite() || weight < 0.0 {
                bail!("weight {name} must be a non-negative number, got {weight}");
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            bail!("weights must sum to 1.0, got {sum}");
        }

        Ok(())
    }
}

/// Tunables of the scoring engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    pub weights: ScoreWeights,
    pub meals_per_day: f64,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            meals_per_day: MEALS_PER_DAY,
        }
    }
}

impl ScoringOptions {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        if !self.meals_per_day.is_finite() || self.meals_per_day <= 0.0 {
            bail!("meals_per_day must be positive, got {}", self.meals_per_day);
        }

        Ok(())
    }
}
