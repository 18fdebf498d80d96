use ::std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use common_types::Generate::{Category, GenerateRequest, NumericRange};

use super::GenerationError;

/// Validated configuration for one generation run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub exercise_count: usize,
    pub numeric_range: NumericRange,
    pub categories: Vec<Category>,
    pub random_answer_position: bool,
}

impl Settings {
    pub fn validate(request: &GenerateRequest) -> Result<Self, GenerationError> {
        if request.exercise_count < 1 {
            return Err(GenerationError::InvalidConfiguration(format!("exercise count must be at least 1, got {}", request.exercise_count)));
        }
        let exercise_count = usize::try_from(request.exercise_count)
            .map_err(|_| GenerationError::InvalidConfiguration(format!("exercise count {} is too large", request.exercise_count)))?;
        let numeric_range = NumericRange::try_from(request.max_number)
            .map_err(GenerationError::InvalidConfiguration)?;
        let categories: Vec<Category> = request.categories.iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if categories.is_empty() {
            return Err(GenerationError::InvalidConfiguration("at least one category must be enabled".to_string()));
        }
        Ok(Self {
            exercise_count,
            numeric_range,
            categories,
            random_answer_position: request.random_answer_position,
        })
    }
}

impl TryFrom<GenerateRequest> for Settings {
    type Error = GenerationError;

    fn try_from(request: GenerateRequest) -> Result<Self, Self::Error> {
        Settings::validate(&request)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exercise_count: common_types::Generate::DEFAULT_EXERCISE_COUNT as usize,
            numeric_range: NumericRange::Twenty,
            categories: Vec::from(Category::ALL),
            random_answer_position: false,
        }
    }
}
