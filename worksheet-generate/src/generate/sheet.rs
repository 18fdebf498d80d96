use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use rand::{seq::SliceRandom, RngCore};
use common_types::Generate::Category;

use super::{
    GenerationError,
    engine::{arith, TOP_UP_ATTEMPTS_PER_SLOT},
    equation::{Equation, EquationSet},
    formatter,
    helper,
    settings::Settings,
};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    Idle,
    Assembling,
    Complete,
    Failed,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Sheet {
    id: uuid::Uuid,
    created_on: NaiveDateTime,
    settings: Settings,
    state: AssemblyState,
    equations: Vec<Equation>,
}

/// Mutable state of one assembly run, dropped once the sheet is complete.
struct Assembly<'a> {
    rng: &'a mut dyn RngCore,
    settings: &'a Settings,
    seen: EquationSet,
    viable: Vec<Category>,
    accepted: Vec<Equation>,
}

impl<'a> Assembly<'a> {
    fn new(rng: &'a mut dyn RngCore, settings: &'a Settings, seen: EquationSet) -> Self {
        Self {
            rng,
            settings,
            seen,
            viable: settings.categories.clone(),
            accepted: Vec::with_capacity(settings.exercise_count),
        }
    }

    /// Returns `false` once `category` has stopped producing, after marking it non-viable.
    fn next(&mut self, category: Category) -> bool {
        match arith::generate_with_fallback(self.rng, self.settings.numeric_range, &mut self.seen, category) {
            Ok(mut equation) => {
                formatter::format_equation(self.rng, &mut equation, self.settings.random_answer_position, self.settings.numeric_range);
                self.accepted.push(equation);
                true
            },
            Err(failure) => {
                tracing::warn!("{failure}, {category} is no longer viable");
                self.viable.retain(|viable| *viable != category);
                false
            },
        }
    }

    fn fill_per_category(&mut self) {
        let per_category = (self.settings.exercise_count / self.settings.categories.len()).max(1);
        for &category in self.settings.categories.iter() {
            for _ in 0..per_category {
                if !self.next(category) {
                    break;
                }
            }
        }
    }

    fn top_up(&mut self) {
        let budget = self.settings.exercise_count * TOP_UP_ATTEMPTS_PER_SLOT;
        let mut attempts = 0;
        while self.accepted.len() < self.settings.exercise_count && attempts < budget {
            let Some(&category) = helper::choose(self.rng, &self.viable) else {
                break;
            };
            attempts += 1;
            self.next(category);
        }
    }

    fn finish(mut self) -> Vec<Equation> {
        self.accepted.shuffle(self.rng);
        self.accepted.truncate(self.settings.exercise_count);
        self.accepted
    }
}

impl Sheet {
    pub fn new(settings: Settings) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            created_on: Utc::now().naive_utc(),
            settings,
            state: AssemblyState::Idle,
            equations: Vec::new(),
        }
    }
    pub fn populate(&mut self, rng: &mut dyn RngCore) -> Result<(), GenerationError> {
        self.assemble(rng, EquationSet::new())
    }
    /// Runs one assembly, skipping anything already in `seen`.
    fn assemble(&mut self, rng: &mut dyn RngCore, seen: EquationSet) -> Result<(), GenerationError> {
        self.state = AssemblyState::Assembling;
        self.equations.clear();

        let mut assembly = Assembly::new(rng, &self.settings, seen);
        assembly.fill_per_category();
        assembly.top_up();
        let equations = assembly.finish();

        if equations.is_empty() {
            tracing::error!("Sheet {} produced no equations", self.id);
            self.state = AssemblyState::Failed;
            return Err(GenerationError::BatchEmpty);
        }
        if equations.len() < self.settings.exercise_count {
            tracing::warn!("Sheet {} is short, {} of {} equations generated", self.id, equations.len(), self.settings.exercise_count);
        }
        self.equations = equations;
        self.state = AssemblyState::Complete;
        Ok(())
    }
    pub fn id(&self) -> uuid::Uuid {
        self.id
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn state(&self) -> AssemblyState {
        self.state
    }
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }
    pub fn rendered(&self) -> Vec<&str> {
        self.equations.iter().map(|equation| equation.rendered.as_str()).collect()
    }
    pub fn len(&self) -> usize {
        self.equations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use common_types::Generate::NumericRange;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    fn settings(count: usize, range: NumericRange, categories: &[Category]) -> Settings {
        Settings {
            exercise_count: count,
            numeric_range: range,
            categories: categories.to_vec(),
            random_answer_position: false,
        }
    }

    #[test]
    fn new_sheet_is_idle_and_empty() {
        let sheet = Sheet::new(Settings::default());
        assert_eq!(sheet.state(), AssemblyState::Idle);
        assert!(sheet.is_empty());
    }

    #[test]
    fn populate_fills_every_slot_when_categories_stay_viable() {
        let mut rng = StdRng::seed_from_u64(80);
        let mut sheet = Sheet::new(settings(80, NumericRange::Twenty, &Category::ALL));
        sheet.populate(&mut rng).unwrap();
        assert_eq!(sheet.state(), AssemblyState::Complete);
        assert_eq!(sheet.len(), 80);
    }

    #[test]
    fn count_below_category_count_is_truncated() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sheet = Sheet::new(settings(1, NumericRange::Hundred, &Category::ALL));
        sheet.populate(&mut rng).unwrap();
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn infeasible_count_terminates_short() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut sheet = Sheet::new(settings(500, NumericRange::Twenty, &[Category::SubNoBorrow]));
        sheet.populate(&mut rng).unwrap();
        assert_eq!(sheet.state(), AssemblyState::Complete);
        assert!(sheet.len() < 500);
        assert!(sheet.len() >= 40, "only {} equations", sheet.len());
    }

    #[test]
    fn exhausted_pools_fail_the_sheet() {
        let mut seen = EquationSet::new();
        for a in 0..=20 {
            for b in 0..=a {
                seen.insert(&Equation::new(Category::SubNoBorrow, a, b));
            }
        }
        let mut rng = StdRng::seed_from_u64(17);
        let mut sheet = Sheet::new(settings(10, NumericRange::Twenty, &[Category::SubNoBorrow, Category::SubBorrow]));
        let result = sheet.assemble(&mut rng, seen);
        assert!(matches!(result, Err(GenerationError::BatchEmpty)));
        assert_eq!(sheet.state(), AssemblyState::Failed);
        assert!(sheet.is_empty());
    }

    #[test]
    fn repopulating_starts_from_a_fresh_equation_set() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sheet = Sheet::new(settings(40, NumericRange::Twenty, &[Category::AddNoCarry]));
        sheet.populate(&mut rng).unwrap();
        sheet.populate(&mut rng).unwrap();
        assert_eq!(sheet.len(), 40);
    }
}
