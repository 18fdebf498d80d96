use common_types::Generate::{Category, NumericRange};
use rand::RngCore;
use crate::generate::{
    checker,
    engine::{
        GenerateResult,
        GenerateFailure,
        GENERATE_ATTEMPTS_PER_EQUATION,
    },
    equation::{Equation, EquationSet},
};

mod addition;
mod subtraction;

/// One attempt at a pair of operands, `None` when the drawn sub-range came up empty.
pub type Draw = fn(&mut dyn RngCore, NumericRange) -> Option<(i32, i32)>;

pub fn get_draw_from_category(category: Category) -> Draw {
    match category {
        Category::AddNoCarry => addition::draw_no_carry,
        Category::AddCarry => addition::draw_carry,
        Category::SubNoBorrow => subtraction::draw_no_borrow,
        Category::SubBorrow => subtraction::draw_borrow,
    }
}

/// Spends one retry budget on `category`, recording the accepted equation in `equations`.
pub fn attempt_category(rng: &mut dyn RngCore, range: NumericRange, equations: &mut EquationSet, category: Category) -> Option<Equation> {
    let draw = get_draw_from_category(category);
    for _ in 0..GENERATE_ATTEMPTS_PER_EQUATION {
        let Some((operand1, operand2)) = draw(rng, range) else {
            continue;
        };
        debug_assert!(checker::satisfies(category, operand1, operand2, range));
        let equation = Equation::new(category, operand1, operand2);
        if equations.insert(&equation) {
            return Some(equation);
        }
    }
    None
}

/// Two steps, never more: the requested category, then its counterpart once.
pub fn generate_with_fallback(rng: &mut dyn RngCore, range: NumericRange, equations: &mut EquationSet, category: Category) -> GenerateResult<Equation> {
    if let Some(equation) = attempt_category(rng, range, equations, category) {
        return Ok(equation);
    }
    let counterpart = category.counterpart();
    tracing::debug!("{category} exhausted its retry budget within {range}, falling back to {counterpart}");
    attempt_category(rng, range, equations, counterpart).ok_or(GenerateFailure::GenerationExhausted(category))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    fn every_equation(category: Category, range: NumericRange) -> Vec<(i32, i32)> {
        let mut pairs = Vec::new();
        for operand1 in 0..=range.max() {
            for operand2 in 0..=range.max() {
                if checker::satisfies(category, operand1, operand2, range) {
                    pairs.push((operand1, operand2));
                }
            }
        }
        pairs
    }

    #[test]
    fn accepted_equations_are_recorded_and_unique() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut equations = EquationSet::new();
        let mut canonical = Vec::new();
        for _ in 0..30 {
            let equation = generate_with_fallback(&mut rng, NumericRange::Hundred, &mut equations, Category::SubBorrow).unwrap();
            assert!(checker::satisfies(equation.category, equation.operand1, equation.operand2, NumericRange::Hundred));
            canonical.push(equation.canonical());
        }
        canonical.sort();
        canonical.dedup();
        assert_eq!(canonical.len(), 30);
        assert_eq!(equations.len(), 30);
    }

    #[test]
    fn exhausted_category_falls_back_to_counterpart() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut equations = EquationSet::new();
        for (operand1, operand2) in every_equation(Category::AddCarry, NumericRange::Twenty) {
            equations.insert(&Equation::new(Category::AddCarry, operand1, operand2));
        }
        let equation = generate_with_fallback(&mut rng, NumericRange::Twenty, &mut equations, Category::AddCarry).unwrap();
        assert_eq!(equation.category, Category::AddNoCarry);
        assert!(!checker::carries_units(equation.operand1, equation.operand2));
    }

    #[test]
    fn both_sides_exhausted_reports_the_requested_category() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut equations = EquationSet::new();
        for category in [Category::SubNoBorrow, Category::SubBorrow] {
            for (operand1, operand2) in every_equation(category, NumericRange::Twenty) {
                equations.insert(&Equation::new(category, operand1, operand2));
            }
        }
        let before = equations.len();
        let failure = generate_with_fallback(&mut rng, NumericRange::Twenty, &mut equations, Category::SubNoBorrow).unwrap_err();
        assert_eq!(failure, GenerateFailure::GenerationExhausted(Category::SubNoBorrow));
        assert_eq!(equations.len(), before);
    }
}
