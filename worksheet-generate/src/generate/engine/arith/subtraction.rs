/*
 *
 * DES: Operand draws for subtraction. The minuend always stays at or above the subtrahend, the
 *      unit digits decide whether the student has to borrow.
 *
 */

use common_types::Generate::NumericRange;
use rand::RngCore;

use crate::generate::{checker, helper};

pub fn draw_no_borrow(rng: &mut dyn RngCore, range: NumericRange) -> Option<(i32, i32)> {
    match range {
        NumericRange::Twenty => {
            let operand1 = helper::gen_range_i32(rng, 10, 20)?;
            let max_operand2 = (operand1 % 10).min(operand1 - 1);
            let operand2 = helper::gen_range_i32(rng, 1, max_operand2)?;
            Some((operand1, operand2))
        },
        NumericRange::Hundred => {
            let operand1 = helper::gen_range_i32(rng, 10, 99)?;
            let tens = helper::gen_range_i32(rng, 1, operand1 / 10 - 1)?;
            let units = helper::gen_range_i32(rng, 0, operand1 % 10)?;
            Some((operand1, tens * 10 + units))
        },
    }
}

pub fn draw_borrow(rng: &mut dyn RngCore, range: NumericRange) -> Option<(i32, i32)> {
    let (operand1, operand2) = match range {
        NumericRange::Twenty => {
            let operand1 = helper::gen_range_i32(rng, 11, 20)?;
            let operand2 = helper::gen_range_i32(rng, operand1 % 10 + 1, operand1 - 1)?;
            (operand1, operand2)
        },
        NumericRange::Hundred => {
            let operand1 = helper::gen_range_i32(rng, 10, 99)?;
            let operand2 = helper::gen_range_i32(rng, 10, operand1 - 1)?;
            (operand1, operand2)
        },
    };
    if !checker::borrows_units(operand1, operand2) {
        return None;
    }
    Some((operand1, operand2))
}

#[cfg(test)]
mod tests {
    use common_types::Generate::Category;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    fn assert_draws(category: Category, draw: fn(&mut dyn RngCore, NumericRange) -> Option<(i32, i32)>, range: NumericRange) {
        let mut rng = StdRng::seed_from_u64(0x5b + range.max() as u64);
        let mut produced = 0;
        for _ in 0..5_000 {
            if let Some((operand1, operand2)) = draw(&mut rng, range) {
                produced += 1;
                assert!(checker::satisfies(category, operand1, operand2, range), "{category} {operand1}-{operand2} in {range}");
            }
        }
        assert!(produced > 1_000, "{category} in {range} produced only {produced} draws");
    }

    #[test]
    fn no_borrow_draws_never_borrow() {
        assert_draws(Category::SubNoBorrow, draw_no_borrow, NumericRange::Twenty);
        assert_draws(Category::SubNoBorrow, draw_no_borrow, NumericRange::Hundred);
    }

    #[test]
    fn borrow_draws_always_borrow() {
        assert_draws(Category::SubBorrow, draw_borrow, NumericRange::Twenty);
        assert_draws(Category::SubBorrow, draw_borrow, NumericRange::Hundred);
    }

    #[test]
    fn twenty_minus_a_single_digit_borrows() {
        let mut rng = StdRng::seed_from_u64(20);
        let found = (0..5_000)
            .filter_map(|_| draw_borrow(&mut rng, NumericRange::Twenty))
            .any(|(operand1, operand2)| operand1 == 20 && operand2 < 10);
        assert!(found);
    }
}
