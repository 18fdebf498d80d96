/*
 *
 * DES: Operand draws for addition. Operand one comes from a fixed sub-range, operand two's
 *      sub-range is derived from it so the unit (and tens) digit sums land on the right side of 10.
 *
 */

use common_types::Generate::NumericRange;
use rand::RngCore;

use crate::generate::helper;

pub fn draw_no_carry(rng: &mut dyn RngCore, range: NumericRange) -> Option<(i32, i32)> {
    match range {
        NumericRange::Twenty => {
            let operand1 = helper::gen_range_i32(rng, 1, 18)?;
            let max_operand2 = (9 - operand1 % 10).min(20 - operand1);
            let operand2 = helper::gen_range_i32(rng, 1, max_operand2)?;
            Some((operand1, operand2))
        },
        NumericRange::Hundred => {
            let operand1 = helper::gen_range_i32(rng, 10, 99)?;
            let tens = helper::gen_range_i32(rng, 1, 9 - operand1 / 10)?;
            let units = helper::gen_range_i32(rng, 0, 9 - operand1 % 10)?;
            Some((operand1, tens * 10 + units))
        },
    }
}

pub fn draw_carry(rng: &mut dyn RngCore, range: NumericRange) -> Option<(i32, i32)> {
    match range {
        NumericRange::Twenty => {
            let operand1 = helper::gen_range_i32(rng, 2, 18)?;
            let operand2 = if operand1 < 10 {
                helper::gen_range_i32(rng, 10 - operand1, 9)?
            } else {
                // operand1 == 10 has no single digit partner that carries
                let min_operand2 = (10 - operand1 % 10).max(1);
                let max_operand2 = (20 - operand1).min(9);
                helper::gen_range_i32(rng, min_operand2, max_operand2)?
            };
            Some((operand1, operand2))
        },
        NumericRange::Hundred => {
            let operand1 = helper::gen_range_i32(rng, 10, 99)?;
            let units = helper::gen_range_i32(rng, 10 - operand1 % 10, 9)?;
            let max_tens = ((99 - operand1 - units) / 10).min(9);
            let tens = helper::gen_range_i32(rng, 1, max_tens)?;
            Some((operand1, tens * 10 + units))
        },
    }
}
