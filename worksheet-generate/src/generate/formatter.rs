use common_types::Generate::NumericRange;
use rand::RngCore;

use super::{
    equation::{BlankPosition, Equation},
    helper,
};

pub const BLANK: &'static str = "(    )";
pub const BLANK_POSITIONS: [BlankPosition; 3] = [
    BlankPosition::Operand1,
    BlankPosition::Operand2,
    BlankPosition::Result,
];

pub fn format_fixed(equation: &Equation) -> String {
    format!("{} {} {} =", equation.operand1, equation.operator, equation.operand2)
}

/// Renders `equation` with the blank at `position`, returning the position actually used.
/// An operand blank that would show an out-of-range number falls back to the fixed form.
pub fn format_with_blank(equation: &Equation, position: BlankPosition, range: NumericRange) -> (BlankPosition, String) {
    let Equation { operand1, operand2, operator, result, .. } = equation;
    let displayed = match position {
        BlankPosition::Operand1 => [*operand2, *result],
        BlankPosition::Operand2 => [*operand1, *result],
        BlankPosition::Result => [*operand1, *operand2],
    };
    if position != BlankPosition::Result && !displayed.iter().all(|value| range.contains(*value)) {
        return (BlankPosition::Result, format_fixed(equation));
    }
    let rendered = match position {
        BlankPosition::Operand1 => format!("{BLANK} {operator} {operand2} = {result}"),
        BlankPosition::Operand2 => format!("{operand1} {operator} {BLANK} = {result}"),
        BlankPosition::Result => format!("{operand1} {operator} {operand2} ={BLANK}"),
    };
    (position, rendered)
}

pub fn format_equation(rng: &mut dyn RngCore, equation: &mut Equation, random_answer_position: bool, range: NumericRange) {
    if !random_answer_position {
        equation.blank = BlankPosition::Result;
        equation.rendered = format_fixed(equation);
        return;
    }
    let position = helper::choose(rng, &BLANK_POSITIONS).copied().unwrap_or(BlankPosition::Result);
    let (blank, rendered) = format_with_blank(equation, position, range);
    equation.blank = blank;
    equation.rendered = rendered;
}
