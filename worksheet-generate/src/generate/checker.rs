use common_types::Generate::{Category, NumericRange};

pub fn units(value: i32) -> i32 {
    value % 10
}

pub fn tens(value: i32) -> i32 {
    (value / 10) % 10
}

pub fn carries_units(operand1: i32, operand2: i32) -> bool {
    units(operand1) + units(operand2) >= 10
}

pub fn carries_tens(operand1: i32, operand2: i32) -> bool {
    tens(operand1) + tens(operand2) >= 10
}

pub fn borrows_units(operand1: i32, operand2: i32) -> bool {
    units(operand1) < units(operand2)
}

pub fn borrows_tens(operand1: i32, operand2: i32) -> bool {
    tens(operand1) < tens(operand2)
}

/// Operands and result all lie in `[0, range]`.
pub fn is_within_range(category: Category, operand1: i32, operand2: i32, range: NumericRange) -> bool {
    let result = category.operator().apply(operand1, operand2);
    range.contains(operand1) && range.contains(operand2) && range.contains(result)
}

pub fn satisfies(category: Category, operand1: i32, operand2: i32, range: NumericRange) -> bool {
    if !is_within_range(category, operand1, operand2, range) {
        return false;
    }
    match category {
        // tens digits of a sum within 20 never reach 10, so one check covers both ranges
        Category::AddNoCarry => !carries_units(operand1, operand2) && !carries_tens(operand1, operand2),
        Category::AddCarry => carries_units(operand1, operand2),
        Category::SubNoBorrow => operand1 >= operand2 && !borrows_units(operand1, operand2) && !borrows_tens(operand1, operand2),
        Category::SubBorrow => operand1 > operand2 && borrows_units(operand1, operand2),
    }
}
