use ::std::collections::HashSet;
use serde::{Deserialize, Serialize};
use common_types::Generate::{Category, Operator};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankPosition {
    Operand1,
    Operand2,
    Result,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub operand1: i32,
    pub operand2: i32,
    pub operator: Operator,
    pub result: i32,
    pub category: Category,
    pub blank: BlankPosition,
    pub rendered: String,
}

impl Equation {
    pub fn new(category: Category, operand1: i32, operand2: i32) -> Self {
        let operator = category.operator();
        Self {
            operand1,
            operand2,
            operator,
            result: operator.apply(operand1, operand2),
            category,
            blank: BlankPosition::Result,
            rendered: String::new(),
        }
    }
    /// Duplicate-detection key, independent of how the equation is displayed.
    pub fn canonical(&self) -> String {
        format!("{}{}{}", self.operand1, self.operator, self.operand2)
    }
}

/// Canonical strings accepted during one assembly run.
#[derive(Debug, Default)]
pub struct EquationSet {
    seen: HashSet<String>,
}
impl EquationSet {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }
    /// Returns `false` when the equation was already present.
    pub fn insert(&mut self, equation: &Equation) -> bool {
        self.seen.insert(equation.canonical())
    }
    pub fn len(&self) -> usize {
        self.seen.len()
    }
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_ignores_rendering() {
        let mut first = Equation::new(Category::SubBorrow, 15, 8);
        let second = Equation::new(Category::SubBorrow, 15, 8);
        first.rendered = "(    ) - 8 = 7".to_string();
        first.blank = BlankPosition::Operand1;
        assert_eq!(first.canonical(), "15-8");
        assert_eq!(first.canonical(), second.canonical());
        assert_eq!(first.result, 7);
    }

    #[test]
    fn set_rejects_duplicates() {
        let mut set = EquationSet::new();
        let equation = Equation::new(Category::AddNoCarry, 12, 5);
        assert!(set.insert(&equation));
        assert!(!set.insert(&equation));
        assert!(set.insert(&Equation::new(Category::AddNoCarry, 5, 12)));
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(EquationSet::new().is_empty());
    }
}
