#[allow(non_snake_case)]
pub mod Generate {
    use ::std::fmt;
    use ::std::str;
    use serde::{Deserialize, Serialize};
    use derive_builder::Builder;

    pub const DEFAULT_EXERCISE_COUNT: i64 = 80;
    pub const DEFAULT_MAX_NUMBER: i64 = 20;

    #[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
    pub enum Operator {
        Add,
        Sub,
    }

    impl Operator {
        pub fn symbol(&self) -> &'static str {
            match self {
                Operator::Add => "+",
                Operator::Sub => "-",
            }
        }
        pub fn apply(&self, lhs: i32, rhs: i32) -> i32 {
            match self {
                Operator::Add => lhs + rhs,
                Operator::Sub => lhs - rhs,
            }
        }
    }

    impl fmt::Display for Operator {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.symbol())
        }
    }

    #[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum Category {
        AddNoCarry,
        AddCarry,
        SubNoBorrow,
        SubBorrow,
    }

    impl Category {
        pub const ALL: [Category; 4] = [
            Category::AddNoCarry,
            Category::AddCarry,
            Category::SubNoBorrow,
            Category::SubBorrow,
        ];

        /// The category a generator falls back to once its own retry budget runs out.
        pub fn counterpart(&self) -> Category {
            match self {
                Category::AddNoCarry => Category::AddCarry,
                Category::AddCarry => Category::AddNoCarry,
                Category::SubNoBorrow => Category::SubBorrow,
                Category::SubBorrow => Category::SubNoBorrow,
            }
        }
        pub fn operator(&self) -> Operator {
            match self {
                Category::AddNoCarry | Category::AddCarry => Operator::Add,
                Category::SubNoBorrow | Category::SubBorrow => Operator::Sub,
            }
        }
    }

    impl fmt::Display for Category {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    impl str::FromStr for Category {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "AddNoCarry" | "add_no_carry" => Ok(Category::AddNoCarry),
                "AddCarry" | "add_carry" => Ok(Category::AddCarry),
                "SubNoBorrow" | "sub_no_borrow" => Ok(Category::SubNoBorrow),
                "SubBorrow" | "sub_borrow" => Ok(Category::SubBorrow),
                _ => Err(format!("'{}' is not a valid Category", s)),
            }
        }
    }

    #[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
    pub enum NumericRange {
        Twenty,
        Hundred,
    }

    impl NumericRange {
        pub fn max(&self) -> i32 {
            match self {
                NumericRange::Twenty => 20,
                NumericRange::Hundred => 100,
            }
        }
        pub fn contains(&self, value: i32) -> bool {
            (0..=self.max()).contains(&value)
        }
    }

    impl TryFrom<i64> for NumericRange {
        type Error = String;

        fn try_from(value: i64) -> Result<Self, Self::Error> {
            match value {
                20 => Ok(NumericRange::Twenty),
                100 => Ok(NumericRange::Hundred),
                _ => Err(format!("numeric range must be 20 or 100, got {}", value)),
            }
        }
    }

    impl fmt::Display for NumericRange {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.max())
        }
    }

    impl str::FromStr for NumericRange {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let value: i64 = s.trim().parse().map_err(|_| format!("'{}' is not a valid NumericRange", s))?;
            NumericRange::try_from(value)
        }
    }

    /// Raw, unvalidated configuration as supplied by a front end.
    #[derive(Debug, Clone, Deserialize, Serialize, Builder)]
    #[builder(default)]
    pub struct GenerateRequest {
        pub exercise_count: i64,
        pub max_number: i64,
        #[builder(setter(into))]
        pub categories: Vec<Category>,
        pub random_answer_position: bool,
    }

    impl Default for GenerateRequest {
        fn default() -> Self {
            Self {
                exercise_count: DEFAULT_EXERCISE_COUNT,
                max_number: DEFAULT_MAX_NUMBER,
                categories: Vec::from(Category::ALL),
                random_answer_position: false,
            }
        }
    }

    pub fn str_to_category<T: AsRef<str>>(category: T) -> Result<Category, String> {
        category.as_ref().parse()
    }
    pub fn str_to_categories<T: AsRef<str>>(categories: T) -> Result<Vec<Category>, String> {
        categories.as_ref()
            .split(',')
            .filter(|x| !x.trim().is_empty())
            .map(|x| x.trim().parse::<Category>())
            .collect()
    }

}
