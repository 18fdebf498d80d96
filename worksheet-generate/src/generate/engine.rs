use thiserror::Error;
use common_types::Generate::Category;

pub mod arith;

pub type GenerateResult<T> = Result<T, GenerateFailure>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateFailure {
    #[error("no unique {0} equation could be generated, even through its counterpart")]
    GenerationExhausted(Category),
}

pub const GENERATE_ATTEMPTS_PER_EQUATION: usize = 100;
pub const TOP_UP_ATTEMPTS_PER_SLOT: usize = 4;
