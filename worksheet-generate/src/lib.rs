pub mod generate;
pub mod render;

pub type E = Box<dyn ::std::error::Error + Send + Sync + 'static>;
