// Personality inference: trait keyword scoring, normalization, ranking and
// career derivation, plus the sentiment and tokenizer backends it relies on.

pub mod careers;
pub mod handlers;
pub mod page;
pub mod scorer;
pub mod sentiment;
pub mod tokenizer;
pub mod traits;
