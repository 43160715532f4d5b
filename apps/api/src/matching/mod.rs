// Career path matching engine.
// vectorize free text -> cosine similarity against reference vectors -> weighted ranking.
// Everything below `handlers` is pure and synchronous; no I/O happens here.

pub mod handlers;
pub mod ranker;
pub mod similarity;
pub mod skill_gap;
pub mod vectorizer;
