// Heuristic resume analysis: the local path used when the analysis service is
// unavailable, plus the resume intake and skill matching endpoints.
// Scoring is synchronous and pure; only the handlers and analyzers are async.

pub mod analyzer;
pub mod handlers;
pub mod intake;
pub mod matcher;
pub mod readiness;
pub mod report;
pub mod signals;
pub mod skills;
pub mod tables;
pub mod timeframe;
