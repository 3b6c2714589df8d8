// Career data aggregation: provider orchestration, normalization into the
// stage1/stage2 view-models, and the HTTP handlers serving them.

pub mod aggregate;
pub mod handlers;
pub mod models;
pub mod normalize;
