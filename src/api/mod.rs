mod engine;
mod engine_config;
mod hover_resolver;
mod json_contract;
mod render_frame_builder;
mod render_style;

pub use engine::ScatterEngine;
pub use engine_config::ScatterEngineConfig;
pub use json_contract::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1,
};
pub use render_frame_builder::build_render_frame;
pub use render_style::RenderStyle;
