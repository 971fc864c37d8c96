use serde::{Deserialize, Serialize};

use crate::core::AxisDomain;
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::SelectionState;
use crate::render::{RenderFrame, Renderer};

use super::ScatterEngine;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Full engine output at one instant: selection, domains, and the frame the
/// renderer would receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub selection: SelectionState,
    pub x_domain: AxisDomain,
    pub y_domain: AxisDomain,
    pub frame: RenderFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScatterError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ScatterResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ScatterError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ScatterError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ScatterEngine<R> {
    pub fn snapshot(&self) -> ScatterResult<EngineSnapshot> {
        Ok(EngineSnapshot {
            selection: self.selection(),
            x_domain: self.x_domain(),
            y_domain: self.y_domain(),
            frame: self.build_render_frame()?,
        })
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
