//! Scenario schema definitions.
//!
//! These are file-format types only. The app layer compiles them into
//! runtime simulation objects; nothing here touches the integrator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub params: ParamsDef,
    #[serde(default)]
    pub initial_state: StateDef,
    #[serde(default)]
    pub span: SpanDef,
    /// Fixed integration step size.
    #[serde(default = "default_step_h")]
    pub step_h: f64,
}

/// Physical parameters of the vector field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParamsDef {
    /// Prandtl number
    pub sigma: f64,
    /// Rayleigh number
    pub rho: f64,
    /// Geometric factor
    pub beta: f64,
}

impl Default for ParamsDef {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StateDef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for StateDef {
    fn default() -> Self {
        Self {
            x: 10.0,
            y: 10.0,
            z: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpanDef {
    pub t_min: f64,
    pub t_max: f64,
}

impl Default for SpanDef {
    fn default() -> Self {
        Self {
            t_min: 0.0,
            t_max: 30.0,
        }
    }
}

fn default_step_h() -> f64 {
    1e-3
}

impl ScenarioDef {
    /// A scenario with all reference defaults and the given identity.
    pub fn with_defaults(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            params: ParamsDef::default(),
            initial_state: StateDef::default(),
            span: SpanDef::default(),
            step_h: default_step_h(),
        }
    }
}
