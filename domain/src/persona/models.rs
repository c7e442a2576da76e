//! Role-to-model binding.

use crate::core::model::Model;
use crate::persona::role::Role;
use serde::{Deserialize, Serialize};

/// Which model answers for each role
///
/// Fixed for the lifetime of a persona registry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonaModels {
    pub proponent: Model,
    pub challenger: Model,
    pub judge: Model,
}

impl PersonaModels {
    /// Every role on the same model.
    pub fn uniform(model: Model) -> Self {
        Self {
            proponent: model.clone(),
            challenger: model.clone(),
            judge: model,
        }
    }

    pub fn with_proponent(mut self, model: Model) -> Self {
        self.proponent = model;
        self
    }

    pub fn with_challenger(mut self, model: Model) -> Self {
        self.challenger = model;
        self
    }

    pub fn with_judge(mut self, model: Model) -> Self {
        self.judge = model;
        self
    }

    pub fn for_role(&self, role: Role) -> &Model {
        match role {
            Role::Proponent => &self.proponent,
            Role::Challenger => &self.challenger,
            Role::Judge => &self.judge,
        }
    }
}
