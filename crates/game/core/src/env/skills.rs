use std::sync::Arc;

use crate::skill::SkillTemplate;
use crate::state::SkillKey;

/// Read-only access to loaded skill templates.
pub trait SkillTemplateOracle: Send + Sync {
    /// Template for a skill at a specific level, if defined.
    fn template(&self, key: SkillKey) -> Option<Arc<SkillTemplate>>;
}
