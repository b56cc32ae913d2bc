//! In-memory skill templates implementing [`skill_core::SkillTemplateOracle`].
use std::collections::HashMap;
use std::sync::Arc;

use skill_core::{SkillKey, SkillTemplate, SkillTemplateOracle};

/// SkillTemplateOracle implementation with static templates
#[derive(Debug, Default, Clone)]
pub struct SkillCatalog {
    templates: HashMap<SkillKey, Arc<SkillTemplate>>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, replacing any previous one with the same key
    pub fn insert(&mut self, template: SkillTemplate) -> &mut Self {
        self.templates.insert(template.key(), Arc::new(template));
        self
    }

    pub fn with(mut self, template: SkillTemplate) -> Self {
        self.insert(template);
        self
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<SkillTemplate> for SkillCatalog {
    fn from_iter<I: IntoIterator<Item = SkillTemplate>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for template in iter {
            catalog.insert(template);
        }
        catalog
    }
}

impl SkillTemplateOracle for SkillCatalog {
    fn template(&self, key: SkillKey) -> Option<Arc<SkillTemplate>> {
        self.templates.get(&key).cloned()
    }
}
