use std::sync::Arc;

use skill_core::{CombatFormulas, EffectEnv, SkillTemplateOracle, StandardFormulas, WorldResolver};
use tokio::runtime::Handle;

use super::active::ActiveCasts;
use super::cooldown::CooldownRegistry;
use super::{CastManager, Shared};
use crate::api::{Result, RuntimeError};
use crate::config::EngineConfig;
use crate::events::PacketSink;

/// Builder for [`CastManager`].
///
/// Templates, world and sink are required. Formulas default to
/// [`StandardFormulas`] and configuration to [`EngineConfig::default`].
pub struct CastManagerBuilder {
    config: EngineConfig,
    templates: Option<Arc<dyn SkillTemplateOracle>>,
    world: Option<Arc<dyn WorldResolver>>,
    formulas: Arc<dyn CombatFormulas>,
    sink: Option<Arc<dyn PacketSink>>,
    handle: Option<Handle>,
}

impl CastManagerBuilder {
    pub(super) fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            templates: None,
            world: None,
            formulas: Arc::new(StandardFormulas),
            sink: None,
            handle: None,
        }
    }

    /// Override engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required skill template oracle
    pub fn templates(mut self, templates: Arc<dyn SkillTemplateOracle>) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Set required world resolver
    pub fn world(mut self, world: Arc<dyn WorldResolver>) -> Self {
        self.world = Some(world);
        self
    }

    /// Replace the damage formulas
    pub fn formulas(mut self, formulas: Arc<dyn CombatFormulas>) -> Self {
        self.formulas = formulas;
        self
    }

    /// Set required notification sink
    pub fn sink(mut self, sink: Arc<dyn PacketSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Spawn delayed completions on `handle` instead of the current runtime
    pub fn runtime_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn build(self) -> Result<CastManager> {
        let templates = self.templates.ok_or(RuntimeError::MissingTemplates)?;
        let world = self.world.ok_or(RuntimeError::MissingWorld)?;
        let sink = self.sink.ok_or(RuntimeError::MissingSink)?;
        let handle = match self.handle {
            Some(handle) => handle,
            None => Handle::try_current().map_err(RuntimeError::NoRuntime)?,
        };

        let env = EffectEnv::new(&world, self.formulas);
        tracing::debug!(config = ?self.config, "cast manager built");

        Ok(CastManager {
            shared: Arc::new(Shared {
                templates,
                world,
                env,
                sink,
                config: self.config,
                cooldowns: CooldownRegistry::default(),
                casts: ActiveCasts::default(),
                handle,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::oracle::{SkillCatalog, WorldRegistry};

    #[test]
    fn missing_collaborators_are_reported() {
        let err = CastManager::builder().build().err();
        assert!(matches!(err, Some(RuntimeError::MissingTemplates)));

        let err = CastManager::builder()
            .templates(Arc::new(SkillCatalog::new()))
            .build()
            .err();
        assert!(matches!(err, Some(RuntimeError::MissingWorld)));

        let err = CastManager::builder()
            .templates(Arc::new(SkillCatalog::new()))
            .world(Arc::new(WorldRegistry::new()))
            .build()
            .err();
        assert!(matches!(err, Some(RuntimeError::MissingSink)));
    }

    #[test]
    fn building_outside_a_runtime_fails() {
        let err = CastManager::builder()
            .templates(Arc::new(SkillCatalog::new()))
            .world(Arc::new(WorldRegistry::new()))
            .sink(Arc::new(EventBus::new()))
            .build()
            .err();
        assert!(matches!(err, Some(RuntimeError::NoRuntime(_))));
    }
}
