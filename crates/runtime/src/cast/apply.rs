//! Turning a template's effect list into applied effects.

use std::sync::Arc;

use skill_core::{ActiveEffect, Character, Effect, EffectContext, SkillTemplate};
use tracing::{debug, warn};

use super::Shared;

impl Shared {
    /// Applies every effect of `template` from `caster` to `target`.
    ///
    /// Unknown effect names are logged and skipped; siblings still apply.
    /// Returns the number of effects that ran or were accepted.
    pub(crate) fn apply_effects(
        &self,
        caster: &Character,
        target: &Arc<Character>,
        template: &SkillTemplate,
    ) -> usize {
        let skill = template.key();
        let mut applied = 0;

        for definition in &template.effects {
            let effect = match Effect::from_definition(definition) {
                Ok(effect) => effect,
                Err(err) => {
                    warn!(skill = %skill, error = %err, "skipping effect");
                    continue;
                }
            };

            if effect.is_instant() {
                effect.on_start(&EffectContext::new(caster.id(), target.id(), skill, &self.env));
                applied += 1;
                continue;
            }

            let active = ActiveEffect::new(caster.id(), target.id(), skill, effect, self.env.clone())
                .with_duration(template.abnormal.duration_ms())
                .with_abnormal(template.abnormal.kind.as_str(), template.abnormal.level);
            if target.effects().add(active) {
                applied += 1;
            }
        }

        debug!(
            caster = %caster.id(),
            target = %target.id(),
            skill = %skill,
            applied,
            "effects applied"
        );
        applied
    }

    /// Installs the continuous effects of a passive template on `character`.
    pub(crate) fn apply_passive(&self, character: &Character, template: &SkillTemplate) -> usize {
        let skill = template.key();
        let mut applied = 0;

        for definition in &template.effects {
            match Effect::from_definition(definition) {
                Ok(effect) if effect.is_instant() => {
                    warn!(skill = %skill, effect = effect.name(), "instant effect on passive skill ignored");
                }
                Ok(effect) => {
                    character.effects().add_passive(
                        ActiveEffect::new(character.id(), character.id(), skill, effect, self.env.clone())
                            .with_abnormal(template.abnormal.kind.as_str(), template.abnormal.level),
                    );
                    applied += 1;
                }
                Err(err) => warn!(skill = %skill, error = %err, "skipping effect"),
            }
        }
        applied
    }
}
