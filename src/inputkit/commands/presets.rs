use crate::commands::{CmdResult, PresetInfo};
use crate::transform::{FILTER_PRESETS, MODIFIER_PRESETS};
use crate::validation::VALIDATION_PRESETS;

/// Every registered preset, filters first, then modifiers, then validators.
pub fn all_presets() -> Vec<PresetInfo> {
    let transforms = FILTER_PRESETS
        .iter()
        .chain(MODIFIER_PRESETS)
        .map(|preset| PresetInfo {
            kind: preset.kind,
            name: preset.name,
            description: preset.description,
        });
    let validations = VALIDATION_PRESETS.iter().map(|preset| PresetInfo {
        kind: preset.kind,
        name: preset.name,
        description: preset.description,
    });
    transforms.chain(validations).collect()
}

pub fn run() -> CmdResult {
    CmdResult::default().with_presets(all_presets())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::PresetKind;

    #[test]
    fn lists_every_preset_in_registry_order() {
        let names: Vec<_> = all_presets().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["letters", "numbers", "uppercase", "lowercase", "required"]
        );
    }

    #[test]
    fn kinds_follow_registries() {
        let presets = run().presets;
        assert_eq!(presets[0].kind, PresetKind::Filter);
        assert_eq!(presets[2].kind, PresetKind::Modifier);
        assert_eq!(presets[4].kind, PresetKind::Validation);
    }
}
