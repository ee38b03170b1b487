//! Release-readiness check implementations
//!
//! `content` holds the checks that read eligible project files; `tree`
//! holds the checks that look at the filesystem itself.

pub mod content;
pub mod tree;

use crate::error::HygieneResult;
use crate::validate::check::CheckRegistry;
use crate::validate::rules::RuleSet;

/// Build the registry in the fixed run order.
pub fn create_registry(rules: &RuleSet) -> HygieneResult<CheckRegistry> {
    let mut registry = CheckRegistry::new();

    registry.register(Box::new(content::IncludeGuardCheck::new(
        &rules.include_guard_marker,
        rules.header_suffixes.clone(),
    )));
    registry.register(Box::new(content::HardcodedPathCheck::new(
        rules.hardcoded_path_fragments.clone(),
    )));
    registry.register(Box::new(content::CopyrightHeaderCheck::new(
        &rules.expected_copyright,
        rules.copyright_window,
    )));
    registry.register(Box::new(tree::BackupArtifactCheck::new(
        &rules.backup_marker,
        rules.vcs_dirs.clone(),
    )));
    registry.register(Box::new(tree::DeprecatedFileCheck::new(
        rules.forbidden_files.clone(),
    )));
    registry.register(Box::new(content::StaleAuthorCheck::new(
        &rules.former_authors,
        &rules.stale_author_pattern(),
    )?));

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::check::CheckScope;
    use crate::validate::report::CheckId;
    use strum::IntoEnumIterator;

    fn registry() -> CheckRegistry {
        create_registry(&RuleSet::sound_studio("Copyright (c) 2026 Ziv Elovitch. All rights reserved."))
            .unwrap()
    }

    #[test]
    fn registry_runs_checks_in_fixed_order() {
        let ids: Vec<CheckId> = registry().get_all().iter().map(|c| c.id()).collect();
        assert_eq!(ids, CheckId::iter().collect::<Vec<_>>());
    }

    #[test]
    fn titles_follow_rule_data() {
        let registry = registry();
        let title = |id| registry.get_by_id(id).unwrap().title().to_string();
        assert_eq!(title(CheckId::PragmaOnce), "#pragma once in all project .h files");
        assert_eq!(title(CheckId::HardcodedPath), "No hardcoded /Users/ paths");
        assert_eq!(title(CheckId::BackupFile), "No .bak files");
        assert_eq!(title(CheckId::DeprecatedFile), "notes.h deleted");
    }

    #[test]
    fn backup_check_covers_the_whole_tree() {
        let registry = registry();
        assert_eq!(
            registry.get_by_id(CheckId::BackupFile).unwrap().scope(),
            CheckScope::WholeTree
        );
        assert_eq!(
            registry.get_by_id(CheckId::StaleAuthor).unwrap().scope(),
            CheckScope::ProjectFiles
        );
    }
}
