//! Project profile: the immutable data both tools are built from.

use crate::header::{HeaderMatcher, HeaderTemplate};
use crate::policy::ExclusionPolicy;
use crate::validate::RuleSet;

/// Exclusions, header layout and validation rules for one project.
///
/// The rewriter and the validator are both constructed from the same
/// profile, so the file set one rewrites is the file set the other checks.
#[derive(Debug, Clone)]
pub struct ProjectProfile {
    /// Short name used in the validation banner.
    pub name: String,
    pub exclusions: ExclusionPolicy,
    pub header: HeaderTemplate,
    pub matcher: HeaderMatcher,
    pub rules: RuleSet,
}

impl ProjectProfile {
    pub fn sound_studio() -> Self {
        let header = HeaderTemplate::sound_studio();
        let rules = RuleSet::sound_studio(header.copyright_line());
        Self {
            name: "TSS".to_string(),
            exclusions: ExclusionPolicy::default(),
            header,
            matcher: HeaderMatcher::default(),
            rules,
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionPolicy) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }
}

impl Default for ProjectProfile {
    fn default() -> Self {
        Self::sound_studio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_rule_tracks_header_template() {
        let profile = ProjectProfile::sound_studio();
        assert_eq!(
            profile.rules.expected_copyright,
            profile.header.copyright_line()
        );
        assert!(
            profile
                .header
                .render("x.h")
                .contains(&profile.rules.expected_copyright)
        );
    }
}
