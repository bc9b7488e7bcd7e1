// crates/search/src/domain/services/relevance_scorer.rs

use crate::domain::entities::{ScoredProfile, SearchableProfile};
use crate::domain::value_objects::SearchCriteria;

/// Classement additif des profils candidats.
///
/// Calcul pur, sans état : le même lot de profils et les mêmes critères
/// produisent toujours le même ordre.
pub struct RelevanceScorer;

impl RelevanceScorer {
    pub const NAME_EXACT: i64 = 100;
    pub const NAME_PARTIAL: i64 = 50;
    pub const EXPERTISE_TAG: i64 = 30;
    pub const DOMAIN: i64 = 20;
    pub const HOBBY_TAG: i64 = 10;
    pub const BIO: i64 = 15;
    pub const LOCATION: i64 = 25;
    pub const CATEGORY_OVERLAP: i64 = 40;
    pub const CATEGORY_MISS: i64 = -30;

    /// Filtre, note puis trie par score décroissant.
    /// `sort_by` est stable : à score égal, l'ordre de récupération est conservé.
    pub fn rank(profiles: Vec<SearchableProfile>, criteria: &SearchCriteria) -> Vec<ScoredProfile> {
        let mut scored: Vec<ScoredProfile> = profiles
            .into_iter()
            .filter(|p| Self::matches(p, criteria) && Self::passes_location(p, criteria))
            .map(|p| {
                let score = Self::score(&p, criteria);
                ScoredProfile::new(p, score)
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Vrai si la requête apparaît dans au moins un champ texte du profil.
    pub fn matches(profile: &SearchableProfile, criteria: &SearchCriteria) -> bool {
        let q = criteria.query();

        contains(profile.display_name(), q)
            || profile.bio().is_some_and(|bio| contains(bio, q))
            || profile.location().contains_normalized(q)
            || any_contains(profile.expertise(), q)
            || any_contains(profile.hobbies(), q)
            || any_contains(profile.domains(), q)
    }

    /// Filtre dur : sans filtre de localisation, tout profil passe.
    pub fn passes_location(profile: &SearchableProfile, criteria: &SearchCriteria) -> bool {
        criteria
            .location()
            .map_or(true, |loc| profile.location().contains_normalized(loc))
    }

    pub fn score(profile: &SearchableProfile, criteria: &SearchCriteria) -> i64 {
        let q = criteria.query();
        let mut score = 0;

        let name = profile.display_name().to_lowercase();
        if name == q {
            score += Self::NAME_EXACT;
        } else if name.contains(q) {
            score += Self::NAME_PARTIAL;
        }

        score += Self::EXPERTISE_TAG * count_contains(profile.expertise(), q);
        score += Self::DOMAIN * count_contains(profile.domains(), q);
        score += Self::HOBBY_TAG * count_contains(profile.hobbies(), q);

        if profile.bio().is_some_and(|bio| contains(bio, q)) {
            score += Self::BIO;
        }

        if let Some(loc) = criteria.location() {
            if profile.location().contains_normalized(loc) {
                score += Self::LOCATION;
            }
        }

        if !criteria.categories().is_empty() {
            let overlapping = Self::overlapping_categories(profile, criteria);
            if overlapping > 0 {
                score += Self::CATEGORY_OVERLAP * overlapping;
            } else {
                score += Self::CATEGORY_MISS;
            }
        }

        score
    }

    /// Nombre de catégories sélectionnées recoupant un tag (inclusion dans un sens ou l'autre).
    fn overlapping_categories(profile: &SearchableProfile, criteria: &SearchCriteria) -> i64 {
        let tags: Vec<String> = profile
            .interest_tags()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        criteria
            .categories()
            .iter()
            .filter(|category| {
                tags.iter()
                    .any(|tag| tag.contains(category.as_str()) || category.contains(tag.as_str()))
            })
            .count() as i64
    }
}

// `needle` est déjà normalisé par SearchCriteria
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_contains(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| contains(v, needle))
}

fn count_contains(values: &[String], needle: &str) -> i64 {
    values.iter().filter(|v| contains(v, needle)).count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CategoryFilter, LocationFilter, SearchQuery};
    use shared_kernel::domain::value_objects::AccountId;

    fn criteria(query: &str, location: Option<&str>, categories: &[&str]) -> SearchCriteria {
        SearchCriteria::new(
            &SearchQuery::try_new(query).unwrap(),
            &LocationFilter::try_new(location.map(String::from)).unwrap(),
            &CategoryFilter::try_new(categories.iter().map(|c| c.to_string()).collect()).unwrap(),
        )
    }

    fn profile(name: &str) -> SearchableProfile {
        SearchableProfile::builder(AccountId::new(), name).build()
    }

    #[test]
    fn test_exact_name_scores_100_and_partial_50() {
        let c = criteria("Ada", None, &[]);

        assert_eq!(RelevanceScorer::score(&profile("ada"), &c), 100);
        assert_eq!(RelevanceScorer::score(&profile("Ada Lovelace"), &c), 50);
    }

    #[test]
    fn test_exact_match_outranks_substring_match() {
        let exact = profile("Ada");
        let partial = profile("Adam Smith");
        let c = criteria("ada", None, &[]);

        let ranked = RelevanceScorer::rank(vec![partial.clone(), exact.clone()], &c);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].profile, exact);
        assert_eq!(ranked[1].profile, partial);
    }

    #[test]
    fn test_name_match_outranks_hobby_only_match() {
        let by_hobby = SearchableProfile::builder(AccountId::new(), "Grace")
            .hobbies(["Ada programming"])
            .build();
        let by_name = profile("Ada Lovelace");

        let ranked = RelevanceScorer::rank(vec![by_hobby, by_name.clone()], &criteria("ada", None, &[]));

        assert_eq!(ranked[0].profile, by_name);
        assert_eq!((ranked[0].score, ranked[1].score), (50, 10));
    }

    #[test]
    fn test_zero_overlap_scores_below_no_category_filter() {
        let p = SearchableProfile::builder(AccountId::new(), "Ada")
            .expertise(["Carpentry"])
            .build();

        let unfiltered = RelevanceScorer::score(&p, &criteria("ada", None, &[]));
        let filtered = RelevanceScorer::score(&p, &criteria("ada", None, &["Tutoring"]));

        assert!(filtered < unfiltered);
    }

    #[test]
    fn test_each_matching_tag_adds_points() {
        let p = SearchableProfile::builder(AccountId::new(), "Grace")
            .expertise(["Rust programming", "Programming languages", "Cooking"])
            .domains(["Programming"])
            .hobbies(["programming puzzles"])
            .bio("I love programming")
            .build();
        let c = criteria("programming", None, &[]);

        // 2 expertise (60) + 1 domaine (20) + 1 loisir (10) + bio (15)
        assert_eq!(RelevanceScorer::score(&p, &c), 105);
    }

    #[test]
    fn test_location_filter_is_a_hard_filter() {
        let boston = SearchableProfile::builder(AccountId::new(), "Ada Boston")
            .raw_location(Some(r#"{"address":"Boston, MA","latitude":42.36,"longitude":-71.06}"#))
            .build();
        let paris = SearchableProfile::builder(AccountId::new(), "Ada Paris")
            .raw_location(Some("Paris"))
            .build();
        let nowhere = profile("Ada Nowhere");
        let c = criteria("ada", Some("boston"), &[]);

        let ranked = RelevanceScorer::rank(vec![paris, boston.clone(), nowhere], &c);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].profile, boston);
        // partiel (50) + localisation (25)
        assert_eq!(ranked[0].score, 75);
    }

    #[test]
    fn test_location_matches_query_through_resolved_address() {
        let p = SearchableProfile::builder(AccountId::new(), "Grace")
            .raw_location(Some(r#"{"address":"Cambridge","latitude":42.37,"longitude":-71.1}"#))
            .build();

        assert!(RelevanceScorer::matches(&p, &criteria("cambridge", None, &[])));
        // Les clés JSON ne font pas partie de l'adresse résolue
        assert!(!RelevanceScorer::matches(&p, &criteria("latitude", None, &[])));
    }

    #[test]
    fn test_category_overlap_adds_40_per_category() {
        let p = SearchableProfile::builder(AccountId::new(), "Ada")
            .expertise(["Math tutoring"])
            .hobbies(["Garden"])
            .build();
        // "tutoring" ⊂ "math tutoring", "garden" ⊂ "gardening"
        let c = criteria("ada", None, &["Tutoring", "Gardening", "Plumbing"]);

        assert_eq!(RelevanceScorer::score(&p, &c), 100 + 80);
    }

    #[test]
    fn test_no_category_overlap_costs_30() {
        let with_tags = SearchableProfile::builder(AccountId::new(), "Ada")
            .expertise(["Carpentry"])
            .build();
        let without_tags = profile("Ada");
        let c = criteria("ada", None, &["Tutoring"]);

        assert_eq!(RelevanceScorer::score(&with_tags, &c), 70);
        assert_eq!(RelevanceScorer::score(&without_tags, &c), 70);
    }

    #[test]
    fn test_blank_tags_never_overlap() {
        let p = SearchableProfile::builder(AccountId::new(), "Ada")
            .hobbies([" "])
            .build();
        let c = criteria("ada", None, &["Tutoring"]);

        assert_eq!(RelevanceScorer::score(&p, &c), 70);
    }

    #[test]
    fn test_non_matching_profiles_are_excluded() {
        let p = SearchableProfile::builder(AccountId::new(), "Grace Hopper")
            .expertise(["COBOL"])
            .build();

        assert!(RelevanceScorer::rank(vec![p], &criteria("rust", None, &[])).is_empty());
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        let first = profile("Ada One");
        let second = profile("Ada Two");
        let third = profile("Ada Three");
        let c = criteria("ada", None, &[]);

        let ranked = RelevanceScorer::rank(vec![first.clone(), second.clone(), third.clone()], &c);

        let names: Vec<&str> = ranked.iter().map(|s| s.profile.display_name()).collect();
        assert_eq!(names, vec!["Ada One", "Ada Two", "Ada Three"]);
        assert!(ranked.iter().all(|s| s.score == 50));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let p = SearchableProfile::builder(AccountId::new(), "Linus")
            .domains(["Open SOURCE"])
            .build();

        let ranked = RelevanceScorer::rank(vec![p], &criteria("open source", None, &[]));

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 20);
    }
}
