//! Ranking behaviour over the built-in fruit list.

use fruit_suggest::app::search::{
    CONTAINS_BONUS, DisplayMode, EXACT_BONUS, NgramWalk, Ranked, Scorer,
};
use fruit_suggest::app::state::{App, suggestions_from};
use fruit_suggest::config::Config;
use fruit_suggest::terms::Catalog;

fn rank(walk: NgramWalk, query: &str, limit: Option<usize>) -> Vec<(String, u32)> {
    let catalog = Catalog::builtin();
    Scorer::new(walk)
        .rank(query, catalog.iter(), limit)
        .into_iter()
        .map(|s| (s.candidate.to_string(), s.score))
        .collect()
}

#[test]
fn unrelated_query_has_no_suggestions() {
    for walk in [NgramWalk::Full, NgramWalk::Stepped] {
        assert!(rank(walk, "xyz123", None).is_empty());
    }
}

#[test]
fn exact_fruit_scores_at_least_thirty() {
    let catalog = Catalog::builtin();
    let scorer = Scorer::default();
    for fruit in catalog.iter() {
        let b = scorer.explain(&fruit.to_lowercase(), fruit);
        assert!(b.total() >= EXACT_BONUS + CONTAINS_BONUS, "{fruit}");
    }
}

#[test]
fn mango_and_mangosteen_bonuses() {
    let scorer = Scorer::default();
    let mango = scorer.explain("Mango", "Mango");
    let steen = scorer.explain("Mango", "Mangosteen");
    assert_eq!((mango.exact, mango.containment), (EXACT_BONUS, CONTAINS_BONUS));
    assert_eq!((steen.exact, steen.containment), (0, CONTAINS_BONUS));
}

#[test]
fn mango_ranks_above_mangosteen() {
    let ranked = rank(NgramWalk::default(), "Mango", None);
    assert_eq!(ranked[0], ("Mango".to_string(), 59));
    assert_eq!(ranked[1], ("Mangosteen".to_string(), 40));
}

#[test]
fn default_app_shows_mango_first() {
    let mut app = App::new(Catalog::builtin(), &Config::default());
    app.set_input("Mango");
    app.recompute_filter();
    let shown: Vec<&str> = app.search.suggestions.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(shown.len(), 7);
    assert_eq!(&shown[..2], &["Mango", "Mangosteen"]);
}

#[test]
fn apple_with_limit_one() {
    let ranked = rank(NgramWalk::default(), "apple", Some(1));
    assert_eq!(ranked, vec![("Apple".to_string(), 59)]);

    // The full walk favours the longer term that contains it.
    assert_eq!(rank(NgramWalk::Full, "apple", Some(1))[0].0, "Custard apple");
}

#[test]
fn default_limit_is_seven() {
    let app = App::new(Catalog::builtin(), &Config::default());
    assert_eq!(app.limit(), Some(7));
    assert_eq!(rank(NgramWalk::default(), "e", Some(7)).len(), 7);
}

#[test]
fn relevance_percentages_are_relative_to_the_best() {
    let catalog = Catalog::builtin();
    let ranked = Scorer::default().sort_relevance("berry", catalog.iter(), None, DisplayMode::Scored);
    let Ranked::Scored(scored) = &ranked else {
        panic!("expected scores");
    };
    let max = scored[0].score;
    for (item, s) in suggestions_from(&ranked).iter().zip(scored) {
        let pct = s.score * 100 / max;
        assert_eq!(item.label, format!("{} ({pct}%)", s.candidate));
    }
}
