use crate::util::normalize;
use clap::ValueEnum;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;

/// Awarded when the folded candidate equals the folded query.
pub const EXACT_BONUS: u32 = 15;
/// Awarded when the folded candidate contains the folded query.
pub const CONTAINS_BONUS: u32 = 15;
/// Awarded per (candidate n-gram, query n-gram) pair that are equal.
pub const GRAM_EQUAL_BONUS: u32 = 5;
/// Awarded per pair where the candidate n-gram contains the query n-gram.
pub const GRAM_CONTAINS_BONUS: u32 = 2;

/// Whether the caller wants the scores alongside the ranked candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Names,
    Scored,
}

/// One ranked candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored<'a> {
    pub candidate: &'a str,
    /// Position in the candidate list, used as the tie-break.
    pub index: usize,
    pub score: u32,
}

/// Ranked output, shaped by [`DisplayMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ranked<'a> {
    Names(Vec<&'a str>),
    Scored(Vec<Scored<'a>>),
}

impl Ranked<'_> {
    pub fn len(&self) -> usize {
        match self {
            Ranked::Names(v) => v.len(),
            Ranked::Scored(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-candidate score split into its contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub exact: u32,
    pub containment: u32,
    pub overlap: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.exact + self.containment + self.overlap
    }
}

/// How a string is cut into n-grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NgramWalk {
    /// Advances the start offset after every cut, so each offset only yields the
    /// lengths it reaches before the walk moves on ("mango" yields m, an, ngo,
    /// g, o). Keeps an exact match above longer terms that contain it.
    #[default]
    Stepped,
    /// Every contiguous substring at every offset.
    Full,
}

/// Every contiguous substring of `s`, cut on char boundaries and deduplicated.
///
/// Quadratic in the length of `s`; callers pass short UI input and short terms.
pub fn ngrams(s: &str) -> HashSet<&str> {
    let bounds = char_bounds(s);
    let mut grams = HashSet::with_capacity(bounds.len() * bounds.len() / 2);
    for (n, &start) in bounds.iter().enumerate() {
        for &end in &bounds[n + 1..] {
            grams.insert(&s[start..end]);
        }
    }
    grams
}

/// Substrings produced by the [`NgramWalk::Stepped`] walk.
pub fn stepped_ngrams(s: &str) -> HashSet<&str> {
    let bounds = char_bounds(s);
    let chars = bounds.len() - 1;
    let mut grams = HashSet::new();
    let mut offset = 0;
    while offset < chars {
        let mut len = 1;
        while offset + len <= chars {
            grams.insert(&s[bounds[offset]..bounds[offset + len]]);
            offset += 1;
            len += 1;
        }
    }
    grams
}

/// Byte offsets of every char start, plus the end of the string.
fn char_bounds(s: &str) -> Vec<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect()
}

/// Case-insensitive substring-overlap scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scorer {
    pub walk: NgramWalk,
}

impl Scorer {
    pub fn new(walk: NgramWalk) -> Self {
        Self { walk }
    }

    fn grams<'s>(&self, s: &'s str) -> HashSet<&'s str> {
        match self.walk {
            NgramWalk::Full => ngrams(s),
            NgramWalk::Stepped => stepped_ngrams(s),
        }
    }

    /// Scores one candidate against an already folded query and its n-grams.
    fn breakdown_folded(&self, query_norm: &str, query_grams: &HashSet<&str>, candidate_norm: &str) -> ScoreBreakdown {
        let mut out = ScoreBreakdown::default();
        if candidate_norm == query_norm {
            out.exact = EXACT_BONUS;
        }
        if candidate_norm.contains(query_norm) {
            out.containment = CONTAINS_BONUS;
        }

        for gram in self.grams(candidate_norm) {
            for q in query_grams {
                if gram == *q {
                    out.overlap += GRAM_EQUAL_BONUS;
                } else if gram.contains(*q) {
                    out.overlap += GRAM_CONTAINS_BONUS;
                }
            }
        }
        out
    }

    /// Explains how `candidate` scores against `query`, case-insensitively.
    pub fn explain(&self, query: &str, candidate: &str) -> ScoreBreakdown {
        let query_norm = normalize(query);
        if query_norm.is_empty() {
            return ScoreBreakdown::default();
        }
        let query_grams = self.grams(&query_norm);
        self.breakdown_folded(&query_norm, &query_grams, &normalize(candidate))
    }

    /// Ranks `candidates` against `query` by descending score.
    ///
    /// Candidates that share nothing with the query are left out. Equal scores
    /// keep their list order. `limit` of `None` or `Some(0)` means unbounded. An
    /// empty query ranks nothing.
    pub fn rank<'a, I>(&self, query: &str, candidates: I, limit: Option<usize>) -> Vec<Scored<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query_norm = normalize(query);
        if query_norm.is_empty() {
            return Vec::new();
        }
        let query_grams = self.grams(&query_norm);

        // Keyed by candidate so a repeated term is only scored at its first position.
        let mut acc: IndexMap<&'a str, (usize, u32)> = IndexMap::new();
        for (index, candidate) in candidates.into_iter().enumerate() {
            if acc.contains_key(candidate) {
                continue;
            }
            let score = self
                .breakdown_folded(&query_norm, &query_grams, &normalize(candidate))
                .total();
            if score > 0 {
                acc.insert(candidate, (index, score));
            }
        }

        let mut ranked: Vec<Scored<'a>> = acc
            .into_iter()
            .map(|(candidate, (index, score))| Scored { candidate, index, score })
            .collect();

        // Stable, so ties stay in list order.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(n) = limit.filter(|n| *n > 0) {
            ranked.truncate(n);
        }
        ranked
    }

    /// Ranks `candidates` and shapes the output for the requested display mode.
    pub fn sort_relevance<'a, I>(&self, query: &str, candidates: I, limit: Option<usize>, mode: DisplayMode) -> Ranked<'a>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ranked = self.rank(query, candidates, limit);
        match mode {
            DisplayMode::Scored => Ranked::Scored(ranked),
            DisplayMode::Names => Ranked::Names(ranked.into_iter().map(|s| s.candidate).collect()),
        }
    }
}

/// [`Scorer::explain`] with the default n-gram walk.
pub fn explain(query: &str, candidate: &str) -> ScoreBreakdown {
    Scorer::default().explain(query, candidate)
}

/// [`Scorer::rank`] with the default n-gram walk.
pub fn score_candidates<'a, I>(query: &str, candidates: I, limit: Option<usize>) -> Vec<Scored<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    Scorer::default().rank(query, candidates, limit)
}

/// [`Scorer::sort_relevance`] with the default n-gram walk.
pub fn sort_relevance<'a, I>(query: &str, candidates: I, limit: Option<usize>, mode: DisplayMode) -> Ranked<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    Scorer::default().sort_relevance(query, candidates, limit, mode)
}
