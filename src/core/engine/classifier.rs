use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// The four qualifying runs: four consecutive identical letters drawn from
// the A/C/G/T alphabet.
static QUALIFYING: Lazy<Regex> =
    Lazy::new(|| Regex::new("AAAA|CCCC|GGGG|TTTT").expect("qualifying pattern is valid"));

/// A grid is mutant when strictly more than one distinct qualifying window
/// was found.
///
/// Uniqueness is by window value, not by grid position: a grid covered in a
/// single letter yields exactly one qualifying value and stays human.
pub fn is_mutant(windows: &HashSet<String>) -> bool {
    windows.iter().filter(|w| QUALIFYING.is_match(w)).count() > 1
}
