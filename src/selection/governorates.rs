use rand::Rng;

use super::anchors::Anchors;
use super::config::SelectionConfig;
use super::sampling::sample;
use crate::types::Directory;

/// Fresh governorate selection, ignoring any cache.
///
/// Anchors come first (Cairo, then Giza), followed by up to
/// `governorate_picks` random names from the first `candidate_window`
/// directory names that are not anchors. Short pools give short results.
pub fn pick_governorates<R>(directory: &Directory, config: &SelectionConfig, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let anchors = Anchors::find(directory.names());

    let candidates: Vec<&str> = directory
        .names()
        .take(config.candidate_window)
        .filter(|name| !anchors.contains(name))
        .collect();

    let picked = sample(&candidates, config.governorate_picks, rng);

    anchors
        .iter()
        .chain(picked)
        .map(str::to_string)
        .collect()
}
