use rand::Rng;

use super::anchors::Anchors;
use super::config::SelectionConfig;
use super::sampling::sample;
use crate::types::{Directory, FeaturedOffice};

/// Fresh office selection, ignoring any cache.
///
/// Up to `cairo_office_picks` offices from the Cairo anchor followed by up to
/// `giza_office_picks` from the Giza anchor. A missing anchor, or one with no
/// offices, contributes nothing. A name matching both anchors is only the
/// Cairo anchor (see [`Anchors::find`]), so it yields the Cairo quota alone.
pub fn pick_offices<R>(directory: &Directory, config: &SelectionConfig, rng: &mut R) -> Vec<FeaturedOffice>
where
    R: Rng + ?Sized,
{
    let anchors = Anchors::find(directory.names());

    let quotas = [
        (anchors.cairo, config.cairo_office_picks),
        (anchors.giza, config.giza_office_picks),
    ];

    let mut selected = Vec::new();
    for (anchor, count) in quotas {
        let Some(gov_name) = anchor else {
            continue;
        };
        for office in sample(directory.offices(gov_name), count, rng) {
            selected.push(FeaturedOffice {
                office,
                gov_name: gov_name.to_string(),
            });
        }
    }
    selected
}
