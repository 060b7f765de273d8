/// Governorates that lead every featured selection when present.
///
/// Matching deliberately mirrors the directory's raw keys rather than the
/// normalizer: a Latin name matches case-insensitively, an Arabic name only
/// as an exact substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchors<'a> {
    pub cairo: Option<&'a str>,
    pub giza: Option<&'a str>,
}

const CAIRO_LATIN: &str = "cairo";
const CAIRO_ARABIC: &str = "القاهرة";
const GIZA_LATIN: &str = "giza";
const GIZA_ARABIC: &str = "الجيزة";

fn matches_anchor(name: &str, latin: &str, arabic: &str) -> bool {
    name.to_lowercase().contains(latin) || name.contains(arabic)
}

pub fn is_cairo(name: &str) -> bool {
    matches_anchor(name, CAIRO_LATIN, CAIRO_ARABIC)
}

pub fn is_giza(name: &str) -> bool {
    matches_anchor(name, GIZA_LATIN, GIZA_ARABIC)
}

impl<'a> Anchors<'a> {
    /// First Cairo match and first Giza match among `names`, in order.
    ///
    /// When the first Giza match is also the Cairo anchor (e.g. "Cairo & Giza"),
    /// Giza is left absent so the name never appears twice. The office
    /// selection then draws only the Cairo quota from it (4 instead of 4 + 2)
    /// and the governorate selection lists it once.
    pub fn find<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut anchors = Anchors::default();
        for name in names {
            if anchors.cairo.is_none() && is_cairo(name) {
                anchors.cairo = Some(name);
            }
            if anchors.giza.is_none() && is_giza(name) {
                anchors.giza = Some(name);
            }
            if anchors.cairo.is_some() && anchors.giza.is_some() {
                break;
            }
        }
        if anchors.giza.is_some() && anchors.giza == anchors.cairo {
            anchors.giza = None;
        }
        anchors
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cairo == Some(name) || self.giza == Some(name)
    }

    /// Cairo first, then Giza.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        self.cairo.into_iter().chain(self.giza)
    }
}
