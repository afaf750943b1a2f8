use mindguard_core::models::scale::ScaleId;
use mindguard_core::models::severity::SeverityBand;

use crate::error::ScaleError;
use crate::scale_for;

/// Ordered severity cutoffs for one scale.
///
/// Each cutoff is an inclusive upper bound; the first one a total fits under
/// wins, and totals above every cutoff fall into `above`.
#[derive(Debug, Clone, Copy)]
pub struct SeverityTable {
    cutoffs: &'static [(u32, SeverityBand)],
    above: SeverityBand,
}

impl SeverityTable {
    pub const fn new(cutoffs: &'static [(u32, SeverityBand)], above: SeverityBand) -> Self {
        Self { cutoffs, above }
    }

    pub fn band_for(&self, total: u32) -> SeverityBand {
        self.cutoffs
            .iter()
            .find(|(upper, _)| total <= *upper)
            .map(|(_, band)| *band)
            .unwrap_or(self.above)
    }

    /// Every band this table can produce, lowest first.
    pub fn bands(&self) -> Vec<SeverityBand> {
        self.cutoffs
            .iter()
            .map(|(_, band)| *band)
            .chain(std::iter::once(self.above))
            .collect()
    }
}

/// Severity band for `total` on the scale `id`.
pub fn classify(id: ScaleId, total: u32) -> Result<SeverityBand, ScaleError> {
    scale_for(id).severity(total)
}
