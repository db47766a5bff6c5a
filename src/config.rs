use crate::glyph::Word;
use crate::layout::DEFAULT_MARGIN_WEEKS;

/// Compiled-in painting settings. Only the repository, anchor date and
/// output switches come from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintConfig {
    /// Derive the daily volume from recent history instead of using `commits_per_day`.
    pub auto_adjust: bool,
    /// Manual volume, also the fallback when history is unavailable.
    pub commits_per_day: u32,
    pub intensity_multiplier: f64,
    pub history_window_days: u32,
    pub margin_weeks: u32,
    pub word: Word,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            auto_adjust: true,
            commits_per_day: 15,
            intensity_multiplier: 2.5,
            history_window_days: 365,
            margin_weeks: DEFAULT_MARGIN_WEEKS,
            word: Word::raztor(),
        }
    }
}
