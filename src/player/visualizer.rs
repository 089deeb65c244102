//! Spectrum frames and the lazily built audio graph that feeds them.

use crate::error::Result;
use dioxus::logger::tracing::warn;

/// FFT size requested from the analyser; half of it comes back as bins.
pub const FFT_SIZE: u32 = 128;
pub const FREQUENCY_BINS: usize = (FFT_SIZE / 2) as usize;

/// Latest byte magnitudes read from the analyser. Each frame replaces the
/// previous one wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizerFrame {
    bins: [u8; FREQUENCY_BINS],
}

impl Default for VisualizerFrame {
    fn default() -> Self {
        Self {
            bins: [0; FREQUENCY_BINS],
        }
    }
}

/// One rendered equalizer bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// 0..=100
    pub height_percent: f64,
    /// 0..360
    pub hue: f64,
}

impl VisualizerFrame {
    /// Copies up to [`FREQUENCY_BINS`] magnitudes; missing bins stay silent.
    pub fn from_bins(bins: &[u8]) -> Self {
        let mut frame = Self::default();
        let len = bins.len().min(FREQUENCY_BINS);
        frame.bins[..len].copy_from_slice(&bins[..len]);
        frame
    }

    #[cfg(test)]
    pub fn bins(&self) -> &[u8] {
        &self.bins
    }

    pub fn bars(&self) -> impl Iterator<Item = Bar> + '_ {
        self.bins.iter().enumerate().map(|(index, &value)| Bar {
            height_percent: f64::from(value) / 255.0 * 100.0,
            hue: index as f64 * 360.0 / FREQUENCY_BINS as f64,
        })
    }
}

/// Holder for the audio graph, which is built at most once. A failed build
/// is remembered and not retried.
pub enum GraphSlot<G> {
    Pending,
    Ready(G),
    Unavailable,
}

impl<G> Default for GraphSlot<G> {
    fn default() -> Self {
        GraphSlot::Pending
    }
}

impl<G> GraphSlot<G> {
    pub fn ensure_with<F>(&mut self, init: F) -> Option<&G>
    where
        F: FnOnce() -> Result<G>,
    {
        if matches!(self, GraphSlot::Pending) {
            *self = match init() {
                Ok(graph) => GraphSlot::Ready(graph),
                Err(err) => {
                    warn!(%err, "visualizer disabled");
                    GraphSlot::Unavailable
                }
            };
        }
        self.get()
    }

    pub fn get(&self) -> Option<&G> {
        match self {
            GraphSlot::Ready(graph) => Some(graph),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;

    #[test]
    fn analyser_yields_sixty_four_bins() {
        assert_eq!(FREQUENCY_BINS, 64);
        assert_eq!(VisualizerFrame::default().bins().len(), 64);
    }

    #[test]
    fn short_input_is_zero_padded() {
        let frame = VisualizerFrame::from_bins(&[255, 128]);
        assert_eq!(&frame.bins()[..3], &[255, 128, 0]);
    }

    #[test]
    fn long_input_is_truncated() {
        let frame = VisualizerFrame::from_bins(&[9; 100]);
        assert!(frame.bins().iter().all(|&b| b == 9));
    }

    #[test]
    fn bars_scale_height_and_spread_hue() {
        let frame = VisualizerFrame::from_bins(&[255, 0]);
        let bars: Vec<Bar> = frame.bars().collect();
        assert_eq!(bars.len(), 64);
        assert!((bars[0].height_percent - 100.0).abs() < 1e-9);
        assert_eq!(bars[1].height_percent, 0.0);
        assert_eq!(bars[0].hue, 0.0);
        assert!((bars[32].hue - 180.0).abs() < 1e-9);
    }

    #[test]
    fn graph_is_built_once() {
        let mut slot = GraphSlot::default();
        let mut builds = 0;
        for _ in 0..3 {
            slot.ensure_with(|| {
                builds += 1;
                Ok("graph")
            });
        }
        assert_eq!(builds, 1);
        assert_eq!(slot.get(), Some(&"graph"));
    }

    #[test]
    fn failed_graph_is_not_retried() {
        let mut slot: GraphSlot<()> = GraphSlot::default();
        assert!(slot
            .ensure_with(|| Err(PlayerError::GraphUnavailable("no AudioContext".into())))
            .is_none());
        assert!(slot.ensure_with(|| Ok(())).is_none());
    }
}
