use serde::Deserialize;
use std::time::Duration;

/// Tunables for the behavior layer. Defaults reproduce the shipped page;
/// the shell may override them from `calesco.toml`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Destination of the contact-form handoff.
    pub contact_email: String,
    /// Scroll offset (px) past which the header takes its scrolled state.
    pub header_scroll_threshold: f32,
    /// Viewport fraction excluded above the section-detection band.
    pub band_top_fraction: f32,
    /// Viewport fraction excluded below the section-detection band.
    pub band_bottom_fraction: f32,
    pub smooth_scroll_ms: u64,
    pub toast_hide_ms: u64,
    pub form_reset_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            contact_email: "guilherme.carod@gmail.com".to_string(),
            header_scroll_threshold: 50.0,
            band_top_fraction: 0.2,
            band_bottom_fraction: 0.7,
            smooth_scroll_ms: 450,
            toast_hide_ms: 4000,
            form_reset_ms: 1000,
        }
    }
}

impl PageConfig {
    pub fn smooth_scroll_duration(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }

    pub fn toast_hide_delay(&self) -> Duration {
        Duration::from_millis(self.toast_hide_ms)
    }

    pub fn form_reset_delay(&self) -> Duration {
        Duration::from_millis(self.form_reset_ms)
    }
}
