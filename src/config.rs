use crate::constants::{
    CONTENT_SELECTOR, FLOATING_HEADER_SELECTOR, HERO_SELECTOR, POLL_INTERVAL_MS,
    VISIBLE_CLASS, VISIBLE_TOP_THRESHOLD_PX,
};

/// Everything the page bootstrap needs to know about the markup and timing.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub header_selector: String,
    pub content_selector: String,
    pub hero_selector: String,
    pub visible_class: String,
    pub threshold_px: f64,
    pub poll_interval_ms: i32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            header_selector: FLOATING_HEADER_SELECTOR.to_string(),
            content_selector: CONTENT_SELECTOR.to_string(),
            hero_selector: HERO_SELECTOR.to_string(),
            visible_class: VISIBLE_CLASS.to_string(),
            threshold_px: VISIBLE_TOP_THRESHOLD_PX,
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

impl EffectsConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.poll_interval_ms <= 0 {
            anyhow::bail!("poll interval must be positive, got {}ms", self.poll_interval_ms);
        }
        if !self.threshold_px.is_finite() {
            anyhow::bail!("threshold must be finite, got {}", self.threshold_px);
        }
        // DOMTokenList rejects empty and whitespace-bearing tokens
        if self.visible_class.is_empty() || self.visible_class.contains(char::is_whitespace) {
            anyhow::bail!("invalid class token {:?}", self.visible_class);
        }
        for (what, sel) in [
            ("header", &self.header_selector),
            ("content", &self.content_selector),
            ("hero", &self.hero_selector),
        ] {
            if sel.trim().is_empty() {
                anyhow::bail!("empty {} selector", what);
            }
        }
        Ok(())
    }
}
