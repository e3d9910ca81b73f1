//! Runtime configuration for the page layer.
//!
//! Loaded from an optional `vitrine.toml` next to the working directory plus
//! `VITRINE_*` environment overrides. Defaults reproduce the showcase page's
//! tuned constants, so a missing file means the stock behavior.

use std::time::Duration;

use serde::Deserialize;
use vitrine_core::{BoundaryPolicy, Easing, RotationConfig};

/// Settings for one rotating section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub boundary: BoundaryPolicy,
    pub transition_ms: u64,
    pub easing: Easing,
    /// Whether this section auto-advances at mount.
    pub auto_advance: bool,
    pub interval_ms: u64,
    /// Extra random delay per cycle on top of `interval_ms`.
    pub jitter_ms: u64,
    /// Minimum drag distance before a swipe counts.
    pub swipe_threshold: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryPolicy::Wrap,
            transition_ms: 400,
            easing: Easing::EaseOut,
            auto_advance: true,
            interval_ms: 6_000,
            jitter_ms: 0,
            swipe_threshold: 50.0,
        }
    }
}

impl SliderConfig {
    /// Testimonials: wrapping, steady 6s auto-advance.
    fn testimonials() -> Self {
        Self::default()
    }

    /// Product gallery: wrapping, 4-6s jittered auto-advance so several
    /// carousels on one page stay out of phase.
    fn gallery() -> Self {
        Self {
            interval_ms: 4_000,
            jitter_ms: 2_000,
            ..Self::default()
        }
    }

    /// Feedback quotes: clamped, buttons disable at the ends, auto-advance
    /// wired but off by default.
    fn feedback() -> Self {
        Self {
            boundary: BoundaryPolicy::Clamp,
            auto_advance: false,
            interval_ms: 5_000,
            ..Self::default()
        }
    }

    /// Lightbox: clamped, never auto-advances.
    fn lightbox() -> Self {
        Self {
            boundary: BoundaryPolicy::Clamp,
            auto_advance: false,
            transition_ms: 300,
            ..Self::default()
        }
    }

    /// Translate to the engine's per-instance configuration.
    pub fn rotation_config(&self) -> RotationConfig {
        RotationConfig {
            boundary: self.boundary,
            transition: Duration::from_millis(self.transition_ms),
            easing: self.easing,
            interval: Duration::from_millis(self.interval_ms),
            jitter: Duration::from_millis(self.jitter_ms),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Submission endpoint. Absent or still carrying the setup placeholder
    /// means demo mode: submissions succeed locally without network.
    pub endpoint: Option<String>,
}

impl ContactConfig {
    const PLACEHOLDER: &'static str = "YOUR_FORM_ID";

    pub fn effective_endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .filter(|url| !url.contains(Self::PLACEHOLDER))
    }
}

/// Full page configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    #[serde(default = "SliderConfig::testimonials")]
    pub testimonials: SliderConfig,
    #[serde(default = "SliderConfig::gallery")]
    pub gallery: SliderConfig,
    #[serde(default = "SliderConfig::feedback")]
    pub feedback: SliderConfig,
    #[serde(default = "SliderConfig::lightbox")]
    pub lightbox: SliderConfig,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            testimonials: SliderConfig::testimonials(),
            gallery: SliderConfig::gallery(),
            feedback: SliderConfig::feedback(),
            lightbox: SliderConfig::lightbox(),
            contact: ContactConfig::default(),
        }
    }
}

/// Configuration loading/validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("{section}: auto-advance is enabled with a zero interval")]
    ZeroInterval { section: &'static str },
}

impl SiteConfig {
    /// Load from `vitrine.toml` (optional) and `VITRINE_*` env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let raw = config::Config::builder()
            .add_source(config::File::with_name("vitrine").required(false))
            .add_source(
                config::Environment::with_prefix("VITRINE").separator("__"),
            )
            .build()?;
        let site: SiteConfig = raw.try_deserialize()?;
        site.validate()?;
        Ok(site)
    }

    /// Reject settings that would spin the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (section, slider) in [
            ("testimonials", &self.testimonials),
            ("gallery", &self.gallery),
            ("feedback", &self.feedback),
            ("lightbox", &self.lightbox),
        ] {
            if slider.auto_advance && slider.interval_ms == 0 {
                return Err(ConfigError::ZeroInterval { section });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_tuning() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.testimonials.boundary, BoundaryPolicy::Wrap);
        assert_eq!(cfg.testimonials.interval_ms, 6_000);
        assert_eq!(cfg.gallery.jitter_ms, 2_000);
        assert_eq!(cfg.feedback.boundary, BoundaryPolicy::Clamp);
        assert!(!cfg.feedback.auto_advance);
        assert_eq!(cfg.feedback.swipe_threshold, 50.0);
        assert!(!cfg.lightbox.auto_advance);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_interval_with_auto_advance_is_rejected() {
        let mut cfg = SiteConfig::default();
        cfg.gallery.interval_ms = 0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ZeroInterval { section: "gallery" })
        ));
    }

    #[test]
    fn placeholder_endpoint_means_demo_mode() {
        let contact = ContactConfig {
            endpoint: Some(
                "https://formspree.io/f/YOUR_FORM_ID".to_string(),
            ),
        };
        assert_eq!(contact.effective_endpoint(), None);

        let contact = ContactConfig {
            endpoint: Some("https://formspree.io/f/xyzabcde".to_string()),
        };
        assert_eq!(
            contact.effective_endpoint(),
            Some("https://formspree.io/f/xyzabcde")
        );
    }

    #[test]
    fn toml_overrides_survive_deserialization() {
        let raw = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [feedback]
                auto_advance = true
                interval_ms = 8000

                [contact]
                endpoint = "https://example.test/submit"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: SiteConfig = raw.try_deserialize().unwrap();
        assert!(cfg.feedback.auto_advance);
        assert_eq!(cfg.feedback.interval_ms, 8_000);
        assert_eq!(
            cfg.contact.endpoint.as_deref(),
            Some("https://example.test/submit")
        );
        // Untouched sections keep their defaults.
        assert_eq!(cfg.gallery.interval_ms, 4_000);
    }
}
