//! Interaction-state palettes derived from a single base color.
//!
//! All arithmetic happens in PUHSL after converting the base color once.
//! Every state gets its own text color, chosen against that state's own
//! background, so text stays legible on shifted backgrounds too.

use palette::Srgba;

use crate::contrast::high_contrast_text;
use crate::interaction::RenderState;
use crate::space::device_color_to_puhsl;
use crate::types::{ColorError, Puhsl};

/// Above this lightness hover darkens instead of lightening.
const HOVER_CEILING: f64 = 80.0;
/// Below this lightness a click lightens instead of darkening.
const CLICKED_FLOOR: f64 = 20.0;
/// Disabled lightness is `base * SCALE + OFFSET`, pulled toward mid-gray.
const DISABLED_SCALE: f64 = 0.5;
const DISABLED_OFFSET: f64 = 25.0;
/// Bases less saturated than this get the disabled separation fix.
const LOW_SATURATION: f64 = 35.0;
/// Minimum lightness gap between a low-saturation base and its disabled tone.
const MIN_DISABLED_SEPARATION: f64 = 15.0;
const DISABLED_BOOST: f64 = 20.0;
/// Outline lightness when the base is light / dark.
const OUTLINE_ON_LIGHT: f64 = 20.0;
const OUTLINE_ON_DARK: f64 = 90.0;
const OUTLINE_SATURATION: f64 = 100.0;

/// Tunable parts of palette derivation.
///
/// The default reproduces the standard rules: hover ±10, clicked ±15,
/// disabled saturation 20, outline threshold 60.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaletteRules {
    hover_step: f64,
    clicked_step: f64,
    disabled_saturation: f64,
    outline_threshold: f64,
}

impl Default for PaletteRules {
    fn default() -> Self {
        Self {
            hover_step: 10.0,
            clicked_step: 15.0,
            disabled_saturation: 20.0,
            outline_threshold: 60.0,
        }
    }
}

impl PaletteRules {
    /// Creates a builder starting from the default rules.
    pub fn builder() -> PaletteRulesBuilder {
        PaletteRulesBuilder::new()
    }

    /// Lightness shift applied for hover and focus.
    pub fn hover_step(&self) -> f64 {
        self.hover_step
    }

    /// Lightness shift applied for clicked.
    pub fn clicked_step(&self) -> f64 {
        self.clicked_step
    }

    /// Saturation of the disabled tone.
    pub fn disabled_saturation(&self) -> f64 {
        self.disabled_saturation
    }

    /// Base lightness above which the focus outline turns dark.
    pub fn outline_threshold(&self) -> f64 {
        self.outline_threshold
    }

    /// Derives a palette from a device color.
    pub fn derive(&self, base: Srgba) -> StatePalette {
        let (tone, alpha) = device_color_to_puhsl(base);
        self.derive_with_alpha(tone, alpha)
    }

    /// Derives an opaque palette directly from PUHSL.
    pub fn derive_from_puhsl(&self, base: Puhsl) -> StatePalette {
        self.derive_with_alpha(base, 1.0)
    }

    fn derive_with_alpha(&self, base: Puhsl, alpha: f32) -> StatePalette {
        let base = Puhsl::new(base.hue, base.saturation, base.lightness);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "deriving palette: h={} s={} l={} a={}",
            base.hue,
            base.saturation,
            base.lightness,
            alpha
        );

        let hover = self.hover_tone(base);
        let outline = self.outline_tone(base, hover);

        StatePalette {
            normal: PaletteEntry::new(base, alpha),
            hover: PaletteEntry::new(hover, alpha),
            clicked: PaletteEntry::new(self.clicked_tone(base), alpha),
            disabled: PaletteEntry::new(self.disabled_tone(base), alpha),
            focus: FocusEntry {
                entry: PaletteEntry::new(hover, alpha),
                outline_tone: outline,
                outline: outline.to_srgba(1.0),
            },
        }
    }

    fn hover_tone(&self, base: Puhsl) -> Puhsl {
        let shift = if base.lightness > HOVER_CEILING {
            -self.hover_step
        } else {
            self.hover_step
        };
        base.with_lightness(base.lightness + shift)
    }

    fn clicked_tone(&self, base: Puhsl) -> Puhsl {
        let shift = if base.lightness < CLICKED_FLOOR {
            self.clicked_step
        } else {
            -self.clicked_step
        };
        base.with_lightness(base.lightness + shift)
    }

    fn disabled_tone(&self, base: Puhsl) -> Puhsl {
        let mut lightness = base.lightness * DISABLED_SCALE + DISABLED_OFFSET;

        if base.saturation < LOW_SATURATION
            && libm::fabs(lightness - base.lightness) < MIN_DISABLED_SEPARATION
        {
            // Raising lands too close to light bases (60 < L < 80); lower instead.
            let raised = lightness + DISABLED_BOOST;
            lightness = if libm::fabs(raised - base.lightness) >= MIN_DISABLED_SEPARATION {
                raised
            } else {
                lightness - DISABLED_BOOST
            };

            #[cfg(feature = "defmt")]
            defmt::debug!(
                "low-saturation disabled fix: base l={} -> disabled l={}",
                base.lightness,
                lightness
            );
        }

        Puhsl::new(base.hue, self.disabled_saturation, lightness)
    }

    fn outline_tone(&self, base: Puhsl, focus: Puhsl) -> Puhsl {
        let lightness = if base.lightness > self.outline_threshold {
            OUTLINE_ON_LIGHT
        } else {
            OUTLINE_ON_DARK
        };
        Puhsl::new(focus.hue + 180.0, OUTLINE_SATURATION, lightness)
    }
}

/// Builder for validated [`PaletteRules`].
#[derive(Debug)]
pub struct PaletteRulesBuilder {
    rules: PaletteRules,
}

impl PaletteRulesBuilder {
    /// Creates a builder holding the default rules.
    pub fn new() -> Self {
        Self {
            rules: PaletteRules::default(),
        }
    }

    /// Sets the hover/focus lightness shift.
    pub fn hover_step(mut self, step: f64) -> Self {
        self.rules.hover_step = step;
        self
    }

    /// Sets the clicked lightness shift.
    pub fn clicked_step(mut self, step: f64) -> Self {
        self.rules.clicked_step = step;
        self
    }

    /// Sets the disabled saturation.
    pub fn disabled_saturation(mut self, saturation: f64) -> Self {
        self.rules.disabled_saturation = saturation;
        self
    }

    /// Sets the base lightness above which the outline turns dark.
    pub fn outline_threshold(mut self, threshold: f64) -> Self {
        self.rules.outline_threshold = threshold;
        self
    }

    /// Builds and validates the rules.
    ///
    /// # Errors
    /// * `NonFiniteComponent` - A value is NaN or infinite
    /// * `ComponentOutOfRange` - A value is outside `[0, 100]`
    pub fn build(self) -> Result<PaletteRules, ColorError> {
        let PaletteRules {
            hover_step,
            clicked_step,
            disabled_saturation,
            outline_threshold,
        } = self.rules;

        for (name, value) in [
            ("hover_step", hover_step),
            ("clicked_step", clicked_step),
            ("disabled_saturation", disabled_saturation),
            ("outline_threshold", outline_threshold),
        ] {
            if !value.is_finite() {
                return Err(ColorError::NonFiniteComponent);
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(ColorError::ComponentOutOfRange { name, value });
            }
        }

        Ok(self.rules)
    }
}

impl Default for PaletteRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One state's colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    /// The PUHSL tone the background was derived from.
    pub tone: Puhsl,
    /// Background color, carrying the base color's alpha.
    pub background: Srgba,
    /// Opaque black or white text for this background.
    pub text: Srgba,
}

impl PaletteEntry {
    fn new(tone: Puhsl, alpha: f32) -> Self {
        Self {
            tone,
            background: tone.to_srgba(alpha),
            text: high_contrast_text(tone).to_srgba(1.0),
        }
    }
}

/// The focus state: the hover colors plus a complementary outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusEntry {
    /// Background and text, identical to hover.
    pub entry: PaletteEntry,
    /// The PUHSL tone of the outline.
    pub outline_tone: Puhsl,
    /// Opaque outline color.
    pub outline: Srgba,
}

/// A full set of interaction-state colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePalette {
    /// Resting state.
    pub normal: PaletteEntry,
    /// Pointer over.
    pub hover: PaletteEntry,
    /// Pointer pressed.
    pub clicked: PaletteEntry,
    /// Input disabled.
    pub disabled: PaletteEntry,
    /// Keyboard focus.
    pub focus: FocusEntry,
}

impl StatePalette {
    /// The background/text pair to paint for `state`.
    pub fn entry(&self, state: RenderState) -> &PaletteEntry {
        match state {
            RenderState::Normal => &self.normal,
            RenderState::Hover => &self.hover,
            RenderState::Clicked => &self.clicked,
            RenderState::Disabled => &self.disabled,
            RenderState::Focus => &self.focus.entry,
        }
    }
}

impl Default for StatePalette {
    fn default() -> Self {
        derive_palette_from_puhsl(Puhsl::DEFAULT_BASE)
    }
}

/// Derives the standard palette from a device color.
///
/// Pure: the same base always yields a bit-identical palette.
pub fn derive_palette(base: Srgba) -> StatePalette {
    PaletteRules::default().derive(base)
}

/// Derives the standard palette from a PUHSL base, skipping the device round trip.
pub fn derive_palette_from_puhsl(base: Puhsl) -> StatePalette {
    PaletteRules::default().derive_from_puhsl(base)
}

/// The base color and its palette, as owned by a UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteState {
    base: Srgba,
    rules: PaletteRules,
    palette: StatePalette,
}

impl PaletteState {
    /// Derives the initial state with the default rules.
    pub fn new(base: Srgba) -> Self {
        Self::with_rules(base, PaletteRules::default())
    }

    /// Derives the initial state with custom rules.
    pub fn with_rules(base: Srgba, rules: PaletteRules) -> Self {
        Self {
            base,
            rules,
            palette: rules.derive(base),
        }
    }

    /// The base color the palette was derived from.
    pub fn base(&self) -> Srgba {
        self.base
    }

    /// The rules used for derivation.
    pub fn rules(&self) -> PaletteRules {
        self.rules
    }

    /// The current palette.
    pub fn palette(&self) -> &StatePalette {
        &self.palette
    }
}

/// Replaces `state` with one derived from `base`.
///
/// The previous state is returned untouched when the base has not changed;
/// otherwise the whole palette is recomputed, never patched.
pub fn update_palette(state: PaletteState, base: Srgba) -> PaletteState {
    if state.base == base {
        state
    } else {
        PaletteState::with_rules(base, state.rules)
    }
}
