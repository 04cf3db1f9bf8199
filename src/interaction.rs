//! Mapping raw UI flags to the palette entry that should be painted.

/// Which palette entry a widget is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderState {
    /// No interaction.
    Normal,
    /// Pointer over the widget.
    Hover,
    /// Pointer pressed on the widget.
    Clicked,
    /// Widget does not accept input.
    Disabled,
    /// Widget has keyboard focus.
    Focus,
}

impl RenderState {
    /// All states, in palette order.
    pub const ALL: [RenderState; 5] = [
        RenderState::Normal,
        RenderState::Hover,
        RenderState::Clicked,
        RenderState::Disabled,
        RenderState::Focus,
    ];

    /// Lowercase state name.
    pub fn name(self) -> &'static str {
        match self {
            RenderState::Normal => "normal",
            RenderState::Hover => "hover",
            RenderState::Clicked => "clicked",
            RenderState::Disabled => "disabled",
            RenderState::Focus => "focus",
        }
    }
}

impl core::fmt::Display for RenderState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A snapshot of the flags the UI layer's event handlers maintain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InteractionFlags {
    /// Input is disabled.
    pub disabled: bool,
    /// Pointer is pressed.
    pub clicked: bool,
    /// Pointer is over the widget.
    pub hover: bool,
    /// Widget has keyboard focus.
    pub focus: bool,
    /// Focus styling requested regardless of pointer state.
    pub force_focus: bool,
}

/// Picks the render state for a flag snapshot.
///
/// Priority: disabled > force focus > clicked > hover > focus > normal.
pub fn resolve_render_state(flags: InteractionFlags) -> RenderState {
    if flags.disabled {
        RenderState::Disabled
    } else if flags.force_focus {
        RenderState::Focus
    } else if flags.clicked {
        RenderState::Clicked
    } else if flags.hover {
        RenderState::Hover
    } else if flags.focus {
        RenderState::Focus
    } else {
        RenderState::Normal
    }
}

impl InteractionFlags {
    /// See [`resolve_render_state`].
    #[inline]
    pub fn render_state(self) -> RenderState {
        resolve_render_state(self)
    }
}
