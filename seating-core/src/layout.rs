//! Surface width classes and the presentation policy they drive.
//!
//! Nothing here feeds back into cart state: a seat is reserved (or not) and
//! resolves to the same ticket type on every surface.

/// Viewports narrower than this are treated as mobile.
pub const DEFAULT_NARROW_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Surface {
    Narrow,
    #[default]
    Wide,
}

impl Surface {
    #[must_use]
    pub fn from_width(width_px: f64, breakpoint_px: f64) -> Self {
        if width_px < breakpoint_px {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    #[must_use]
    pub const fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}

/// Side the seat popup opens towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAnchor {
    Below,
    Left,
    Right,
}

impl PopupAnchor {
    #[must_use]
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::Below => None,
            Self::Left => Some("dropdown-left"),
            Self::Right => Some("dropdown-right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatPresentation {
    pub show_place_label: bool,
    pub glyph_class: &'static str,
    pub popup_anchor: PopupAnchor,
    pub popup_width_class: &'static str,
}

impl SeatPresentation {
    /// On narrow surfaces, seats right of the middle open leftwards and seats left
    /// of it open rightwards so the popup stays on screen.
    #[must_use]
    pub const fn for_seat(surface: Surface, place: u32) -> Self {
        if !surface.is_narrow() {
            return Self {
                show_place_label: true,
                glyph_class: "flex size-8 flex-col items-center justify-center rounded-xl shadow-md",
                popup_anchor: PopupAnchor::Below,
                popup_width_class: "w-52",
            };
        }
        Self {
            show_place_label: false,
            glyph_class: "my-0 size-4 rounded-full",
            popup_anchor: if place > 4 {
                PopupAnchor::Left
            } else if place < 4 {
                PopupAnchor::Right
            } else {
                PopupAnchor::Below
            },
            popup_width_class: "w-44",
        }
    }
}
