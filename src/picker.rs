//! This module models an interactive HSV color picker as a plain state machine, independent of
//! whatever draws it. The UI layer translates pointer input into [`PickerEvent`]s, with coordinates
//! given as fractions of the element that was touched, and feeds them to [`Picker::update`]. The
//! picker keeps two colors: the *committed* color, which the rest of the application sees, and the
//! *draft* color, which follows the pointer while a selection on the gradient map is in progress.
//!
//! The gradient map puts saturation on the horizontal axis and value on the vertical axis, with full
//! value at the top. The hue slider runs from 0 to 360 degrees, left to right. Moving the hue slider
//! only changes the hue of the map: the draft color picks it up on the next touch of the map.
//!
//! [`PickerEvent`]: enum.PickerEvent.html
//! [`Picker::update`]: struct.Picker.html#method.update

use num::clamp;

use crate::color::RGBColor;
use crate::colors::HSVColor;
use crate::config::PickerConfig;

/// What the pointer is currently doing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DragState {
    /// Nothing is held down.
    Idle,
    /// A press started on the saturation/value map and hasn't been released.
    DraggingMap,
    /// A press started on the hue slider and hasn't been released.
    DraggingHue,
}

/// An input to the picker. `x` and `y` are fractions of the width and height of the element the
/// event concerns, measured from its top left corner; values outside 0-1 are clamped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PickerEvent {
    /// The owner replaced the picker's color from outside.
    SetValue(RGBColor),
    /// A press on the gradient map.
    MapPress {
        /// Horizontal position, saturation.
        x: f64,
        /// Vertical position, inverted value.
        y: f64,
    },
    /// A press on the hue slider.
    HuePress {
        /// Horizontal position, hue.
        x: f64,
    },
    /// The pointer moved. Ignored unless something is being dragged; `y` is ignored while dragging
    /// the hue slider.
    PointerMove {
        /// Horizontal position within the dragged element.
        x: f64,
        /// Vertical position within the dragged element.
        y: f64,
    },
    /// The pointer was released, ending any drag.
    PointerRelease {
        /// Horizontal position within the dragged element.
        x: f64,
        /// Vertical position within the dragged element.
        y: f64,
    },
    /// A click on the gradient map that wasn't part of a drag.
    MapClick {
        /// Horizontal position, saturation.
        x: f64,
        /// Vertical position, inverted value.
        y: f64,
    },
    /// A recent or preset swatch was chosen.
    SelectSwatch(RGBColor),
    /// The draft was accepted as is.
    Confirm,
}

/// The state of one color picker.
///
/// # Example
/// ```
/// # use huepick::prelude::*;
/// let mut picker = Picker::new(PickerConfig::default());
/// assert_eq!(picker.display_name(), "Red");
///
/// picker.update(PickerEvent::HuePress { x: 1. / 3. });
/// picker.update(PickerEvent::PointerRelease { x: 1. / 3., y: 0.5 });
/// picker.update(PickerEvent::MapPress { x: 1.0, y: 0.2 });
/// let committed = picker.update(PickerEvent::PointerRelease { x: 1.0, y: 0.5 });
///
/// assert_eq!(committed.map(|c| c.to_hex_code()), Some("#008000".to_string()));
/// assert_eq!(picker.display_hex(), "#008000");
/// assert_eq!(picker.recent_colors().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Picker {
    config: PickerConfig,
    current: RGBColor,
    draft: RGBColor,
    hsv: HSVColor,
    drag: DragState,
    selecting: bool,
    recent: Vec<RGBColor>,
}

// NaN counts as the near edge
fn unit_fraction(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        clamp(x, 0.0, 1.0)
    }
}

impl Picker {
    /// Creates a picker showing the config's initial color, with no recent colors.
    pub fn new(config: PickerConfig) -> Picker {
        let initial = config.initial_color();
        Picker {
            config,
            current: initial,
            draft: initial,
            hsv: HSVColor::from_rgb(initial),
            drag: DragState::Idle,
            selecting: false,
            recent: Vec::new(),
        }
    }

    /// Applies one event. Returns the newly committed color whenever the event commits one, which is
    /// the signal to tell the rest of the application about it.
    pub fn update(&mut self, event: PickerEvent) -> Option<RGBColor> {
        trace!("picker {:?} <- {:?}", self.drag, event);
        match event {
            PickerEvent::SetValue(color) => {
                self.load(color);
                None
            }
            PickerEvent::MapPress { x, y } => {
                self.drag = DragState::DraggingMap;
                self.selecting = true;
                self.move_on_map(x, y);
                None
            }
            PickerEvent::HuePress { x } => {
                self.drag = DragState::DraggingHue;
                self.move_on_slider(x);
                None
            }
            PickerEvent::PointerMove { x, y } => {
                match self.drag {
                    DragState::DraggingMap => self.move_on_map(x, y),
                    DragState::DraggingHue => self.move_on_slider(x),
                    DragState::Idle => {}
                }
                None
            }
            PickerEvent::PointerRelease { x, y } => match self.drag {
                DragState::Idle => None,
                DragState::DraggingMap => {
                    self.move_on_map(x, y);
                    self.finish_drag()
                }
                DragState::DraggingHue => self.finish_drag(),
            },
            PickerEvent::MapClick { x, y } => {
                if self.drag != DragState::Idle {
                    return None;
                }
                self.move_on_map(x, y);
                Some(self.commit_draft())
            }
            PickerEvent::SelectSwatch(color) => {
                self.load(color);
                Some(color)
            }
            PickerEvent::Confirm => {
                self.current = self.draft;
                Some(self.current)
            }
        }
    }

    fn load(&mut self, color: RGBColor) {
        self.hsv = HSVColor::from_rgb(color);
        self.current = color;
        self.draft = color;
    }

    fn move_on_map(&mut self, x: f64, y: f64) {
        self.hsv.s = (unit_fraction(x) * 100.0).round();
        self.hsv.v = ((1.0 - unit_fraction(y)) * 100.0).round();
        self.draft = self.hsv.to_rgb();
    }

    fn move_on_slider(&mut self, x: f64) {
        self.hsv.h = (unit_fraction(x) * 360.0).round();
    }

    fn finish_drag(&mut self) -> Option<RGBColor> {
        self.drag = DragState::Idle;
        if self.selecting {
            self.selecting = false;
            Some(self.commit_draft())
        } else {
            None
        }
    }

    fn commit_draft(&mut self) -> RGBColor {
        self.current = self.draft;
        self.remember(self.current);
        debug!("committed {}", self.current);
        self.current
    }

    // most recent first, without duplicates
    fn remember(&mut self, color: RGBColor) {
        if !self.recent.contains(&color) {
            self.recent.insert(0, color);
            self.recent.truncate(self.config.max_recent_colors);
        }
    }

    /// The committed color.
    pub fn current(&self) -> RGBColor {
        self.current
    }

    /// The color under the pointer during a map selection, or the last one if there is none.
    pub fn draft(&self) -> RGBColor {
        self.draft
    }

    /// The HSV coordinates the map and slider are showing.
    pub fn hsv(&self) -> HSVColor {
        self.hsv
    }

    /// What the pointer is doing.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether a selection on the map is in progress.
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// The config this picker was created with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Recently committed colors, most recent first.
    pub fn recent_colors(&self) -> &[RGBColor] {
        &self.recent
    }

    /// The swatches to offer: recent colors, then presets, without duplicates and capped at
    /// `max_recent_colors`.
    pub fn swatches(&self) -> Vec<RGBColor> {
        let mut swatches: Vec<RGBColor> = Vec::new();
        for color in self.recent.iter().chain(self.config.preset_colors.iter()) {
            if swatches.len() == self.config.max_recent_colors {
                break;
            }
            if !swatches.contains(color) {
                swatches.push(*color);
            }
        }
        swatches
    }

    /// The color the preview should show: the draft during a selection, otherwise the committed
    /// color.
    pub fn display_color(&self) -> RGBColor {
        if self.selecting {
            self.draft
        } else {
            self.current
        }
    }

    /// The uppercase hex code of [`display_color`](#method.display_color).
    pub fn display_hex(&self) -> String {
        self.display_color().to_string()
    }

    /// A descriptive name for the preview. During a selection this is computed from the map's HSV
    /// coordinates directly, otherwise from the committed color.
    pub fn display_name(&self) -> String {
        let hsv = if self.selecting {
            self.hsv
        } else {
            HSVColor::from_rgb(self.current)
        };
        hsv.to_hsl().name()
    }
}

impl Default for Picker {
    fn default() -> Picker {
        Picker::new(PickerConfig::default())
    }
}
