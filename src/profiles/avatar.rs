//! Avatar selection through the device media library.

use thiserror::Error;

use crate::app::PickerSettings;

/// The user closed the picker without choosing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("image selection cancelled")]
pub struct CancelledError;

/// Options handed to the media picker for an avatar pick.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub allows_editing: bool,
    /// Width/height crop ratio.
    pub aspect_ratio: (u32, u32),
    pub quality: f32,
}

impl PickerOptions {
    /// Square, user-cropped, full quality.
    pub fn square_avatar() -> Self {
        Self {
            allows_editing: true,
            aspect_ratio: (1, 1),
            quality: 1.0,
        }
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self::square_avatar()
    }
}

impl From<&PickerSettings> for PickerOptions {
    fn from(settings: &PickerSettings) -> Self {
        Self {
            allows_editing: settings.allows_editing,
            aspect_ratio: (1, 1),
            quality: settings.quality.clamp(0.0, 1.0),
        }
    }
}

/// Device media picker collaborator.
///
/// `Ok(None)` means the picker closed with no asset, which callers treat the
/// same as a cancellation.
pub trait MediaPicker {
    fn pick_image(&mut self, options: &PickerOptions) -> Result<Option<String>, CancelledError>;
}

impl<P: MediaPicker + ?Sized> MediaPicker for &mut P {
    fn pick_image(&mut self, options: &PickerOptions) -> Result<Option<String>, CancelledError> {
        (**self).pick_image(options)
    }
}

impl<P: MediaPicker + ?Sized> MediaPicker for Box<P> {
    fn pick_image(&mut self, options: &PickerOptions) -> Result<Option<String>, CancelledError> {
        (**self).pick_image(options)
    }
}

/// Outcome of asking the user for a new avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarChange {
    Replaced(String),
    Unchanged,
}
