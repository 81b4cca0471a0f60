/// User-editable request inputs
///
/// Holds the two fields a submit is built from. The scene count is
/// normalized eagerly on every edit, so the stored value is always a
/// valid positive integer and submit never has to re-validate.

/// Current values of the request form
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    /// Free-text story genre, stored verbatim
    pub genre: String,
    /// Requested number of scenes, always >= 1
    pub scene_count: u32,
}

impl Default for InputState {
    fn default() -> Self {
        // The service's own request defaults
        Self {
            genre: String::from("fantasy"),
            scene_count: 5,
        }
    }
}

impl InputState {
    /// Store the genre exactly as typed
    pub fn set_genre(&mut self, text: String) {
        self.genre = text;
    }

    /// Parse and store the scene count, clamping anything invalid to 1
    ///
    /// Non-numeric input and values below 1 both normalize to 1, so the
    /// field never holds an invalid count between edits.
    pub fn set_scene_count(&mut self, raw: &str) {
        self.scene_count = raw.trim().parse::<u32>().map_or(1, |n| n.max(1));
    }
}
