/// Story metadata returned by the generation service
///
/// These structs mirror the `metadata` object of the service response.
/// Field names match the wire format, so serde needs no renames. The
/// service also sends `story_id`, `image_prompts` and `folder`; serde
/// drops those since the client never reads them.

use serde::Deserialize;

/// Full descriptive payload for one generated story
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoryMetadata {
    pub title: String,
    pub genre: String,
    pub story_idea: String,
    /// Server-relative path to the rendered video, empty when the
    /// service produced no video for this story
    #[serde(default)]
    pub video_file: String,
    /// Scenes in the order the service generated them; rendering order,
    /// never re-sorted by the client
    pub scenes: Vec<SceneEntry>,
}

/// One narrative scene of a generated story
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneEntry {
    /// Scene number, unique within a story; identity for list rendering
    pub scene: u32,
    pub summary: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_scene_order() {
        // Scenes arrive out of numeric order; the client must keep them
        // exactly as received.
        let json = r#"{
            "title": "T",
            "genre": "fantasy",
            "story_idea": "I",
            "video_file": "out/v.mp4",
            "scenes": [
                {"scene": 2, "summary": "s2", "description": "d2"},
                {"scene": 1, "summary": "s1", "description": "d1"}
            ]
        }"#;

        let metadata: StoryMetadata = serde_json::from_str(json).unwrap();
        let order: Vec<u32> = metadata.scenes.iter().map(|s| s.scene).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_deserialize_tolerates_missing_video_file() {
        let json = r#"{
            "title": "T",
            "genre": "fantasy",
            "story_idea": "I",
            "scenes": []
        }"#;

        let metadata: StoryMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.video_file, "");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "story_id": "abc123",
            "title": "T",
            "genre": "fantasy",
            "story_idea": "I",
            "image_prompts": ["p1"],
            "folder": "stories/abc123",
            "video_file": "out/v.mp4",
            "scenes": [
                {"scene": 1, "summary": "s1", "description": "d1"}
            ]
        }"#;

        let metadata: StoryMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.title, "T");
        assert_eq!(metadata.scenes.len(), 1);
    }
}
