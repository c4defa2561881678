//! Execution-result payloads delivered by the host after a node runs.

use serde::Deserialize;

/// Message passed to the execution-complete hook.
///
/// Produced artifacts sit under `output`. A payload without one is a
/// normal case - not every execution yields media.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionPayload {
    #[serde(default)]
    pub output: Option<OutputArtifacts>,
}

/// Artifact references produced by one execution.
///
/// Node families report their artifact under different keys; the first
/// present key wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputArtifacts {
    #[serde(default)]
    pub audio_file: Option<String>,
    #[serde(default)]
    pub image_file: Option<String>,
    #[serde(default)]
    pub video_file: Option<String>,
}

impl ExecutionPayload {
    /// Parse a payload from the host's JSON message.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Path of the produced media artifact, if any.
    pub fn media_path(&self) -> Option<&str> {
        let output = self.output.as_ref()?;
        output
            .audio_file
            .as_deref()
            .or(output.image_file.as_deref())
            .or(output.video_file.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_audio_artifact() {
        let payload =
            ExecutionPayload::from_json(r#"{"output":{"audio_file":"out/mix.mp3"}}"#).unwrap();
        assert_eq!(payload.media_path(), Some("out/mix.mp3"));
    }

    #[test]
    fn test_missing_artifact_is_not_an_error() {
        let payload = ExecutionPayload::from_json("{}").unwrap();
        assert_eq!(payload.media_path(), None);

        let payload = ExecutionPayload::from_json(r#"{"output":{}}"#).unwrap();
        assert_eq!(payload.media_path(), None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = ExecutionPayload::from_json(
            r#"{"output":{"image_file":"out/frame.png","duration_ms":1250},"node_id":7}"#,
        )
        .unwrap();
        assert_eq!(payload.media_path(), Some("out/frame.png"));
    }

    #[test]
    fn test_first_present_key_wins() {
        let payload = ExecutionPayload {
            output: Some(OutputArtifacts {
                audio_file: Some("out/mix.mp3".to_string()),
                image_file: Some("out/frame.png".to_string()),
                video_file: None,
            }),
        };
        assert_eq!(payload.media_path(), Some("out/mix.mp3"));
    }
}
