//! File Preview - Fetched Preview Data and Panel State
//!
//! The panel only displays a preview the owner already fetched. Opening the
//! file is requested through [`OpenRequest`]; the panel never opens it itself.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classification of a previewed file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Image,
    Text,
    Binary,
    #[default]
    Unknown,
    Error,
}

/// Preview payload returned by the file service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePreview {
    pub name: String,
    pub path: String,
    #[serde(rename = "type", default)]
    pub kind: PreviewKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// `data:` URL for image previews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FilePreview {
    /// Placeholder shown while the real preview is fetched
    pub fn loading(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Preview that only carries a failure message
    pub fn failed(name: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: PreviewKind::Error,
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == PreviewKind::Error
    }

    /// Decoded image bytes, if this is an image preview with a data URL
    pub fn image_bytes(&self) -> Option<Result<(String, Vec<u8>)>> {
        self.image_url.as_deref().map(decode_data_url)
    }
}

/// Split a base64 `data:<mime>;base64,<payload>` URL into its mime type and bytes
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:").ok_or_else(|| Error::Invalid {
        message: "not a data URL".to_string(),
    })?;
    let (header, payload) = rest.split_once(',').ok_or_else(|| Error::Invalid {
        message: "data URL has no payload".to_string(),
    })?;
    let mime = header.strip_suffix(";base64").ok_or_else(|| Error::Invalid {
        message: "only base64 data URLs are supported".to_string(),
    })?;
    let bytes = STANDARD.decode(payload.trim())?;
    Ok((mime.to_string(), bytes))
}

/// Known external editors offered by "Open with"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editor {
    VsCode,
    Cursor,
    SublimeText,
    Gedit,
    SystemDefault,
}

impl Editor {
    pub const ALL: [Editor; 5] = [
        Editor::VsCode,
        Editor::Cursor,
        Editor::SublimeText,
        Editor::Gedit,
        Editor::SystemDefault,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Editor::VsCode => "VS Code",
            Editor::Cursor => "Cursor",
            Editor::SublimeText => "Sublime Text",
            Editor::Gedit => "Gedit",
            Editor::SystemDefault => "System Default",
        }
    }

    /// Command to launch, `None` for the system default handler
    pub fn command(self) -> Option<&'static str> {
        match self {
            Editor::VsCode => Some("code"),
            Editor::Cursor => Some("cursor"),
            Editor::SublimeText => Some("subl"),
            Editor::Gedit => Some("gedit"),
            Editor::SystemDefault => None,
        }
    }
}

/// Request to open a path in an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub path: String,
    pub command: Option<String>,
}

/// Observable state of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState {
    Loading,
    Ready(FilePreview),
    Failed(FilePreview),
}

/// Preview panel state
#[derive(Debug, Clone)]
pub struct PreviewPanel {
    state: PreviewState,
    /// Name and path of the file being fetched
    target: FilePreview,
    show_open_with: bool,
    custom_command: String,
}

impl Default for PreviewPanel {
    fn default() -> Self {
        Self {
            state: PreviewState::Loading,
            target: FilePreview::default(),
            show_open_with: false,
            custom_command: String::new(),
        }
    }
}

impl PreviewPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panel waiting for the preview of `path`
    pub fn for_file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            target: FilePreview::loading(name, path),
            ..Default::default()
        }
    }

    /// The fetched file, or the placeholder while loading
    pub fn header(&self) -> &FilePreview {
        self.file().unwrap_or(&self.target)
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == PreviewState::Loading
    }

    pub fn file(&self) -> Option<&FilePreview> {
        match &self.state {
            PreviewState::Loading => None,
            PreviewState::Ready(file) | PreviewState::Failed(file) => Some(file),
        }
    }

    pub fn show_open_with(&self) -> bool {
        self.show_open_with
    }

    pub fn custom_command(&self) -> &str {
        &self.custom_command
    }

    pub fn set_custom_command(&mut self, command: impl Into<String>) {
        self.custom_command = command.into();
    }

    /// Show a fetched file; leaves loading and collapses the open-with menu
    pub fn set_file(&mut self, file: FilePreview) {
        self.state = if file.is_error() {
            PreviewState::Failed(file)
        } else {
            PreviewState::Ready(file)
        };
        self.show_open_with = false;
    }

    /// Icon asset name (`icons/<name>.svg`) for the current file
    pub fn icon(&self) -> &'static str {
        match self.file().map(|f| f.kind) {
            None | Some(PreviewKind::Text) => "file-text",
            Some(PreviewKind::Image) => "image",
            Some(PreviewKind::Binary) => "file-code",
            Some(PreviewKind::Error) => "circle-x",
            Some(PreviewKind::Unknown) => "file",
        }
    }

    pub fn toggle_open_with(&mut self) {
        self.show_open_with = !self.show_open_with;
    }

    /// Ask to open the current file with `command`, or the default handler
    pub fn open_with(&mut self, command: Option<&str>) -> Option<OpenRequest> {
        let path = self.file()?.path.clone();
        self.show_open_with = false;
        Some(OpenRequest {
            path,
            command: command.map(str::to_string),
        })
    }

    pub fn open_with_editor(&mut self, editor: Editor) -> Option<OpenRequest> {
        self.open_with(editor.command())
    }

    /// Open with the free-form command, if one was typed
    pub fn open_custom(&mut self) -> Option<OpenRequest> {
        let command = self.custom_command.trim().to_string();
        if command.is_empty() {
            return None;
        }
        self.open_with(Some(&command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_file() -> FilePreview {
        FilePreview {
            name: "notes.txt".into(),
            path: "/tmp/notes.txt".into(),
            kind: PreviewKind::Text,
            content: Some("hello".into()),
            ..Default::default()
        }
    }

    #[test]
    fn panel_moves_from_loading_to_ready_or_failed() {
        let mut panel = PreviewPanel::for_file("notes.txt", "/tmp/notes.txt");
        assert!(panel.is_loading());
        assert!(panel.file().is_none());
        assert_eq!(panel.header().path, "/tmp/notes.txt");

        panel.toggle_open_with();
        panel.set_file(text_file());
        assert!(matches!(panel.state(), PreviewState::Ready(_)));
        assert!(!panel.show_open_with());

        panel.set_file(FilePreview::failed("x", "/x", "denied"));
        assert!(matches!(panel.state(), PreviewState::Failed(f) if f.error.as_deref() == Some("denied")));
        assert_eq!(panel.icon(), "circle-x");
    }

    #[test]
    fn open_requests_carry_path_and_command() {
        let mut panel = PreviewPanel::new();
        assert_eq!(panel.open_with(Some("code")), None);

        panel.set_file(text_file());
        panel.toggle_open_with();
        assert_eq!(
            panel.open_with_editor(Editor::VsCode),
            Some(OpenRequest {
                path: "/tmp/notes.txt".into(),
                command: Some("code".into())
            })
        );
        assert!(!panel.show_open_with());
        assert_eq!(
            panel.open_with_editor(Editor::SystemDefault).and_then(|r| r.command),
            None
        );
    }

    #[test]
    fn custom_command_must_not_be_blank() {
        let mut panel = PreviewPanel::new();
        panel.set_file(text_file());
        panel.set_custom_command("  ");
        assert_eq!(panel.open_custom(), None);

        panel.set_custom_command("vim");
        assert_eq!(panel.open_custom().and_then(|r| r.command).as_deref(), Some("vim"));
    }

    #[test]
    fn preview_json_uses_type_and_camel_case() {
        let json = r#"{"name":"a.png","path":"/a.png","type":"image","imageUrl":"data:image/png;base64,aGk="}"#;
        let preview: FilePreview = serde_json::from_str(json).unwrap();
        assert_eq!(preview.kind, PreviewKind::Image);
        let (mime, bytes) = preview.image_bytes().unwrap().unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, b"hi");
    }

    #[test]
    fn malformed_data_urls_are_rejected() {
        assert!(decode_data_url("http://example.com/a.png").is_err());
        assert!(decode_data_url("data:image/png;base64").is_err());
        assert!(decode_data_url("data:text/plain,hi").is_err());
        assert!(decode_data_url("data:image/png;base64,***").is_err());
    }
}
