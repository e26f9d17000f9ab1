//! File Preview Panel
//!
//! Side panel showing a fetched [`PreviewPanel`]. It never touches the file
//! system; opening and closing are reported to the owner as [`PreviewEvent`]s.

use std::sync::Arc;

use gpui::{
    AnyElement, ClickEvent, Context, Entity, EventEmitter, FontWeight, Image, ImageFormat,
    IntoElement, ObjectFit, ParentElement, Render, Styled, StyledImage, Window, div, img,
    prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Selectable, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputState},
    label::Label,
    v_flex,
};
use sysclean_core::format::format_size;
use sysclean_core::preview::{Editor, FilePreview, PreviewKind, PreviewPanel, PreviewState};

use crate::assets::{CustomIconName, named_icon};
use crate::constants::{PREVIEW_MAX_CHARS, PREVIEW_PANEL_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    Close,
    ToggleOpenWith,
    /// Open with this command, `None` for the system default
    OpenWith(Option<String>),
    /// Open with the typed command
    OpenCustom(String),
}

/// Decoded image of the current preview
struct PreviewImage {
    path: String,
    image: Option<Arc<Image>>,
    bytes: usize,
    mime: String,
}

pub struct FilePreviewPanel {
    panel: Option<PreviewPanel>,
    image: Option<PreviewImage>,
    command_input: Entity<InputState>,
}

impl EventEmitter<PreviewEvent> for FilePreviewPanel {}

impl FilePreviewPanel {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let command_input = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder("Custom command, e.g. vim")
        });
        Self {
            panel: None,
            image: None,
            command_input,
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// Show `panel`, or hide the preview with `None`
    pub fn set_panel(&mut self, panel: Option<PreviewPanel>, cx: &mut Context<Self>) {
        let file = panel.as_ref().and_then(|p| p.file());
        self.image = match file {
            Some(file) if file.kind == PreviewKind::Image => match self.image.take() {
                Some(image) if image.path == file.path => Some(image),
                _ => Some(decode_image(file)),
            },
            _ => None,
        };
        self.panel = panel;
        cx.notify();
    }

    fn render_header(&self, panel: &PreviewPanel, cx: &Context<Self>) -> impl IntoElement {
        let file = panel.header();

        h_flex()
            .w_full()
            .px_4()
            .py_3()
            .gap_3()
            .items_center()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(named_icon(panel.icon()).size_5().text_color(cx.theme().muted_foreground))
            .child(
                v_flex()
                    .flex_1()
                    .min_w_0()
                    .child(
                        Label::new(file.name.clone())
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_ellipsis(),
                    )
                    .child(
                        Label::new(file.path.clone())
                            .text_xs()
                            .text_color(cx.theme().muted_foreground)
                            .text_ellipsis(),
                    ),
            )
            .child(
                Button::new("preview-close")
                    .ghost()
                    .xsmall()
                    .icon(IconName::Close)
                    .tooltip("Close preview")
                    .on_click(cx.listener(|_, _: &ClickEvent, _, cx| cx.emit(PreviewEvent::Close))),
            )
    }

    fn render_actions(&self, panel: &PreviewPanel, cx: &Context<Self>) -> impl IntoElement {
        let ready = panel.file().is_some();

        let editors: Vec<_> = Editor::ALL
            .iter()
            .enumerate()
            .map(|(ix, editor)| {
                let command = editor.command().map(str::to_string);
                Button::new(("open-with-editor", ix))
                    .ghost()
                    .small()
                    .label(editor.label())
                    .on_click(cx.listener(move |_, _: &ClickEvent, _, cx| {
                        cx.emit(PreviewEvent::OpenWith(command.clone()));
                    }))
            })
            .collect();

        v_flex()
            .w_full()
            .px_4()
            .py_2()
            .gap_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .gap_2()
                    .child(
                        Button::new("preview-open")
                            .primary()
                            .small()
                            .icon(CustomIconName::ExternalLink)
                            .label("Open")
                            .disabled(!ready)
                            .on_click(cx.listener(|_, _: &ClickEvent, _, cx| {
                                cx.emit(PreviewEvent::OpenWith(None));
                            })),
                    )
                    .child(
                        Button::new("preview-open-with")
                            .ghost()
                            .small()
                            .label("Open with…")
                            .selected(panel.show_open_with())
                            .disabled(!ready)
                            .on_click(cx.listener(|_, _: &ClickEvent, _, cx| {
                                cx.emit(PreviewEvent::ToggleOpenWith);
                            })),
                    ),
            )
            .when(panel.show_open_with(), |this| {
                this.child(h_flex().flex_wrap().gap_1().children(editors))
                    .child(
                        h_flex()
                            .gap_2()
                            .child(div().flex_1().child(Input::new(&self.command_input).small()))
                            .child(
                                Button::new("preview-open-custom")
                                    .small()
                                    .label("Run")
                                    .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                        let command =
                                            this.command_input.read(cx).value().to_string();
                                        cx.emit(PreviewEvent::OpenCustom(command));
                                    })),
                            ),
                    )
            })
    }

    fn render_body(&self, panel: &PreviewPanel, cx: &Context<Self>) -> AnyElement {
        let muted = cx.theme().muted_foreground;
        let notice = |text: String| {
            div()
                .p_4()
                .text_sm()
                .text_color(muted)
                .child(text)
                .into_any_element()
        };

        let file = match panel.state() {
            PreviewState::Loading => return notice("Loading preview...".to_string()),
            PreviewState::Failed(file) => {
                return div()
                    .p_4()
                    .text_sm()
                    .text_color(cx.theme().danger)
                    .child(file.error.clone().unwrap_or_default())
                    .into_any_element();
            }
            PreviewState::Ready(file) => file,
        };

        match file.kind {
            PreviewKind::Image => match &self.image {
                Some(PreviewImage {
                    image: Some(image), ..
                }) => div()
                    .p_4()
                    .flex()
                    .justify_center()
                    .child(
                        img(image.clone())
                            .max_w_full()
                            .max_h(px(480.0))
                            .object_fit(ObjectFit::Contain),
                    )
                    .into_any_element(),
                Some(image) if !image.mime.is_empty() => notice(format!(
                    "{} image, {}",
                    image.mime,
                    format_size(image.bytes as u64)
                )),
                _ => notice("Image preview unavailable".to_string()),
            },
            PreviewKind::Text => {
                let content = file.content.as_deref().unwrap_or_default();
                let truncated = content.chars().count() > PREVIEW_MAX_CHARS;
                let shown: String = content.chars().take(PREVIEW_MAX_CHARS).collect();
                div()
                    .id("preview-text")
                    .flex_1()
                    .p_4()
                    .overflow_y_scroll()
                    .child(
                        div()
                            .text_xs()
                            .font_family("monospace")
                            .whitespace_normal()
                            .child(shown),
                    )
                    .when(truncated, |this| {
                        this.child(
                            div()
                                .pt_2()
                                .text_xs()
                                .text_color(muted)
                                .child("Preview truncated"),
                        )
                    })
                    .into_any_element()
            }
            PreviewKind::Binary => notice("Binary file, no preview available".to_string()),
            PreviewKind::Unknown | PreviewKind::Error => {
                notice(file.content.clone().unwrap_or_else(|| "No preview available".to_string()))
            }
        }
    }
}

impl Render for FilePreviewPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(panel) = self.panel.clone() else {
            return div().into_any_element();
        };

        v_flex()
            .w(px(PREVIEW_PANEL_WIDTH))
            .h_full()
            .flex_none()
            .border_l_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(self.render_header(&panel, cx))
            .child(self.render_actions(&panel, cx))
            .child(self.render_body(&panel, cx))
            .into_any_element()
    }
}

fn decode_image(file: &FilePreview) -> PreviewImage {
    let (image, bytes, mime) = match file.image_bytes() {
        Some(Ok((mime, bytes))) => {
            let len = bytes.len();
            let image = ImageFormat::from_mime_type(&mime)
                .map(|format| Arc::new(Image::from_bytes(format, bytes)));
            (image, len, mime)
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, path = %file.path, "Unreadable image preview");
            (None, 0, String::new())
        }
        None => (None, 0, String::new()),
    };
    PreviewImage {
        path: file.path.clone(),
        image,
        bytes,
        mime,
    }
}
