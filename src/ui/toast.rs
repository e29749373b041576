// SPDX-License-Identifier: MPL-2.0
//! Toast panel rendering.
//!
//! The panel fills its window: a colored background with the title and
//! message centered in a column, and the icon layered over the top-left
//! corner.

use crate::domain::toast::HexColor;
use crate::icon;
use crate::presenter::PreparedToast;
use crate::ui::design_tokens::{layout, palette, sizing, typography};
use crate::ui::toast_icon::ToastIcon;
use iced::widget::image::Image;
use iced::widget::{container, Column, Container, Stack, Text};
use iced::{alignment, font, Color, Element, Font, Length, Padding, Theme};

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        let (r, g, b) = color.rgb8();
        Color::from_rgb8(r, g, b)
    }
}

/// Renders the whole toast panel.
pub fn view<'a, Message: 'a>(toast: &'a PreparedToast) -> Element<'a, Message> {
    let (title_font, body_font) = label_fonts(toast.font());
    let wrap_width = toast.size().width as f32 - layout::WRAP_INSET;

    let title = Text::new(toast.title().as_str())
        .font(title_font)
        .size(typography::TITLE)
        .color(palette::WHITE);

    let message = Text::new(toast.body().as_str())
        .font(body_font)
        .size(typography::BODY)
        .color(palette::WHITE)
        .width(Length::Fixed(wrap_width))
        .align_x(alignment::Horizontal::Center);

    let labels = Column::new()
        .push(title)
        .push(message)
        .spacing(layout::LABEL_GAP)
        .padding(Padding {
            top: layout::TITLE_PADDING,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let icon_layer = Container::new(icon_view(toast.icon())).padding(layout::ICON_INSET);

    let background: Color = toast.color().into();
    Container::new(Stack::new().push(labels).push(icon_layer))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| background_style(background))
        .into()
}

/// Title and message fonts. An override is used as is for both labels;
/// only the default title is bold.
fn label_fonts(font_override: Option<Font>) -> (Font, Font) {
    match font_override {
        Some(custom) => (custom, custom),
        None => (
            Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            },
            Font::DEFAULT,
        ),
    }
}

fn icon_view<'a, Message: 'a>(toast_icon: &'a ToastIcon) -> Element<'a, Message> {
    match toast_icon {
        ToastIcon::Image {
            handle,
            width,
            height,
        } => Image::new(handle.clone())
            .width(Length::Fixed(*width as f32))
            .height(Length::Fixed(*height as f32))
            .into(),
        ToastIcon::Glyph => match icon::info_glyph() {
            Some(handle) => Image::new(handle)
                .width(Length::Fixed(sizing::GLYPH as f32))
                .height(Length::Fixed(sizing::GLYPH as f32))
                .into(),
            None => Text::new("i")
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .size(typography::GLYPH)
                .color(palette::INFO_500)
                .into(),
        },
    }
}

/// Style function for the panel background.
fn background_style(background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
