use crate::button::ChoiceButton;
use crate::geometry::{self, Point, Rect};
use crate::icon::IconName;
use crate::item::Item;
use crate::style::Color;
use crate::tilt::Matrix3;
use std::convert::Infallible;

pub const ITEM_ALPHA: f64 = 1.0;
pub const ITEM_INACTIVE_ALPHA: f64 = 0.8;
/// Icon half-width relative to the item radius.
pub const ICON_SCALE: f64 = 2.0 / 3.0;

/// Font metrics on a y-down surface: `top` and `ascent` are negative
/// offsets above the baseline, `descent` and `bottom` positive below it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    pub top: f64,
    pub ascent: f64,
    pub descent: f64,
    pub bottom: f64,
}

impl FontMetrics {
    /// Simple proportional metrics for surfaces without a font engine.
    pub fn proportional(size: f64) -> Self {
        Self {
            top: -size,
            ascent: -0.8 * size,
            descent: 0.2 * size,
            bottom: 0.25 * size,
        }
    }

    pub fn text_height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// What the button needs from a host drawing surface.
pub trait Surface {
    type Error;

    fn save(&mut self) -> Result<(), Self::Error>;

    fn restore(&mut self) -> Result<(), Self::Error>;

    /// Pre-concatenates `matrix` onto the current transform.
    fn concat(&mut self, matrix: &Matrix3) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color)
    -> Result<(), Self::Error>;

    fn font_metrics(&mut self, size: f64) -> Result<FontMetrics, Self::Error>;

    /// Draws `text` horizontally centered on `anchor.x` with its baseline at
    /// `anchor.y`.
    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        size: f64,
        color: Color,
    ) -> Result<(), Self::Error>;

    /// Draws `icon` scaled into `bounds`. Unknown icons are skipped.
    fn draw_icon(&mut self, icon: &IconName, bounds: Rect) -> Result<(), Self::Error>;
}

/// Baseline that puts the vertical center of the text half a line above
/// the top of a circle of `radius`.
pub fn label_baseline(center: Point, radius: f64, metrics: &FontMetrics) -> f64 {
    center.y
        - radius
        - metrics.text_height() / 2.0
        - (metrics.descent - metrics.ascent) / 2.0
        - metrics.ascent
}

struct ItemRenderer<'a> {
    item: &'a Item,
    center: Point,
    radius: f64,
    selected: bool,
}

impl<'a> ItemRenderer<'a> {
    fn new(item: &'a Item, button: &ChoiceButton, selected: bool) -> Self {
        let progress = button.progress();
        Self {
            item,
            center: geometry::item_center(button.center(), item, progress),
            radius: geometry::item_radius(item, progress),
            selected,
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.draw_circle(surface)?;
        self.draw_icon(surface)
    }

    fn draw_circle<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let alpha = if self.selected {
            ITEM_ALPHA
        } else {
            ITEM_INACTIVE_ALPHA
        };
        surface.fill_circle(self.center, self.radius, Color::white().with_alpha(alpha))
    }

    fn draw_icon<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        match &self.item.icon {
            Some(icon) => {
                let bounds = Rect::centered_square(self.center, self.radius * ICON_SCALE);
                surface.draw_icon(icon, bounds)
            }
            None => Ok(()),
        }
    }
}

pub fn draw<S: Surface>(surface: &mut S, button: &ChoiceButton) -> Result<(), S::Error> {
    surface.save()?;
    let result = draw_contents(surface, button);
    surface.restore()?;
    result
}

fn draw_contents<S: Surface>(surface: &mut S, button: &ChoiceButton) -> Result<(), S::Error> {
    if button.is_dragging()
        && let Some(tilt) = button.tilt()
    {
        surface.concat(&tilt.matrix())?;
    }

    let radius = button.current_radius();
    surface.fill_circle(button.center(), radius, button.button_color())?;

    draw_label(surface, button, radius)?;

    for (i, item) in button.items().iter().enumerate() {
        ItemRenderer::new(item, button, button.selected() == Some(i)).draw(surface)?;
    }
    Ok(())
}

fn draw_label<S: Surface>(
    surface: &mut S,
    button: &ChoiceButton,
    radius: f64,
) -> Result<(), S::Error> {
    let text = button
        .selected_item()
        .map(|item| &item.text)
        .or(button.text())
        .filter(|text| !text.is_empty());
    let size = button.text_size() * button.progress();

    match text {
        Some(text) if size > 0.0 => {
            let metrics = surface.font_metrics(size)?;
            let baseline = label_baseline(button.center(), radius, &metrics);
            surface.draw_text(
                text,
                Point::new(button.center().x, baseline),
                size,
                button.text_color(),
            )
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Concat(Matrix3),
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    Text {
        text: String,
        anchor: Point,
        size: f64,
        color: Color,
    },
    Icon {
        icon: IconName,
        bounds: Rect,
    },
}

/// Surface that records commands instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    type Error = Infallible;

    fn save(&mut self) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Restore);
        Ok(())
    }

    fn concat(&mut self, matrix: &Matrix3) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Concat(*matrix));
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn font_metrics(&mut self, size: f64) -> Result<FontMetrics, Self::Error> {
        Ok(FontMetrics::proportional(size))
    }

    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        size: f64,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            size,
            color,
        });
        Ok(())
    }

    fn draw_icon(&mut self, icon: &IconName, bounds: Rect) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Icon {
            icon: icon.clone(),
            bounds,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Insets, Size};
    use crate::input::PointerEvent;
    use crate::item::Label;
    use crate::style::ButtonStyle;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn expanded_button() -> ChoiceButton {
        let mut button = ChoiceButton::new(ButtonStyle {
            text: Some(Label::new("Share")),
            ..ButtonStyle::default()
        });
        button.measure(Size::new(400.0, 400.0), Insets::default());
        button.set_items(vec![
            Item::new("Mail", 24.0, Some(IconName::new("mail-send")), 90, 90.0),
            Item::new("Chat", 24.0, None, 0, 80.0),
        ]);
        button.handle_pointer(PointerEvent::down(200.0, 400.0), ms(0));
        button.tick(ms(200));
        button
    }

    fn render(button: &ChoiceButton) -> DisplayList {
        let mut list = DisplayList::new();
        let Ok(()) = draw(&mut list, button);
        list
    }

    #[test]
    fn test_label_baseline() {
        let metrics = FontMetrics {
            top: -12.0,
            ascent: -10.0,
            descent: 3.0,
            bottom: 4.0,
        };
        // 100 - 50 - 8 - 6.5 + 10
        assert_eq!(label_baseline(Point::new(0.0, 100.0), 50.0, &metrics), 45.5);
    }

    #[test]
    fn test_collapsed_button_draws_only_circles() {
        let mut button = ChoiceButton::new(ButtonStyle {
            text: Some(Label::new("Share")),
            ..ButtonStyle::default()
        });
        button.measure(Size::new(400.0, 400.0), Insets::default());
        let list = render(&button);

        assert_eq!(list.commands.first(), Some(&DrawCommand::Save));
        assert_eq!(list.commands.last(), Some(&DrawCommand::Restore));
        assert_eq!(list.texts().count(), 0);

        let circles: Vec<_> = list.circles().collect();
        assert_eq!(
            circles,
            vec![(Point::new(200.0, 400.0), 40.0, Color::default_button())]
        );
    }

    #[test]
    fn test_expanded_button_draws_label_and_items() {
        let button = expanded_button();
        let list = render(&button);

        let circles: Vec<_> = list.circles().collect();
        assert_eq!(circles.len(), 3);
        assert_eq!(circles[0].1, 120.0);
        assert_eq!(circles[1].1, 24.0);
        assert_eq!(circles[1].2.alpha(), ITEM_INACTIVE_ALPHA);
        assert_eq!(circles[2].2.alpha(), ITEM_INACTIVE_ALPHA);

        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Share"]);

        let text = list.commands.iter().find_map(|c| match c {
            DrawCommand::Text { anchor, size, .. } => Some((*anchor, *size)),
            _ => None,
        });
        let (anchor, size) = text.unwrap();
        assert_eq!(size, 30.0);
        assert_eq!(anchor.x, 200.0);
        let metrics = FontMetrics::proportional(30.0);
        let expected = label_baseline(Point::new(200.0, 400.0), 120.0, &metrics);
        assert_eq!(anchor.y, expected);
    }

    #[test]
    fn test_icon_bounds_scale_with_item() {
        let button = expanded_button();
        let list = render(&button);

        let icons: Vec<_> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Icon { icon, bounds } => Some((icon.clone(), *bounds)),
                _ => None,
            })
            .collect();
        assert_eq!(icons.len(), 1);
        let (icon, bounds) = &icons[0];
        assert_eq!(icon.as_str(), "mail-send");
        assert!((bounds.width() - 32.0).abs() < 1e-9);
        assert!((bounds.height() - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_selected_item_is_opaque_and_labels_button() {
        let mut button = expanded_button();
        let chat = geometry::item_center(button.center(), &button.items()[1], 1.0);
        button.handle_pointer(PointerEvent::moved(chat.x, chat.y), ms(200));
        assert_eq!(button.selected(), Some(1));

        let list = render(&button);
        let circles: Vec<_> = list.circles().collect();
        assert_eq!(circles[1].2.alpha(), ITEM_INACTIVE_ALPHA);
        assert_eq!(circles[2].2.alpha(), ITEM_ALPHA);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Chat"]);
    }

    #[test]
    fn test_tilt_only_while_dragging() {
        let mut button = expanded_button();
        let has_concat =
            |list: &DisplayList| list.commands.iter().any(|c| matches!(c, DrawCommand::Concat(_)));

        assert!(!has_concat(&render(&button)));

        button.handle_pointer(PointerEvent::moved(150.0, 300.0), ms(200));
        let list = render(&button);
        assert!(matches!(list.commands[1], DrawCommand::Concat(_)));

        button.handle_pointer(PointerEvent::up(150.0, 300.0), ms(200));
        assert!(!has_concat(&render(&button)));
    }

    #[test]
    fn test_empty_label_is_skipped() {
        let mut button = expanded_button();
        button.set_text(Some(Label::new("")));
        assert_eq!(render(&button).texts().count(), 0);
    }
}
