use crate::animation::Animation;
use crate::geometry::{self, Insets, Point, Size};
use crate::input::{EventResponse, PointerEvent, PointerKind};
use crate::item::{Item, Label};
use crate::render::{self, Surface};
use crate::style::{ButtonStyle, Color};
use crate::tilt::Tilt;
use std::time::Duration;

/// A press-and-drag circular selector. The host feeds it layout, pointer
/// events and frame timestamps, then paints it with [`ChoiceButton::render`].
///
/// Timestamps are monotonic offsets from any epoch the host picks, as long
/// as events and ticks share it.
#[derive(Debug, Clone)]
pub struct ChoiceButton {
    style: ButtonStyle,
    items: Vec<Item>,
    center: Point,
    content: Size,
    progress: f64,
    animation: Animation,
    pressed: bool,
    dragging: bool,
    selected: Option<usize>,
    tilt: Option<Tilt>,
    redraw_requested: bool,
}

impl Default for ChoiceButton {
    fn default() -> Self {
        Self::new(ButtonStyle::default())
    }
}

impl ChoiceButton {
    pub fn new(style: ButtonStyle) -> Self {
        Self {
            style,
            items: Vec::new(),
            center: Point::default(),
            content: Size::default(),
            progress: 0.0,
            animation: Animation::Idle,
            pressed: false,
            dragging: false,
            selected: None,
            tilt: None,
            redraw_requested: false,
        }
    }

    /// Anchors the button at the bottom center of the padded content box.
    pub fn measure(&mut self, size: Size, padding: Insets) {
        self.content = Size::new(
            size.width - padding.left - padding.right,
            size.height - padding.top - padding.bottom,
        );
        self.center = Point::new(
            padding.left + self.content.width / 2.0,
            padding.top + self.content.height,
        );
        log::trace!("measured content {:?}, anchor {:?}", self.content, self.center);
        self.request_redraw();
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        log::debug!("replacing {} items with {}", self.items.len(), items.len());
        self.selected = None;
        self.items = items;
        self.request_redraw();
    }

    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
        self.request_redraw();
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, now: Duration) -> EventResponse {
        match event.kind {
            PointerKind::Down => self.pointer_down(event.position, now),
            PointerKind::Move if self.pressed => self.pointer_move(event.position),
            PointerKind::Up | PointerKind::Cancel if self.pressed => self.pointer_release(now),
            _ => EventResponse::ignored(),
        }
    }

    fn pointer_down(&mut self, position: Point, now: Duration) -> EventResponse {
        if !self.hit_test_button(position) {
            return EventResponse::ignored();
        }
        log::debug!("expanding from {:.3}", self.progress);
        self.pressed = true;
        self.animation = Animation::expand(self.progress, now);
        EventResponse::consumed()
    }

    fn pointer_move(&mut self, position: Point) -> EventResponse {
        self.dragging = true;
        self.tilt = Tilt::from_pointer(self.center, position, self.content);

        // Outside the button the last selection is kept.
        if self.hit_test_button(position) {
            let selected = self.hit_test_items(position);
            if selected != self.selected {
                log::trace!("selection {:?} -> {:?}", self.selected, selected);
            }
            self.selected = selected;
        }
        EventResponse::consumed()
    }

    fn pointer_release(&mut self, now: Duration) -> EventResponse {
        let chosen = self.selected.take();
        log::debug!("collapsing from {:.3}, chosen {:?}", self.progress, chosen);
        self.pressed = false;
        self.dragging = false;
        self.tilt = None;
        self.animation = Animation::collapse(self.progress, now);
        EventResponse::released(chosen)
    }

    /// Advances the running animation. Returns true when progress changed
    /// and the host should repaint.
    pub fn tick(&mut self, now: Duration) -> bool {
        match self.animation.advance(now, self.style.duration) {
            Some(progress) => {
                self.progress = progress.clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn current_radius(&self) -> f64 {
        geometry::button_radius(
            self.style.collapse_radius,
            self.style.expand_radius,
            self.progress,
        )
    }

    pub fn hit_test_button(&self, point: Point) -> bool {
        geometry::point_in_circle(point, self.center, self.current_radius())
    }

    pub fn hit_test_items(&self, point: Point) -> Option<usize> {
        geometry::hit_test_items(&self.items, self.center, self.progress, point)
    }

    /// Drains the repaint request left by layout and configuration changes.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Paints the current frame. Same as [`render::draw`].
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, self)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn tilt(&self) -> Option<&Tilt> {
        self.tilt.as_ref()
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn collapse_radius(&self) -> f64 {
        self.style.collapse_radius
    }

    pub fn set_collapse_radius(&mut self, radius: f64) {
        self.style.collapse_radius = radius;
        self.request_redraw();
    }

    pub fn expand_radius(&self) -> f64 {
        self.style.expand_radius
    }

    pub fn set_expand_radius(&mut self, radius: f64) {
        self.style.expand_radius = radius;
        self.request_redraw();
    }

    pub fn text(&self) -> Option<&Label> {
        self.style.text.as_ref()
    }

    pub fn set_text(&mut self, text: Option<Label>) {
        self.style.text = text;
        self.request_redraw();
    }

    pub fn text_size(&self) -> f64 {
        self.style.text_size
    }

    pub fn set_text_size(&mut self, size: f64) {
        self.style.text_size = size;
        self.request_redraw();
    }

    pub fn text_color(&self) -> Color {
        self.style.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = color;
        self.request_redraw();
    }

    pub fn button_color(&self) -> Color {
        self.style.button_color
    }

    pub fn set_button_color(&mut self, color: Color) {
        self.style.button_color = color;
        self.request_redraw();
    }

    pub fn duration(&self) -> Duration {
        self.style.duration
    }

    /// Takes effect on the next tick, including for a running animation.
    pub fn set_duration(&mut self, duration: Duration) {
        self.style.duration = duration;
    }
}
