use crate::gui::icons::IconCache;
use bloom::IconName;
use bloom::geometry::{Point, Rect};
use bloom::render::{FontMetrics, Surface};
use bloom::style::Color;
use bloom::tilt::Matrix3;
use cairo::Context;
use gdk4::prelude::*;
use std::f64::consts::PI;

const FONT_FAMILY: &str = "Sans";

/// Paints the button onto a cairo context.
pub struct CairoSurface<'a> {
    cr: &'a Context,
    icons: &'a IconCache,
    pivot: Point,
}

impl<'a> CairoSurface<'a> {
    /// `pivot` anchors the affine approximation used for tilt transforms,
    /// since cairo has no perspective.
    pub fn new(cr: &'a Context, icons: &'a IconCache, pivot: Point) -> Self {
        Self { cr, icons, pivot }
    }

    fn set_color(&self, color: Color) {
        let (r, g, b, a) = color.components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn select_font(&self, size: f64) {
        self.cr
            .select_font_face(FONT_FAMILY, cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        self.cr.set_font_size(size);
    }
}

impl Surface for CairoSurface<'_> {
    type Error = cairo::Error;

    fn save(&mut self) -> Result<(), Self::Error> {
        self.cr.save()
    }

    fn restore(&mut self) -> Result<(), Self::Error> {
        self.cr.restore()
    }

    fn concat(&mut self, matrix: &Matrix3) -> Result<(), Self::Error> {
        let a = matrix.affine_at(self.pivot);
        self.cr.transform(cairo::Matrix::new(a.xx, a.yx, a.xy, a.yy, a.x0, a.y0));
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
    ) -> Result<(), Self::Error> {
        if radius <= 0.0 {
            return Ok(());
        }
        self.set_color(color);
        self.cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        self.cr.fill()
    }

    fn font_metrics(&mut self, size: f64) -> Result<FontMetrics, Self::Error> {
        self.select_font(size);
        let ext = self.cr.font_extents()?;
        // cairo reports ascent and descent as positive distances.
        Ok(FontMetrics {
            top: -ext.ascent(),
            ascent: -ext.ascent(),
            descent: ext.descent(),
            bottom: ext.height() - ext.ascent(),
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        size: f64,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.select_font(size);
        self.set_color(color);
        let ext = self.cr.text_extents(text)?;
        self.cr
            .move_to(anchor.x - (ext.x_bearing() + ext.width() / 2.0), anchor.y);
        self.cr.show_text(text)
    }

    fn draw_icon(&mut self, icon: &IconName, bounds: Rect) -> Result<(), Self::Error> {
        let Some(pixbuf) = self.icons.get(icon) else {
            return Ok(());
        };
        let (width, height) = (f64::from(pixbuf.width()), f64::from(pixbuf.height()));
        if bounds.width() <= 0.0 || width <= 0.0 || height <= 0.0 {
            return Ok(());
        }

        self.cr.save()?;
        self.cr.translate(bounds.left, bounds.top);
        self.cr.scale(bounds.width() / width, bounds.height() / height);
        self.cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        self.cr.paint()?;
        self.cr.restore()
    }
}
