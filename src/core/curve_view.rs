//! Abbildung zwischen Kurven-Koordinaten (Zeit, Wert) und Viewport-Pixeln.

use glam::Vec2;

/// Sichtbarer Ausschnitt der Kurve.
///
/// Zeigt `[0, range.x] × [0, range.y]`; die Wertachse zeigt auf dem
/// Bildschirm nach oben (Pixel-y wächst nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveView {
    /// Sichtbare Ausdehnung in Zeit und Wert
    pub curve_range: Vec2,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
}

impl CurveView {
    /// Erstellt eine neue Ansicht; Nullgrößen werden auf einen kleinen Wert angehoben.
    pub fn new(curve_range: Vec2, viewport_size: Vec2) -> Self {
        Self {
            curve_range: curve_range.max(Vec2::splat(f32::EPSILON)),
            viewport_size: viewport_size.max(Vec2::ONE),
        }
    }

    /// Kurven-Koordinate → Pixel.
    pub fn curve_to_screen(&self, point: Vec2) -> Vec2 {
        let x = point.x / self.curve_range.x * self.viewport_size.x;
        let y = self.viewport_size.y - point.y / self.curve_range.y * self.viewport_size.y;
        Vec2::new(x, y)
    }

    /// Pixel → Kurven-Koordinate.
    pub fn screen_to_curve(&self, screen: Vec2) -> Vec2 {
        let x = screen.x / self.viewport_size.x * self.curve_range.x;
        let y = (self.viewport_size.y - screen.y) / self.viewport_size.y * self.curve_range.y;
        Vec2::new(x, y)
    }

    /// Liegt der Pixel mehr als `margin` außerhalb des Viewports?
    pub fn is_offscreen(&self, screen: Vec2, margin: f32) -> bool {
        screen.x < -margin
            || screen.x > self.viewport_size.x + margin
            || screen.y < -margin
            || screen.y > self.viewport_size.y + margin
    }

    /// Klemmt einen Pixel auf den Viewport-Rand.
    pub fn clamp_to_viewport(&self, screen: Vec2) -> Vec2 {
        screen.clamp(Vec2::ZERO, self.viewport_size)
    }
}

impl Default for CurveView {
    fn default() -> Self {
        Self::new(Vec2::ONE, Vec2::new(400.0, 300.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_y_axis_is_flipped() {
        let view = CurveView::new(Vec2::ONE, Vec2::new(200.0, 100.0));
        assert_eq!(view.curve_to_screen(Vec2::ZERO), Vec2::new(0.0, 100.0));
        assert_eq!(view.curve_to_screen(Vec2::ONE), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_screen_to_curve_inverts() {
        let view = CurveView::new(Vec2::new(2.0, 4.0), Vec2::new(640.0, 480.0));
        let p = Vec2::new(0.7, 3.1);
        let back = view.screen_to_curve(view.curve_to_screen(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-5);
    }

    #[test]
    fn test_offscreen_detection() {
        let view = CurveView::default();
        assert!(!view.is_offscreen(Vec2::new(-10.0, 10.0), 50.0));
        assert!(view.is_offscreen(Vec2::new(-60.0, 10.0), 50.0));
        assert_eq!(
            view.clamp_to_viewport(Vec2::new(-60.0, 500.0)),
            Vec2::new(0.0, 300.0)
        );
    }
}
