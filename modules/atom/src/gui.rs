//! The settings panel: a folder of widgets that hold values and notify their
//! listeners when those values change.
//!
//! Widgets do not own the state they affect. A listener is a closure that gets
//! a `&mut T` handed in by whoever changes the widget, so it can be registered
//! long before the state it touches exists. Listeners are never called while
//! registering.

use hydrogen::math::prelude::Color;

type Listener<T, V> = Box<dyn FnMut(&mut T, V)>;

/// A number within `[min, max]`, snapped to multiples of `step` from `min`.
pub struct Slider<T> {
    pub label: String,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    listeners: Vec<Listener<T, f32>>,
}

impl<T> Slider<T> {
    pub fn new<L: Into<String>>(label: L, min: f32, max: f32, step: f32, value: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut slider = Slider {
            label: label.into(),
            min,
            max,
            step: step.abs(),
            value: min,
            listeners: Vec::new(),
        };

        slider.value = slider.normalize(value);
        slider
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&mut T, f32) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Sets the value after clamping and snapping it. Listeners are notified
    /// only if the value actually changed, and the result is returned.
    pub fn set(&mut self, state: &mut T, value: f32) -> bool {
        let value = self.normalize(value);
        if value == self.value {
            return false;
        }

        self.value = value;
        for v in &mut self.listeners {
            v(state, value);
        }

        true
    }

    /// Moves `n` steps, negative values go down.
    pub fn step_by(&mut self, state: &mut T, n: i32) -> bool {
        let value = self.value + self.step * n as f32;
        self.set(state, value)
    }

    fn normalize(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.value;
        }

        let mut value = value.max(self.min).min(self.max);
        if self.step > 0.0 {
            let n = ((value - self.min) / self.step).round();
            value = (self.min + n * self.step).min(self.max);
        }

        // Keeps 0.1 steps from drifting into 1.2000001 and alike.
        (value * 1e4).round() / 1e4
    }
}

/// An opaque color.
pub struct ColorPicker<T> {
    pub label: String,
    value: Color<f32>,
    listeners: Vec<Listener<T, Color<f32>>>,
}

impl<T> ColorPicker<T> {
    pub fn new<L: Into<String>>(label: L, value: Color<f32>) -> Self {
        ColorPicker {
            label: label.into(),
            value: Self::opaque(value),
            listeners: Vec::new(),
        }
    }

    #[inline]
    pub fn value(&self) -> Color<f32> {
        self.value
    }

    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&mut T, Color<f32>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Sets the color, listeners are notified only if the color changed.
    pub fn set(&mut self, state: &mut T, color: Color<f32>) -> bool {
        let color = Self::opaque(color);
        if color == self.value {
            return false;
        }

        self.value = color;
        for v in &mut self.listeners {
            v(state, color);
        }

        true
    }

    /// Sets the color from a hex triplet like `0xFF8800`.
    #[inline]
    pub fn set_hex(&mut self, state: &mut T, hex: u32) -> bool {
        self.set(state, Color::from_hex(hex))
    }

    fn opaque(color: Color<f32>) -> Color<f32> {
        let mut color = color.clip();
        color.a = 1.0;
        color
    }
}

/// The folder of atom settings.
pub struct SettingsPanel<T> {
    pub title: String,
    /// Multiplies the angular speed of every ring.
    pub electron_speed: Slider<T>,
    /// Tints the proton.
    pub proton_color: ColorPicker<T>,
}

impl<T> Default for SettingsPanel<T> {
    fn default() -> Self {
        SettingsPanel {
            title: "Atom settings".to_owned(),
            electron_speed: Slider::new("electron speed", 1.0, 10.0, 0.1, 1.0),
            proton_color: ColorPicker::new("proton color", Color::white()),
        }
    }
}

impl<T> SettingsPanel<T> {
    pub fn new() -> Self {
        Default::default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slider_clamps_and_snaps() {
        let mut slider = Slider::<()>::new("speed", 1.0, 10.0, 0.1, 1.0);
        assert_eq!(slider.value(), 1.0);

        assert!(slider.set(&mut (), 42.0));
        assert_eq!(slider.value(), 10.0);
        assert!(!slider.set(&mut (), 11.0));

        slider.set(&mut (), -3.0);
        assert_eq!(slider.value(), 1.0);

        slider.set(&mut (), 2.345);
        assert_eq!(slider.value(), 2.3);

        slider.set(&mut (), ::std::f32::NAN);
        assert_eq!(slider.value(), 2.3);

        slider.step_by(&mut (), -3);
        assert_eq!(slider.value(), 2.0);
    }

    #[test]
    fn slider_listeners() {
        let mut slider = Slider::new("speed", 1.0, 10.0, 0.1, 1.0);
        slider.on_change(|calls: &mut Vec<f32>, v| calls.push(v));

        let mut calls = Vec::new();
        slider.step_by(&mut calls, 1);
        slider.set(&mut calls, 1.1);
        slider.set(&mut calls, 5.0);
        assert_eq!(calls, vec![1.1, 5.0]);
    }

    #[test]
    fn color_listeners() {
        let mut picker = ColorPicker::new("color", Color::white());
        picker.on_change(|tint: &mut Option<u32>, v: Color<f32>| *tint = Some(v.to_hex()));

        let mut tint = None;
        assert!(!picker.set(&mut tint, Color::white()));
        assert_eq!(tint, None);

        assert!(picker.set_hex(&mut tint, 0xFF_88_00));
        assert_eq!(tint, Some(0xFF_88_00));
        assert_eq!(picker.value().a, 1.0);
    }

    #[test]
    fn panel() {
        let panel = SettingsPanel::<()>::new();
        assert_eq!(panel.title, "Atom settings");
        assert_eq!(panel.electron_speed.range(), (1.0, 10.0));
        assert_eq!(panel.electron_speed.value(), 1.0);
        assert_eq!(panel.proton_color.value(), Color::white());
    }
}
