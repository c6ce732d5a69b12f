use glutin;

use super::super::super::events::{Event, WindowEvent};

use crate::input::events::InputEvent;
use crate::input::keyboard::Key;
use crate::input::mouse::MouseButton;

use crate::math::prelude::Vector2;

pub fn from_event(source: glutin::Event, dimensions: Vector2<u32>) -> Option<Event> {
    match source {
        glutin::Event::WindowEvent { event, .. } => from_window_event(&event, dimensions),

        glutin::Event::Suspended(v) => {
            if v {
                Some(Event::Window(WindowEvent::Suspended))
            } else {
                Some(Event::Window(WindowEvent::Resumed))
            }
        }

        _ => None,
    }
}

fn from_window_event(source: &glutin::WindowEvent, dimensions: Vector2<u32>) -> Option<Event> {
    match *source {
        glutin::WindowEvent::CloseRequested => Some(Event::Window(WindowEvent::Closed)),

        glutin::WindowEvent::Focused(v) => {
            if v {
                Some(Event::Window(WindowEvent::GainFocus))
            } else {
                Some(Event::Window(WindowEvent::LostFocus))
            }
        }

        glutin::WindowEvent::Resized(glutin::dpi::LogicalSize { width, height }) => Some(
            Event::Window(WindowEvent::Resized(width as u32, height as u32)),
        ),

        // Positions are reported from the bottom-left corner.
        glutin::WindowEvent::CursorMoved { position, .. } => {
            Some(Event::InputDevice(InputEvent::MouseMoved {
                position: (position.x as f32, dimensions.y as f32 - position.y as f32),
            }))
        }

        glutin::WindowEvent::MouseWheel { delta, .. } => match delta {
            glutin::MouseScrollDelta::LineDelta(x, y) => {
                Some(Event::InputDevice(InputEvent::MouseWheel { delta: (x, y) }))
            }
            glutin::MouseScrollDelta::PixelDelta(pos) => {
                Some(Event::InputDevice(InputEvent::MouseWheel {
                    delta: (pos.x as f32, pos.y as f32),
                }))
            }
        },

        glutin::WindowEvent::MouseInput {
            state: glutin::ElementState::Pressed,
            button,
            ..
        } => Some(Event::InputDevice(InputEvent::MousePressed {
            button: button.into(),
        })),

        glutin::WindowEvent::MouseInput {
            state: glutin::ElementState::Released,
            button,
            ..
        } => Some(Event::InputDevice(InputEvent::MouseReleased {
            button: button.into(),
        })),

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Pressed,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| Event::InputDevice(InputEvent::KeyboardPressed { key })),

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Released,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| Event::InputDevice(InputEvent::KeyboardReleased { key })),

        _ => None,
    }
}

impl From<glutin::MouseButton> for MouseButton {
    fn from(mouse: glutin::MouseButton) -> Self {
        match mouse {
            glutin::MouseButton::Left => MouseButton::Left,
            glutin::MouseButton::Right => MouseButton::Right,
            glutin::MouseButton::Middle => MouseButton::Middle,
            glutin::MouseButton::Other(id) => MouseButton::Other(id),
        }
    }
}

fn from_virtual_key_code(key: glutin::VirtualKeyCode) -> Option<Key> {
    use glutin::VirtualKeyCode as V;

    let v = match key {
        V::Key1 | V::Numpad1 => Key::Key1,
        V::Key2 | V::Numpad2 => Key::Key2,
        V::Key3 | V::Numpad3 => Key::Key3,
        V::Key4 | V::Numpad4 => Key::Key4,
        V::Key5 | V::Numpad5 => Key::Key5,
        V::Key6 | V::Numpad6 => Key::Key6,
        V::Key7 | V::Numpad7 => Key::Key7,
        V::Key8 | V::Numpad8 => Key::Key8,
        V::Key9 | V::Numpad9 => Key::Key9,
        V::Key0 | V::Numpad0 => Key::Key0,
        V::A => Key::A,
        V::B => Key::B,
        V::C => Key::C,
        V::D => Key::D,
        V::E => Key::E,
        V::F => Key::F,
        V::G => Key::G,
        V::H => Key::H,
        V::I => Key::I,
        V::J => Key::J,
        V::K => Key::K,
        V::L => Key::L,
        V::M => Key::M,
        V::N => Key::N,
        V::O => Key::O,
        V::P => Key::P,
        V::Q => Key::Q,
        V::R => Key::R,
        V::S => Key::S,
        V::T => Key::T,
        V::U => Key::U,
        V::V => Key::V,
        V::W => Key::W,
        V::X => Key::X,
        V::Y => Key::Y,
        V::Z => Key::Z,
        V::Escape => Key::Escape,
        V::Left => Key::Left,
        V::Up => Key::Up,
        V::Right => Key::Right,
        V::Down => Key::Down,
        V::Back => Key::Back,
        V::Return | V::NumpadEnter => Key::Return,
        V::Space => Key::Space,
        V::Tab => Key::Tab,
        V::LShift => Key::LShift,
        V::RShift => Key::RShift,
        V::LControl => Key::LControl,
        V::RControl => Key::RControl,
        V::LAlt => Key::LAlt,
        V::RAlt => Key::RAlt,
        V::Add => Key::Add,
        V::Subtract => Key::Subtract,
        V::Equals => Key::Equals,
        V::Minus => Key::Minus,
        _ => return None,
    };

    Some(v)
}
