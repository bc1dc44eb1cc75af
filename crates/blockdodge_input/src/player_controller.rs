//! Player controller for keyboard steering
//!
//! Controls:
//! - A / Left arrow: steer left
//! - D / Right arrow: steer right
//! - R: restart the run

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Tracks held steering keys and the one-shot restart press
pub struct PlayerController {
    // Steering state
    left: bool,
    right: bool,

    // Restart state (edge-triggered)
    restart_pressed: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            left: false,
            right: false,
            restart_pressed: false,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key was one this controller handles.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyA | KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::KeyD | KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            KeyCode::KeyR => {
                if pressed {
                    self.restart_pressed = true;
                }
                true
            }
            _ => false,
        }
    }

    /// Get the steering axis in range -1.0 to 1.0
    ///
    /// Negative steers left, positive steers right; opposing keys
    /// cancel out.
    pub fn axis(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Consume the restart input flag
    ///
    /// Returns true if restart was pressed since last consume, then
    /// clears the flag. Holding R does not repeat the restart.
    pub fn consume_restart(&mut self) -> bool {
        let was_pressed = self.restart_pressed;
        self.restart_pressed = false;
        was_pressed
    }

    /// Check if any steering key is held
    pub fn is_steering(&self) -> bool {
        self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_starts_centered() {
        let controller = PlayerController::new();
        assert_eq!(controller.axis(), 0.0);
        assert!(!controller.is_steering());
    }

    #[test]
    fn test_left_and_right_keys() {
        let mut controller = PlayerController::new();

        controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        assert_eq!(controller.axis(), -1.0);

        controller.process_keyboard(KeyCode::KeyA, ElementState::Released);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        assert_eq!(controller.axis(), 1.0);
    }

    #[test]
    fn test_arrow_keys_alias_letters() {
        let mut controller = PlayerController::new();

        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        assert_eq!(controller.axis(), -1.0);
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Released);

        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        assert_eq!(controller.axis(), 1.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut controller = PlayerController::new();

        controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        assert_eq!(controller.axis(), 0.0);
        assert!(controller.is_steering());
    }

    #[test]
    fn test_release_stops_steering() {
        let mut controller = PlayerController::new();

        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Released);
        assert_eq!(controller.axis(), 0.0);
        assert!(!controller.is_steering());
    }

    #[test]
    fn test_restart_is_one_shot() {
        let mut controller = PlayerController::new();

        controller.process_keyboard(KeyCode::KeyR, ElementState::Pressed);
        assert!(controller.consume_restart());
        assert!(!controller.consume_restart());
    }

    #[test]
    fn test_restart_release_does_not_retrigger() {
        let mut controller = PlayerController::new();

        controller.process_keyboard(KeyCode::KeyR, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyR, ElementState::Released);
        assert!(controller.consume_restart());
        assert!(!controller.consume_restart());
    }

    #[test]
    fn test_unhandled_key_is_ignored() {
        let mut controller = PlayerController::new();

        assert!(!controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
        assert_eq!(controller.axis(), 0.0);
    }
}
