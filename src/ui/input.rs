//! Input handling systems

use bevy::prelude::*;

use crate::simulation::InputVector;

/// Handle basic keyboard input
pub fn handle_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Resolve held steering keys into an input vector; letters and arrows are equivalent
pub fn poll_steering(keyboard: &ButtonInput<KeyCode>) -> InputVector {
    let mut input = InputVector::NONE;
    input.set(
        InputVector::LEFT,
        keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
    );
    input.set(
        InputVector::RIGHT,
        keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
    );
    input.set(
        InputVector::UP,
        keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]),
    );
    input.set(
        InputVector::DOWN,
        keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]),
    );
    input
}
