use super::EditorError;
use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;
use std::collections::{HashMap, VecDeque};

/// Discrete input delivered to the editor between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorInput {
    /// Pointer moved; position relative to the canvas top-left
    PointerMoved(Vec2),
    /// Pointer clicked on the canvas
    Click,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

/// Inputs waiting for the next tick, in arrival order
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<EditorInput>,
}

impl InputQueue {
    pub fn push(&mut self, input: EditorInput) {
        self.pending.push_back(input);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = EditorInput> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Held/released state for a fixed set of watched keys
#[derive(Debug, Default)]
pub struct KeyTable {
    keys: HashMap<KeyCode, bool>,
}

impl KeyTable {
    /// Start watching the given keys, all released
    pub fn listen_for(keys: &[KeyCode]) -> Self {
        Self {
            keys: keys.iter().map(|&key| (key, false)).collect(),
        }
    }

    pub fn is_watched(&self, key: KeyCode) -> bool {
        self.keys.contains_key(&key)
    }

    /// Mark a key held; unwatched keys are ignored
    pub fn key_down(&mut self, key: KeyCode) {
        if let Some(held) = self.keys.get_mut(&key) {
            *held = true;
        }
    }

    /// Mark a key released; unwatched keys are ignored
    pub fn key_up(&mut self, key: KeyCode) {
        if let Some(held) = self.keys.get_mut(&key) {
            *held = false;
        }
    }

    /// Whether a watched key is held
    pub fn is_down(&self, key: KeyCode) -> Result<bool, EditorError> {
        self.keys
            .get(&key)
            .copied()
            .ok_or(EditorError::UnwatchedKey(key))
    }
}

/// Key assignments for editor actions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub remove: KeyCode,
}

impl KeyBindings {
    pub fn all(&self) -> [KeyCode; 5] {
        [self.left, self.right, self.up, self.down, self.remove]
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            remove: KeyCode::KeyR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_table_toggles() {
        let mut keys = KeyTable::listen_for(&KeyBindings::default().all());
        assert_eq!(keys.is_down(KeyCode::ArrowLeft), Ok(false));

        keys.key_down(KeyCode::ArrowLeft);
        assert_eq!(keys.is_down(KeyCode::ArrowLeft), Ok(true));
        keys.key_down(KeyCode::ArrowLeft);
        assert_eq!(keys.is_down(KeyCode::ArrowLeft), Ok(true));

        keys.key_up(KeyCode::ArrowLeft);
        assert_eq!(keys.is_down(KeyCode::ArrowLeft), Ok(false));
    }

    #[test]
    fn test_unwatched_key() {
        let mut keys = KeyTable::listen_for(&[KeyCode::KeyR]);
        keys.key_down(KeyCode::KeyQ);
        assert!(!keys.is_watched(KeyCode::KeyQ));
        assert_eq!(keys.is_down(KeyCode::KeyQ), Err(EditorError::UnwatchedKey(KeyCode::KeyQ)));
    }

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = InputQueue::default();
        queue.push(EditorInput::PointerMoved(Vec2::new(5.0, 5.0)));
        queue.push(EditorInput::Click);
        queue.push(EditorInput::KeyDown(KeyCode::KeyR));
        assert_eq!(queue.len(), 3);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                EditorInput::PointerMoved(Vec2::new(5.0, 5.0)),
                EditorInput::Click,
                EditorInput::KeyDown(KeyCode::KeyR),
            ]
        );
        assert!(queue.is_empty());
    }
}
