//! Normalized interaction intents.
//!
//! Every input modality (wheel, touch, keyboard, programmatic calls) is
//! reduced to one of these variants before it reaches the state machine.
//! Intents are ephemeral: constructed per input event, consumed immediately,
//! never persisted.

/// Direction of travel through the section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A single normalized navigation intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionIntent {
    /// Move to the next section.
    Advance,
    /// Move to the previous section.
    Retreat,
    /// Move directly to a specific section index.
    JumpTo(usize),
    /// Raw directional scroll, resolved by direction like Advance/Retreat.
    /// Thresholding is the input capture's job; the magnitude is carried for
    /// diagnostics only.
    ScrollDelta { magnitude: f64, direction: Direction },
}

/// Abstract navigation key, decoupled from any terminal or browser key event.
///
/// The host maps its real key events (crossterm, DOM, ...) onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
    Space,
    Home,
    End,
    /// Digit key `1..=9` for direct section navigation.
    Digit(u8),
}
