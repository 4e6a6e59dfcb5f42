pub mod config;
pub mod controller;
pub mod debounce;
pub mod effects;
pub mod error;
pub mod input;
pub mod intent;
pub mod machine;
pub mod progress;
pub mod scroll;
pub mod sections;

pub use config::{AppConfig, ControllerConfig};
pub use controller::SectionController;
pub use effects::{AudioCuePlayer, AvatarAnimator, SectionEffects, SectionIndicator};
pub use error::{Error, Result};
pub use intent::{Direction, InteractionIntent, NavKey};
pub use scroll::EasingType;
pub use sections::SectionTable;
