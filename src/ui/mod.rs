//! 界面配置模块
pub mod tokens;

pub use self::tokens::{BorderToken, RadiusToken, ShadowToken, SpacingToken, SurfaceToken, TransitionToken};
