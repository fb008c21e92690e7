//! Fixed shell geometry and animation timings.
//!
//! [`ShellConfig::default`] carries the stock constants. Hosts that want different numbers parse a
//! partial JSON document over the defaults with [`ShellConfig::from_json_str`].

use serde::{Deserialize, Serialize};

use crate::{
    error::DesktopError,
    model::{
        Position, Size, WindowRect, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
        MIN_WINDOW_WIDTH,
    },
};

/// Gap kept between the workspace and the viewport edge when a window is maximized.
pub const WORKSPACE_MARGIN_PX: i32 = 10;
/// Height reserved at the bottom of the viewport for the taskbar.
pub const TASKBAR_HEIGHT_PX: i32 = 48;
/// Largest offset or length a config document may set, in CSS pixels.
pub const MAX_CONFIG_PX: i32 = 100_000;
pub const OPEN_ANIMATION_MS: u64 = 300;
pub const CLOSE_ANIMATION_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub default_size: Size,
    pub min_size: Size,
    /// Top-left anchor new windows are jittered away from.
    pub base_position: Position,
    /// Exclusive upper bound of the horizontal placement jitter.
    pub jitter_x: i32,
    /// Exclusive upper bound of the vertical placement jitter.
    pub jitter_y: i32,
    pub workspace_margin: i32,
    pub taskbar_height: i32,
    pub open_animation_ms: u64,
    pub close_animation_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_size: Size {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
            },
            min_size: Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            },
            base_position: Position { x: 50, y: 30 },
            jitter_x: 150,
            jitter_y: 100,
            workspace_margin: WORKSPACE_MARGIN_PX,
            taskbar_height: TASKBAR_HEIGHT_PX,
            open_animation_ms: OPEN_ANIMATION_MS,
            close_animation_ms: CLOSE_ANIMATION_MS,
        }
    }
}

impl ShellConfig {
    /// Parses a (possibly partial) JSON document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::InvalidConfig`] for malformed JSON or inconsistent values.
    pub fn from_json_str(raw: &str) -> Result<Self, DesktopError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| DesktopError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`DesktopError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), DesktopError> {
        if self.min_size.width <= 0 || self.min_size.height <= 0 {
            return Err(DesktopError::InvalidConfig(
                "min_size must be positive".to_string(),
            ));
        }
        if self.default_size.width < self.min_size.width
            || self.default_size.height < self.min_size.height
        {
            return Err(DesktopError::InvalidConfig(
                "default_size must not be smaller than min_size".to_string(),
            ));
        }
        if self.jitter_x < 0 || self.jitter_y < 0 {
            return Err(DesktopError::InvalidConfig(
                "jitter ranges must not be negative".to_string(),
            ));
        }
        if self.workspace_margin < 0 || self.taskbar_height < 0 {
            return Err(DesktopError::InvalidConfig(
                "workspace_margin and taskbar_height must not be negative".to_string(),
            ));
        }
        let lengths = [
            ("default_size.width", self.default_size.width),
            ("default_size.height", self.default_size.height),
            ("base_position.x", self.base_position.x),
            ("base_position.y", self.base_position.y),
            ("jitter_x", self.jitter_x),
            ("jitter_y", self.jitter_y),
            ("workspace_margin", self.workspace_margin),
            ("taskbar_height", self.taskbar_height),
        ];
        if let Some((field, _)) = lengths
            .iter()
            .find(|(_, value)| !(-MAX_CONFIG_PX..=MAX_CONFIG_PX).contains(value))
        {
            return Err(DesktopError::InvalidConfig(format!(
                "{field} must be within {MAX_CONFIG_PX}px"
            )));
        }
        Ok(())
    }

    /// Area a maximized window occupies for a viewport of `viewport_w` x `viewport_h`.
    pub fn workspace_rect(&self, viewport_w: i32, viewport_h: i32) -> WindowRect {
        let margin = self.workspace_margin;
        let gutter = margin.saturating_mul(2);
        WindowRect {
            x: margin,
            y: margin,
            w: viewport_w
                .saturating_sub(gutter)
                .max(self.min_size.width),
            h: viewport_h
                .saturating_sub(self.taskbar_height)
                .saturating_sub(gutter)
                .max(self.min_size.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_stock_constants() {
        let config = ShellConfig::default();
        assert_eq!(config.default_size, Size { width: 420, height: 520 });
        assert_eq!(config.min_size, Size { width: 300, height: 200 });
        assert_eq!(config.base_position, Position { x: 50, y: 30 });
        assert_eq!((config.jitter_x, config.jitter_y), (150, 100));
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = ShellConfig::from_json_str(r#"{ "close_animation_ms": 0 }"#).unwrap();
        assert_eq!(config.close_animation_ms, 0);
        assert_eq!(config.open_animation_ms, OPEN_ANIMATION_MS);
        assert_eq!(config.default_size, Size::default());
    }

    #[test]
    fn rejects_default_size_below_minimum() {
        let err = ShellConfig::from_json_str(
            r#"{ "default_size": { "width": 200, "height": 520 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ShellConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_out_of_range_base_position() {
        let err = ShellConfig::from_json_str(r#"{ "base_position": { "x": 2147483600, "y": 30 } }"#)
            .unwrap_err();
        assert_eq!(
            err,
            DesktopError::InvalidConfig("base_position.x must be within 100000px".to_string())
        );
    }

    #[test]
    fn rejects_oversized_margin_and_taskbar() {
        for raw in [
            r#"{ "workspace_margin": 1500000000 }"#,
            r#"{ "taskbar_height": 2147483647 }"#,
        ] {
            let err = ShellConfig::from_json_str(raw).unwrap_err();
            assert!(matches!(err, DesktopError::InvalidConfig(_)), "{raw}");
        }
    }

    #[test]
    fn workspace_rect_saturates_for_unvalidated_values() {
        let config = ShellConfig {
            workspace_margin: i32::MAX,
            taskbar_height: i32::MAX,
            ..ShellConfig::default()
        };
        let rect = config.workspace_rect(i32::MIN, i32::MIN);
        assert_eq!((rect.w, rect.h), (300, 200));
    }

    #[test]
    fn workspace_excludes_margin_and_taskbar() {
        let config = ShellConfig::default();
        assert_eq!(
            config.workspace_rect(1280, 800),
            WindowRect {
                x: 10,
                y: 10,
                w: 1260,
                h: 800 - 48 - 20,
            }
        );
    }

    #[test]
    fn workspace_never_shrinks_below_min_size() {
        let config = ShellConfig::default();
        let rect = config.workspace_rect(100, 100);
        assert_eq!((rect.w, rect.h), (300, 200));
    }
}
