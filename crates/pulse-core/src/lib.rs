// File: crates/pulse-core/src/lib.rs
// Summary: Core library entry point; exports chart instances, the animation driver and scene types.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod config;
pub mod error;
pub mod threshold;
pub mod label;
pub mod transition;
pub mod scene;
pub mod driver;
pub mod layout;

pub use chart::ChartInstance;
pub use series::{Sample, Series};
pub use config::{ChartConfig, DynamicLabelSize, LabelPosition};
pub use error::ChartError;
pub use view::ViewState;
pub use theme::{Color, Theme};
pub use threshold::{classify, ThresholdClass};
pub use transition::{Animated, Easing};
pub use scene::{Layer, Scene, Shape};
pub use driver::{Animate, AnimationDriver};
pub use layout::GridLayout;
pub use types::{ANIM_DELAY, ANIM_DURATION};
