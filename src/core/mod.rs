//! Platform-independent page behavior: state machines and layout math that the
//! browser adapters in `ui::behaviors` bind to the DOM.

pub mod carousel;
pub mod config;
pub mod debounce;
pub mod easing;
mod error;
pub mod form;
pub mod reveal;
pub mod scroll_spy;
pub mod smooth_scroll;
pub mod subscriptions;
#[cfg(test)]
mod tests;
pub mod trigger;

pub use carousel::{CarouselFrame, CarouselState, visible_count};
pub use config::{Breakpoints, PageConfig};
pub use debounce::Debouncer;
pub use easing::{Easing, Tween, ease_in_out_quad};
pub use error::{PageError, PageResult};
pub use form::FormPhase;
pub use scroll_spy::{IndicatorGeometry, IndicatorUpdate, NavLinkView, Rect, SectionView};
pub use smooth_scroll::ScrollAnimation;
pub use subscriptions::Subscriptions;
pub use trigger::{ScrollTrigger, TriggerEvent};
