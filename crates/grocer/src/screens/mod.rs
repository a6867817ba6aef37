pub mod items;
pub mod lists;

use crate::components::Component;

/// A component that fills the content area for one [`grocer_core::View`]
pub trait Screen: Component {
    fn title(&self) -> &str;
}
