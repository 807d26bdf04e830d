use crate::view::bindings::PageBindings;
use crate::view::error::PageError;
use crate::view::view_model::{HIDDEN_CLASS, View};

pub const REVEAL_LABEL: &str = "Click Me!";
pub const HIDE_LABEL: &str = "Hide Message";

pub const GLOW_SHADOW: &str = "0 0 10px #ff69b4";
pub const NO_SHADOW: &str = "none";
pub const TEXT_SHADOW_STYLE: &str = "text-shadow";

pub const STATUS_GLOWING: &str = "Cupcake is glowing!";
pub const STATUS_READY: &str = "Cupcake is ready for interaction";
pub const STATUS_SPRINKLES: &str = "Sprinkles added!";

pub const CUPCAKE_PLAIN: &str = "🧁";
pub const CUPCAKE_DECORATED: &str = "🧁✨";

pub const DARK_THEME_CLASS: &str = "dark-theme";
pub const LIGHT_MODE_LABEL: &str = "Switch to Light Mode";
pub const DARK_MODE_LABEL: &str = "Switch to Dark Mode";

/// Show or hide the secret message. Returns whether it is now shown.
pub fn toggle_reveal<V: View>(view: &mut V, page: &PageBindings) -> Result<bool, PageError> {
    let hidden = view.toggle_class(&page.secret_message, HIDDEN_CLASS)?;
    let label = if hidden { REVEAL_LABEL } else { HIDE_LABEL };
    view.set_text(&page.reveal_button, label)?;
    Ok(!hidden)
}

pub fn cupcake_enter<V: View>(view: &mut V, page: &PageBindings) -> Result<(), PageError> {
    view.set_style(&page.cupcake, TEXT_SHADOW_STYLE, GLOW_SHADOW)?;
    view.set_text(&page.cupcake_status, STATUS_GLOWING)
}

pub fn cupcake_leave<V: View>(view: &mut V, page: &PageBindings) -> Result<(), PageError> {
    view.set_style(&page.cupcake, TEXT_SHADOW_STYLE, NO_SHADOW)?;
    view.set_text(&page.cupcake_status, STATUS_READY)
}

/// Alternate the cupcake between plain and decorated. Returns the new text.
pub fn cupcake_click<V: View>(view: &mut V, page: &PageBindings) -> Result<&'static str, PageError> {
    let next = if view.text(&page.cupcake)? == CUPCAKE_PLAIN {
        CUPCAKE_DECORATED
    } else {
        CUPCAKE_PLAIN
    };
    view.set_text(&page.cupcake, next)?;
    view.set_text(&page.cupcake_status, STATUS_SPRINKLES)?;
    Ok(next)
}

/// Flip the dark theme on the root element. Returns whether dark mode is on.
pub fn toggle_theme<V: View>(view: &mut V, page: &PageBindings) -> Result<bool, PageError> {
    let dark = view.toggle_class(&page.root, DARK_THEME_CLASS)?;
    let label = if dark { LIGHT_MODE_LABEL } else { DARK_MODE_LABEL };
    view.set_text(&page.theme_toggle, label)?;
    Ok(dark)
}
