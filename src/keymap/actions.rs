//! Semantic actions triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All user actions in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move focus up
    MoveUp,
    /// Move focus down
    MoveDown,
    /// Previous sub-tab, or cursor left in a field
    MoveLeft,
    /// Next sub-tab, or cursor right in a field
    MoveRight,
    PageUp,
    PageDown,
    /// Start of field / top of content
    Home,
    /// End of field / bottom of content
    End,

    // ============ Scroll ============
    ScrollUp,
    ScrollDown,

    // ============ Selection ============
    /// Open the focused item / submit the form (Enter)
    Confirm,
    /// Close / go back (Esc)
    Cancel,

    // ============ Text editing ============
    Backspace,
    DeleteChar,

    // ============ Sections ============
    NextTab,
    PrevTab,
    SelectCommerce,
    SelectCommunity,
    SelectCreate,

    // ============ Shopping ============
    Search,
    OpenWishlist,
    OpenBag,
    AddToBag,
    /// Save or unsave the focused product
    ToggleWishlist,

    // ============ Community ============
    /// Open or close the immersive post viewer
    ToggleFullscreen,
    /// Send a post's look to the create tab
    Remix,

    // ============ Sign-in ============
    Skip,
    Resend,
    ToggleNewsletter,
    ToggleNotify,

    // ============ Global ============
    Help,
    Quit,
}

impl Action {
    /// Human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Previous sub-tab",
            Action::MoveRight => "Next sub-tab",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::Home => "Start",
            Action::End => "End",
            Action::ScrollUp => "Scroll up",
            Action::ScrollDown => "Scroll down",
            Action::Confirm => "Open / submit",
            Action::Cancel => "Close / go back",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next section",
            Action::PrevTab => "Previous section",
            Action::SelectCommerce => "Shop",
            Action::SelectCommunity => "Community",
            Action::SelectCreate => "Create",
            Action::Search => "Search",
            Action::OpenWishlist => "Wishlist",
            Action::OpenBag => "Shopping bag",
            Action::AddToBag => "Add to bag",
            Action::ToggleWishlist => "Save to wishlist",
            Action::ToggleFullscreen => "Full-screen viewer",
            Action::Remix => "Remix in Create",
            Action::Skip => "Skip sign-in",
            Action::Resend => "Resend code",
            Action::ToggleNewsletter => "Toggle newsletter",
            Action::ToggleNotify => "Toggle notifications",
            Action::Help => "Show help",
            Action::Quit => "Quit",
        }
    }

    /// Category for grouping in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::PageUp
            | Action::PageDown
            | Action::Home
            | Action::End
            | Action::ScrollUp
            | Action::ScrollDown => "Navigation",

            Action::Confirm | Action::Cancel => "Selection",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextTab
            | Action::PrevTab
            | Action::SelectCommerce
            | Action::SelectCommunity
            | Action::SelectCreate => "Sections",

            Action::Search
            | Action::OpenWishlist
            | Action::OpenBag
            | Action::AddToBag
            | Action::ToggleWishlist => "Shopping",

            Action::ToggleFullscreen | Action::Remix => "Community",

            Action::Skip | Action::Resend | Action::ToggleNewsletter | Action::ToggleNotify => {
                "Sign-in"
            }

            Action::Help | Action::Quit => "Global",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::OpenBag.description(), "Shopping bag");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::ScrollDown.category(), "Navigation");
        assert_eq!(Action::SelectCreate.category(), "Sections");
        assert_eq!(Action::Resend.category(), "Sign-in");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::ToggleFullscreen).unwrap();
        assert_eq!(json, "\"toggle_fullscreen\"");
    }

    #[test]
    fn test_action_deserialization() {
        let action: Action = serde_json::from_str("\"open_wishlist\"").unwrap();
        assert_eq!(action, Action::OpenWishlist);
    }
}
