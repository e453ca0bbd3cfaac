//! Header navigation drawer: lifecycle, focus trap, and menu items

mod drawer;
mod focus;

pub use drawer::{Drawer, DrawerEvent, DrawerPhase, EXIT_DELAY, FOCUS_DELAY, PAINT_DELAY};
pub use focus::FocusRing;

use crate::app::Screen;
use crate::session::SessionRecord;

/// One focusable entry of the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerItem {
    Nav(Screen),
    SignIn,
    SignOut,
    /// Shortcut to the projects screen.
    Work,
}

impl DrawerItem {
    pub fn label(&self, user: Option<&SessionRecord>) -> String {
        match self {
            DrawerItem::Nav(screen) => screen.title().to_string(),
            DrawerItem::SignIn => "Sign In".to_string(),
            DrawerItem::SignOut => match user {
                Some(user) => format!("Sign Out ({})", user.name),
                None => "Sign Out".to_string(),
            },
            DrawerItem::Work => "Work".to_string(),
        }
    }
}

/// The drawer's focusable items, derived from the session: signed-in
/// renders the sign-out action, signed-out the sign-in affordance.
pub fn drawer_items(signed_in: bool) -> Vec<DrawerItem> {
    let mut items: Vec<DrawerItem> = Screen::nav_order()
        .iter()
        .map(|&screen| DrawerItem::Nav(screen))
        .collect();
    items.push(if signed_in {
        DrawerItem::SignOut
    } else {
        DrawerItem::SignIn
    });
    items.push(DrawerItem::Work);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_menu_offers_sign_in() {
        let items = drawer_items(false);
        assert!(items.contains(&DrawerItem::SignIn));
        assert!(!items.contains(&DrawerItem::SignOut));
    }

    #[test]
    fn signed_in_menu_offers_sign_out() {
        let items = drawer_items(true);
        assert!(items.contains(&DrawerItem::SignOut));
        assert!(!items.contains(&DrawerItem::SignIn));
    }

    #[test]
    fn sign_out_label_carries_the_name() {
        let user = SessionRecord::for_email("a@b.com");
        assert_eq!(DrawerItem::SignOut.label(Some(&user)), "Sign Out (a)");
    }
}
