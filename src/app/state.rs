//! Application state

use std::rc::Rc;
use std::time::Instant;

use crate::auth::{DemoVerifier, Field, SignInFlow};
use crate::menu::{Drawer, FocusRing};
use crate::notify::{ToastId, Toaster};
use crate::session::{FileSessionStore, SessionRecord, SessionStore};
use crate::ui::Theme;

use super::config::AppConfig;
use super::router::Router;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing page
    #[default]
    Home,

    /// Bio and career journey
    About,

    /// Skill groups with proficiency bars
    Skills,

    /// Professional experience timeline
    Experience,

    /// Featured project list with detail pane
    Projects,

    /// Contact information
    Contact,

    /// Sign-in form
    SignIn,

    /// Help screen
    Help,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::About => "About",
            Screen::Skills => "Skills",
            Screen::Experience => "Experience",
            Screen::Projects => "Projects",
            Screen::Contact => "Contact",
            Screen::SignIn => "Sign In",
            Screen::Help => "Help",
        }
    }

    /// The page screens, in navigation order (keys 1-6 and the drawer).
    pub fn nav_order() -> [Screen; 6] {
        [
            Screen::Home,
            Screen::About,
            Screen::Skills,
            Screen::Experience,
            Screen::Projects,
            Screen::Contact,
        ]
    }
}

/// Focusable elements of the sign-in screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInFocus {
    #[default]
    Email,
    Password,
    SecondFactor,
    RememberMe,
    Forgot,
    Submit,
    Google,
    GitHub,
}

impl SignInFocus {
    fn order(second_factor: bool) -> &'static [SignInFocus] {
        if second_factor {
            &[
                SignInFocus::Email,
                SignInFocus::Password,
                SignInFocus::SecondFactor,
                SignInFocus::RememberMe,
                SignInFocus::Forgot,
                SignInFocus::Submit,
                SignInFocus::Google,
                SignInFocus::GitHub,
            ]
        } else {
            &[
                SignInFocus::Email,
                SignInFocus::Password,
                SignInFocus::RememberMe,
                SignInFocus::Forgot,
                SignInFocus::Submit,
                SignInFocus::Google,
                SignInFocus::GitHub,
            ]
        }
    }

    pub fn next(self, second_factor: bool) -> Self {
        let order = Self::order(second_factor);
        let i = order.iter().position(|&f| f == self).unwrap_or(0);
        order[(i + 1) % order.len()]
    }

    pub fn prev(self, second_factor: bool) -> Self {
        let order = Self::order(second_factor);
        let i = order.iter().position(|&f| f == self).unwrap_or(0);
        order[(i + order.len() - 1) % order.len()]
    }

    /// The editable field under this focus, if any.
    pub fn field(self) -> Option<Field> {
        match self {
            SignInFocus::Email => Some(Field::Email),
            SignInFocus::Password => Some(Field::Password),
            SignInFocus::SecondFactor => Some(Field::SecondFactor),
            _ => None,
        }
    }
}

/// Application state
pub struct AppState {
    /// Current screen
    pub current_screen: Screen,

    /// Navigation history
    pub router: Router,

    /// Loop clock, refreshed once per frame
    pub now: Instant,

    /// Signed-in user, if any
    pub user: Option<SessionRecord>,

    /// Session persistence
    pub store: Rc<FileSessionStore>,

    /// Sign-in state machine
    pub sign_in: SignInFlow<DemoVerifier>,

    /// Focused sign-in element
    pub sign_in_focus: SignInFocus,

    /// Password field visibility toggle
    pub show_password: bool,

    /// Pending-submit toast, resolved when the check completes
    pub submit_toast: Option<ToastId>,

    /// Navigation drawer lifecycle
    pub drawer: Drawer,

    /// Drawer focus trap
    pub drawer_focus: FocusRing,

    /// Active toasts
    pub toaster: Toaster,

    /// Persisted preferences
    pub config: AppConfig,

    /// Color palette
    pub theme: Theme,

    /// Selected project on the projects screen
    pub project_index: usize,

    /// Active tab on the skills screen
    pub skill_tab: usize,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Rc<FileSessionStore>) -> Self {
        let now = Instant::now();
        let user = store.read();
        let config = AppConfig::load();
        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };

        let mut sign_in = SignInFlow::new(store.clone() as Rc<dyn SessionStore>, DemoVerifier);
        if let Some(email) = &config.remembered_email {
            sign_in.prefill_email(email);
            sign_in.set_remember_me(config.remember_me);
        }

        let mut router = Router::new();
        router.push(Screen::Home);

        Self {
            current_screen: Screen::Home,
            router,
            now,
            user,
            store,
            sign_in,
            sign_in_focus: SignInFocus::default(),
            show_password: false,
            submit_toast: None,
            drawer: Drawer::new(),
            drawer_focus: FocusRing::default(),
            toaster: Toaster::new(),
            config,
            theme,
            project_index: 0,
            skill_tab: 0,
        }
    }

    /// Fresh sign-in machine, keeping the remembered email prefill.
    pub fn reset_sign_in(&mut self) {
        let mut sign_in =
            SignInFlow::new(self.store.clone() as Rc<dyn SessionStore>, DemoVerifier);
        if let Some(email) = &self.config.remembered_email {
            sign_in.prefill_email(email);
            sign_in.set_remember_me(self.config.remember_me);
        }
        self.sign_in = sign_in;
        self.sign_in_focus = SignInFocus::default();
        self.show_password = false;
        self.submit_toast = None;
    }

    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}
