use crate::data::user::{OnboardingResult, ProfileUpdate, UserProfile};

/// Screens reachable without a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
}

/// Requests from screens to the controller that owns [`AppState`].
///
/// [`AppState`]: crate::app::state::AppState
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Route),
    LoggedIn(UserProfile),
    SignedUp(UserProfile),
    CompleteOnboarding(OnboardingResult),
    UpdateProfile(ProfileUpdate),
    Logout,
    Quit,
}
