//! Session
//!
//! Application state the front end threads through explicitly: who is signed
//! in, the loading and error flags, favourites and bookings. State changes only
//! through [`AppState::reduce`]; there is no ambient storage behind it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{booking::Checkout, listings::Listing};

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: u64,

    /// Display name
    pub name: String,

    /// Email address, when the profile has been fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// A login request was sent.
    LoginStarted,

    /// The login request returned a token and user.
    LoginSucceeded {
        /// Bearer token
        token: String,

        /// Signed-in user
        user: User,
    },

    /// The login request failed.
    LoginFailed(String),

    /// The user signed out.
    LoggedOut,

    /// The profile was refreshed or cleared.
    UserSet(Option<User>),

    /// Toggle the loading flag.
    LoadingSet(bool),

    /// Record an error and stop loading.
    ErrorSet(String),

    /// Dismiss the current error.
    ErrorCleared,

    /// Replace the favourite listings.
    FavoritesSet(Vec<Listing>),

    /// Add a listing to the favourites.
    FavoriteAdded(Listing),

    /// Remove a listing from the favourites by id.
    FavoriteRemoved(String),

    /// Replace the bookings.
    BookingsSet(Vec<Checkout>),

    /// Record a new booking, newest first.
    BookingAdded(Checkout),
}

/// Front-end application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    user: Option<User>,
    token: Option<String>,
    loading: bool,
    error: Option<String>,
    favorites: Vec<Listing>,
    bookings: Vec<Checkout>,
}

impl AppState {
    /// State for a session restored from a previously issued token.
    pub fn with_session(token: impl Into<String>, user: User) -> Self {
        Self::default().reduce(AppAction::LoginSucceeded {
            token: token.into(),
            user,
        })
    }

    /// Applies one action and returns the next state.
    #[must_use]
    pub fn reduce(self, action: AppAction) -> Self {
        trace!(?action, "reducing app state");

        match action {
            AppAction::LoginStarted => Self {
                loading: true,
                error: None,
                ..self
            },
            AppAction::LoginSucceeded { token, user } => Self {
                loading: false,
                error: None,
                user: Some(user),
                token: Some(token),
                ..self
            },
            AppAction::LoginFailed(error) => Self {
                loading: false,
                error: Some(error),
                user: None,
                token: None,
                ..self
            },
            AppAction::LoggedOut => Self {
                user: None,
                token: None,
                favorites: Vec::new(),
                bookings: Vec::new(),
                ..self
            },
            AppAction::UserSet(user) => Self { user, ..self },
            AppAction::LoadingSet(loading) => Self { loading, ..self },
            AppAction::ErrorSet(error) => Self {
                error: Some(error),
                loading: false,
                ..self
            },
            AppAction::ErrorCleared => Self {
                error: None,
                ..self
            },
            AppAction::FavoritesSet(favorites) => Self { favorites, ..self },
            AppAction::FavoriteAdded(listing) => {
                let mut favorites = self.favorites;
                favorites.push(listing);

                Self { favorites, ..self }
            }
            AppAction::FavoriteRemoved(id) => {
                let mut favorites = self.favorites;
                favorites.retain(|listing| listing.id != id);

                Self { favorites, ..self }
            }
            AppAction::BookingsSet(bookings) => Self { bookings, ..self },
            AppAction::BookingAdded(booking) => {
                let mut bookings = self.bookings;
                bookings.insert(0, booking);

                Self { bookings, ..self }
            }
        }
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Signed-in user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Bearer token for API calls.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Favourite listings.
    pub fn favorites(&self) -> &[Listing] {
        &self.favorites
    }

    /// Bookings, newest first.
    pub fn bookings(&self) -> &[Checkout] {
        &self.bookings
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{booking::BookingDraft, currency::Price};

    fn user() -> User {
        User {
            id: 1,
            name: "Ayu".to_string(),
            email: None,
        }
    }

    fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            name: id.to_string(),
            city: String::new(),
            country: String::new(),
            price: Price::from(100.0),
            unit: "night".to_string(),
        }
    }

    #[test]
    fn login_flow_sets_session() {
        let state = AppState::default().reduce(AppAction::LoginStarted);

        assert!(state.is_loading());
        assert!(!state.is_authenticated());

        let state = state.reduce(AppAction::LoginSucceeded {
            token: "token".to_string(),
            user: user(),
        });

        assert!(!state.is_loading());
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("token"));
        assert_eq!(state.user(), Some(&user()));
    }

    #[test]
    fn failed_login_clears_session_and_records_error() {
        let state = AppState::with_session("token", user())
            .reduce(AppAction::LoginStarted)
            .reduce(AppAction::LoginFailed("bad credentials".to_string()));

        assert!(!state.is_authenticated());
        assert_eq!(state.token(), None);
        assert_eq!(state.error(), Some("bad credentials"));
    }

    #[test]
    fn logout_drops_user_data() {
        let state = AppState::with_session("token", user())
            .reduce(AppAction::FavoriteAdded(listing("villa")))
            .reduce(AppAction::LoggedOut);

        assert!(!state.is_authenticated());
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn clearing_user_keeps_token() {
        let state = AppState::with_session("token", user()).reduce(AppAction::UserSet(None));

        assert!(!state.is_authenticated());
        assert_eq!(state.token(), Some("token"));
    }

    #[test]
    fn error_set_stops_loading() {
        let state = AppState::default()
            .reduce(AppAction::LoadingSet(true))
            .reduce(AppAction::ErrorSet("offline".to_string()));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("offline"));
        assert_eq!(state.reduce(AppAction::ErrorCleared).error(), None);
    }

    #[test]
    fn favorites_add_and_remove_by_id() {
        let state = AppState::default()
            .reduce(AppAction::FavoriteAdded(listing("villa")))
            .reduce(AppAction::FavoriteAdded(listing("loft")))
            .reduce(AppAction::FavoriteRemoved("villa".to_string()));

        let ids: Vec<&str> = state.favorites().iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, ["loft"]);
    }

    #[test]
    fn new_bookings_come_first() {
        let first = BookingDraft::new("villa", date(2024, 3, 1)).checkout();
        let second = BookingDraft::new("loft", date(2024, 4, 1)).checkout();

        let state = AppState::default()
            .reduce(AppAction::BookingsSet(vec![first.clone()]))
            .reduce(AppAction::BookingAdded(second.clone()));

        assert_eq!(state.bookings(), [second, first]);
    }
}
