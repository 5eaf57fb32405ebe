//! Authenticated-user slice.

use crate::model::SessionUser;
use crate::state::mvi::{Reducer, Signal, Slice};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserState {
    pub current_user: Option<SessionUser>,
    pub is_authenticated: bool,
}

impl Slice for UserState {}

#[derive(Debug, Clone, PartialEq)]
pub enum UserSignal {
    Login(SessionUser),
    /// A fresh registration signs the new user in.
    Register(SessionUser),
    Logout,
}

impl Signal for UserSignal {}

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Signal = UserSignal;

    fn reduce(_state: Self::State, signal: Self::Signal) -> Self::State {
        match signal {
            UserSignal::Login(user) | UserSignal::Register(user) => UserState {
                current_user: Some(user),
                is_authenticated: true,
            },
            UserSignal::Logout => UserState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> SessionUser {
        SessionUser {
            id: 1,
            username: "alex".into(),
            email: "alex@company.com".into(),
            first_name: "Alex".into(),
            last_name: "Johnson".into(),
        }
    }

    #[test]
    fn login_then_logout() {
        let state = UserReducer::reduce(UserState::default(), UserSignal::Login(alex()));
        assert!(state.is_authenticated);
        assert_eq!(state.current_user.as_ref().map(|u| u.id), Some(1));

        let state = UserReducer::reduce(state, UserSignal::Logout);
        assert_eq!(state, UserState::default());
    }

    #[test]
    fn register_authenticates() {
        let state = UserReducer::reduce(UserState::default(), UserSignal::Register(alex()));
        assert!(state.is_authenticated);
    }
}
