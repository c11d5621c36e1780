//! Access guard for role-gated command areas
//!
//! A pure decision over the current session and the roles an area
//! requires. Three outcomes, nothing else: wait for the session to
//! resolve, redirect, or render. The guard holds no state of its own.

use std::fmt;

use super::{Role, SessionState};

/// Navigation targets of the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public entry (sign-in)
    Login,
    /// Admin landing
    AdminDashboard,
    /// Employee landing
    EmployeeProfile,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::AdminDashboard => "/admin/dashboard",
            Route::EmployeeProfile => "/employee/profile",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Guard decision for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session still resolving; no decision yet
    Wait,
    /// Send the caller somewhere else
    Redirect(Route),
    /// Render the requested area
    Render,
}

/// Decide whether an area requiring `allowed` roles may render.
///
/// A signed-in user with the wrong role bounces to their own landing
/// route, never to an error surface.
pub fn evaluate(state: &SessionState, allowed: &[Role]) -> Access {
    if state.is_loading() {
        return Access::Wait;
    }

    match state.user() {
        None => Access::Redirect(Route::Login),
        Some(user) if !allowed.contains(&user.role) => Access::Redirect(user.role.landing()),
        Some(_) => Access::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, User};

    fn authenticated(role: Role) -> SessionState {
        SessionState::Authenticated(Session {
            token: "tok".to_string(),
            user: User {
                id: 5,
                email: "a@b.com".to_string(),
                name: "A B".to_string(),
                role,
            },
        })
    }

    #[test]
    fn loading_session_waits() {
        assert_eq!(
            evaluate(&SessionState::Loading, &[Role::Admin]),
            Access::Wait
        );
    }

    #[test]
    fn anonymous_redirects_to_login() {
        assert_eq!(
            evaluate(&SessionState::Anonymous, &[Role::Admin]),
            Access::Redirect(Route::Login)
        );
    }

    #[test]
    fn wrong_role_bounces_to_own_landing() {
        // An employee probing an admin area lands on their own home,
        // never the admin area and never an error page.
        assert_eq!(
            evaluate(&authenticated(Role::Employee), &[Role::Admin]),
            Access::Redirect(Route::EmployeeProfile)
        );
        assert_eq!(
            evaluate(&authenticated(Role::Admin), &[Role::Employee]),
            Access::Redirect(Route::AdminDashboard)
        );
    }

    #[test]
    fn matching_role_renders() {
        assert_eq!(
            evaluate(&authenticated(Role::Admin), &[Role::Admin]),
            Access::Render
        );
        assert_eq!(
            evaluate(&authenticated(Role::Employee), &[Role::Employee]),
            Access::Render
        );
    }

    #[test]
    fn multi_role_area_admits_both() {
        let both = [Role::Admin, Role::Employee];
        assert_eq!(evaluate(&authenticated(Role::Admin), &both), Access::Render);
        assert_eq!(
            evaluate(&authenticated(Role::Employee), &both),
            Access::Render
        );
    }

    #[test]
    fn route_paths_are_literal() {
        assert_eq!(Route::Login.path(), "/");
        assert_eq!(Route::AdminDashboard.path(), "/admin/dashboard");
        assert_eq!(Route::EmployeeProfile.path(), "/employee/profile");
    }
}
